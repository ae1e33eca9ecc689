use leptos::*;
use system_ui::{FieldRow, InsetPanel};

const EMAIL: &str = "sajad.alizada2014@gmail.com";

#[component]
pub(super) fn ContactPanel() -> impl IntoView {
    view! {
        <div class="panel-contact">
            <FieldRow label="Email:">
                <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
            </FieldRow>
            <FieldRow label="To:">
                <InsetPanel>"recipient@email.com"</InsetPanel>
            </FieldRow>
        </div>
    }
}
