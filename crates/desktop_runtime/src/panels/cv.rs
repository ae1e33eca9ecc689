use leptos::*;

#[component]
pub(super) fn CvPanel() -> impl IntoView {
    view! {
        <div class="panel-cv">
            <img src="/images/sajad-resume.png" alt="Sajad's Resume" />
        </div>
    }
}
