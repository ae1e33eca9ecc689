use super::*;

#[component]
/// Sunken bevelled panel used for content wells and text fields.
pub fn InsetPanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-inset-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="inset-panel"
        >
            {children()}
        </div>
    }
}

#[component]
/// Label/value row.
pub fn FieldRow(
    label: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-field-row", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-row"
        >
            <strong>{label}</strong>
            <span>{children()}</span>
        </div>
    }
}

#[component]
/// Shared tab list container.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            ui_slot="tab"
            selected=selected
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Scrollable selection list.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-surface", layout_class)
            role="listbox"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="list-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Selectable list row.
pub fn ListRow(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-list-row"
            role="option"
            aria-selected=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="list-row"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
