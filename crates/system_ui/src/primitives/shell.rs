use super::*;

/// Inline style of the window titlebar.
///
/// The titlebar is the drag handle, so touch input on it must reach the pointer handlers instead
/// of scrolling the page. Without it a touch drag ends in `pointercancel` after a few pixels.
pub(crate) const TITLEBAR_STYLE: &str = "touch-action:none;";

#[component]
/// Wallpaper surface under the icons and windows.
pub fn DesktopBackdrop(children: Children) -> impl IntoView {
    view! {
        <div class="desktop-backdrop" data-ui-primitive="true" data-ui-kind="desktop-backdrop">
            {children()}
        </div>
    }
}

#[component]
/// Column of launcher icons pinned to the left edge.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-desktop-icon-grid"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// One launcher icon.
///
/// Mouse users launch with a double-click; touch users launch on `touchend`.
pub fn DesktopIconButton(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_touchend: Option<Callback<web_sys::TouchEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            title=title
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
            on:touchend=move |ev| {
                if let Some(on_touchend) = on_touchend.as_ref() {
                    on_touchend.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Positioning root for open windows; stacking comes from each window's z-index.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-layer" data-ui-primitive="true" data-ui-kind="desktop-window-layer">
            {children()}
        </div>
    }
}

#[component]
/// Outer chrome of a desktop window.
///
/// `style` carries the absolute position and z-index; `focused` switches the titlebar to the
/// active colors.
pub fn WindowFrame(
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: String,
    #[prop(into)] focused: MaybeSignal<bool>,
    on_pointerdown: Callback<web_sys::PointerEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            on:pointerdown=move |ev| on_pointerdown.call(ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Drag handle of a window.
pub fn WindowTitleBar(
    on_pointerdown: Callback<web_sys::PointerEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            style=TITLEBAR_STYLE
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| on_pointerdown.call(ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and caption at the left of the titlebar.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Minimize, maximize and close buttons.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control.
///
/// Pointer presses on a control never reach the titlebar, so clicking a control cannot start a
/// drag.
pub fn WindowControlButton(
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            aria_label=aria_label
            ui_slot="window-control"
            variant=ButtonVariant::Quiet
            on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                ev.stop_propagation();
            })
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.stop_propagation();
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
/// Scrollable content area under the titlebar.
pub fn WindowBody(#[prop(into)] style: String, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-window-body"
            style=style
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bar along the bottom edge of the desktop.
pub fn Taskbar(#[prop(into)] aria_label: String, children: Children) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Start, running-window or tray region of the taskbar.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Entry for one open window; `pressed` renders the sunken bevel of the active window.
pub fn TaskbarButton(
    #[prop(into)] aria_label: String,
    #[prop(into)] title: String,
    pressed: bool,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            aria_label=aria_label
            title=title
            pressed=pressed
            ui_slot="taskbar-button"
            variant=ButtonVariant::Quiet
            on_click=on_click
        >
            {children()}
        </Button>
    }
}

#[component]
/// Notification area at the right of the taskbar.
pub fn TrayList(children: Children) -> impl IntoView {
    view! {
        <div class="ui-tray-list" data-ui-primitive="true" data-ui-kind="tray-list">
            {children()}
        </div>
    }
}

#[component]
/// Read-only tray clock label.
pub fn TrayClock(#[prop(into)] label: Signal<String>) -> impl IntoView {
    view! {
        <span
            class="ui-tray-clock"
            role="timer"
            aria-live="off"
            data-ui-primitive="true"
            data-ui-kind="tray-clock"
        >
            {move || label.get()}
        </span>
    }
}
