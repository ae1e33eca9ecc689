//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopWindowLayer};

use self::{desktop_icons::DesktopIcons, taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the desktop: icons, open windows and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let visible_window_ids = create_memo(move |_| {
        runtime.state.with(|desktop| {
            desktop
                .windows
                .visible_windows()
                .into_iter()
                .map(|window| window.id)
                .collect::<Vec<WindowId>>()
        })
    });
    let dragging = create_memo(move |_| runtime.interaction.with(|ui| ui.drag.is_dragging()));

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <DesktopBackdrop>
                <DesktopIcons />
                <DesktopWindowLayer>
                    <For
                        each=move || visible_window_ids.get()
                        key=|window_id| window_id.clone()
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <DesktopTaskbar />
            <Show when=move || dragging.get() fallback=|| ()>
                <DragPointerListeners />
            </Show>
        </div>
    }
}

#[component]
/// Document-level pointer tracking for the active drag.
///
/// Mounted only while a drag is in progress, so the listeners are removed on release.
fn DragPointerListeners() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        runtime.dispatch_action(DesktopAction::UpdateMove {
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        runtime.dispatch_action(DesktopAction::EndMove);
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        runtime.dispatch_action(DesktopAction::EndMove);
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
