use super::*;
use system_ui::{
    Icon, IconName, IconSize, ImageIcon, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::panels::WindowContent;

/// Vertical space taken by the title bar and frame padding.
const WINDOW_CHROME_HEIGHT_PX: i32 = 60;

fn frame_style(left: i32, top: i32, width: i32, z_index: u32) -> String {
    format!("left:{left}px;top:{top}px;width:{width}px;z-index:{z_index};")
}

fn body_style(height: i32) -> String {
    format!(
        "min-height:{}px;",
        (height - WINDOW_CHROME_HEIGHT_PX).max(0)
    )
}

/// Routes the rest of a titlebar gesture to the titlebar, even when the pointer leaves it.
#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Only the main mouse button or the first touch point may start a drag.
fn starts_drag(pointer_type: &str, button: i16, is_primary: bool) -> bool {
    if pointer_type == "mouse" {
        button == 0
    } else {
        is_primary
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(definition) = runtime
        .state
        .with_untracked(|desktop| desktop.windows.definition(window_id.as_str()).cloned())
    else {
        return ().into_view();
    };

    let placement = {
        let window_id = window_id.clone();
        create_memo(move |_| {
            runtime
                .state
                .with(|desktop| desktop.windows.window(window_id.as_str()).copied())
        })
    };
    let is_active = {
        let window_id = window_id.clone();
        create_memo(move |_| {
            runtime
                .state
                .with(|desktop| desktop.windows.active_id() == Some(&window_id))
        })
    };

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::PointerEvent| {
            if !is_active.get_untracked() {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        })
    };
    let begin_move = {
        let window_id = window_id.clone();
        Callback::new(move |ev: web_sys::PointerEvent| {
            if !starts_drag(&ev.pointer_type(), ev.button(), ev.is_primary()) {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            try_set_pointer_capture(&ev);
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        })
    };
    let close = {
        let window_id = window_id.clone();
        Callback::new(move |_: web_sys::MouseEvent| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            });
        })
    };

    let width = definition.default_size.width;
    let style = Signal::derive(move || {
        placement
            .get()
            .map(|window| {
                frame_style(
                    window.position.x,
                    window.position.y,
                    width,
                    window.z_index,
                )
            })
            .unwrap_or_default()
    });
    let title = definition.display_title();

    view! {
        <WindowFrame
            style=style
            aria_label=title.clone()
            focused=Signal::derive(move || is_active.get())
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>
                    <ImageIcon src=definition.icon.clone() size=IconSize::Sm />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize window">
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton aria_label="Maximize window">
                        <Icon icon=IconName::WindowMaximize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody style=body_style(definition.default_size.height)>
                <WindowContent content=definition.content.clone() />
            </WindowBody>
        </WindowFrame>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn frame_style_places_window_by_top_left_and_stack() {
        assert_eq!(
            frame_style(250, 100, 500, 3),
            "left:250px;top:100px;width:500px;z-index:3;"
        );
    }

    #[test]
    fn body_height_excludes_chrome_and_never_goes_negative() {
        assert_eq!(body_style(280), "min-height:220px;");
        assert_eq!(body_style(20), "min-height:0px;");
    }

    #[test]
    fn touch_and_pen_presses_start_a_drag_from_the_primary_pointer() {
        assert!(starts_drag("touch", 0, true));
        assert!(starts_drag("pen", 0, true));
        assert!(!starts_drag("touch", 0, false));
    }

    #[test]
    fn only_the_main_mouse_button_starts_a_drag() {
        assert!(starts_drag("mouse", 0, true));
        assert!(!starts_drag("mouse", 2, true));
    }
}
