//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    launcher::{resolve_icon_activation, LaunchTarget},
    model::{DesktopState, InteractionState, PointerPosition, WindowId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or re-raise) a window.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) an open window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// A taskbar entry was clicked.
    ActivateTaskbarItem {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// A desktop icon was double-clicked or tapped.
    ActivateIcon {
        /// Activated icon id.
        icon_id: String,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by the reducer and executed by the host layer.
pub enum RuntimeEffect {
    /// Navigate to a URL outside the desktop.
    OpenExternalUrl(String),
}

/// Applies `action` to the desktop and interaction state.
///
/// Actions naming unknown windows or icons change nothing.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();

    match action {
        DesktopAction::OpenWindow { window_id } => {
            state.windows.open(window_id.as_str());
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.close(window_id.as_str());
        }
        DesktopAction::FocusWindow { window_id }
        | DesktopAction::ActivateTaskbarItem { window_id } => {
            state.windows.focus(window_id.as_str());
        }
        DesktopAction::ActivateIcon { icon_id } => {
            match resolve_icon_activation(&state.icons, &icon_id) {
                Some(LaunchTarget::OpenWindow(window_id)) => {
                    state.windows.open(window_id.as_str());
                }
                Some(LaunchTarget::ExternalUrl(url)) => {
                    effects.push(RuntimeEffect::OpenExternalUrl(url));
                }
                None => {}
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            interaction
                .drag
                .press(&mut state.windows, window_id.as_str(), pointer);
        }
        DesktopAction::UpdateMove { pointer } => {
            interaction.drag.pointer_move(&mut state.windows, pointer);
        }
        DesktopAction::EndMove => {
            interaction.drag.release();
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::DesktopConfig,
        model::{Point, WindowId},
    };

    fn portfolio() -> (DesktopState, InteractionState) {
        DesktopConfig::builtin()
            .expect("builtin config")
            .initial_state()
    }

    fn id(value: &str) -> WindowId {
        WindowId::new(value)
    }

    #[test]
    fn window_icon_opens_and_activates_window() {
        let (mut state, mut interaction) = portfolio();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: "projects".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(
            state.windows.active_id().map(WindowId::as_str),
            Some("projects")
        );
    }

    #[test]
    fn external_icon_emits_navigation_without_touching_windows() {
        let (mut state, mut interaction) = portfolio();
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: "linkedin".to_string(),
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://www.linkedin.com/in/sajad-ali-zada-732241a9".to_string()
            )]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_icon_is_ignored() {
        let (mut state, mut interaction) = portfolio();
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: "recycle-bin".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_click_focuses_window() {
        let (mut state, mut interaction) = portfolio();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarItem {
                window_id: id("about"),
            },
        );

        assert_eq!(
            state.windows.active_id().map(WindowId::as_str),
            Some("about")
        );
    }

    #[test]
    fn drag_actions_move_window_and_release() {
        let (mut state, mut interaction) = portfolio();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id("about"),
                pointer: Point::new(270, 110),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: Point::new(20, 30),
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: Point::new(600, 600),
            },
        );

        assert!(!interaction.drag.is_dragging());
        assert_eq!(
            state.windows.window("about").map(|w| w.position),
            Some(Point::new(0, 20))
        );
        assert_eq!(
            state.windows.active_id().map(WindowId::as_str),
            Some("about")
        );
    }

    #[test]
    fn close_then_focus_does_not_reopen() {
        let (mut state, mut interaction) = portfolio();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: id("contact"),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: id("contact"),
            },
        );

        assert!(!state.windows.is_open("contact"));
        assert_eq!(
            state.windows.active_id().map(WindowId::as_str),
            Some("about")
        );
    }
}
