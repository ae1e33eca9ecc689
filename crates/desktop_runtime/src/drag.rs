//! Title-bar drag state machine.
//!
//! One controller serves one pointer stream. A press on an open window's title bar focuses the
//! window and records the grab offset; moves reposition the window to `pointer - offset`; a
//! release anywhere ends the session.

use crate::{
    model::{GrabOffset, PointerPosition, WindowId},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An in-progress drag.
pub struct DragSession {
    pub window_id: WindowId,
    pub grab_offset: GrabOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_window(&self) -> Option<&WindowId> {
        match &self.state {
            DragState::Dragging(session) => Some(&session.window_id),
            DragState::Idle => None,
        }
    }

    /// Starts dragging `window_id` from `pointer`.
    ///
    /// Closed or unknown windows leave the controller unchanged. A press during an active drag
    /// replaces the session.
    pub fn press(
        &mut self,
        windows: &mut WindowManager,
        window_id: &str,
        pointer: PointerPosition,
    ) -> bool {
        let Some(window) = windows.window(window_id).filter(|window| window.is_open) else {
            return false;
        };
        let grab_offset = pointer.offset_from(window.position);
        windows.focus(window_id);
        self.state = DragState::Dragging(DragSession {
            window_id: WindowId::new(window_id),
            grab_offset,
        });
        true
    }

    /// Moves the dragged window under the pointer. Returns whether a window moved.
    pub fn pointer_move(&self, windows: &mut WindowManager, pointer: PointerPosition) -> bool {
        match &self.state {
            DragState::Dragging(session) => windows.move_to(
                session.window_id.as_str(),
                pointer.minus(session.grab_offset),
            ),
            DragState::Idle => false,
        }
    }

    /// Ends the session. Returns whether a drag was in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
