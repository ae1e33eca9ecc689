//! Plain data types shared by the window manager, drag controller, taskbar and launcher.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{drag::DragController, window_manager::WindowManager};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable configuration key of a window.
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for WindowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Desktop coordinate in CSS pixels. Used for window top-left corners and pointer positions.
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    pub fn offset_from(self, origin: Point) -> GrabOffset {
        GrabOffset {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }

    /// Point that lies `offset` before `self`.
    pub fn minus(self, offset: GrabOffset) -> Point {
        Point {
            x: self.x - offset.dx,
            y: self.y - offset.dy,
        }
    }
}

/// Pointer coordinates reported by input events.
pub type PointerPosition = Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Vector from a window's top-left corner to the pointer that grabbed it.
pub struct GrabOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable window configuration.
pub struct WindowDefinition {
    pub id: WindowId,
    pub title: String,
    /// Icon asset path shown in the title bar and taskbar.
    pub icon: String,
    /// Content panel key rendered in the window body.
    pub content: String,
    #[serde(default)]
    pub initially_open: bool,
    pub default_position: Point,
    pub default_size: WindowSize,
}

impl WindowDefinition {
    /// Title for chrome that cannot show an empty label: the id with its first letter capitalized.
    pub fn display_title(&self) -> String {
        if !self.title.trim().is_empty() {
            return self.title.clone();
        }
        let mut chars = self.id.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Mutable per-window state owned by [`WindowManager`].
pub struct WindowState {
    pub is_open: bool,
    pub z_index: u32,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One open window as the renderer needs it.
pub struct VisibleWindow {
    pub id: WindowId,
    pub z_index: u32,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Opens the window with the icon's id.
    Window,
    /// Navigates to the icon's URL.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop launcher entry.
pub struct DesktopIconDefinition {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub kind: IconKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Taskbar entry for one open window.
pub struct TaskbarItem {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Complete desktop state driven by [`crate::reducer::reduce_desktop`].
pub struct DesktopState {
    pub windows: WindowManager,
    pub icons: Vec<DesktopIconDefinition>,
}

impl DesktopState {
    pub fn new(windows: WindowManager, icons: Vec<DesktopIconDefinition>) -> Self {
        Self { windows, icons }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer interaction state.
pub struct InteractionState {
    pub drag: DragController,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn definition(id: &str, title: &str) -> WindowDefinition {
        WindowDefinition {
            id: WindowId::new(id),
            title: title.to_string(),
            icon: String::new(),
            content: id.to_string(),
            initially_open: false,
            default_position: Point::new(0, 0),
            default_size: WindowSize {
                width: 100,
                height: 100,
            },
        }
    }

    #[test]
    fn display_title_capitalizes_id_when_title_missing() {
        assert_eq!(definition("projects", "").display_title(), "Projects");
        assert_eq!(definition("cv", "  ").display_title(), "Cv");
        assert_eq!(definition("about", "Sajad").display_title(), "Sajad");
    }

    #[test]
    fn grab_offset_round_trips_through_point_math() {
        let top_left = Point::new(250, 100);
        let pointer = Point::new(300, 110);
        let offset = pointer.offset_from(top_left);

        assert_eq!(offset, GrabOffset { dx: 50, dy: 10 });
        assert_eq!(Point::new(400, 400).minus(offset), Point::new(350, 390));
    }
}
