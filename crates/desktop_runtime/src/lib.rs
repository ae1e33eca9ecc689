//! Window-management core and desktop shell UI for the retro portfolio desktop.

pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod launcher;
pub mod model;
pub mod panels;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig};
pub use drag::{DragController, DragSession, DragState};
pub use launcher::{resolve_icon_activation, LaunchTarget};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use taskbar::taskbar_items;
pub use window_manager::WindowManager;
