//! Shared UI primitive library for the retro desktop shell and its content panels.
//!
//! The crate owns reusable Leptos primitives, the icon API, and the stable `data-ui-*` DOM
//! contract consumed by the desktop stylesheet. Content panels compose these primitives instead
//! of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize, ImageIcon};
pub use primitives::{
    Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopWindowLayer, FieldRow, InsetPanel, ListRow, ListSurface, Tab, TabList, Taskbar,
    TaskbarButton, TaskbarSection, TrayClock, TrayList, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

