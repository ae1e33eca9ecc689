//! Icon primitives: built-in glyph icons and configuration-supplied image icons.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered icon size token.
pub enum IconSize {
    /// 8px glyphs inside titlebar controls.
    Xs,
    /// 16px titlebar and taskbar icons.
    Sm,
    /// 32px desktop icons.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> u32 {
        match self {
            Self::Xs => 8,
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in shell glyphs.
pub enum IconName {
    /// Titlebar minimize.
    WindowMinimize,
    /// Titlebar maximize.
    WindowMaximize,
    /// Titlebar close.
    Dismiss,
    /// Folder entry in list surfaces.
    Folder,
}

impl IconName {
    fn glyph(self) -> &'static str {
        match self {
            Self::WindowMinimize => "\u{2212}",
            Self::WindowMaximize => "\u{25A1}",
            Self::Dismiss => "\u{2715}",
            Self::Folder => "\u{1F4C1}",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::Dismiss => "dismiss",
            Self::Folder => "folder",
        }
    }
}

#[component]
/// Renders a built-in glyph icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[component]
/// Renders an image icon referenced by URL (desktop/window icons from configuration).
pub fn ImageIcon(
    #[prop(into)] src: String,
    #[prop(default = IconSize::Sm)] size: IconSize,
    #[prop(optional, into)] alt: String,
) -> impl IntoView {
    view! {
        <img
            class="ui-image-icon"
            src=src
            alt=alt
            width=size.px()
            height=size.px()
            draggable="false"
            data-ui-primitive="true"
            data-ui-kind="image-icon"
            data-ui-size=size.token()
        />
    }
}
