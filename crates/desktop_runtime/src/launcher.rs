//! Desktop icon activation.

use crate::model::{DesktopIconDefinition, IconKind, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What activating a desktop icon does.
pub enum LaunchTarget {
    OpenWindow(WindowId),
    ExternalUrl(String),
}

/// Resolves an activated icon id. Unknown ids, and external icons without a URL, resolve to
/// nothing.
pub fn resolve_icon_activation(
    icons: &[DesktopIconDefinition],
    icon_id: &str,
) -> Option<LaunchTarget> {
    let icon = icons.iter().find(|icon| icon.id == icon_id)?;
    match icon.kind {
        IconKind::Window => Some(LaunchTarget::OpenWindow(WindowId::new(icon.id.as_str()))),
        IconKind::External => icon
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| LaunchTarget::ExternalUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icons() -> Vec<DesktopIconDefinition> {
        vec![
            DesktopIconDefinition {
                id: "cv".to_string(),
                icon: "/images/icons/my-CV.png".to_string(),
                label: "My CV".to_string(),
                kind: IconKind::Window,
                url: None,
            },
            DesktopIconDefinition {
                id: "github".to_string(),
                icon: "/images/icons/github.png".to_string(),
                label: "GitHub".to_string(),
                kind: IconKind::External,
                url: Some("https://github.com/sajad42".to_string()),
            },
            DesktopIconDefinition {
                id: "broken".to_string(),
                icon: String::new(),
                label: "Broken".to_string(),
                kind: IconKind::External,
                url: None,
            },
        ]
    }

    #[test]
    fn window_icons_open_their_window() {
        assert_eq!(
            resolve_icon_activation(&icons(), "cv"),
            Some(LaunchTarget::OpenWindow(WindowId::new("cv")))
        );
    }

    #[test]
    fn external_icons_navigate() {
        assert_eq!(
            resolve_icon_activation(&icons(), "github"),
            Some(LaunchTarget::ExternalUrl(
                "https://github.com/sajad42".to_string()
            ))
        );
    }

    #[test]
    fn unknown_or_incomplete_icons_do_nothing() {
        assert_eq!(resolve_icon_activation(&icons(), "missing"), None);
        assert_eq!(resolve_icon_activation(&icons(), "broken"), None);
    }
}
