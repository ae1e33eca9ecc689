//! Taskbar projection derived from window manager state.

use crate::{model::TaskbarItem, window_manager::WindowManager};

/// Open windows in registry order, with the active window flagged.
///
/// The order does not follow stacking: focusing a window never reorders the taskbar.
pub fn taskbar_items(windows: &WindowManager) -> Vec<TaskbarItem> {
    let active = windows.active_id();
    windows
        .iter()
        .filter(|(_, state)| state.is_open)
        .map(|(definition, _)| TaskbarItem {
            id: definition.id.clone(),
            title: definition.display_title(),
            icon: definition.icon.clone(),
            is_active: active == Some(&definition.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Point, WindowDefinition, WindowId, WindowSize};

    fn manager() -> WindowManager {
        let definition = |id: &str, title: &str, initially_open: bool| WindowDefinition {
            id: WindowId::new(id),
            title: title.to_string(),
            icon: format!("/images/icons/{id}.png"),
            content: id.to_string(),
            initially_open,
            default_position: Point::default(),
            default_size: WindowSize {
                width: 100,
                height: 100,
            },
        };
        WindowManager::new([
            definition("about", "Sajad", true),
            definition("contact", "", true),
            definition("projects", "Projects", false),
        ])
    }

    fn summary(items: &[TaskbarItem]) -> Vec<(&str, &str, bool)> {
        items
            .iter()
            .map(|item| (item.id.as_str(), item.title.as_str(), item.is_active))
            .collect()
    }

    #[test]
    fn lists_open_windows_in_registry_order() {
        let mut windows = manager();
        windows.open("projects");
        windows.focus("about");

        assert_eq!(
            summary(&taskbar_items(&windows)),
            vec![
                ("about", "Sajad", true),
                ("contact", "Contact", false),
                ("projects", "Projects", false),
            ]
        );
    }

    #[test]
    fn empty_when_everything_is_closed() {
        let mut windows = manager();
        windows.close("about");
        windows.close("contact");

        assert!(taskbar_items(&windows).is_empty());
    }

    #[test]
    fn carries_icon_of_each_window() {
        let windows = manager();
        let icons: Vec<_> = taskbar_items(&windows)
            .into_iter()
            .map(|item| item.icon)
            .collect();

        assert_eq!(
            icons,
            vec!["/images/icons/about.png", "/images/icons/contact.png"]
        );
    }
}
