use desktop_runtime::{
    reduce_desktop, taskbar_items, DesktopAction, DesktopConfig, DesktopState, InteractionState,
    Point, RuntimeEffect, WindowDefinition, WindowId, WindowManager, WindowSize,
};

fn definition(id: &str, initially_open: bool, x: i32, y: i32) -> WindowDefinition {
    WindowDefinition {
        id: WindowId::new(id),
        title: id.to_uppercase(),
        icon: format!("/images/icons/{id}.png"),
        content: id.to_string(),
        initially_open,
        default_position: Point::new(x, y),
        default_size: WindowSize {
            width: 400,
            height: 300,
        },
    }
}

fn abc() -> WindowManager {
    WindowManager::new([
        definition("a", true, 10, 10),
        definition("b", true, 60, 60),
        definition("c", false, 110, 110),
    ])
}

fn active(windows: &WindowManager) -> Option<&str> {
    windows.active_id().map(WindowId::as_str)
}

fn max_assigned_z(windows: &WindowManager) -> u32 {
    windows
        .iter()
        .map(|(_, state)| state.z_index)
        .max()
        .unwrap_or_default()
}

#[test]
fn focus_open_close_scenario_tracks_active_window() {
    let mut windows = abc();
    assert_eq!(windows.window("a").map(|w| w.z_index), Some(1));
    assert_eq!(windows.window("b").map(|w| w.z_index), Some(2));

    windows.focus("a");
    assert_eq!(active(&windows), Some("a"));

    windows.open("c");
    assert_eq!(active(&windows), Some("c"));

    windows.close("c");
    assert_eq!(active(&windows), Some("a"));
}

#[test]
fn open_makes_window_active_and_open() {
    let mut windows = abc();

    assert!(windows.open("c"));
    assert!(windows.is_open("c"));
    assert_eq!(active(&windows), Some("c"));
}

#[test]
fn closing_every_window_leaves_no_active_window() {
    let mut windows = abc();
    windows.close("b");
    assert_eq!(active(&windows), Some("a"));

    windows.close("a");
    assert_eq!(active(&windows), None);
    assert!(windows.visible_windows().is_empty());
}

#[test]
fn reopen_assigns_z_above_every_earlier_assignment() {
    let mut windows = abc();
    windows.open("c");
    windows.focus("a");
    let highest_before = max_assigned_z(&windows);

    windows.close("c");
    windows.open("c");

    let reopened = windows.window("c").map(|w| w.z_index).unwrap_or_default();
    assert!(windows.is_open("c"));
    assert!(reopened > highest_before);
}

#[test]
fn refocusing_active_window_keeps_it_active_and_advances_counter() {
    let mut windows = abc();
    let before = windows.next_z();

    windows.focus("b");

    assert_eq!(active(&windows), Some("b"));
    assert_eq!(windows.next_z(), before + 1);
}

#[test]
fn unknown_ids_are_ignored_everywhere() {
    let mut windows = abc();
    let snapshot = windows.clone();

    windows.open("ghost");
    windows.close("ghost");
    windows.focus("ghost");

    assert_eq!(windows, snapshot);
}

#[test]
fn drag_moves_window_by_grab_offset_until_release() {
    let mut state = DesktopState::new(abc(), Vec::new());
    let mut interaction = InteractionState::default();

    // Window "b" sits at (60, 60); grab it 15px right and 5px down of its corner.
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::BeginMove {
            window_id: WindowId::new("b"),
            pointer: Point::new(75, 65),
        },
    );
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::UpdateMove {
            pointer: Point::new(200, 180),
        },
    );
    assert_eq!(
        state.windows.window("b").map(|w| w.position),
        Some(Point::new(185, 175))
    );

    reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
    reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::UpdateMove {
            pointer: Point::new(5, 5),
        },
    );
    assert_eq!(
        state.windows.window("b").map(|w| w.position),
        Some(Point::new(185, 175))
    );
}

#[test]
fn taskbar_follows_registry_order_not_focus_history() {
    let mut windows = abc();
    windows.open("c");
    windows.focus("b");
    windows.focus("a");

    let items = taskbar_items(&windows);
    let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
    let active: Vec<_> = items
        .iter()
        .filter(|item| item.is_active)
        .map(|item| item.id.as_str())
        .collect();

    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(active, vec!["a"]);
}

#[test]
fn reopened_window_keeps_its_dragged_position() {
    let mut windows = abc();
    windows.move_to("a", Point::new(300, 20));
    windows.close("a");
    windows.open("a");

    assert_eq!(
        windows.window("a").map(|w| w.position),
        Some(Point::new(300, 20))
    );
}

#[test]
fn builtin_desktop_icons_drive_windows_and_links() {
    let config = DesktopConfig::builtin().expect("builtin config");
    let (mut state, mut interaction) = config.initial_state();

    let effects = reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::ActivateIcon {
            icon_id: "history".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(active(&state.windows), Some("history"));

    let effects = reduce_desktop(
        &mut state,
        &mut interaction,
        DesktopAction::ActivateIcon {
            icon_id: "github".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![RuntimeEffect::OpenExternalUrl(
            "https://github.com/sajad42".to_string()
        )]
    );
    assert_eq!(active(&state.windows), Some("history"));

    let titles: Vec<_> = taskbar_items(&state.windows)
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["Sajad", "Contact", "History"]);
}
