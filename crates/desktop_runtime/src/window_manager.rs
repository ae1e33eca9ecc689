//! Window registry with open/closed state and stacking order.
//!
//! The key set is fixed at construction from the configured [`WindowDefinition`] list. Every
//! open or focus takes the next value of a monotonic counter as the window's z-index, so the open
//! window with the highest z-index is always unique and is the active window.
//!
//! All operations are total over the id domain: unknown ids are ignored. Mutators return `true`
//! when they changed state.

use crate::model::{Point, VisibleWindow, WindowDefinition, WindowId, WindowState};

#[derive(Debug, Clone, PartialEq, Eq)]
struct WindowEntry {
    definition: WindowDefinition,
    state: WindowState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Owns every window's state and the z-order counter.
pub struct WindowManager {
    entries: Vec<WindowEntry>,
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_z: 1,
        }
    }
}

impl WindowManager {
    /// Builds the registry in definition order.
    ///
    /// Initially open windows get z-indices `1..=N` in order, closed windows start at 0, and the
    /// counter continues at `N + 1`. A repeated id keeps its first definition.
    pub fn new(definitions: impl IntoIterator<Item = WindowDefinition>) -> Self {
        let mut manager = Self::default();
        for definition in definitions {
            if manager.entry(definition.id.as_str()).is_some() {
                continue;
            }
            let z_index = if definition.initially_open {
                manager.take_z()
            } else {
                0
            };
            manager.entries.push(WindowEntry {
                state: WindowState {
                    is_open: definition.initially_open,
                    z_index,
                    position: definition.default_position,
                },
                definition,
            });
        }
        manager
    }

    /// Opens `id` and raises it above every other window.
    ///
    /// Opening an already-open window re-raises it.
    pub fn open(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let z_index = self.take_z();
        let state = &mut self.entries[index].state;
        state.is_open = true;
        state.z_index = z_index;
        true
    }

    /// Closes `id`, keeping its last z-index and position.
    pub fn close(&mut self, id: &str) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.state.is_open => {
                entry.state.is_open = false;
                true
            }
            _ => false,
        }
    }

    /// Raises an open window. Never opens a closed one.
    ///
    /// Focusing the active window still advances the counter.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.entries[index].state.is_open {
            return false;
        }
        let z_index = self.take_z();
        self.entries[index].state.z_index = z_index;
        true
    }

    /// Moves an open window's top-left corner. Positions are not clamped.
    pub fn move_to(&mut self, id: &str, position: Point) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.state.is_open && entry.state.position != position => {
                entry.state.position = position;
                true
            }
            _ => false,
        }
    }

    /// Id of the open window with the highest z-index.
    pub fn active_id(&self) -> Option<&WindowId> {
        self.entries
            .iter()
            .filter(|entry| entry.state.is_open)
            .max_by_key(|entry| entry.state.z_index)
            .map(|entry| &entry.definition.id)
    }

    /// Open windows in registry order with their stacking and position.
    pub fn visible_windows(&self) -> Vec<VisibleWindow> {
        self.entries
            .iter()
            .filter(|entry| entry.state.is_open)
            .map(|entry| VisibleWindow {
                id: entry.definition.id.clone(),
                z_index: entry.state.z_index,
                position: entry.state.position,
            })
            .collect()
    }

    pub fn window(&self, id: &str) -> Option<&WindowState> {
        self.entry(id).map(|entry| &entry.state)
    }

    pub fn definition(&self, id: &str) -> Option<&WindowDefinition> {
        self.entry(id).map(|entry| &entry.definition)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &WindowDefinition> {
        self.entries.iter().map(|entry| &entry.definition)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.window(id).is_some_and(|state| state.is_open)
    }

    /// Z-index the next open or focus will assign.
    pub fn next_z(&self) -> u32 {
        self.next_z
    }

    /// Every window in registry order, open or not.
    pub fn iter(&self) -> impl Iterator<Item = (&WindowDefinition, &WindowState)> {
        self.entries
            .iter()
            .map(|entry| (&entry.definition, &entry.state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn take_z(&mut self) -> u32 {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.definition.id.as_str() == id)
    }

    fn entry(&self, id: &str) -> Option<&WindowEntry> {
        self.index_of(id).map(|index| &self.entries[index])
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut WindowEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.definition.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowSize;

    fn definition(id: &str, initially_open: bool) -> WindowDefinition {
        WindowDefinition {
            id: WindowId::new(id),
            title: id.to_uppercase(),
            icon: format!("/images/icons/{id}.png"),
            content: id.to_string(),
            initially_open,
            default_position: Point::new(10, 20),
            default_size: WindowSize {
                width: 300,
                height: 200,
            },
        }
    }

    fn abc() -> WindowManager {
        WindowManager::new([
            definition("a", true),
            definition("b", true),
            definition("c", false),
        ])
    }

    #[test]
    fn construction_numbers_initially_open_windows_in_order() {
        let manager = abc();

        assert_eq!(manager.window("a").map(|w| w.z_index), Some(1));
        assert_eq!(manager.window("b").map(|w| w.z_index), Some(2));
        assert_eq!(manager.window("c").map(|w| w.z_index), Some(0));
        assert_eq!(manager.next_z(), 3);
        assert_eq!(manager.active_id().map(WindowId::as_str), Some("b"));
        assert_eq!(
            manager.window("c").map(|w| w.position),
            Some(Point::new(10, 20))
        );
    }

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut manager = abc();
        let before = manager.clone();

        assert!(!manager.open("zzz"));
        assert!(!manager.close("zzz"));
        assert!(!manager.focus("zzz"));
        assert!(!manager.move_to("zzz", Point::new(1, 1)));

        assert_eq!(manager, before);
    }

    #[test]
    fn focus_never_opens_a_closed_window() {
        let mut manager = abc();

        assert!(!manager.focus("c"));
        assert!(!manager.is_open("c"));
        assert_eq!(manager.next_z(), 3);
    }

    #[test]
    fn focusing_active_window_still_advances_counter() {
        let mut manager = abc();

        assert!(manager.focus("b"));
        assert_eq!(manager.window("b").map(|w| w.z_index), Some(3));
        assert_eq!(manager.next_z(), 4);
        assert_eq!(manager.active_id().map(WindowId::as_str), Some("b"));
    }

    #[test]
    fn close_keeps_z_and_position_and_is_idempotent() {
        let mut manager = abc();
        manager.move_to("a", Point::new(99, 98));

        assert!(manager.close("a"));
        assert!(!manager.close("a"));
        assert_eq!(
            manager.window("a"),
            Some(&WindowState {
                is_open: false,
                z_index: 1,
                position: Point::new(99, 98),
            })
        );
    }

    #[test]
    fn reopening_raises_above_all_previous_assignments() {
        let mut manager = abc();
        manager.open("c");
        manager.close("c");
        manager.open("c");

        let z = manager.window("c").map(|w| w.z_index).unwrap_or_default();
        assert!(manager
            .iter()
            .filter(|(definition, _)| definition.id.as_str() != "c")
            .all(|(_, state)| state.z_index < z));
        assert_eq!(z, 4);
    }

    #[test]
    fn opening_an_open_window_re_raises_it() {
        let mut manager = abc();

        assert!(manager.open("a"));

        assert_eq!(manager.window("a").map(|w| w.z_index), Some(3));
        assert_eq!(manager.next_z(), 4);
        assert_eq!(manager.active_id().map(WindowId::as_str), Some("a"));
        assert_eq!(
            manager.window("b"),
            Some(&WindowState {
                is_open: true,
                z_index: 2,
                position: Point::new(10, 20),
            })
        );
    }

    #[test]
    fn move_to_ignores_closed_windows() {
        let mut manager = abc();

        assert!(!manager.move_to("c", Point::new(5, 5)));
        assert_eq!(
            manager.window("c").map(|w| w.position),
            Some(Point::new(10, 20))
        );
    }

    #[test]
    fn duplicate_definitions_keep_the_first() {
        let mut second = definition("a", false);
        second.title = "second".to_string();
        let manager = WindowManager::new([definition("a", true), second]);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.definition("a").map(|d| d.title.as_str()), Some("A"));
    }

    #[test]
    fn visible_windows_lists_open_windows_in_registry_order() {
        let mut manager = abc();
        manager.focus("a");

        let visible: Vec<_> = manager
            .visible_windows()
            .into_iter()
            .map(|w| (w.id.to_string(), w.z_index))
            .collect();

        assert_eq!(visible, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }
}
