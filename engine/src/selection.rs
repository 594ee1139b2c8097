use crate::spatial::VillageId;

/// Hovered/selected village state for detail panels. Selection is
/// exclusive (at most one), hover is an independent axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<VillageId>,
    hovered: Option<VillageId>,
    hover_screen_pos: Option<(f64, f64)>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<VillageId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<VillageId> {
        self.hovered
    }

    /// Screen position of the pointer while something is hovered, for
    /// tooltip placement.
    pub fn hover_screen_pos(&self) -> Option<(f64, f64)> {
        self.hover_screen_pos
    }

    /// Replaces any previous selection. Returns `true` if it changed.
    pub fn set_selected(&mut self, village: Option<VillageId>) -> bool {
        if self.selected == village {
            return false;
        }
        self.selected = village;
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns `true` if the hovered village changed (position updates
    /// alone don't count).
    pub fn set_hovered(&mut self, village: Option<VillageId>, screen_pos: Option<(f64, f64)>) -> bool {
        self.hover_screen_pos = if village.is_some() { screen_pos } else { None };
        if self.hovered == village {
            return false;
        }
        self.hovered = village;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_exclusive() {
        let mut state = SelectionState::default();
        assert!(state.set_selected(Some(1)));
        assert!(state.set_selected(Some(2)));
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn reselecting_the_same_village_reports_no_change() {
        let mut state = SelectionState::default();
        state.set_selected(Some(3));
        assert!(!state.set_selected(Some(3)));
    }

    #[test]
    fn hover_and_selection_are_independent() {
        let mut state = SelectionState::default();
        state.set_selected(Some(1));
        state.set_hovered(Some(2), Some((10.0, 20.0)));
        assert_eq!(state.selected(), Some(1));
        assert_eq!(state.hovered(), Some(2));
        assert_eq!(state.hover_screen_pos(), Some((10.0, 20.0)));

        state.set_hovered(None, None);
        assert_eq!(state.selected(), Some(1));
        assert_eq!(state.hovered(), None);
        assert_eq!(state.hover_screen_pos(), None);
    }

    #[test]
    fn clear_selection_only_clears_selection() {
        let mut state = SelectionState::default();
        state.set_selected(Some(1));
        state.set_hovered(Some(1), Some((0.0, 0.0)));
        state.clear_selection();
        assert_eq!(state.selected(), None);
        assert_eq!(state.hovered(), Some(1));
    }
}
