//! Recipe Card Selection
//!
//! State machine for the single-expanded-card invariant and the
//! mutually exclusive detail panels inside an open card.

/// Which panel an open card shows. `Ingredients` is the default view
/// (ingredient checklist plus instructions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPanel {
    #[default]
    Ingredients,
    Reviews,
    AddReview,
}

/// At most one card is expanded at a time. Selecting a card resets its
/// detail panel to the default and reports whether a view event is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    expanded: Option<usize>,
    panel: DetailPanel,
}

impl Selection {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn panel(&self) -> DetailPanel {
        self.panel
    }

    /// Toggle the card at `index`.
    ///
    /// Returns `true` when the card transitioned to open, in which case
    /// the caller records exactly one view event for it. Selecting the
    /// already-open card closes it with no event; selecting a different
    /// card is close-then-open with one event for the new card. Either
    /// way the panel resets to its default.
    pub fn select(&mut self, index: usize) -> bool {
        self.panel = DetailPanel::default();
        if self.expanded == Some(index) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(index);
            true
        }
    }

    /// Switch the detail panel of the open card. No-op while closed.
    pub fn show_panel(&mut self, panel: DetailPanel) {
        if self.expanded.is_some() {
            self.panel = panel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_from_closed_records_view() {
        let mut sel = Selection::default();
        assert!(sel.select(2));
        assert_eq!(sel.expanded(), Some(2));
        assert_eq!(sel.panel(), DetailPanel::Ingredients);
    }

    #[test]
    fn test_reselect_closes_without_view() {
        let mut sel = Selection::default();
        sel.select(1);
        assert!(!sel.select(1));
        assert_eq!(sel.expanded(), None);
    }

    #[test]
    fn test_switch_card_records_one_view_for_new_card() {
        let mut sel = Selection::default();
        sel.select(0);
        // Close-then-open collapses to a single transition.
        assert!(sel.select(3));
        assert_eq!(sel.expanded(), Some(3));
    }

    #[test]
    fn test_open_resets_panel() {
        let mut sel = Selection::default();
        sel.select(0);
        sel.show_panel(DetailPanel::Reviews);
        sel.select(1);
        assert_eq!(sel.panel(), DetailPanel::Ingredients);
    }

    #[test]
    fn test_panels_mutually_exclusive() {
        let mut sel = Selection::default();
        sel.select(0);
        sel.show_panel(DetailPanel::AddReview);
        assert_eq!(sel.panel(), DetailPanel::AddReview);
        sel.show_panel(DetailPanel::Reviews);
        assert_eq!(sel.panel(), DetailPanel::Reviews);
    }

    #[test]
    fn test_panel_ignored_while_closed() {
        let mut sel = Selection::default();
        sel.show_panel(DetailPanel::Reviews);
        assert_eq!(sel.panel(), DetailPanel::Ingredients);
    }
}
