//! Expand/collapse state of a single entry.

/// Regions inside an entry whose clicks never toggle it.
pub const NON_TOGGLE_REGIONS: [&str; 3] = [".log-tags", ".log-file-info", ".copy-btn"];

/// Selector list matching any non-toggle region, for `Element::closest`.
pub fn non_toggle_selector() -> String {
    NON_TOGGLE_REGIONS.join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show line breaks; build the detail controls when `build_details`.
    Expand { build_details: bool },
    /// Hide line breaks; built controls stay in place.
    Collapse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryView {
    expanded: bool,
    details_built: bool,
}

impl EntryView {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn details_built(&self) -> bool {
        self.details_built
    }

    pub fn toggle(&mut self) -> Transition {
        self.expanded = !self.expanded;
        if !self.expanded {
            return Transition::Collapse;
        }
        let build_details = !self.details_built;
        self.details_built = true;
        Transition::Expand { build_details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let view = EntryView::default();
        assert!(!view.is_expanded());
        assert!(!view.details_built());
    }

    #[test]
    fn test_details_built_once() {
        let mut view = EntryView::default();
        assert_eq!(view.toggle(), Transition::Expand { build_details: true });
        assert_eq!(view.toggle(), Transition::Collapse);
        assert_eq!(view.toggle(), Transition::Expand { build_details: false });
        assert_eq!(view.toggle(), Transition::Collapse);
        assert_eq!(view.toggle(), Transition::Expand { build_details: false });
        assert!(view.details_built());
    }

    #[test]
    fn test_collapse_keeps_details() {
        let mut view = EntryView::default();
        view.toggle();
        view.toggle();
        assert!(!view.is_expanded());
        assert!(view.details_built());
    }

    #[test]
    fn test_non_toggle_selector() {
        assert_eq!(non_toggle_selector(), ".log-tags, .log-file-info, .copy-btn");
    }
}
