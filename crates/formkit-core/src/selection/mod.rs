//! Multi-selection coordination between a container and its option elements.
//!
//! A container (the multi-select menu) owns an ordered `Vec<V>` supplied by the
//! caller. While it renders its contents it wraps that list in a
//! [`SelectionBinding`] and hands option elements a [`SelectionContext`] with the
//! binding installed. Each option owns an [`OptionToggle`] that reads and flips
//! its own erased key in the shared [`SelectionSet`]; write-backs are restored
//! into the caller's list immediately.

mod context;
mod key;
mod toggle;

pub use context::{
    project, restore, SelectionAccessor, SelectionBinding, SelectionContext, SelectionSet,
};
pub use key::{erase, SelectionKey, SelectionValue};
pub use toggle::{OptionToggle, ToggleState};

/// Summary shown when nothing is selected.
pub const EMPTY_SELECTION_TEXT: &str = "<empty>";

/// Separator between labels in a selection summary.
pub const SELECTION_SEPARATOR: &str = ", ";

/// Summarize a selection for the collapsed container.
pub fn selection_summary<V>(selection: &[V], label: impl Fn(&V) -> String) -> String {
    if selection.is_empty() {
        return EMPTY_SELECTION_TEXT.to_string();
    }
    selection
        .iter()
        .map(label)
        .collect::<Vec<_>>()
        .join(SELECTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Weekday(u8);

    fn weekday_label(day: &Weekday) -> String {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .get(day.0 as usize)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("Day {}", day.0))
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(selection_summary::<Weekday>(&[], weekday_label), "<empty>");
    }

    #[test]
    fn test_summary_uses_labels_in_order() {
        let selection = [Weekday(4), Weekday(0)];
        assert_eq!(selection_summary(&selection, weekday_label), "Fri, Mon");
    }

    #[test]
    fn test_summary_of_strings() {
        let selection = vec!["A".to_string(), "B".to_string()];
        assert_eq!(selection_summary(&selection, |s| s.clone()), "A, B");
    }

    #[test]
    fn test_summary_follows_container_order_after_toggles() {
        let mut selection = vec![Weekday(2)];
        {
            let binding = SelectionBinding::new(&mut selection);
            let ctx = SelectionContext::empty().set(&binding);
            OptionToggle::new(Weekday(6)).activate(&ctx);
        }
        assert_eq!(selection_summary(&selection, weekday_label), "Wed, Sun");
    }
}
