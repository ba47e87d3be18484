//! Membership toggling for option elements.

use super::context::SelectionContext;
use super::key::{SelectionKey, SelectionValue};

/// How an option element should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// No enclosing container: plain, non-interactive content.
    Passthrough,
    /// Interactive, not a member of the selection.
    Unselected,
    /// Interactive, member of the selection (shows a checkmark).
    Selected,
}

impl ToggleState {
    /// Whether the option reacts to activation.
    pub fn is_interactive(self) -> bool {
        !matches!(self, ToggleState::Passthrough)
    }

    /// Whether the selected indicator should be shown.
    pub fn is_selected(self) -> bool {
        matches!(self, ToggleState::Selected)
    }
}

/// Toggle behaviour attached to one option element.
#[derive(Debug, Clone)]
pub struct OptionToggle<V> {
    tag: V,
    key: SelectionKey,
}

impl<V: SelectionValue> OptionToggle<V> {
    /// Create a toggle for the option tagged `tag`.
    pub fn new(tag: V) -> Self {
        let key = SelectionKey::new(tag.clone());
        Self { tag, key }
    }

    /// The option's tag.
    pub fn tag(&self) -> &V {
        &self.tag
    }

    /// The option's erased key.
    pub fn key(&self) -> &SelectionKey {
        &self.key
    }

    /// Render state against the current selection.
    pub fn state(&self, ctx: &SelectionContext<'_>) -> ToggleState {
        match ctx.get() {
            None => ToggleState::Passthrough,
            Some(accessor) if accessor.read().contains(&self.key) => ToggleState::Selected,
            Some(_) => ToggleState::Unselected,
        }
    }

    /// Flip membership of this option's key.
    ///
    /// Reads the accessor at activation time, so a toggle from a sibling
    /// earlier in the same frame is never lost. Returns the new membership, or
    /// `None` when there is no enclosing container.
    pub fn activate(&self, ctx: &SelectionContext<'_>) -> Option<bool> {
        let accessor = ctx.get()?;
        let mut set = accessor.read();
        let selected = if set.remove(&self.key) {
            false
        } else {
            set.insert(self.key.clone());
            true
        };
        accessor.write(set);
        log::trace!("Toggled {:?} -> selected={}", self.key, selected);
        Some(selected)
    }
}
