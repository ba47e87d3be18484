//! Scoped access to a container's selection from its option elements.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use super::key::{SelectionKey, SelectionValue};

/// Unordered membership set shared between a container and its options.
pub type SelectionSet = HashSet<SelectionKey>;

/// Read/write access to a container's selection.
///
/// Both operations are synchronous. `read` always reflects the last committed
/// `write`, so toggles processed in the same frame never see a stale set.
pub trait SelectionAccessor {
    /// Current membership set.
    fn read(&self) -> SelectionSet;

    /// Replace the membership set.
    fn write(&self, set: SelectionSet);
}

/// Context handle passed from a container down to its option elements.
///
/// A context either carries the accessor of the nearest enclosing container or
/// nothing. Installing an accessor with [`SelectionContext::set`] yields a child
/// context; the parent is left untouched, so sibling subtrees never observe it,
/// and the child cannot outlive the accessor it borrows.
#[derive(Clone, Copy, Default)]
pub struct SelectionContext<'a> {
    accessor: Option<&'a dyn SelectionAccessor>,
}

impl<'a> SelectionContext<'a> {
    /// A context with no enclosing container.
    pub fn empty() -> Self {
        Self { accessor: None }
    }

    /// The installed accessor, if any.
    pub fn get(&self) -> Option<&'a dyn SelectionAccessor> {
        self.accessor
    }

    /// Whether an enclosing container is present.
    pub fn is_present(&self) -> bool {
        self.accessor.is_some()
    }

    /// Child context with `accessor` installed, shadowing any outer container.
    pub fn set<'b>(&self, accessor: &'b dyn SelectionAccessor) -> SelectionContext<'b> {
        SelectionContext {
            accessor: Some(accessor),
        }
    }
}

impl std::fmt::Debug for SelectionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionContext")
            .field("present", &self.is_present())
            .finish()
    }
}

/// Project an ordered list into its membership set.
///
/// Order is discarded and duplicates collapse.
pub fn project<V: SelectionValue>(list: &[V]) -> SelectionSet {
    list.iter().map(|value| SelectionKey::new(value.clone())).collect()
}

/// Rebuild an ordered list from a membership set.
///
/// Values from `previous` that are still members keep their relative order
/// (first occurrence wins); members not in `previous` are appended. Keys that
/// do not downcast to `V` belong to some other container and are dropped.
pub fn restore<V: SelectionValue>(previous: &[V], set: &SelectionSet) -> Vec<V> {
    let mut seen = SelectionSet::with_capacity(set.len());
    let mut list = Vec::with_capacity(set.len());

    for value in previous {
        let key = SelectionKey::new(value.clone());
        if set.contains(&key) && seen.insert(key) {
            list.push(value.clone());
        }
    }

    for key in set {
        if seen.contains(key) {
            continue;
        }
        match key.downcast::<V>() {
            Some(value) => list.push(value),
            None => log::debug!(
                "Dropping foreign selection key {:?} ({}), expected {}",
                key,
                key.type_name(),
                std::any::type_name::<V>()
            ),
        }
    }

    list
}

/// Accessor backed by a caller-owned ordered list.
///
/// This is the container side of the coordinator: reads project the list,
/// writes restore it through [`restore`].
pub struct SelectionBinding<'a, V> {
    list: RefCell<&'a mut Vec<V>>,
    writes: Cell<usize>,
}

impl<'a, V: SelectionValue> SelectionBinding<'a, V> {
    /// Bind to the caller's list for the duration of one render.
    pub fn new(list: &'a mut Vec<V>) -> Self {
        Self {
            list: RefCell::new(list),
            writes: Cell::new(0),
        }
    }

    /// Number of write-backs since the binding was created.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Whether any option wrote back through this binding.
    pub fn changed(&self) -> bool {
        self.writes.get() > 0
    }
}

impl<V: SelectionValue> SelectionAccessor for SelectionBinding<'_, V> {
    fn read(&self) -> SelectionSet {
        project(self.list.borrow().as_slice())
    }

    fn write(&self, set: SelectionSet) {
        let mut list = self.list.borrow_mut();
        let restored = restore(list.as_slice(), &set);
        **list = restored;
        self.writes.set(self.writes.get() + 1);
    }
}
