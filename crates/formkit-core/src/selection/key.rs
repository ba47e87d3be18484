//! Type-erased selection keys.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use any_key::AnyHash;

/// Values that can be tagged on option elements and stored in a selection.
///
/// Blanket-implemented for every `'static` type that is `Clone + Eq + Hash + Debug`.
pub trait SelectionValue: Any + AnyHash + Clone + Eq + Hash + fmt::Debug {}

impl<T> SelectionValue for T where T: Any + AnyHash + Clone + Eq + Hash + fmt::Debug {}

/// A type-erased, hashable wrapper around a selection value.
///
/// Two keys are equal only when they wrap the same type and the wrapped values
/// compare equal. The original value is recovered with [`SelectionKey::downcast`],
/// which returns `None` for a mismatched type instead of producing a wrong value.
#[derive(Clone)]
pub struct SelectionKey {
    value: Rc<dyn AnyHash>,
    type_name: &'static str,
}

impl SelectionKey {
    /// Erase a value into a key.
    pub fn new<V: SelectionValue>(value: V) -> Self {
        Self {
            value: Rc::new(value),
            type_name: std::any::type_name::<V>(),
        }
    }

    /// Whether this key wraps a value of type `V`.
    pub fn is<V: SelectionValue>(&self) -> bool {
        self.value.is::<V>()
    }

    /// Borrow the wrapped value if it is a `V`.
    pub fn downcast_ref<V: SelectionValue>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Recover an owned copy of the wrapped value if it is a `V`.
    pub fn downcast<V: SelectionValue>(&self) -> Option<V> {
        self.downcast_ref::<V>().cloned()
    }

    /// Name of the wrapped value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Erase a borrowed value into a key.
pub fn erase<V: SelectionValue>(value: &V) -> SelectionKey {
    SelectionKey::new(value.clone())
}

impl PartialEq for SelectionKey {
    fn eq(&self, other: &Self) -> bool {
        *self.value == *other.value
    }
}

impl Eq for SelectionKey {}

impl Hash for SelectionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.value, state);
    }
}

impl fmt::Debug for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelectionKey({:?})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Fruit {
        Apple,
        Pear,
    }

    #[test]
    fn test_equal_values_give_equal_keys() {
        assert_eq!(SelectionKey::new(Fruit::Apple), SelectionKey::new(Fruit::Apple));
        assert_ne!(SelectionKey::new(Fruit::Apple), SelectionKey::new(Fruit::Pear));
    }

    #[test]
    fn test_different_types_never_equal() {
        // Same underlying number, different types.
        assert_ne!(SelectionKey::new(1u32), SelectionKey::new(1u64));
        assert_ne!(
            SelectionKey::new("apple".to_string()),
            SelectionKey::new("apple")
        );
    }

    #[test]
    fn test_downcast_roundtrip() {
        let key = erase(&Fruit::Pear);
        assert!(key.is::<Fruit>());
        assert_eq!(key.downcast::<Fruit>(), Some(Fruit::Pear));
        assert_eq!(key.downcast_ref::<Fruit>(), Some(&Fruit::Pear));
    }

    #[test]
    fn test_downcast_mismatch_is_none() {
        let key = SelectionKey::new(42i32);
        assert!(!key.is::<i64>());
        assert_eq!(key.downcast::<i64>(), None);
        assert_eq!(key.downcast::<String>(), None);
    }

    #[test]
    fn test_keys_collapse_in_set() {
        let set: HashSet<SelectionKey> = [
            SelectionKey::new(Fruit::Apple),
            SelectionKey::new(Fruit::Apple),
            SelectionKey::new(Fruit::Pear),
            SelectionKey::new(7u8),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert!(set.contains(&SelectionKey::new(Fruit::Apple)));
        assert!(set.contains(&SelectionKey::new(7u8)));
        assert!(!set.contains(&SelectionKey::new(7u16)));
    }

    #[test]
    fn test_debug_and_type_name() {
        let key = SelectionKey::new(Fruit::Apple);
        assert_eq!(format!("{:?}", key), "SelectionKey(Apple)");
        assert!(key.type_name().ends_with("Fruit"));
    }
}
