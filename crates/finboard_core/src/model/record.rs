//! Record contract shared by every screen collection.
//!
//! # Responsibility
//! - Describe keyed records with named, typed fields.
//! - Allocate fresh keys that are unique within one collection.
//!
//! # Invariants
//! - `Record::key` is stable for the lifetime of the record.
//! - `StoreKey::allocate` never returns a key present in `existing`.

use crate::model::field::FieldValue;
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// Key type usable inside a record store.
pub trait StoreKey: Clone + Eq + Hash + Debug + Display {
    /// Returns a key not present in `existing`.
    fn allocate<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;
}

impl StoreKey for u32 {
    /// Integer keys grow from the current maximum, starting at 1.
    fn allocate<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let taken: HashSet<u32> = existing.into_iter().copied().collect();
        let next = taken.iter().max().map_or(Some(1), |max| max.checked_add(1));
        match next {
            Some(key) => key,
            // Exhausted the top of the range: reuse the lowest free slot.
            None => (1..=u32::MAX)
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or(0),
        }
    }
}

impl StoreKey for Uuid {
    fn allocate<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let taken: HashSet<&Uuid> = existing.into_iter().collect();
        loop {
            let candidate = Uuid::new_v4();
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// One structured item in a screen collection.
pub trait Record: Clone {
    /// Application-assigned identity, unique within one store.
    type Key: StoreKey;
    /// Names of the fields a screen can search, filter or sort on.
    type Field: Copy + Eq + Debug;

    fn key(&self) -> &Self::Key;

    /// Reads one named field.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

#[cfg(test)]
mod tests {
    use super::StoreKey;
    use uuid::Uuid;

    #[test]
    fn integer_keys_start_at_one_and_follow_max() {
        assert_eq!(u32::allocate(&[]), 1);
        assert_eq!(u32::allocate(&[3, 9, 4]), 10);
    }

    #[test]
    fn integer_keys_fall_back_to_free_slot_at_range_end() {
        assert_eq!(u32::allocate(&[1, u32::MAX]), 2);
    }

    #[test]
    fn uuid_keys_avoid_existing_values() {
        let existing = vec![Uuid::new_v4(), Uuid::new_v4()];
        let allocated = Uuid::allocate(&existing);
        assert!(!existing.contains(&allocated));
        assert!(!allocated.is_nil());
    }
}
