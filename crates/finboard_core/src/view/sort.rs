//! Multi-key sort rules over record fields.
//!
//! # Invariants
//! - Sorting is stable: ties keep store insertion order.
//! - Absence of a rule keeps store order untouched.

use crate::model::record::Record;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordered list of `(field, direction)` keys; later keys break earlier ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRule<F> {
    keys: Vec<(F, Direction)>,
}

impl<F: Copy> SortRule<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            keys: vec![(field, Direction::Ascending)],
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            keys: vec![(field, Direction::Descending)],
        }
    }

    pub fn then_ascending(mut self, field: F) -> Self {
        self.keys.push((field, Direction::Ascending));
        self
    }

    pub fn then_descending(mut self, field: F) -> Self {
        self.keys.push((field, Direction::Descending));
        self
    }

    pub fn keys(&self) -> &[(F, Direction)] {
        &self.keys
    }

    pub fn compare<R: Record<Field = F>>(&self, left: &R, right: &R) -> Ordering {
        for (field, direction) in &self.keys {
            let ordering = left.field(*field).compare(&right.field(*field));
            let ordering = match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Sorts `records` in place (stable).
    pub fn sort<R: Record<Field = F>>(&self, records: &mut [&R]) {
        records.sort_by(|left, right| self.compare(*left, *right));
    }
}

/// Applies `rule` when present; otherwise returns `records` unchanged.
pub fn sort_records<'a, R: Record>(
    mut records: Vec<&'a R>,
    rule: Option<&SortRule<R::Field>>,
) -> Vec<&'a R> {
    if let Some(rule) = rule {
        rule.sort(&mut records);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::SortRule;
    use crate::model::field::FieldValue;
    use crate::model::record::Record;

    #[derive(Debug, Clone)]
    struct Row {
        id: u32,
        group: &'static str,
        rank: i64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Group,
        Rank,
    }

    impl Record for Row {
        type Key = u32;
        type Field = RowField;

        fn key(&self) -> &u32 {
            &self.id
        }

        fn field(&self, field: RowField) -> FieldValue<'_> {
            match field {
                RowField::Group => FieldValue::text(self.group),
                RowField::Rank => FieldValue::Integer(self.rank),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, group: "b", rank: 2 },
            Row { id: 2, group: "a", rank: 2 },
            Row { id: 3, group: "b", rank: 1 },
            Row { id: 4, group: "a", rank: 2 },
        ]
    }

    #[test]
    fn descending_sort_keeps_insertion_order_for_ties() {
        let rows = rows();
        let mut refs: Vec<&Row> = rows.iter().collect();
        SortRule::descending(RowField::Rank).sort(&mut refs);
        let ids: Vec<u32> = refs.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 3]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let rows = rows();
        let mut refs: Vec<&Row> = rows.iter().collect();
        SortRule::ascending(RowField::Group)
            .then_ascending(RowField::Rank)
            .sort(&mut refs);
        let ids: Vec<u32> = refs.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }
}
