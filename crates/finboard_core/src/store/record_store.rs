//! In-memory keyed record store with copy-on-write mutation.
//!
//! # Responsibility
//! - Own one screen's ordered record collection.
//! - Apply add/replace/remove as whole-collection swaps.
//!
//! # Invariants
//! - Keys are unique at all times; seeding with duplicates is rejected.
//! - A failed mutation leaves the previous collection in place.
//! - Snapshots handed out earlier never observe later mutations.

use crate::model::record::{Record, StoreKey};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record has this key.
    NotFound(String),
    /// A record with this key already exists.
    DuplicateKey(String),
    /// A builder or updater produced a record under a different key.
    KeyMismatch { expected: String, actual: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "record not found: {key}"),
            Self::DuplicateKey(key) => write!(f, "duplicate record key: {key}"),
            Self::KeyMismatch { expected, actual } => {
                write!(f, "record key changed from `{expected}` to `{actual}`")
            }
        }
    }
}

impl Error for StoreError {}

/// Ordered, key-unique record collection owned by one screen.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Arc<Vec<R>>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(Vec::new()),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store, rejecting duplicate keys.
    pub fn from_records(records: Vec<R>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.key()) {
                return Err(StoreError::DuplicateKey(record.key().to_string()));
            }
        }
        debug!(
            "event=store_seed module=store status=ok records={}",
            records.len()
        );
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[R] {
        self.records.as_slice()
    }

    /// Immutable snapshot of the current collection.
    pub fn snapshot(&self) -> Arc<Vec<R>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.get(key).is_some()
    }

    /// Key the next `insert_with` call would assign.
    pub fn next_key(&self) -> R::Key {
        <R::Key as StoreKey>::allocate(self.records.iter().map(|record| record.key()))
    }

    /// Appends a record carrying its own key.
    pub fn insert(&mut self, record: R) -> StoreResult<R::Key> {
        let key = record.key().clone();
        if self.contains(&key) {
            warn!("event=record_insert module=store status=error reason=duplicate key={key}");
            return Err(StoreError::DuplicateKey(key.to_string()));
        }

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(record);
        self.records = Arc::new(next);
        debug!("event=record_insert module=store status=ok key={key}");
        Ok(key)
    }

    /// Allocates a fresh key and appends the record built for it.
    pub fn insert_with<F>(&mut self, build: F) -> StoreResult<R::Key>
    where
        F: FnOnce(R::Key) -> R,
    {
        let key = self.next_key();
        let record = build(key.clone());
        if record.key() != &key {
            return Err(StoreError::KeyMismatch {
                expected: key.to_string(),
                actual: record.key().to_string(),
            });
        }
        self.insert(record)
    }

    /// Replaces the record stored under `record.key()`.
    pub fn replace(&mut self, record: R) -> StoreResult<()> {
        let key = record.key().clone();
        self.update(&key, move |_| record)
    }

    /// Replaces the record under `key` with `apply(current)`.
    ///
    /// `apply` must keep the key unchanged.
    pub fn update<F>(&mut self, key: &R::Key, apply: F) -> StoreResult<()>
    where
        F: FnOnce(&R) -> R,
    {
        let Some(position) = self.position(key) else {
            debug!("event=record_update module=store status=noop reason=not_found key={key}");
            return Err(StoreError::NotFound(key.to_string()));
        };

        let updated = apply(&self.records[position]);
        if updated.key() != key {
            return Err(StoreError::KeyMismatch {
                expected: key.to_string(),
                actual: updated.key().to_string(),
            });
        }

        let mut next = self.records.to_vec();
        next[position] = updated;
        self.records = Arc::new(next);
        debug!("event=record_update module=store status=ok key={key}");
        Ok(())
    }

    /// Removes and returns the record under `key`.
    pub fn remove(&mut self, key: &R::Key) -> StoreResult<R> {
        let Some(position) = self.position(key) else {
            debug!("event=record_remove module=store status=noop reason=not_found key={key}");
            return Err(StoreError::NotFound(key.to_string()));
        };

        let mut next = self.records.to_vec();
        let removed = next.remove(position);
        self.records = Arc::new(next);
        debug!("event=record_remove module=store status=ok key={key}");
        Ok(removed)
    }

    fn position(&self, key: &R::Key) -> Option<usize> {
        self.records.iter().position(|record| record.key() == key)
    }
}
