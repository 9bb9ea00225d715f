use crate::errors::RepositoryError;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// An entity kind the store can hold.
///
/// `build` turns a creation payload into a full record once the store has
/// assigned its id and timestamp. `merge` copies every field present in a
/// partial update onto the record; `id` and `created_at` are out of its reach.
pub trait Record: Clone + Send + Sync + 'static {
    type Create: Send + Sync;
    type Update: Send + Sync;

    fn build(id: i32, created_at: DateTime<Utc>, payload: &Self::Create) -> Self;

    fn merge(&mut self, patch: &Self::Update);
}

/// All records of one kind plus the counter that numbers them.
///
/// Ids start at 1 and only ever grow, so iterating the `BTreeMap` in key
/// order is the same as iterating in creation order. Deleted ids are never
/// handed out again; once the counter cannot advance, `create` fails instead.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: BTreeMap<i32, R>,
    next_id: i32,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, payload: &R::Create) -> Result<R, RepositoryError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RepositoryError::IdsExhausted)?;

        let record = R::build(id, Utc::now(), payload);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn list_all(&self) -> Vec<R> {
        self.records.values().cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<R> {
        self.records.get(&id).cloned()
    }

    pub fn update(&mut self, id: i32, patch: &R::Update) -> Option<R> {
        let record = self.records.get_mut(&id)?;
        record.merge(patch);
        Some(record.clone())
    }

    pub fn delete(&mut self, id: i32) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
