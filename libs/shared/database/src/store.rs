use shared_models::error::StoreError;
use shared_models::{Appointment, Doctor, Patient};

/// A value that can live in a [`RecordStore`].
pub trait Record: Clone {
    /// Entity name used in error messages.
    const KIND: &'static str;

    fn record_id(&self) -> i64;
}

impl Record for Patient {
    const KIND: &'static str = "Patient";

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Record for Doctor {
    const KIND: &'static str = "Doctor";

    fn record_id(&self) -> i64 {
        self.id
    }
}

impl Record for Appointment {
    const KIND: &'static str = "Appointment";

    fn record_id(&self) -> i64 {
        self.id
    }
}

/// Ordered in-memory collection with linear lookup by id.
///
/// Records keep their insertion order. When several records share an id,
/// every id-based operation acts on the first of them.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    unique_ids: bool,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    /// A store that accepts duplicate ids.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            unique_ids: false,
        }
    }

    /// A store whose `insert` and `replace` refuse to create a second record with the same id.
    pub fn with_unique_ids() -> Self {
        Self {
            records: Vec::new(),
            unique_ids: true,
        }
    }

    pub fn enforces_unique_ids(&self) -> bool {
        self.unique_ids
    }

    /// Appends without any id check.
    pub fn add(&mut self, record: T) -> T {
        self.records.push(record.clone());
        record
    }

    /// Appends, honouring the store's id policy.
    pub fn insert(&mut self, record: T) -> Result<T, StoreError> {
        let id = record.record_id();
        if self.unique_ids && self.contains(id) {
            return Err(Self::conflict(id));
        }
        Ok(self.add(record))
    }

    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn get(&self, id: i64) -> Result<T, StoreError> {
        self.records
            .iter()
            .find(|record| record.record_id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    pub fn get_mut(&mut self, id: i64) -> Result<&mut T, StoreError> {
        self.records
            .iter_mut()
            .find(|record| record.record_id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    /// First record, in insertion order, matching `predicate`.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter_mut().find(|record| predicate(record))
    }

    pub fn contains(&self, id: i64) -> bool {
        self.position(id).is_some()
    }

    /// Swaps the whole record stored under `id` for `record`.
    pub fn replace(&mut self, id: i64, record: T) -> Result<T, StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;

        let new_id = record.record_id();
        if self.unique_ids && new_id != id && self.contains(new_id) {
            return Err(Self::conflict(new_id));
        }

        self.records[index] = record.clone();
        Ok(record)
    }

    pub fn remove(&mut self, id: i64) -> Result<T, StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.record_id() == id)
    }

    fn not_found(id: i64) -> StoreError {
        StoreError::NotFound { kind: T::KIND, id }
    }

    fn conflict(id: i64) -> StoreError {
        StoreError::Conflict { kind: T::KIND, id }
    }
}
