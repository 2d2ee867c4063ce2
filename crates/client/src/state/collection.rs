//! Ordered, in-memory collection of one record type.

use gcms_domain::Record;

/// Records in insertion order.
///
/// Identifiers are not checked for uniqueness. `find` returns the first
/// match; `update` and `remove` act on every record carrying the id.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.find(id).is_some()
    }

    /// Append to the end.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Merge `update` into every record with `id`. Returns how many matched.
    pub fn update(&mut self, id: &T::Id, update: &T::Update) -> usize {
        let mut matched = 0;
        for record in self.records.iter_mut().filter(|record| record.id() == id) {
            record.apply_update(update);
            matched += 1;
        }
        matched
    }

    /// Drop every record with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &T::Id) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before - self.records.len()
    }
}
