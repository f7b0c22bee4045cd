use crate::models::MovieRecord;

/// Ordered set of resolved records the user is currently working with.
#[derive(Debug, Clone, Default)]
pub struct MovieCollection {
    records: Vec<MovieRecord>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Replace the whole collection, e.g. after a new search.
    pub fn replace(&mut self, records: Vec<MovieRecord>) {
        self.records = records;
    }

    /// Remove every record with the given ID.
    ///
    /// Returns how many records were removed; an unknown ID is a no-op.
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        before - self.records.len()
    }
}

impl From<Vec<MovieRecord>> for MovieCollection {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }
}
