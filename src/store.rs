//! Read-only record store and the search predicate.

use crate::domain::UserRecord;

/// Demo record set loaded by [`RecordStore::seeded`].
const SEED: &[(&str, &str)] = &[
    ("jim@gmail.com", "221122"),
    ("jam@gmail.com", "830347"),
    ("john@gmail.com", "221122"),
    ("jams@gmail.com", "349425"),
    ("jams@gmail.com", "141424"),
    ("jill@gmail.com", "822287"),
    ("jill@gmail.com", "822286"),
    ("jane@x.com", "654321"),
];

/// Static, in-memory list of user records. No writes occur after construction.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// The fixed record set the server starts with.
    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|(email, number)| UserRecord::new(*email, *number))
                .collect(),
        )
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan in insertion order.
    ///
    /// Emails compare case-insensitively. The number, when given, must equal
    /// the stored number exactly.
    pub fn filter(&self, email: &str, number: Option<&str>) -> Vec<UserRecord> {
        let email = email.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.email.to_lowercase() == email)
            .filter(|record| number.map_or(true, |number| record.number == number))
            .cloned()
            .collect()
    }
}
