//! In-memory artifact store for testing and development.

use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::ArtifactStore;
use crate::types::record::FlightRecord;

/// Holds the last persisted artifacts in memory.
///
/// Useful for tests and embedding hosts that forward results instead of
/// writing files. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryArtifactStore {
    records: RwLock<Option<Vec<FlightRecord>>>,
    table: RwLock<Option<String>>,
}

impl MemoryArtifactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last stored record sequence, if any run has persisted one.
    pub fn records(&self) -> Option<Vec<FlightRecord>> {
        self.records.read().unwrap().clone()
    }

    /// The last stored table text, if any run has persisted one.
    pub fn table(&self) -> Option<String> {
        self.table.read().unwrap().clone()
    }

    /// Clear both slots.
    pub fn clear(&self) {
        *self.records.write().unwrap() = None;
        *self.table.write().unwrap() = None;
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn store_records(&self, records: &[FlightRecord]) -> Result<()> {
        *self.records.write().unwrap() = Some(records.to_vec());
        Ok(())
    }

    fn store_table(&self, table: &str) -> Result<()> {
        *self.table.write().unwrap() = Some(table.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_clear() {
        let store = MemoryArtifactStore::new();
        assert!(store.records().is_none());

        store.store_table("| Delta |").unwrap();
        assert_eq!(store.table().as_deref(), Some("| Delta |"));

        store.clear();
        assert!(store.table().is_none());
    }
}
