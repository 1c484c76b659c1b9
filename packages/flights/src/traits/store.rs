//! Artifact store trait - where a run's results are persisted.

use crate::error::Result;
use crate::types::record::FlightRecord;

/// A sink for the two per-run artifacts.
///
/// Both writes happen once per successful run with non-empty results, and
/// replace whatever a previous run left: no append, no versioning.
pub trait ArtifactStore: Send + Sync {
    /// Persist the full structured record sequence.
    fn store_records(&self, records: &[FlightRecord]) -> Result<()>;

    /// Persist the rendered table text.
    fn store_table(&self, table: &str) -> Result<()>;
}
