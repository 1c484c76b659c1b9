//! The flight pipeline - the core of the library.
//!
//! A purely synchronous, side-effect-free transformation:
//! raw fragments → extract + normalize per fragment → filter/build →
//! dedup + rank → render. Every stage operates on in-memory data; the
//! only I/O anywhere nearby is the optional artifact write at the end.

pub mod build;
pub mod prompts;
pub mod rank;
pub mod render;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::fields::{FieldPolicy, GoogleFlightsFields};
use crate::traits::store::ArtifactStore;
use crate::types::{config::PipelineConfig, listing::RawListing, record::FlightRecord};

pub use build::build_record;
pub use prompts::{format_summarize_prompt, DEFAULT_QUOTE_ROWS, SUMMARIZE_PROMPT};
pub use rank::dedup_and_rank;
pub use render::render_table;

/// The normalization and ranking pipeline.
///
/// Holds the field-extraction policy and the run configuration. Each
/// [`process`](Self::process) call operates on its own batch with no
/// shared state, so one `Pipeline` can serve concurrent hosts without
/// locking.
#[derive(Debug, Clone)]
pub struct Pipeline<P: FieldPolicy = GoogleFlightsFields> {
    policy: P,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the Google Flights layout policy.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            policy: GoogleFlightsFields,
            config,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl<P: FieldPolicy> Pipeline<P> {
    /// Create a pipeline with a custom field policy.
    pub fn with_policy(policy: P, config: PipelineConfig) -> Self {
        Self { policy, config }
    }

    /// Run the full pipeline over one batch of raw listings.
    ///
    /// Never fails: unusable listings are filtered, an empty batch yields
    /// an empty (but successful) output, and a rendering failure degrades
    /// to an empty table with the structured records intact.
    pub fn process(&self, listings: &[RawListing]) -> PipelineOutput {
        info!("processing batch of {} raw listings", listings.len());

        let built: Vec<FlightRecord> = listings
            .iter()
            .filter_map(|listing| build::build_record(listing, &self.policy))
            .collect();
        let rejected = listings.len() - built.len();

        let records = rank::dedup_and_rank(built);
        info!(
            "{} priced flights after dedup ({} listings rejected)",
            records.len(),
            rejected
        );

        let shown = records.len().min(self.config.table_rows);
        let table = match render::render_table(&records[..shown]) {
            Ok(table) => table,
            Err(e) => {
                warn!("table rendering failed, returning structured records only: {e}");
                String::new()
            }
        };

        PipelineOutput { records, table }
    }
}

/// Terminal, immutable output of one pipeline run.
///
/// Serializes to the `{"flights": [...], "table": "..."}` envelope
/// structured consumers expect.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// Deduplicated records, sorted ascending by numeric price, in full.
    #[serde(rename = "flights")]
    pub records: Vec<FlightRecord>,

    /// Rendered table of the cheapest records (empty when none, or when
    /// rendering degraded).
    pub table: String,
}

impl PipelineOutput {
    /// Whether the run produced no records at all.
    ///
    /// This is the empty-but-succeeded state; a collaborator failure
    /// never reaches here.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `n` cheapest records, for caller-side presentation policies
    /// like the quoted top-3 table.
    pub fn cheapest(&self, n: usize) -> &[FlightRecord] {
        &self.records[..self.records.len().min(n)]
    }

    /// Write both artifacts through `store`, once, after ranking.
    ///
    /// Skipped entirely for an empty run; existing artifacts are
    /// overwritten, never appended.
    pub fn persist<S: ArtifactStore + ?Sized>(&self, store: &S) -> Result<()> {
        if self.is_empty() {
            info!("no priced flights; skipping artifact write");
            return Ok(());
        }

        store.store_records(&self.records)?;
        store.store_table(&self.table)?;
        info!("saved {} flights and the rendered table", self.records.len());
        Ok(())
    }
}
