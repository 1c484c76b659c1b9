//! Configuration for the pipeline.

use serde::{Deserialize, Serialize};

/// Tunables for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum rows in the rendered table.
    ///
    /// Truncation applies to the rendered text only; the structured
    /// record sequence is always returned in full. Default: 10.
    pub table_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { table_rows: 10 }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered-table row cap.
    pub fn with_table_rows(mut self, rows: usize) -> Self {
        self.table_rows = rows;
        self
    }
}
