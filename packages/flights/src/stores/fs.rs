//! Filesystem artifact store.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::traits::store::ArtifactStore;
use crate::types::record::FlightRecord;

/// Writes run artifacts as flat files in one directory.
///
/// Records go to `flight_data.json` as UTF-8 JSON with 4-space
/// indentation and non-ASCII text preserved unescaped; the table goes to
/// `flight_results.txt` as plain UTF-8. Each run overwrites both.
pub struct FsArtifactStore {
    dir: PathBuf,
    json_name: String,
    table_name: String,
}

impl FsArtifactStore {
    /// Create a store writing into `dir` with the default file names.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            json_name: "flight_data.json".to_string(),
            table_name: "flight_results.txt".to_string(),
        }
    }

    /// Override the JSON file name.
    pub fn with_json_name(mut self, name: impl Into<String>) -> Self {
        self.json_name = name.into();
        self
    }

    /// Override the table file name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// Path of the structured-records artifact.
    pub fn records_path(&self) -> PathBuf {
        self.dir.join(&self.json_name)
    }

    /// Path of the rendered-table artifact.
    pub fn table_path(&self) -> PathBuf {
        self.dir.join(&self.table_name)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(path, bytes))
            .map_err(|source| PipelineError::Artifact {
                path: path.display().to_string(),
                source,
            })?;
        debug!("wrote artifact {}", path.display());
        Ok(())
    }
}

impl ArtifactStore for FsArtifactStore {
    fn store_records(&self, records: &[FlightRecord]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        self.write(&self.records_path(), &buf)
    }

    fn store_table(&self, table: &str) -> Result<()> {
        self.write(&self.table_path(), table.as_bytes())
    }
}
