// CSV-backed dataset repository
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::table::DataTable;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset file {path}: {detail}")]
    Parse { path: String, detail: String },
}

/// Reads the configured CSV file fresh on every load; the first row is the
/// header and cells stay untyped strings. There is no caching, so results
/// always reflect current file contents.
#[derive(Debug, Clone)]
pub struct CsvDatasetRepository {
    path: PathBuf,
}

impl CsvDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_table(&self) -> Result<DataTable, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| dataset_error(&self.path, e))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| dataset_error(&self.path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| dataset_error(&self.path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(DataTable::new(columns, rows))
    }
}

fn dataset_error(path: &Path, err: csv::Error) -> DatasetError {
    let path = path.display().to_string();
    let detail = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DatasetError::Io { path, source },
        _ => DatasetError::Parse { path, detail },
    }
}

#[async_trait]
impl DatasetRepository for CsvDatasetRepository {
    async fn load_table(&self) -> anyhow::Result<DataTable> {
        Ok(self.read_table()?)
    }
}
