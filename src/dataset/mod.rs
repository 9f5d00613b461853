//! Athlete dataset loading and lookup.
//!
//! The dataset is read from disk exactly once at startup and never mutated
//! afterwards; request handlers only borrow records out of it.

pub mod records;

use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

pub use records::{AthleteRecord, FinancialRecord, MedicalTest, TestStatus, Transaction, Trip};

/// Failures while reading or indexing the dataset file. All of these are
/// fatal at startup; none can occur once the dataset is loaded.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading dataset file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing dataset file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate athlete name {name:?} in dataset")]
    DuplicateName { name: String },
}

/// Immutable collection of athlete records indexed by lowercased name.
#[derive(Debug)]
pub struct Dataset {
    athletes: IndexMap<String, AthleteRecord>,
}

impl Dataset {
    /// Read and index the dataset file. Called once at process start.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<AthleteRecord> =
            serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        let dataset = Self::from_records(records)?;
        info!(path = %path.display(), athletes = dataset.len(), "loaded athlete dataset");
        Ok(dataset)
    }

    /// Index already-deserialized records, rejecting duplicate names.
    pub fn from_records(records: Vec<AthleteRecord>) -> Result<Self, DatasetError> {
        let mut athletes = IndexMap::with_capacity(records.len());
        for record in records {
            let key = record.name.to_lowercase();
            if athletes.contains_key(&key) {
                return Err(DatasetError::DuplicateName { name: record.name });
            }
            athletes.insert(key, record);
        }
        Ok(Self { athletes })
    }

    /// Case-insensitive lookup by athlete name.
    pub fn find(&self, name: &str) -> Option<&AthleteRecord> {
        self.athletes.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.athletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.athletes.is_empty()
    }
}
