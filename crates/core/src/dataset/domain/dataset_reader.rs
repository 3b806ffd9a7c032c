use std::path::PathBuf;

use thiserror::Error;

use crate::shared::annotation::Annotation;
use crate::shared::prediction::Prediction;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate row index '{0}'")]
    DuplicateIndex(String),
}

/// Source of the annotation and prediction tables.
pub trait DatasetReader {
    fn read_annotations(&self) -> Result<Vec<Annotation>, DatasetError>;

    fn read_predictions(&self) -> Result<Vec<Prediction>, DatasetError>;
}
