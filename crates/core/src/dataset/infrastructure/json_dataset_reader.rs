use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::dataset::domain::dataset_reader::{DatasetError, DatasetReader};
use crate::shared::annotation::Annotation;
use crate::shared::constants::DATASET_EXTENSION;
use crate::shared::prediction::Prediction;

/// Row type the reader can index and filter.
trait DatasetRow: DeserializeOwned {
    fn index_mut(&mut self) -> &mut String;
    fn sample_name(&self) -> &str;
}

impl DatasetRow for Annotation {
    fn index_mut(&mut self) -> &mut String {
        &mut self.index
    }

    fn sample_name(&self) -> &str {
        &self.sample_name
    }
}

impl DatasetRow for Prediction {
    fn index_mut(&mut self) -> &mut String {
        &mut self.index
    }

    fn sample_name(&self) -> &str {
        &self.sample_name
    }
}

/// Reads row arrays from a `.json` file or from every `.json` file of a
/// directory, in file-name order.
pub struct JsonDatasetReader {
    data_path: PathBuf,
    predictions_path: PathBuf,
    sequences: Vec<String>,
}

impl JsonDatasetReader {
    pub fn new(data_path: impl Into<PathBuf>, predictions_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            predictions_path: predictions_path.into(),
            sequences: Vec::new(),
        }
    }

    /// Keeps only samples whose name starts with one of `sequences`.
    pub fn with_sequences(mut self, sequences: Vec<String>) -> Self {
        self.sequences = sequences;
        self
    }

    fn read<T: DatasetRow>(&self, path: &Path) -> Result<Vec<T>, DatasetError> {
        let mut rows: Vec<T> = Vec::new();
        for file in dataset_files(path)? {
            let text = fs::read_to_string(&file).map_err(|source| DatasetError::Io {
                path: file.clone(),
                source,
            })?;
            let parsed: Vec<T> = serde_json::from_str(&text).map_err(|source| {
                DatasetError::Parse {
                    path: file.clone(),
                    source,
                }
            })?;
            log::debug!("Read {} rows from {}", parsed.len(), file.display());
            rows.extend(parsed);
        }

        assign_indices(&mut rows)?;
        if !self.sequences.is_empty() {
            rows.retain(|row| {
                self.sequences
                    .iter()
                    .any(|prefix| row.sample_name().starts_with(prefix.as_str()))
            });
        }
        Ok(rows)
    }
}

impl DatasetReader for JsonDatasetReader {
    fn read_annotations(&self) -> Result<Vec<Annotation>, DatasetError> {
        let rows = self.read(&self.data_path)?;
        log::info!("Loaded {} annotations from {}", rows.len(), self.data_path.display());
        Ok(rows)
    }

    fn read_predictions(&self) -> Result<Vec<Prediction>, DatasetError> {
        let rows = self.read(&self.predictions_path)?;
        log::info!(
            "Loaded {} predictions from {}",
            rows.len(),
            self.predictions_path.display()
        );
        Ok(rows)
    }
}

fn dataset_files(path: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(io_error)? {
        let file = entry.map_err(io_error)?.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == DATASET_EXTENSION) {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

/// Fills missing indices with `<sample_name>/<n>` and rejects duplicate
/// explicit indices. Explicit indices are reserved first, so a derived
/// index skips any `n` an explicit row already took.
fn assign_indices<T: DatasetRow>(rows: &mut [T]) -> Result<(), DatasetError> {
    let mut taken: HashSet<String> = HashSet::new();
    for row in rows.iter_mut() {
        let index = row.index_mut();
        if !index.is_empty() && !taken.insert(index.clone()) {
            return Err(DatasetError::DuplicateIndex(index.clone()));
        }
    }

    let mut next: HashMap<String, usize> = HashMap::new();
    for row in rows.iter_mut() {
        if !row.index_mut().is_empty() {
            continue;
        }
        let n = next.entry(row.sample_name().to_string()).or_insert(0);
        let derived = loop {
            let candidate = format!("{}/{}", row.sample_name(), n);
            *n += 1;
            if taken.insert(candidate.clone()) {
                break candidate;
            }
        };
        *row.index_mut() = derived;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const ANNOTATIONS: &str = r#"[
        {"sample_name": "mv/seq-a/0001", "class_id": "human", "center": [10, 10], "size": [4, 4]},
        {"sample_name": "mv/seq-a/0001", "class_id": "vehicle", "center": [20, 20], "size": [8, 8], "occlusion": 0.5},
        {"index": "custom", "sample_name": "bit/seq-b/0001", "class_id": "human", "center": null, "size": [1, 1]}
    ]"#;

    // ── files ──

    #[test]
    fn test_reads_single_file_and_derives_indices() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "gt.json", ANNOTATIONS);
        let reader = JsonDatasetReader::new(&path, &path);

        let annotations = reader.read_annotations().unwrap();
        let indices: Vec<_> = annotations.iter().map(|a| a.index.as_str()).collect();
        assert_eq!(indices, vec!["mv/seq-a/0001/0", "mv/seq-a/0001/1", "custom"]);
        assert!(annotations[2].center[0].is_nan());
        assert_eq!(annotations[1].attributes["occlusion"], 0.5);
    }

    #[test]
    fn test_reads_directory_in_file_name_order() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "b.json",
            r#"[{"sample_name": "s2", "class_id": "human", "center": [1, 1], "size": [1, 1]}]"#,
        );
        write(
            dir.path(),
            "a.json",
            r#"[{"sample_name": "s1", "class_id": "human", "center": [1, 1], "size": [1, 1], "confidence": 0.3}]"#,
        );
        write(dir.path(), "notes.txt", "not a dataset");
        let reader = JsonDatasetReader::new(dir.path(), dir.path());

        let predictions = reader.read_predictions().unwrap();
        let samples: Vec<_> = predictions.iter().map(|p| p.sample_name.as_str()).collect();
        assert_eq!(samples, vec!["s1", "s2"]);
        assert_eq!(predictions[0].confidence, 0.3);
        assert_eq!(predictions[1].confidence, 1.0);
    }

    #[test]
    fn test_sequences_filter_by_prefix() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "gt.json", ANNOTATIONS);
        let reader =
            JsonDatasetReader::new(&path, &path).with_sequences(vec!["bit/".to_string()]);

        let annotations = reader.read_annotations().unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].index, "custom");
    }

    // ── errors ──

    #[test]
    fn test_duplicate_index() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "gt.json",
            r#"[
                {"index": "x", "sample_name": "s", "class_id": "c", "center": [1, 1], "size": [1, 1]},
                {"index": "x", "sample_name": "s", "class_id": "c", "center": [1, 1], "size": [1, 1]}
            ]"#,
        );
        let reader = JsonDatasetReader::new(&path, &path);
        assert!(matches!(
            reader.read_annotations(),
            Err(DatasetError::DuplicateIndex(index)) if index == "x"
        ));
    }

    #[test]
    fn test_derived_index_skips_explicit_one() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "gt.json",
            r#"[
                {"sample_name": "s", "class_id": "c", "center": [1, 1], "size": [1, 1]},
                {"sample_name": "s", "class_id": "c", "center": [1, 1], "size": [1, 1]},
                {"index": "s/1", "sample_name": "s", "class_id": "c", "center": [1, 1], "size": [1, 1]}
            ]"#,
        );
        let reader = JsonDatasetReader::new(&path, &path);

        let annotations = reader.read_annotations().unwrap();
        let indices: Vec<_> = annotations.iter().map(|a| a.index.as_str()).collect();
        assert_eq!(indices, vec!["s/0", "s/2", "s/1"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let reader = JsonDatasetReader::new(dir.path().join("absent.json"), dir.path());
        assert!(matches!(reader.read_annotations(), Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "gt.json", "{not json");
        let reader = JsonDatasetReader::new(&path, &path);
        assert!(matches!(reader.read_annotations(), Err(DatasetError::Parse { .. })));
    }
}
