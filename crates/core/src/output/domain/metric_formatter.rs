use std::collections::HashMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::metrics::domain::metric_result::MetricResult;
use crate::metrics::infrastructure::metric_processing::{GlobalMetrics, PerSampleMetrics};
use crate::output::domain::metric_writer::WriteError;

const TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Builds the JSON documents of one evaluation run.
///
/// The timestamp is taken once, so all documents of a run agree.
pub struct MetricFormatter {
    version_entry: Value,
}

impl MetricFormatter {
    pub fn new(version: &str, tool: &str) -> Self {
        let time = chrono::Local::now().format(TIME_FORMAT).to_string();
        Self::with_time(version, tool, &time)
    }

    pub fn with_time(version: &str, tool: &str, time: &str) -> Self {
        let version_entry = serde_json::json!([{
            "__Version__": version,
            "__Tool__": tool,
            "__Time__": time,
        }]);
        Self { version_entry }
    }

    pub fn format_global_metrics(&self, metrics: &GlobalMetrics) -> Result<String, WriteError> {
        let mut document = self.document();
        for metric in metrics {
            document.insert(
                metric_key(metric.identifier),
                metric_entry(&metric.name, &metric.result)?,
            );
        }
        to_pretty_json(&document)
    }

    /// One document per sample, in order of first appearance.
    pub fn format_per_sample_metrics(
        &self,
        metrics: &PerSampleMetrics,
    ) -> Result<Vec<(String, String)>, WriteError> {
        let mut documents: Vec<(String, Map<String, Value>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for metric in metrics {
            for (sample_name, result) in &metric.result {
                let position = *positions.entry(sample_name.as_str()).or_insert_with(|| {
                    documents.push((sample_name.clone(), self.document()));
                    documents.len() - 1
                });
                documents[position].1.insert(
                    metric_key(metric.identifier),
                    metric_entry(&metric.name, result)?,
                );
            }
        }
        documents
            .into_iter()
            .map(|(name, document)| Ok((name, to_pretty_json(&document)?)))
            .collect()
    }

    fn document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert("__version_entry__".to_string(), self.version_entry.clone());
        document
    }
}

/// `__mtrc<id zero-padded to 5>__`
pub fn metric_key(identifier: u32) -> String {
    format!("__mtrc{identifier:05}__")
}

fn metric_entry(name: &str, result: &MetricResult) -> Result<Value, WriteError> {
    Ok(serde_json::json!({
        "name": name.replace(' ', "_"),
        "value": serde_json::to_value(result)?,
    }))
}

fn to_pretty_json(document: &Map<String, Value>) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::domain::metric_result::{MetricOutput, MetricValue};

    fn result(pairs: &[(&str, f64)]) -> MetricResult {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), MetricValue::Scalar(*v)))
            .collect()
    }

    fn formatter() -> MetricFormatter {
        MetricFormatter::with_time("v1.0", "mbt", "Wed, 14 Oct 2026 10:00:00 +0200")
    }

    // ── global ──

    #[test]
    fn test_global_document_layout() {
        let metrics = vec![
            MetricOutput {
                identifier: 1001,
                name: "F1-Score".to_string(),
                result: result(&[("total", 0.5), ("human", f64::NAN)]),
            },
            MetricOutput {
                identifier: 1029,
                name: "Number of True Positives".to_string(),
                result: result(&[("total", 4.0)]),
            },
        ];
        let text = formatter().format_global_metrics(&metrics).unwrap();
        let document: Value = serde_json::from_str(&text).unwrap();

        let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["__version_entry__", "__mtrc01001__", "__mtrc01029__"]);
        assert_eq!(document["__version_entry__"][0]["__Tool__"], "mbt");
        assert_eq!(document["__mtrc01029__"]["name"], "Number_of_True_Positives");
        assert_eq!(document["__mtrc01001__"]["value"]["total"], 0.5);
        assert!(document["__mtrc01001__"]["value"]["human"].is_null());
        assert!(text.contains("\n    \"__version_entry__\""));
    }

    #[test]
    fn test_time_format() {
        let formatter = MetricFormatter::new("v", "t");
        let time = formatter.version_entry[0]["__Time__"].as_str().unwrap().to_string();
        assert!(chrono::DateTime::parse_from_str(&time, TIME_FORMAT).is_ok());
    }

    // ── per sample ──

    #[test]
    fn test_per_sample_documents() {
        let metrics = vec![
            MetricOutput {
                identifier: 1031,
                name: "Number of False Negatives".to_string(),
                result: vec![
                    ("seq/0001".to_string(), result(&[("total", 2.0)])),
                    ("seq/0002".to_string(), result(&[("total", 1.0)])),
                ],
            },
            MetricOutput {
                identifier: 1000,
                name: "Mean Intersection Over Union".to_string(),
                result: vec![("seq/0001".to_string(), result(&[("total", 0.25)]))],
            },
        ];
        let documents = formatter().format_per_sample_metrics(&metrics).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].0, "seq/0001");
        let first: Value = serde_json::from_str(&documents[0].1).unwrap();
        assert_eq!(first["__mtrc01031__"]["value"]["total"], 2.0);
        assert_eq!(first["__mtrc01000__"]["value"]["total"], 0.25);
        let second: Value = serde_json::from_str(&documents[1].1).unwrap();
        assert!(second.get("__mtrc01000__").is_none());
    }

    #[test]
    fn test_per_sample_documents_keep_first_appearance_order() {
        let names: Vec<String> = (0..200).map(|n| format!("seq/{n:04}")).collect();
        let metrics = vec![
            MetricOutput {
                identifier: 1029,
                name: "Number of True Positives".to_string(),
                result: names
                    .iter()
                    .map(|name| (name.clone(), result(&[("total", 1.0)])))
                    .collect(),
            },
            MetricOutput {
                identifier: 1030,
                name: "Number of False Positives".to_string(),
                result: names
                    .iter()
                    .rev()
                    .map(|name| (name.clone(), result(&[("total", 2.0)])))
                    .collect(),
            },
        ];
        let documents = formatter().format_per_sample_metrics(&metrics).unwrap();

        let order: Vec<_> = documents.iter().map(|(name, _)| name.clone()).collect();
        assert_eq!(order, names);
        let last: Value = serde_json::from_str(&documents[199].1).unwrap();
        assert_eq!(last["__mtrc01029__"]["value"]["total"], 1.0);
        assert_eq!(last["__mtrc01030__"]["value"]["total"], 2.0);
    }

    #[test]
    fn test_metric_key_padding() {
        assert_eq!(metric_key(3), "__mtrc00003__");
        assert_eq!(metric_key(1040), "__mtrc01040__");
    }
}
