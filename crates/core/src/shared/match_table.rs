use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::shared::constants::{CONFIDENCE_COLUMN, IOU_COLUMN};
use crate::shared::match_entry::{Confusion, MatchEntry};
use crate::shared::numeric::cmp_asc_none_last;

/// Output names of the two numeric match-table columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchColumns {
    pub match_value: String,
    pub confidence: String,
}

impl Default for MatchColumns {
    fn default() -> Self {
        Self {
            match_value: IOU_COLUMN.to_string(),
            confidence: CONFIDENCE_COLUMN.to_string(),
        }
    }
}

/// Long-format table of `tp`/`fp`/`fn` rows.
///
/// Always has the same seven columns, whether or not it holds rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchTable {
    columns: MatchColumns,
    rows: Vec<MatchEntry>,
}

impl MatchTable {
    pub fn new(columns: MatchColumns, rows: Vec<MatchEntry>) -> Self {
        Self { columns, rows }
    }

    pub fn from_rows(rows: Vec<MatchEntry>) -> Self {
        Self::new(MatchColumns::default(), rows)
    }

    pub fn empty(columns: MatchColumns) -> Self {
        Self::new(columns, Vec::new())
    }

    /// New table with the same column names and different rows.
    pub fn with_rows(&self, rows: Vec<MatchEntry>) -> Self {
        Self::new(self.columns.clone(), rows)
    }

    pub fn columns(&self) -> &MatchColumns {
        &self.columns
    }

    pub fn column_names(&self) -> [&str; 7] {
        [
            "sample_name",
            "annotation_index",
            "detection_index",
            "confusion",
            "class_id",
            self.columns.match_value.as_str(),
            self.columns.confidence.as_str(),
        ]
    }

    pub fn rows(&self) -> &[MatchEntry] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<MatchEntry> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count(&self, confusion: Confusion) -> usize {
        self.rows.iter().filter(|r| r.confusion == confusion).count()
    }

    /// Distinct sample names in ascending order.
    pub fn sample_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.rows.iter().map(|r| r.sample_name.as_str()).collect();
        names.into_iter().collect()
    }

    /// Rows grouped by sample, samples ascending, rows in table order.
    pub fn group_by_sample(&self) -> BTreeMap<&str, Vec<&MatchEntry>> {
        let mut groups: BTreeMap<&str, Vec<&MatchEntry>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.sample_name.as_str()).or_default().push(row);
        }
        groups
    }

    /// Column-name keyed records, NaN written as null.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows.iter().map(|row| self.record(row)).collect()
    }

    fn record(&self, row: &MatchEntry) -> Map<String, Value> {
        let [sample, annotation, detection, confusion, class_id, match_value, confidence] =
            self.column_names();
        let mut record = Map::new();
        record.insert(sample.into(), Value::from(row.sample_name.clone()));
        record.insert(annotation.into(), optional_string(&row.annotation_index));
        record.insert(detection.into(), optional_string(&row.detection_index));
        record.insert(confusion.into(), Value::from(row.confusion.as_str()));
        record.insert(class_id.into(), Value::from(row.class_id.clone()));
        record.insert(match_value.into(), Value::from(row.match_value));
        record.insert(confidence.into(), Value::from(row.confidence));
        record
    }
}

fn optional_string(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::from)
}

/// Stable sort by `(class_id, confusion tp→fp→fn, annotation_index,
/// detection_index)`, missing indices last.
pub fn sort_canonical(rows: &mut [MatchEntry]) {
    rows.sort_by(|a, b| {
        a.class_id
            .cmp(&b.class_id)
            .then(a.confusion.rank().cmp(&b.confusion.rank()))
            .then_with(|| {
                cmp_asc_none_last(a.annotation_index.as_deref(), b.annotation_index.as_deref())
            })
            .then_with(|| {
                cmp_asc_none_last(a.detection_index.as_deref(), b.detection_index.as_deref())
            })
    });
}
