use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::filtering::domain::filter::{
    ColumnPath, Filter, FilterError, FilterSpec, FilterableRecord,
};
use crate::shared::annotation::Annotation;
use crate::shared::constants::{CONFIDENCE_COLUMN, IOU_COLUMN};
use crate::shared::match_entry::MatchEntry;
use crate::shared::match_table::MatchTable;
use crate::shared::prediction::Prediction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableId {
    Annotation,
    Prediction,
    Matching,
}

impl TableId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableId::Annotation => "annotation",
            TableId::Prediction => "prediction",
            TableId::Matching => "matching",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableId {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annotation" => Ok(TableId::Annotation),
            "prediction" => Ok(TableId::Prediction),
            "matching" => Ok(TableId::Matching),
            other => Err(FilterError::UnknownTable(other.to_string())),
        }
    }
}

/// Filter definitions per table, keyed by filter name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub annotation_filter: Map<String, Value>,
    pub prediction_filter: Map<String, Value>,
    pub matching_filter: Map<String, Value>,
}

/// One applied filter: its name and the rows it keeps.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedFilter {
    pub info: String,
    pub mask: Vec<bool>,
}

/// Conditions the three input tables without touching the matching
/// itself. `true` in a mask keeps the row.
pub struct DatasetFilter<'a> {
    annotations: &'a [Annotation],
    predictions: &'a [Prediction],
    matching: &'a MatchTable,
    annotation_filters: Vec<AppliedFilter>,
    prediction_filters: Vec<AppliedFilter>,
    matching_filters: Vec<AppliedFilter>,
}

impl<'a> DatasetFilter<'a> {
    pub fn new(
        annotations: &'a [Annotation],
        predictions: &'a [Prediction],
        matching: &'a MatchTable,
    ) -> Self {
        Self {
            annotations,
            predictions,
            matching,
            annotation_filters: Vec::new(),
            prediction_filters: Vec::new(),
            matching_filters: Vec::new(),
        }
    }

    pub fn from_config(
        annotations: &'a [Annotation],
        predictions: &'a [Prediction],
        matching: &'a MatchTable,
        config: &FilterConfig,
    ) -> Result<Self, FilterError> {
        let mut filter = Self::new(annotations, predictions, matching);
        let sections = [
            (TableId::Annotation, &config.annotation_filter),
            (TableId::Prediction, &config.prediction_filter),
            (TableId::Matching, &config.matching_filter),
        ];
        for (table, specs) in sections {
            for (name, spec) in specs {
                let spec = FilterSpec::from_value(name, spec)?;
                filter.apply_relational_filter(&spec, table, name)?;
            }
        }
        log::debug!(
            "Loaded {} annotation, {} prediction and {} matching filters",
            filter.annotation_filters.len(),
            filter.prediction_filters.len(),
            filter.matching_filters.len()
        );
        Ok(filter)
    }

    /// Evaluates `spec` on the table named by `table` and stores the mask.
    ///
    /// An empty `info` becomes `filter_<n>`, `n` counting all filters
    /// applied so far. Several filters are stored as `<info>_<i>`.
    pub fn apply_relational_filter(
        &mut self,
        spec: &FilterSpec,
        table: TableId,
        info: &str,
    ) -> Result<(), FilterError> {
        let info = if info.is_empty() {
            format!("filter_{}", self.filter_count())
        } else {
            info.to_string()
        };
        match spec {
            FilterSpec::Single(filter) => {
                let mask = self.evaluate(filter, table)?;
                self.filters_mut(table).push(AppliedFilter { info, mask });
            }
            FilterSpec::Many(filters) => {
                for (i, filter) in filters.iter().enumerate() {
                    let mask = self.evaluate(filter, table)?;
                    self.filters_mut(table).push(AppliedFilter {
                        info: format!("{info}_{i}"),
                        mask,
                    });
                }
            }
        }
        Ok(())
    }

    /// Stores a precomputed mask for `table`.
    pub fn apply_mask(
        &mut self,
        table: TableId,
        mask: Vec<bool>,
        info: &str,
    ) -> Result<(), FilterError> {
        let expected = self.table_len(table);
        if mask.len() != expected {
            return Err(FilterError::MaskLength {
                expected,
                actual: mask.len(),
            });
        }
        self.filters_mut(table).push(AppliedFilter {
            info: info.to_string(),
            mask,
        });
        Ok(())
    }

    /// Keeps only annotations whose index is listed.
    pub fn apply_instance_filter(&mut self, instances: &[&str]) {
        let wanted: HashSet<&str> = instances.iter().copied().collect();
        let mask = self
            .annotations
            .iter()
            .map(|a| wanted.contains(a.index.as_str()))
            .collect();
        self.annotation_filters.push(AppliedFilter {
            info: "instance isin instance_list".to_string(),
            mask,
        });
    }

    pub fn annotation_filters(&self) -> &[AppliedFilter] {
        &self.annotation_filters
    }

    pub fn prediction_filters(&self) -> &[AppliedFilter] {
        &self.prediction_filters
    }

    pub fn matching_filters(&self) -> &[AppliedFilter] {
        &self.matching_filters
    }

    pub fn annotation_view(&self) -> Vec<&'a Annotation> {
        select(self.annotations, &self.annotation_filters)
    }

    pub fn prediction_view(&self) -> Vec<&'a Prediction> {
        select(self.predictions, &self.prediction_filters)
    }

    pub fn matching_view(&self) -> Vec<&'a MatchEntry> {
        select(self.matching.rows(), &self.matching_filters)
    }

    /// Matching rows that pass the matching filters and reference neither
    /// a filtered-out annotation nor a filtered-out prediction.
    pub fn view(&self) -> MatchTable {
        let dropped_annotations = rejected(self.annotations, &self.annotation_filters, |a| {
            a.index.as_str()
        });
        let dropped_predictions = rejected(self.predictions, &self.prediction_filters, |p| {
            p.index.as_str()
        });

        let rows: Vec<MatchEntry> = self
            .matching_view()
            .into_iter()
            .filter(|row| {
                row.annotation_index
                    .as_deref()
                    .map_or(true, |a| !dropped_annotations.contains(a))
            })
            .filter(|row| {
                row.detection_index
                    .as_deref()
                    .map_or(true, |d| !dropped_predictions.contains(d))
            })
            .cloned()
            .collect();
        log::debug!("Filtered matching: {} -> {} rows", self.matching.len(), rows.len());
        self.matching.with_rows(rows)
    }

    fn filter_count(&self) -> usize {
        self.annotation_filters.len() + self.prediction_filters.len() + self.matching_filters.len()
    }

    fn filters_mut(&mut self, table: TableId) -> &mut Vec<AppliedFilter> {
        match table {
            TableId::Annotation => &mut self.annotation_filters,
            TableId::Prediction => &mut self.prediction_filters,
            TableId::Matching => &mut self.matching_filters,
        }
    }

    fn table_len(&self, table: TableId) -> usize {
        match table {
            TableId::Annotation => self.annotations.len(),
            TableId::Prediction => self.predictions.len(),
            TableId::Matching => self.matching.len(),
        }
    }

    fn evaluate(&self, filter: &Filter, table: TableId) -> Result<Vec<bool>, FilterError> {
        let mut path: ColumnPath = filter.column.parse()?;
        match table {
            TableId::Annotation => evaluate_rows(self.annotations, filter, &path),
            TableId::Prediction => evaluate_rows(self.predictions, filter, &path),
            TableId::Matching => {
                // Match-table columns may carry configured output names.
                let columns = self.matching.columns();
                if path.name == columns.match_value {
                    path.name = IOU_COLUMN.to_string();
                } else if path.name == columns.confidence {
                    path.name = CONFIDENCE_COLUMN.to_string();
                }
                evaluate_rows(self.matching.rows(), filter, &path)
            }
        }
    }
}

fn evaluate_rows<R: FilterableRecord>(
    rows: &[R],
    filter: &Filter,
    path: &ColumnPath,
) -> Result<Vec<bool>, FilterError> {
    let values = rows
        .iter()
        .map(|row| row.resolve(path))
        .collect::<Result<Vec<_>, _>>()?;
    if !values.is_empty() && values.iter().all(Option::is_none) {
        return Err(FilterError::UnknownColumn(filter.column.clone()));
    }
    values
        .iter()
        .map(|value| filter.matches(value.as_ref()))
        .collect()
}

fn combined(len: usize, filters: &[AppliedFilter]) -> Vec<bool> {
    let mut keep = vec![true; len];
    for filter in filters {
        for (k, &m) in keep.iter_mut().zip(&filter.mask) {
            *k &= m;
        }
    }
    keep
}

fn select<'a, T>(rows: &'a [T], filters: &[AppliedFilter]) -> Vec<&'a T> {
    rows.iter()
        .zip(combined(rows.len(), filters))
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}

fn rejected<'a, T>(
    rows: &'a [T],
    filters: &[AppliedFilter],
    index: fn(&T) -> &str,
) -> HashSet<&'a str> {
    rows.iter()
        .zip(combined(rows.len(), filters))
        .filter_map(|(row, keep)| (!keep).then(|| index(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::domain::filter::FilterOperator;
    use crate::shared::match_table::MatchColumns;
    use crate::shared::test_fixtures::{self, item};
    use serde_json::json;

    fn annotations_with_object_ids() -> Vec<Annotation> {
        test_fixtures::annotations()
            .into_iter()
            .zip([1000, 1001, 1002, 1003, 2000, 2001])
            .map(|(a, oid)| a.with_attribute("object_id", json!(oid)))
            .collect()
    }

    fn config() -> FilterConfig {
        serde_json::from_value(json!({
            "annotation_filter": {
                "oid <= 1003": ["object_id", "<=", 1003],
                "cid == human": ["class_id", "==", "human"],
                "oid != 1004": ["object_id", "!=", 1004],
                "cid in list": ["class_id", "in", ["cat", "human", "dog"]],
                "cid not_in list": ["class_id", "not_in", ["vehicle", "bicycle"]]
            },
            "prediction_filter": {
                "confidence > 0.7": ["confidence", ">", 0.7],
                "confidence <= 0.9": {"column": "confidence", "operator": "<=", "value": 0.9}
            },
            "matching_filter": {
                "IoU >= 0.5": ["match_value", ">=", 0.5]
            }
        }))
        .unwrap()
    }

    fn pairs(table: &MatchTable) -> Vec<(Option<String>, Option<String>)> {
        table
            .rows()
            .iter()
            .map(|r| (r.annotation_index.clone(), r.detection_index.clone()))
            .collect()
    }

    // ── configuration ──

    #[test]
    fn test_from_config_stores_every_filter() {
        let annotations = annotations_with_object_ids();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let filter =
            DatasetFilter::from_config(&annotations, &predictions, &matching, &config()).unwrap();

        assert_eq!(filter.annotation_filters().len(), 5);
        assert_eq!(filter.prediction_filters().len(), 2);
        assert_eq!(filter.matching_filters().len(), 1);
        assert_eq!(filter.annotation_filters()[0].info, "oid <= 1003");
        assert_eq!(
            filter.annotation_filters()[0].mask,
            vec![true, true, true, true, false, false]
        );
    }

    #[test]
    fn test_view_combines_all_tables() {
        let annotations = annotations_with_object_ids();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let filter =
            DatasetFilter::from_config(&annotations, &predictions, &matching, &config()).unwrap();

        let view = filter.view();
        assert_eq!(
            pairs(&view),
            vec![
                (Some(item(0, 1000)), Some(item(0, 0))),
                (Some(item(0, 1002)), Some(item(0, 3))),
            ]
        );
        assert_eq!(view.columns(), matching.columns());
    }

    #[test]
    fn test_table_views() {
        let annotations = annotations_with_object_ids();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let filter =
            DatasetFilter::from_config(&annotations, &predictions, &matching, &config()).unwrap();

        let kept: Vec<_> = filter.annotation_view().iter().map(|a| a.index.clone()).collect();
        assert_eq!(kept, vec![item(0, 1000), item(0, 1001), item(0, 1002)]);
        let kept: Vec<_> = filter.prediction_view().iter().map(|p| p.index.clone()).collect();
        assert_eq!(kept, vec![item(0, 0), item(0, 2), item(0, 3), item(0, 4), item(0, 5)]);
        assert_eq!(filter.matching_view().len(), 3);
    }

    #[test]
    fn test_list_of_objects_expands_names() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let config: FilterConfig = serde_json::from_value(json!({
            "prediction_filter": {
                "band": [
                    {"column": "confidence", "operator": ">=", "value": 0.8},
                    {"column": "class_id", "operator": "==", "value": "human"}
                ]
            }
        }))
        .unwrap();
        let filter =
            DatasetFilter::from_config(&annotations, &predictions, &matching, &config).unwrap();

        let names: Vec<_> = filter.prediction_filters().iter().map(|f| f.info.as_str()).collect();
        assert_eq!(names, vec!["band_0", "band_1"]);
        let kept: Vec<_> = filter.prediction_view().iter().map(|p| p.index.clone()).collect();
        assert_eq!(kept, vec![item(0, 0), item(0, 2), item(0, 3), item(0, 5)]);
    }

    #[test]
    fn test_empty_config_keeps_everything() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let filter = DatasetFilter::from_config(
            &annotations,
            &predictions,
            &matching,
            &FilterConfig::default(),
        )
        .unwrap();
        assert_eq!(filter.view(), matching);
    }

    // ── programmatic filters ──

    #[test]
    fn test_default_info_counts_applied_filters() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let mut filter = DatasetFilter::new(&annotations, &predictions, &matching);
        let spec = FilterSpec::Single(Filter::new("class_id", FilterOperator::Eq, json!("human")));

        filter
            .apply_relational_filter(&spec, TableId::Annotation, "")
            .unwrap();
        filter
            .apply_relational_filter(&spec, TableId::Prediction, "")
            .unwrap();
        assert_eq!(filter.annotation_filters()[0].info, "filter_0");
        assert_eq!(filter.prediction_filters()[0].info, "filter_1");
    }

    #[test]
    fn test_instance_filter_drops_unlisted_annotations() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let mut filter = DatasetFilter::new(&annotations, &predictions, &matching);
        let keep = [item(0, 1000), item(0, 1002)];
        filter.apply_instance_filter(&[keep[0].as_str(), keep[1].as_str()]);

        // Rows of other annotations disappear; pure fp rows stay.
        let view = filter.view();
        assert_eq!(view.len(), 6);
        assert!(view.rows().iter().all(|r| r
            .annotation_index
            .as_ref()
            .map_or(true, |a| keep.contains(a))));
    }

    #[test]
    fn test_apply_mask() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let mut filter = DatasetFilter::new(&annotations, &predictions, &matching);
        let mut mask = vec![false; matching.len()];
        mask[2] = true;
        filter.apply_mask(TableId::Matching, mask, "third row").unwrap();

        assert_eq!(
            pairs(&filter.view()),
            vec![(Some(item(0, 1000)), Some(item(0, 0)))]
        );
        assert_eq!(
            filter.apply_mask(TableId::Prediction, vec![true], "short"),
            Err(FilterError::MaskLength {
                expected: 6,
                actual: 1
            })
        );
    }

    #[test]
    fn test_renamed_match_columns_are_filterable() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = MatchTable::new(
            MatchColumns {
                match_value: "iou".into(),
                confidence: "score".into(),
            },
            test_fixtures::metric_matching().into_rows(),
        );
        let mut filter = DatasetFilter::new(&annotations, &predictions, &matching);
        let spec = FilterSpec::Single(Filter::new("iou", FilterOperator::Ge, json!(0.5)));
        filter
            .apply_relational_filter(&spec, TableId::Matching, "iou")
            .unwrap();
        assert_eq!(filter.view().len(), 3);
    }

    // ── errors ──

    #[test]
    fn test_unknown_table_identifier() {
        assert_eq!(
            "ground_truth".parse::<TableId>(),
            Err(FilterError::UnknownTable("ground_truth".into()))
        );
    }

    #[test]
    fn test_unknown_column() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let mut filter = DatasetFilter::new(&annotations, &predictions, &matching);
        let spec = FilterSpec::Single(Filter::new("occlusion", FilterOperator::Lt, json!(0.5)));
        assert_eq!(
            filter.apply_relational_filter(&spec, TableId::Annotation, "occ"),
            Err(FilterError::UnknownColumn("occlusion".into()))
        );
    }

    #[test]
    fn test_unknown_operator_in_config() {
        let annotations = test_fixtures::annotations();
        let predictions = test_fixtures::predictions();
        let matching = test_fixtures::metric_matching();
        let config: FilterConfig = serde_json::from_value(json!({
            "annotation_filter": {"bad": ["class_id", "=~", "human"]}
        }))
        .unwrap();
        assert!(matches!(
            DatasetFilter::from_config(&annotations, &predictions, &matching, &config),
            Err(FilterError::UnknownOperator(op)) if op == "=~"
        ));
    }
}
