use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::annotation::Annotation;
use crate::shared::match_entry::MatchEntry;
use crate::shared::prediction::Prediction;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("table identifier has to be one of 'annotation', 'prediction', 'matching', got '{0}'")]
    UnknownTable(String),
    #[error("filter operator '{0}' is not defined")]
    UnknownOperator(String),
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("invalid column path '{0}'")]
    InvalidColumnPath(String),
    #[error("element {index} of column '{column}' is out of range")]
    IndexOutOfRange { column: String, index: usize },
    #[error("operator '{0}' needs a list value")]
    ExpectedList(FilterOperator),
    #[error("filter '{name}' is malformed: {reason}")]
    MalformedSpec { name: String, reason: String },
    #[error("mask has {actual} entries but the table has {expected} rows")]
    MaskLength { expected: usize, actual: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    In,
    NotIn,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "==",
            FilterOperator::Ne => "!=",
            FilterOperator::Lt => "<",
            FilterOperator::Gt => ">",
            FilterOperator::Le => "<=",
            FilterOperator::Ge => ">=",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(FilterOperator::Eq),
            "!=" => Ok(FilterOperator::Ne),
            "<" => Ok(FilterOperator::Lt),
            ">" => Ok(FilterOperator::Gt),
            "<=" => Ok(FilterOperator::Le),
            ">=" => Ok(FilterOperator::Ge),
            "in" => Ok(FilterOperator::In),
            "not_in" => Ok(FilterOperator::NotIn),
            other => Err(FilterError::UnknownOperator(other.to_string())),
        }
    }
}

/// `column operator value` predicate over one row.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: String,
    pub operator: FilterOperator,
    pub value: Value,
}

/// Column name plus element indices, e.g. `size[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPath {
    pub name: String,
    pub indices: Vec<usize>,
}

impl FromStr for ColumnPath {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidColumnPath(s.to_string());
        let mut parts = s.split('[');
        let name = parts.next().filter(|n| !n.is_empty()).ok_or_else(invalid)?;
        let indices = parts
            .map(|part| {
                part.strip_suffix(']')
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .ok_or_else(invalid)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_string(),
            indices,
        })
    }
}

impl Filter {
    pub fn new(column: impl Into<String>, operator: FilterOperator, value: Value) -> Self {
        Self {
            column: column.into(),
            operator,
            value,
        }
    }

    /// Evaluates the filter against an already resolved row value.
    ///
    /// `None` and JSON `null` (a NaN number) only satisfy `!=` and `not_in`.
    pub fn matches(&self, row_value: Option<&Value>) -> Result<bool, FilterError> {
        let row_value = row_value.filter(|v| !v.is_null());
        let Some(row_value) = row_value else {
            return match self.operator {
                FilterOperator::Ne => Ok(true),
                FilterOperator::NotIn => self.list().map(|_| true),
                FilterOperator::In => self.list().map(|_| false),
                _ => Ok(false),
            };
        };

        Ok(match self.operator {
            FilterOperator::Eq => json_eq(row_value, &self.value),
            FilterOperator::Ne => !json_eq(row_value, &self.value),
            FilterOperator::Lt => json_cmp(row_value, &self.value) == Some(Ordering::Less),
            FilterOperator::Gt => json_cmp(row_value, &self.value) == Some(Ordering::Greater),
            FilterOperator::Le => matches!(
                json_cmp(row_value, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOperator::Ge => matches!(
                json_cmp(row_value, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOperator::In => self.list()?.iter().any(|item| json_eq(row_value, item)),
            FilterOperator::NotIn => !self.list()?.iter().any(|item| json_eq(row_value, item)),
        })
    }

    fn list(&self) -> Result<&Vec<Value>, FilterError> {
        self.value
            .as_array()
            .ok_or(FilterError::ExpectedList(self.operator))
    }

    /// Parses `{"column", "operator", "value"}` or `[column, operator, value]`.
    pub fn from_value(name: &str, spec: &Value) -> Result<Self, FilterError> {
        let malformed = |reason: &str| FilterError::MalformedSpec {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        let (column, operator, value) = match spec {
            Value::Object(fields) => (
                fields.get("column"),
                fields.get("operator"),
                fields.get("value"),
            ),
            Value::Array(items) if items.len() == 3 => (items.first(), items.get(1), items.get(2)),
            Value::Array(_) => return Err(malformed("a list filter needs exactly 3 entries")),
            _ => return Err(malformed("expected an object or a list")),
        };
        let column = column
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("'column' has to be a string"))?;
        let operator = operator
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("'operator' has to be a string"))?
            .parse()?;
        let value = value.cloned().ok_or_else(|| malformed("'value' is missing"))?;
        Ok(Self::new(column, operator, value))
    }
}

/// Filter specification as written in a configuration file.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterSpec {
    Single(Filter),
    /// A list of filter objects, applied as `<info>_<i>`.
    Many(Vec<Filter>),
}

impl FilterSpec {
    pub fn from_value(name: &str, spec: &Value) -> Result<Self, FilterError> {
        match spec {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => items
                .iter()
                .enumerate()
                .map(|(i, item)| Filter::from_value(&format!("{name}_{i}"), item))
                .collect::<Result<Vec<_>, _>>()
                .map(FilterSpec::Many),
            other => Filter::from_value(name, other).map(FilterSpec::Single),
        }
    }
}

fn json_eq(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn json_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(_), Value::Number(_)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Row view the filters evaluate against.
pub trait FilterableRecord {
    /// Value of a top-level column, `None` when the row lacks it.
    fn field(&self, column: &str) -> Option<Value>;

    /// Value at `path`, descending into array elements.
    fn resolve(&self, path: &ColumnPath) -> Result<Option<Value>, FilterError> {
        let Some(mut value) = self.field(&path.name) else {
            return Ok(None);
        };
        for &index in &path.indices {
            value = match value {
                Value::Array(mut items) if index < items.len() => items.swap_remove(index),
                Value::Null => return Ok(Some(Value::Null)),
                _ => {
                    return Err(FilterError::IndexOutOfRange {
                        column: path.name.clone(),
                        index,
                    })
                }
            };
        }
        Ok(Some(value))
    }
}

fn pair(p: [f64; 2]) -> Value {
    Value::from(vec![Value::from(p[0]), Value::from(p[1])])
}

fn attribute(attributes: &Map<String, Value>, column: &str) -> Option<Value> {
    attributes.get(column).cloned()
}

impl FilterableRecord for Annotation {
    fn field(&self, column: &str) -> Option<Value> {
        match column {
            "index" => Some(Value::from(self.index.clone())),
            "sample_name" => Some(Value::from(self.sample_name.clone())),
            "class_id" => Some(Value::from(self.class_id.clone())),
            "center" => Some(pair(self.center)),
            "size" => Some(pair(self.size)),
            other => attribute(&self.attributes, other),
        }
    }
}

impl FilterableRecord for Prediction {
    fn field(&self, column: &str) -> Option<Value> {
        match column {
            "index" => Some(Value::from(self.index.clone())),
            "sample_name" => Some(Value::from(self.sample_name.clone())),
            "class_id" => Some(Value::from(self.class_id.clone())),
            "center" => Some(pair(self.center)),
            "size" => Some(pair(self.size)),
            "confidence" => Some(Value::from(self.confidence)),
            other => attribute(&self.attributes, other),
        }
    }
}

impl FilterableRecord for MatchEntry {
    fn field(&self, column: &str) -> Option<Value> {
        let optional = |v: &Option<String>| v.clone().map_or(Value::Null, Value::from);
        match column {
            "sample_name" => Some(Value::from(self.sample_name.clone())),
            "annotation_index" => Some(optional(&self.annotation_index)),
            "detection_index" => Some(optional(&self.detection_index)),
            "confusion" => Some(Value::from(self.confusion.as_str())),
            "class_id" => Some(Value::from(self.class_id.clone())),
            "match_value" => Some(Value::from(self.match_value)),
            "confidence" => Some(Value::from(self.confidence)),
            _ => None,
        }
    }
}
