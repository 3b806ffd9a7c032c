use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::box_record::deserialize_number;
use crate::shared::numeric::same_value;

/// Confusion class of a match row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confusion {
    Tp,
    Fp,
    Fn,
}

impl Confusion {
    pub const ALL: &[Confusion] = &[Confusion::Tp, Confusion::Fp, Confusion::Fn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Confusion::Tp => "tp",
            Confusion::Fp => "fp",
            Confusion::Fn => "fn",
        }
    }

    /// Position in the canonical output order: tp, then fp, then fn.
    pub fn rank(&self) -> u8 {
        match self {
            Confusion::Tp => 0,
            Confusion::Fp => 1,
            Confusion::Fn => 2,
        }
    }
}

impl fmt::Display for Confusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confusion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tp" => Ok(Confusion::Tp),
            "fp" => Ok(Confusion::Fp),
            "fn" => Ok(Confusion::Fn),
            other => Err(format!("unknown confusion '{other}'")),
        }
    }
}

/// One row of a match table.
///
/// `tp` rows carry both indices, `fp` rows only a detection and `fn`
/// rows only an annotation. `match_value` is the IoU of the pair and
/// NaN on `fp`/`fn` rows; `confidence` is NaN on `fn` rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchEntry {
    pub sample_name: String,
    pub annotation_index: Option<String>,
    pub detection_index: Option<String>,
    pub confusion: Confusion,
    pub class_id: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub match_value: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub confidence: f64,
}

impl MatchEntry {
    pub fn true_positive(
        sample_name: &str,
        annotation_index: &str,
        detection_index: &str,
        class_id: &str,
        match_value: f64,
        confidence: f64,
    ) -> Self {
        Self {
            sample_name: sample_name.to_string(),
            annotation_index: Some(annotation_index.to_string()),
            detection_index: Some(detection_index.to_string()),
            confusion: Confusion::Tp,
            class_id: class_id.to_string(),
            match_value,
            confidence,
        }
    }

    pub fn false_positive(
        sample_name: &str,
        detection_index: &str,
        class_id: &str,
        confidence: f64,
    ) -> Self {
        Self {
            sample_name: sample_name.to_string(),
            annotation_index: None,
            detection_index: Some(detection_index.to_string()),
            confusion: Confusion::Fp,
            class_id: class_id.to_string(),
            match_value: f64::NAN,
            confidence,
        }
    }

    pub fn false_negative(sample_name: &str, annotation_index: &str, class_id: &str) -> Self {
        Self {
            sample_name: sample_name.to_string(),
            annotation_index: Some(annotation_index.to_string()),
            detection_index: None,
            confusion: Confusion::Fn,
            class_id: class_id.to_string(),
            match_value: f64::NAN,
            confidence: f64::NAN,
        }
    }

    /// The annotation side of a discarded match, as a missed object.
    pub fn demote_to_false_negative(&self) -> Self {
        Self {
            detection_index: None,
            confusion: Confusion::Fn,
            match_value: f64::NAN,
            confidence: f64::NAN,
            ..self.clone()
        }
    }

    /// The detection side of a discarded match, keeping its confidence.
    pub fn demote_to_false_positive(&self) -> Self {
        Self {
            annotation_index: None,
            confusion: Confusion::Fp,
            match_value: f64::NAN,
            ..self.clone()
        }
    }
}

impl PartialEq for MatchEntry {
    /// NaN fields compare equal to NaN, so unavailable values round-trip.
    fn eq(&self, other: &Self) -> bool {
        self.sample_name == other.sample_name
            && self.annotation_index == other.annotation_index
            && self.detection_index == other.detection_index
            && self.confusion == other.confusion
            && self.class_id == other.class_id
            && same_value(self.match_value, other.match_value)
            && same_value(self.confidence, other.confidence)
    }
}
