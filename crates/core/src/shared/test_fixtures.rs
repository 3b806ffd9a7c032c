//! Tables shared by the correlation, reduction and metric tests.

use crate::shared::annotation::Annotation;
use crate::shared::match_entry::MatchEntry;
use crate::shared::match_table::MatchTable;
use crate::shared::prediction::Prediction;

pub fn sample(n: u32) -> String {
    format!("mv/arb-camera001-0076-cbfa-{n:04}")
}

pub fn item(n: u32, id: u32) -> String {
    format!("{}/{id}", sample(n))
}

fn annotation(n: u32, id: u32, center: [f64; 2], size: [f64; 2], class_id: &str) -> Annotation {
    Annotation::new(item(n, id), sample(n), class_id, center, size)
}

fn prediction(
    id: u32,
    center: [f64; 2],
    size: [f64; 2],
    class_id: &str,
    confidence: f64,
) -> Prediction {
    Prediction::new(item(0, id), sample(0), class_id, center, size, confidence)
}

/// Five annotations in sample 0 and one in sample 1.
pub fn annotations() -> Vec<Annotation> {
    vec![
        annotation(0, 1000, [1000.0, 1000.0], [100.0, 100.0], "human"),
        annotation(0, 1001, [500.0, 500.0], [50.0, 50.0], "human"),
        annotation(0, 1002, [5.0, 5.0], [10.0, 10.0], "human"),
        annotation(0, 1003, [1000.0, 1000.0], [10.0, 10.0], "vehicle"),
        annotation(0, 1004, [5.0, 5.0], [10.0, 10.0], "vehicle"),
        annotation(1, 2000, [1000.0, 1000.0], [100.0, 100.0], "human"),
    ]
}

/// Six predictions, all in sample 0.
pub fn predictions() -> Vec<Prediction> {
    vec![
        prediction(0, [1000.0, 1000.0], [100.0, 100.0], "human", 0.8),
        prediction(1, [990.0, 990.0], [100.0, 100.0], "human", 0.7),
        prediction(2, [980.0, 980.0], [100.0, 100.0], "human", 0.9),
        prediction(3, [5.0, 5.0], [10.0, 10.0], "human", 0.8),
        prediction(4, [1000.0, 1000.0], [10.0, 10.0], "vehicle", 0.8),
        prediction(5, [1500.0, 1500.0], [10.0, 10.0], "human", 0.8),
    ]
}

/// One annotation sticking out of the right frame edge and a prediction
/// covering its visible part.
pub fn clipped_boxes() -> (Vec<Annotation>, Vec<Prediction>) {
    (
        vec![annotation(0, 1000, [1920.0, 100.0], [400.0, 200.0], "human")],
        vec![prediction(0, [1820.0, 100.0], [200.0, 200.0], "human", 0.8)],
    )
}

/// Reduced matching of [`annotations`] and [`predictions`].
pub fn metric_matching() -> MatchTable {
    MatchTable::from_rows(vec![
        MatchEntry::false_positive(&sample(0), &item(0, 4), "vehicle", 0.8),
        MatchEntry::false_negative(&sample(0), &item(0, 1004), "vehicle"),
        MatchEntry::true_positive(&sample(0), &item(0, 1000), &item(0, 0), "human", 1.0, 0.8),
        MatchEntry::true_positive(&sample(0), &item(0, 1000), &item(0, 1), "human", 0.68, 0.7),
        MatchEntry::true_positive(&sample(0), &item(0, 1000), &item(0, 2), "human", 0.47, 0.9),
        MatchEntry::true_positive(&sample(0), &item(0, 1002), &item(0, 3), "human", 1.0, 0.8),
        MatchEntry::false_positive(&sample(0), &item(0, 3), "human", 0.8),
        MatchEntry::false_negative(&sample(0), &item(0, 1001), "human"),
        MatchEntry::false_negative(&sample(1), &item(1, 2000), "human"),
    ])
}

fn tp(annotation: u32, detection: u32, match_value: f64, confidence: f64) -> MatchEntry {
    MatchEntry::true_positive(
        &sample(1),
        &item(1, annotation),
        &item(1, detection),
        "human",
        match_value,
        confidence,
    )
}

pub fn single_tp() -> MatchTable {
    MatchTable::from_rows(vec![tp(1000, 10, 0.5, 0.5)])
}

pub fn single_fp_fn() -> MatchTable {
    MatchTable::from_rows(vec![
        MatchEntry::false_positive(&sample(1), &item(1, 10), "human", 0.5),
        MatchEntry::false_negative(&sample(2), &item(1, 2000), "vehicle"),
    ])
}

pub fn tp_with_alternative_matches() -> MatchTable {
    MatchTable::from_rows(vec![
        tp(1000, 10, 1.0, 1.0),
        tp(1000, 11, 0.3, 0.3),
        tp(1000, 12, 0.5, 0.5),
        tp(1001, 11, 1.0, 1.0),
        tp(1002, 10, 0.5, 0.5),
    ])
}

pub fn three_tp_one_annotation() -> MatchTable {
    MatchTable::from_rows(vec![
        tp(1000, 10, 0.7, 0.8),
        tp(1000, 11, 0.9, 0.9),
        tp(1000, 12, 0.8, 0.7),
    ])
}

pub fn three_tp_one_detection() -> MatchTable {
    MatchTable::from_rows(vec![
        tp(1001, 10, 0.7, 0.8),
        tp(1002, 10, 0.9, 0.8),
        tp(1003, 10, 0.8, 0.8),
    ])
}

/// Duplicates on the annotation side in sample 1 and on the detection
/// side in sample 2.
pub fn tp_multiple_occurrences() -> MatchTable {
    let in_sample_2 = |annotation: u32, match_value: f64| MatchEntry {
        sample_name: sample(2),
        ..tp(annotation, 13, match_value, 0.9)
    };
    MatchTable::from_rows(vec![
        tp(1001, 10, 0.9, 0.9),
        tp(1001, 11, 0.9, 0.8),
        tp(1001, 12, 0.9, 0.7),
        in_sample_2(1002, 0.8),
        in_sample_2(1003, 0.7),
        in_sample_2(1004, 0.6),
    ])
}

/// Several samples, one of them needing tp→fp/fn cascades at IoU 0.5.
pub fn mixed_matching() -> MatchTable {
    let row = |n: u32, a: u32, d: u32, match_value: f64, confidence: f64| {
        MatchEntry::true_positive(&sample(n), &item(n, a), &item(n, d), "human", match_value, confidence)
    };
    MatchTable::from_rows(vec![
        row(1, 1000, 10, 0.8, 0.9),
        MatchEntry::false_positive(&sample(2), &item(2, 20), "human", 0.8),
        MatchEntry::false_negative(&sample(3), &item(3, 3000), "vehicle"),
        row(4, 4000, 40, 0.4, 0.4),
        row(4, 4001, 41, 1.0, 1.0),
        row(4, 4001, 42, 0.3, 0.3),
        row(4, 4002, 41, 0.2, 0.2),
    ])
}
