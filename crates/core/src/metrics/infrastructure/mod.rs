pub mod confusion_count;
pub mod confusion_rates;
pub mod mean_iou;
pub mod metric_factory;
pub mod metric_processing;
pub mod precision_recall_curve;
pub mod voc_map;
