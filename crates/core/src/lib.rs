pub mod config;
pub mod correlation;
pub mod dataset;
pub mod filtering;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod shared;
