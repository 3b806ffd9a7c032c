pub mod sample_executor_factory;
pub mod threaded_sample_executor;
