use crate::pipeline::sample_executor::{SampleExecutor, SequentialSampleExecutor};

use super::threaded_sample_executor::ThreadedSampleExecutor;

/// Sequential for `num_threads <= 1`, threaded otherwise.
pub fn create_sample_executor(num_threads: usize) -> Box<dyn SampleExecutor> {
    if num_threads <= 1 {
        log::info!("Using sequential sample executor");
        Box::new(SequentialSampleExecutor)
    } else {
        log::info!("Using threaded sample executor (threads={})", num_threads);
        Box::new(ThreadedSampleExecutor::new(num_threads))
    }
}
