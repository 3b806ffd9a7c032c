use crate::shared::match_entry::MatchEntry;

/// Per-sample unit of work: sample position in, that sample's rows out.
pub type SampleJob<'a> = dyn Fn(usize) -> Vec<MatchEntry> + Sync + 'a;

/// Abstracts how independent per-sample jobs are scheduled.
///
/// This is a port. Implementations must return one result per sample,
/// in sample order, whatever order the jobs actually ran in.
pub trait SampleExecutor: Send + Sync {
    fn run(&self, num_samples: usize, job: &SampleJob<'_>) -> Vec<Vec<MatchEntry>>;
}

/// Runs every job in place on the calling thread.
pub struct SequentialSampleExecutor;

impl SampleExecutor for SequentialSampleExecutor {
    fn run(&self, num_samples: usize, job: &SampleJob<'_>) -> Vec<Vec<MatchEntry>> {
        (0..num_samples).map(job).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_preserves_sample_order() {
        let job = |i: usize| vec![MatchEntry::false_negative("s", &format!("s/{i}"), "human")];
        let results = SequentialSampleExecutor.run(3, &job);
        let indices: Vec<_> = results
            .iter()
            .map(|rows| rows[0].annotation_index.clone().unwrap_or_default())
            .collect();
        assert_eq!(indices, vec!["s/0", "s/1", "s/2"]);
    }

    #[test]
    fn test_sequential_zero_samples() {
        let job = |_: usize| -> Vec<MatchEntry> { Vec::new() };
        assert!(SequentialSampleExecutor.run(0, &job).is_empty());
    }
}
