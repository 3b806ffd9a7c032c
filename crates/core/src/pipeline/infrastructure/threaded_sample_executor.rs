use std::any::Any;
use std::thread::ScopedJoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::pipeline::sample_executor::{SampleExecutor, SampleJob};
use crate::shared::match_entry::MatchEntry;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

type SampleResult = (usize, Vec<MatchEntry>);

/// Spreads sample jobs over a fixed pool of scoped worker threads.
///
/// Layout: `feeder → [worker × n] → main [reorder]`
///
/// Both queues are bounded. Results arrive in completion order and are
/// slotted back by sample index, so the output matches the sequential
/// executor exactly.
pub struct ThreadedSampleExecutor {
    num_threads: usize,
    channel_capacity: usize,
}

impl ThreadedSampleExecutor {
    pub fn new(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }
}

impl SampleExecutor for ThreadedSampleExecutor {
    fn run(&self, num_samples: usize, job: &SampleJob<'_>) -> Vec<Vec<MatchEntry>> {
        if num_samples == 0 {
            return Vec::new();
        }
        let workers = self.num_threads.min(num_samples);
        let cap = self.channel_capacity;
        log::debug!("Running {num_samples} samples on {workers} threads");

        std::thread::scope(|scope| {
            let (work_tx, work_rx) = crossbeam_channel::bounded::<usize>(cap);
            let (result_tx, result_rx) = crossbeam_channel::bounded::<SampleResult>(cap);

            let feeder = scope.spawn(move || feed(num_samples, work_tx));
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let work_rx = work_rx.clone();
                    let result_tx = result_tx.clone();
                    scope.spawn(move || work(job, work_rx, result_tx))
                })
                .collect();
            drop(work_rx);
            drop(result_tx);

            let mut slots: Vec<Option<Vec<MatchEntry>>> = vec![None; num_samples];
            for (index, rows) in result_rx {
                slots[index] = Some(rows);
            }

            join_threads(feeder, handles);
            slots.into_iter().map(Option::unwrap_or_default).collect()
        })
    }
}

fn feed(num_samples: usize, work_tx: Sender<usize>) {
    for index in 0..num_samples {
        if work_tx.send(index).is_err() {
            break;
        }
    }
}

fn work(job: &SampleJob<'_>, work_rx: Receiver<usize>, result_tx: Sender<SampleResult>) {
    for index in work_rx {
        if result_tx.send((index, job(index))).is_err() {
            break;
        }
    }
}

/// Joins every thread, then re-raises the first worker panic.
fn join_threads<'scope>(
    feeder: ScopedJoinHandle<'scope, ()>,
    workers: Vec<ScopedJoinHandle<'scope, ()>>,
) {
    let mut first_panic: Option<Box<dyn Any + Send>> = None;
    for handle in std::iter::once(feeder).chain(workers) {
        if let Err(payload) = handle.join() {
            first_panic.get_or_insert(payload);
        }
    }
    if let Some(payload) = first_panic {
        std::panic::resume_unwind(payload);
    }
}
