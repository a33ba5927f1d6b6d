//! Trials spread over scoped worker threads.
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::panic;
use std::thread;

use super::{SimulationOutcome, Simulator};

impl Simulator {
    /// Run `num_trials` trials split across `num_tasks` threads.
    ///
    /// Each task draws from its own ChaCha8 stream of `seed` (task `i` uses
    /// stream `i`) and keeps its own counts; the partial outcomes are summed
    /// once every task has finished. The result depends only on
    /// `(num_trials, seed, num_tasks)`.
    pub fn run_parallel(&self, num_trials: u64, seed: u64, num_tasks: usize) -> SimulationOutcome {
        let num_tasks = num_tasks.max(1) as u64;
        let per_task = num_trials / num_tasks;
        let extra = num_trials % num_tasks;

        thread::scope(|s| {
            let handles: Vec<_> = (0..num_tasks)
                .map(|task_id| {
                    let trials = per_task + u64::from(task_id < extra);
                    s.spawn(move || {
                        let mut rng = ChaCha8Rng::seed_from_u64(seed);
                        rng.set_stream(task_id);
                        self.run_with_rng(trials, &mut rng)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum()
        })
    }
}
