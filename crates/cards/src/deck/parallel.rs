// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling over scoped threads.
use rand::{prelude::*, rngs::SmallRng};
use std::thread;

use super::{Card, Deck};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes the task identifier (0..num_tasks) and a slice of
    /// k cards, the task identifier can index per task data to avoid
    /// contention. Each task samples with its own random generator.
    ///
    /// Panics if k is not 2 <= k <= 7 or if `num_tasks` is zero.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    self.sample(samples_per_task, k, &mut rng, |h| f(task_id, h));
                });
            }
        });
    }
}
