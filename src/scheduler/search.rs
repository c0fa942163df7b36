//! Permutation search over input orderings.
//!
//! # Algorithm
//!
//! 1. Optionally shuffle the talks.
//! 2. Visit index permutations in lexicographic order, starting with the
//!    identity, up to an optional cap.
//! 3. Pack each ordering with the template schedule's policy and keep a
//!    deep copy of the best result (fewest tracks, then least waste).
//!
//! Exhaustive search is O(n!) packings; the cap and shuffle make it a
//! randomized sampler for realistic talk counts. Order-sensitive packers
//! ([`Packing::FirstFit`](crate::models::Packing::FirstFit)) benefit most.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::error::PackingError;
use crate::models::{Schedule, Talk};

/// Default permutation cap.
pub const DEFAULT_MAX_PERMUTATIONS: usize = 100_000;

/// Result of a permutation search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best schedule found (independent of any working state).
    pub best: Schedule,
    /// Number of orderings packed.
    pub permutations_tested: usize,
    /// Wasted minutes in the best schedule.
    pub wasted_time: u32,
}

/// Searches input orderings for the schedule with the fewest tracks.
///
/// # Example
///
/// ```
/// use u_tracks::config::DayLayout;
/// use u_tracks::models::{Packing, Schedule, Talk};
/// use u_tracks::scheduler::PermutationSearch;
///
/// let talks = vec![Talk::new("A", 180), Talk::new("B", 180), Talk::new("C", 240)];
/// let template = Schedule::new(DayLayout::default()).with_packing(Packing::FirstFit);
///
/// let outcome = PermutationSearch::new().run(&talks, &template).unwrap();
/// assert_eq!(outcome.best.track_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationSearch {
    max_permutations: Option<usize>,
    shuffle: bool,
    seed: Option<u64>,
    progress_every: usize,
}

impl PermutationSearch {
    /// Creates a search capped at [`DEFAULT_MAX_PERMUTATIONS`], without shuffling.
    pub fn new() -> Self {
        Self {
            max_permutations: Some(DEFAULT_MAX_PERMUTATIONS),
            shuffle: false,
            seed: None,
            progress_every: 1000,
        }
    }

    /// Sets the permutation cap. `None` visits every ordering.
    pub fn with_max_permutations(mut self, max: Option<usize>) -> Self {
        self.max_permutations = max;
        self
    }

    /// Shuffles the talks before enumerating orderings.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Seeds the shuffle. Unseeded shuffles use the thread-local RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Logs progress every `n` permutations (0 disables).
    pub fn with_progress_every(mut self, n: usize) -> Self {
        self.progress_every = n;
        self
    }

    /// Runs the search, packing each ordering with `template`'s layout and policy.
    pub fn run(&self, talks: &[Talk], template: &Schedule) -> Result<SearchOutcome, PackingError> {
        let mut talks = talks.to_vec();
        if self.shuffle {
            match self.seed {
                Some(seed) => talks.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => talks.shuffle(&mut rand::rng()),
            }
        }

        let mut order: Vec<usize> = (0..talks.len()).collect();
        let mut working = template.clone();
        working.add_talks(talks.iter().cloned())?;
        let mut best = working.clone();
        let mut tested = 1;

        while self.max_permutations.map_or(true, |max| tested < max) && next_permutation(&mut order) {
            working.add_talks(order.iter().map(|&i| talks[i].clone()))?;
            tested += 1;

            if is_better(&working, &best) {
                debug!(
                    permutation = tested,
                    tracks = working.track_count(),
                    wasted = working.wasted_time(),
                    "new best schedule"
                );
                best = working.clone();
            }
            if self.progress_every > 0 && tested % self.progress_every == 0 {
                debug!(tested, "processed permutations");
            }
        }

        let wasted_time = best.wasted_time();
        Ok(SearchOutcome {
            best,
            permutations_tested: tested,
            wasted_time,
        })
    }
}

impl Default for PermutationSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn is_better(candidate: &Schedule, best: &Schedule) -> bool {
    (candidate.track_count(), candidate.wasted_time()) < (best.track_count(), best.wasted_time())
}

/// Advances `order` to the next lexicographic permutation.
///
/// Returns `false` (leaving `order` unchanged) when it is already the last.
fn next_permutation(order: &mut [usize]) -> bool {
    let Some(pivot) = order.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = order
        .iter()
        .rposition(|&x| x > order[pivot])
        .unwrap_or(pivot + 1);
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}
