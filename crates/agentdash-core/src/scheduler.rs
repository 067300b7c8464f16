//! Simulated real-time updates
//!
//! A [`TickSource`] decides when an agent tick is due; [`step_agents`] is the
//! pure update applied on each tick. Keeping them apart makes the timing
//! deterministic in tests.

use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::{Agent, AgentState, MAX_PROGRESS};

/// Decides when the next simulation tick fires
pub trait TickSource {
    /// True when a tick fires at `now`. At most one tick per call.
    fn poll(&mut self, now: Duration) -> bool;
}

/// Fixed-period ticks that re-arm from the moment they fire.
///
/// A late poll does not catch up on missed ticks, so the tick count drifts
/// behind wall-clock time under load.
#[derive(Debug, Clone)]
pub struct IntervalTicks {
    period: Duration,
    next: Duration,
}

impl IntervalTicks {
    /// First tick fires one period after `start`
    pub fn new(period: Duration, start: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicks {
    fn poll(&mut self, now: Duration) -> bool {
        if now >= self.next {
            self.next = now + self.period;
            true
        } else {
            false
        }
    }
}

/// Scripted ticks for tests
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    pending: VecDeque<bool>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` polls fire
    pub fn fire(&mut self, n: usize) {
        self.pending.extend(std::iter::repeat(true).take(n));
    }
}

impl TickSource for ManualTicks {
    fn poll(&mut self, _now: Duration) -> bool {
        self.pending.pop_front().unwrap_or(false)
    }
}

/// Advance every running agent by one tick.
///
/// Progress grows by a random amount in `0..=max_step` and is clamped at
/// [`MAX_PROGRESS`]; elapsed time grows by exactly one second. Paused and
/// warning agents are left alone. Nothing ever decreases.
pub fn step_agents<R: Rng>(agents: &mut [Agent], rng: &mut R, max_step: u8) {
    for agent in agents.iter_mut().filter(|a| a.state == AgentState::Running) {
        let step = rng.gen_range(0..=max_step);
        agent.progress = agent.progress.saturating_add(step).min(MAX_PROGRESS);
        agent.time = agent.time.saturating_add(1);
    }
}

/// RNG and step size for the progress updater
#[derive(Debug)]
pub struct Simulation {
    rng: StdRng,
    max_step: u8,
}

impl Simulation {
    pub fn new(max_step: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, max_step }
    }

    pub fn step(&mut self, agents: &mut [Agent]) {
        step_agents(agents, &mut self.rng, self.max_step);
    }
}
