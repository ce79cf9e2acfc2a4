//! The alien fire-decision seam.
//!
//! Aliens never decide to shoot themselves; each tick the world pushes a
//! snapshot to a [`FireControl`] and every active alien asks it whether to
//! fire. The default implementation is a plain random draw. An external
//! decision engine plugs in as a [`DecisionSource`] wrapped in [`Guarded`],
//! which turns every failure into "don't fire" so nothing from the engine
//! ever reaches the frame loop.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::alien::AlienId;

/// Global firing strategy, selectable from the menu. `None` (no global
/// strategy) leaves each alien row on its default behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Predictive,
    Random,
    Coordinated,
    BarrierAvoidance,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Direct,
        Strategy::Predictive,
        Strategy::Random,
        Strategy::Coordinated,
        Strategy::BarrierAvoidance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Direct => "Direct Targeting",
            Strategy::Predictive => "Predictive Targeting",
            Strategy::Random => "Random Firing",
            Strategy::Coordinated => "Coordinated Firing",
            Strategy::BarrierAvoidance => "Barrier Avoidance",
        }
    }
}

/// One tick's view of the world, in logical pixels. Positions are entity
/// centers on the x axis and tops on the y axis, which is what targeting
/// logic wants.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    pub player: (f32, f32),
    pub aliens: Vec<(AlienId, f32, f32)>,
    pub barriers: Vec<(u32, f32, f32)>,
    pub screen: (f32, f32),
}

/// Per-tick fire decisions. Implementations must be total: a decision is
/// always produced, never an error.
pub trait FireControl {
    /// Push the current world snapshot. Called once per tick, before any
    /// [`FireControl::should_fire`] queries.
    fn update_state(&mut self, snapshot: &WorldSnapshot);

    /// Should this alien fire this tick?
    fn should_fire(&mut self, alien: AlienId) -> bool;

    /// Switch the global strategy; `None` restores row-based defaults.
    fn set_strategy(&mut self, strategy: Option<Strategy>);
}

// ── Default engine ────────────────────────────────────────────────────────────

/// The built-in fire control: every query is an independent uniform draw
/// against a fixed probability. State pushes and strategy switches are
/// accepted and ignored.
pub struct RandomFire {
    chance: f64,
    rng: ChaCha8Rng,
}

impl RandomFire {
    pub fn new(chance: f64) -> Self {
        RandomFire {
            chance,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded variant: same seed, same decisions — used wherever a
    /// reproducible simulation is needed.
    pub fn seeded(chance: f64, seed: u64) -> Self {
        RandomFire {
            chance,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl FireControl for RandomFire {
    fn update_state(&mut self, _snapshot: &WorldSnapshot) {}

    fn should_fire(&mut self, _alien: AlienId) -> bool {
        self.rng.gen::<f64>() < self.chance
    }

    fn set_strategy(&mut self, _strategy: Option<Strategy>) {}
}

// ── External engines ──────────────────────────────────────────────────────────

/// Failure reported by an external decision engine.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision engine unavailable: {0}")]
    Unavailable(String),
    #[error("decision engine timed out")]
    Timeout,
    #[error("malformed reply from decision engine: {0}")]
    BadReply(String),
}

/// A fallible decision engine — typically a bridge to a separate process.
/// Pair it with [`Guarded`] before handing it to the simulation.
pub trait DecisionSource {
    fn push_state(&mut self, snapshot: &WorldSnapshot) -> Result<(), DecisionError>;
    fn fire_decision(&mut self, alien: AlienId) -> Result<bool, DecisionError>;
    fn select_strategy(&mut self, strategy: Option<Strategy>) -> Result<(), DecisionError>;
}

/// Adapts a [`DecisionSource`] into a total [`FireControl`]: any error
/// degrades to "don't fire" (or is dropped, for pushes) and is tallied.
pub struct Guarded<S> {
    source: S,
    failures: u64,
}

impl<S> Guarded<S> {
    pub fn new(source: S) -> Self {
        Guarded {
            source,
            failures: 0,
        }
    }

    /// How many engine calls have failed so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: DecisionSource> FireControl for Guarded<S> {
    fn update_state(&mut self, snapshot: &WorldSnapshot) {
        if self.source.push_state(snapshot).is_err() {
            self.failures += 1;
        }
    }

    fn should_fire(&mut self, alien: AlienId) -> bool {
        match self.source.fire_decision(alien) {
            Ok(decision) => decision,
            Err(_) => {
                self.failures += 1;
                false
            }
        }
    }

    fn set_strategy(&mut self, strategy: Option<Strategy>) {
        if self.source.select_strategy(strategy).is_err() {
            self.failures += 1;
        }
    }
}
