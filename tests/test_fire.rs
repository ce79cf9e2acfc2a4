use space_invaders::alien::AlienId;
use space_invaders::fire::{
    DecisionError, DecisionSource, FireControl, Guarded, RandomFire, Strategy, WorldSnapshot,
};

// ── RandomFire ────────────────────────────────────────────────────────────────

#[test]
fn certain_and_impossible_probabilities() {
    let mut always = RandomFire::seeded(1.0, 7);
    let mut never = RandomFire::seeded(0.0, 7);
    for i in 0..100 {
        assert!(always.should_fire(AlienId(i)));
        assert!(!never.should_fire(AlienId(i)));
    }
}

#[test]
fn seeded_engines_are_reproducible() {
    let mut a = RandomFire::seeded(0.5, 42);
    let mut b = RandomFire::seeded(0.5, 42);
    let decisions_a: Vec<bool> = (0..1000).map(|i| a.should_fire(AlienId(i))).collect();
    let decisions_b: Vec<bool> = (0..1000).map(|i| b.should_fire(AlienId(i))).collect();
    assert_eq!(decisions_a, decisions_b);
    // Sanity: a fair draw produces both outcomes
    assert!(decisions_a.iter().any(|&d| d));
    assert!(decisions_a.iter().any(|&d| !d));
}

#[test]
fn random_fire_accepts_state_and_strategy() {
    // Pushes and switches are valid no-ops for the built-in engine
    let mut fire = RandomFire::seeded(0.005, 1);
    fire.update_state(&WorldSnapshot::default());
    fire.set_strategy(Some(Strategy::Coordinated));
    fire.set_strategy(None);
    let _ = fire.should_fire(AlienId(1));
}

// ── Strategy table ────────────────────────────────────────────────────────────

#[test]
fn five_distinct_strategies() {
    let labels: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels.len(), 5);
    for (i, label) in labels.iter().enumerate() {
        assert!(!label.is_empty());
        assert!(!labels[..i].contains(label));
    }
}

// ── Guarded degradation ───────────────────────────────────────────────────────

/// An engine that fails every call, like a bridge whose process has died.
struct DeadEngine;

impl DecisionSource for DeadEngine {
    fn push_state(&mut self, _snapshot: &WorldSnapshot) -> Result<(), DecisionError> {
        Err(DecisionError::Unavailable("process exited".into()))
    }
    fn fire_decision(&mut self, _alien: AlienId) -> Result<bool, DecisionError> {
        Err(DecisionError::Timeout)
    }
    fn select_strategy(&mut self, _strategy: Option<Strategy>) -> Result<(), DecisionError> {
        Err(DecisionError::BadReply("not a boolean".into()))
    }
}

/// An engine that orders every alien to fire.
struct EagerEngine;

impl DecisionSource for EagerEngine {
    fn push_state(&mut self, _snapshot: &WorldSnapshot) -> Result<(), DecisionError> {
        Ok(())
    }
    fn fire_decision(&mut self, _alien: AlienId) -> Result<bool, DecisionError> {
        Ok(true)
    }
    fn select_strategy(&mut self, _strategy: Option<Strategy>) -> Result<(), DecisionError> {
        Ok(())
    }
}

#[test]
fn guarded_degrades_failures_to_no_fire() {
    let mut fire = Guarded::new(DeadEngine);
    fire.update_state(&WorldSnapshot::default());
    fire.set_strategy(Some(Strategy::Direct));
    for i in 0..10 {
        assert!(!fire.should_fire(AlienId(i)));
    }
    assert_eq!(fire.failures(), 12); // 1 push + 1 switch + 10 queries
}

#[test]
fn guarded_passes_successes_through() {
    let mut fire = Guarded::new(EagerEngine);
    fire.update_state(&WorldSnapshot::default());
    fire.set_strategy(None);
    assert!(fire.should_fire(AlienId(1)));
    assert_eq!(fire.failures(), 0);
    let _engine = fire.into_inner();
}

#[test]
fn decision_errors_describe_themselves() {
    assert_eq!(
        DecisionError::Timeout.to_string(),
        "decision engine timed out"
    );
    assert_eq!(
        DecisionError::Unavailable("gone".into()).to_string(),
        "decision engine unavailable: gone"
    );
    assert_eq!(
        DecisionError::BadReply("garbage".into()).to_string(),
        "malformed reply from decision engine: garbage"
    );
}
