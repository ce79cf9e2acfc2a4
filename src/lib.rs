//! A terminal Space Invaders.
//!
//! The simulation core ([`world`], [`alien`], [`barrier`], [`player`],
//! [`bullet`], [`entity`], [`game_state`]) is headless and deterministic: one
//! fixed logical tick per rendered frame, all randomness injected through the
//! [`fire`] seam. The [`display`] module is the only place that touches the
//! terminal.

pub mod alien;
pub mod barrier;
pub mod bullet;
pub mod config;
pub mod display;
pub mod entity;
pub mod fire;
pub mod game_state;
pub mod player;
pub mod world;
