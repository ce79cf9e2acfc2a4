//! Tuning constants for the whole game, in logical pixels.
//!
//! The simulation runs on a fixed 800×600 logical screen; the display layer
//! projects logical coordinates onto whatever terminal grid it finds.

// ── Screen ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Top of the play area (below the score line).
pub const GAME_AREA_TOP: f32 = 60.0;
/// Bottom of the play area (above the player zone). Aliens reaching this
/// line end the game.
pub const GAME_AREA_BOTTOM: f32 = 550.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Horizontal step per movement frame.
pub const PLAYER_SPEED: f32 = 40.0;
pub const PLAYER_BULLET_SPEED: f32 = 40.0;
pub const PLAYER_LIVES: u32 = 3;
/// Frames between accepted shots.
pub const PLAYER_COOLDOWN_FRAMES: u32 = 15;
/// Accepted-shot spacing for the smooth movement profile.
pub const SMOOTH_COOLDOWN_FRAMES: u32 = 3;
/// Frames of invulnerability granted after a non-fatal hit.
pub const INVULNERABLE_FRAMES: u32 = 60;

// ── Aliens ────────────────────────────────────────────────────────────────────

pub const ALIEN_WIDTH: f32 = 50.0;
pub const ALIEN_HEIGHT: f32 = 40.0;
pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLS: usize = 11;
pub const ALIEN_HORIZONTAL_SPACING: f32 = 10.0;
pub const ALIEN_VERTICAL_SPACING: f32 = 10.0;
/// Horizontal step per tick — deliberately slow for the classic sweep.
pub const ALIEN_HORIZONTAL_SPEED: f32 = 10.0;
/// Downward step taken by the whole group on an edge reversal.
pub const ALIEN_VERTICAL_SPEED: f32 = 20.0;
pub const ALIEN_BULLET_SPEED: f32 = 10.0;
/// Per-alien, per-tick fire probability used by the default fire control.
pub const ALIEN_FIRE_CHANCE: f64 = 0.005;
/// Point values by grid row, top row first; rows past the table score
/// [`ALIEN_DEFAULT_POINTS`].
pub const ALIEN_POINTS: [u32; 5] = [30, 20, 20, 10, 10];
pub const ALIEN_DEFAULT_POINTS: u32 = 10;

// ── Barriers ──────────────────────────────────────────────────────────────────

pub const BARRIER_COUNT: usize = 4;
pub const BARRIER_WIDTH: f32 = 80.0;
pub const BARRIER_SEGMENTS_X: usize = 8;
pub const BARRIER_SEGMENTS_Y: usize = 6;
pub const BARRIER_SEGMENT_SIZE: f32 = 10.0;
pub const SEGMENT_HEALTH: i32 = 3;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 10.0;
