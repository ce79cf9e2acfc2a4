//! Projectiles.
//!
//! One type covers both sides: a bullet is a body plus a vertical heading
//! and a step resolution. The `subframes` divisor exists for movement
//! profiles that advance a bullet several times per rendered frame; the
//! classic profile leaves it at 1 (one whole step per tick).

use crate::config::{
    ALIEN_BULLET_SPEED, BULLET_HEIGHT, BULLET_WIDTH, PLAYER_BULLET_SPEED,
};
use crate::entity::Body;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub body: Body,
    heading: Heading,
    speed: f32,
    subframes: f32,
}

impl Bullet {
    /// A player shot: centered on `center_x`, sitting on top of `top_y`,
    /// moving up.
    pub fn from_player(center_x: f32, top_y: f32) -> Self {
        Bullet {
            body: Body::new(
                center_x - BULLET_WIDTH / 2.0,
                top_y - BULLET_HEIGHT,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
            heading: Heading::Up,
            speed: PLAYER_BULLET_SPEED,
            subframes: 1.0,
        }
    }

    /// An alien shot: centered on `center_x`, starting at `top_y`, moving
    /// down.
    pub fn from_alien(center_x: f32, top_y: f32) -> Self {
        Bullet {
            body: Body::new(
                center_x - BULLET_WIDTH / 2.0,
                top_y,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
            heading: Heading::Down,
            speed: ALIEN_BULLET_SPEED,
            subframes: 1.0,
        }
    }

    /// Split each step into `n` sub-steps. Callers that update `n` times per
    /// frame get the same per-frame travel with finer collision sampling.
    pub fn with_subframes(mut self, n: u32) -> Self {
        self.subframes = n.max(1) as f32;
        self
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Advance one step and deactivate once off-screen: an upward bullet dies
    /// when its bottom edge clears the top boundary, a downward one when its
    /// top edge passes `screen_height`.
    pub fn update(&mut self, screen_height: f32) {
        let step = self.speed / self.subframes;
        match self.heading {
            Heading::Up => self.body.y -= step,
            Heading::Down => self.body.y += step,
        }
        self.body.sync_rect();

        let off_screen = match self.heading {
            Heading::Up => self.body.y + self.body.height < 0.0,
            Heading::Down => self.body.y > screen_height,
        };
        if off_screen {
            self.body.deactivate();
        }
    }
}
