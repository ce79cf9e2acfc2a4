//! The player ship: movement, cooldown-gated firing, lives and
//! post-hit invulnerability.

use crate::bullet::Bullet;
use crate::config::{
    INVULNERABLE_FRAMES, PLAYER_COOLDOWN_FRAMES, PLAYER_HEIGHT, PLAYER_LIVES,
    PLAYER_SPEED, PLAYER_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
    SMOOTH_COOLDOWN_FRAMES,
};
use crate::entity::Body;

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    speed: f32,
    bullets: Vec<Bullet>,
    cooldown: u32,
    cooldown_frames: u32,
    pub lives: u32,
    /// Frames of damage immunity remaining; 0 means vulnerable.
    invulnerable_left: u32,
    /// Movement step divisor: 1 = classic whole-step movement, >1 = the
    /// smooth profile where the frontend applies several sub-steps per frame.
    subframes: u32,
}

impl Player {
    /// A classic-profile ship centered on `center_x` with its top at `y`.
    pub fn new(center_x: f32, y: f32) -> Self {
        Player {
            body: Body::new(center_x - PLAYER_WIDTH / 2.0, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            bullets: Vec::new(),
            cooldown: 0,
            cooldown_frames: PLAYER_COOLDOWN_FRAMES,
            lives: PLAYER_LIVES,
            invulnerable_left: 0,
            subframes: 1,
        }
    }

    /// The smooth movement profile: the same ship, stepping `speed/subframes`
    /// per call with a shorter fire cooldown. Meant for frontends that apply
    /// movement more than once per rendered frame.
    pub fn smooth(center_x: f32, y: f32, subframes: u32) -> Self {
        let mut player = Player::new(center_x, y);
        player.subframes = subframes.max(1);
        player.cooldown_frames = SMOOTH_COOLDOWN_FRAMES;
        player
    }

    /// Per-frame bookkeeping: advance and prune bullets, run down the fire
    /// cooldown and the invulnerability window.
    pub fn update(&mut self) {
        self.body.sync_rect();

        for bullet in &mut self.bullets {
            bullet.update(SCREEN_HEIGHT);
        }
        self.bullets.retain(|b| b.body.active);

        self.cooldown = self.cooldown.saturating_sub(1);
        self.invulnerable_left = self.invulnerable_left.saturating_sub(1);
    }

    pub fn move_left(&mut self) {
        self.body.x = (self.body.x - self.step()).max(0.0);
        self.body.sync_rect();
    }

    pub fn move_right(&mut self) {
        self.body.x = (self.body.x + self.step()).min(SCREEN_WIDTH - self.body.width);
        self.body.sync_rect();
    }

    fn step(&self) -> f32 {
        self.speed / self.subframes as f32
    }

    /// Fire if the cooldown allows. The bullet spawns at the ship's
    /// center-top and inherits the ship's step resolution.
    pub fn shoot(&mut self) {
        if self.cooldown > 0 {
            return;
        }
        let center_x = self.body.x + self.body.width / 2.0;
        self.bullets
            .push(Bullet::from_player(center_x, self.body.y).with_subframes(self.subframes));
        self.cooldown = self.cooldown_frames;
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut [Bullet] {
        &mut self.bullets
    }

    pub fn active_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.body.active)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_left > 0
    }

    /// Register a hit. Returns `true` when the ship is out of lives.
    ///
    /// While invulnerable the hit is ignored outright: no life lost, no
    /// state change, and the window is not extended.
    pub fn take_damage(&mut self) -> bool {
        if self.is_invulnerable() {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.body.deactivate();
            true
        } else {
            self.invulnerable_left = INVULNERABLE_FRAMES;
            false
        }
    }

    /// Restore a fresh ship for a new game at the given position.
    pub fn reset(&mut self, center_x: f32, y: f32) {
        self.body.x = center_x - self.body.width / 2.0;
        self.body.y = y;
        self.body.active = true;
        self.body.sync_rect();
        self.bullets.clear();
        self.cooldown = 0;
        self.lives = PLAYER_LIVES;
        self.invulnerable_left = 0;
    }
}
