//! The alien wave: individual invaders and the group that moves them in
//! lock-step.
//!
//! The whole wave sweeps horizontally as one. When any active alien touches
//! the screen edge it is moving toward, the entire group flips direction and
//! takes one synchronized step down — in that order, before the horizontal
//! step — so the wave descends exactly once per edge contact.

use crate::bullet::Bullet;
use crate::config::{
    ALIEN_DEFAULT_POINTS, ALIEN_HEIGHT, ALIEN_HORIZONTAL_SPEED, ALIEN_POINTS,
    ALIEN_VERTICAL_SPEED, ALIEN_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entity::Body;
use crate::fire::FireControl;

/// Group-issued alien identifier. Allocated from a monotonic counter so ids
/// are stable and unique for the lifetime of the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlienId(pub u32);

#[derive(Clone, Debug)]
pub struct Alien {
    pub body: Body,
    pub row: usize,
    pub col: usize,
    pub id: AlienId,
    /// Points awarded when destroyed; fixed by row at construction.
    pub points: u32,
    /// +1 sweeping right, −1 sweeping left.
    direction: f32,
    speed: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, row: usize, col: usize, id: AlienId) -> Self {
        Alien {
            body: Body::new(x, y, ALIEN_WIDTH, ALIEN_HEIGHT),
            row,
            col,
            id,
            points: points_for_row(row),
            direction: 1.0,
            speed: ALIEN_HORIZONTAL_SPEED,
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn move_horizontal(&mut self) {
        self.body.x += self.direction * self.speed;
    }

    pub fn move_down(&mut self) {
        self.body.y += ALIEN_VERTICAL_SPEED;
    }

    pub fn reverse_direction(&mut self) {
        self.direction = -self.direction;
    }

    /// Edge contact in the direction of travel: at the left edge heading
    /// left, or at the right edge heading right.
    pub fn should_reverse(&self) -> bool {
        (self.body.x <= 0.0 && self.direction < 0.0)
            || (self.body.x + self.body.width >= SCREEN_WIDTH && self.direction > 0.0)
    }

    /// A bullet leaving this alien's bottom-center.
    pub fn create_bullet(&self) -> Bullet {
        Bullet::from_alien(
            self.body.x + self.body.width / 2.0,
            self.body.y + self.body.height,
        )
    }
}

/// Point value for a grid row, top row first.
fn points_for_row(row: usize) -> u32 {
    ALIEN_POINTS.get(row).copied().unwrap_or(ALIEN_DEFAULT_POINTS)
}

/// Owns every alien in the wave and every bullet they have fired.
#[derive(Clone, Debug)]
pub struct AlienGroup {
    aliens: Vec<Alien>,
    bullets: Vec<Bullet>,
    next_id: u32,
}

impl AlienGroup {
    /// Lay out a `rows`×`cols` grid with its top-left alien at
    /// (`start_x`, `start_y`), row-major, ids counting up from 1.
    pub fn new(
        rows: usize,
        cols: usize,
        start_x: f32,
        start_y: f32,
        h_spacing: f32,
        v_spacing: f32,
    ) -> Self {
        let mut group = AlienGroup {
            aliens: Vec::with_capacity(rows * cols),
            bullets: Vec::new(),
            next_id: 1,
        };

        for row in 0..rows {
            for col in 0..cols {
                let x = start_x + col as f32 * (ALIEN_WIDTH + h_spacing);
                let y = start_y + row as f32 * (ALIEN_HEIGHT + v_spacing);
                let id = AlienId(group.next_id);
                group.next_id += 1;
                group.aliens.push(Alien::new(x, y, row, col, id));
            }
        }
        group
    }

    /// Advance the wave one tick.
    ///
    /// Order matters and is fixed: (1) one group-wide edge scan, (2) on
    /// contact every active alien flips and steps down, (3) every active
    /// alien steps horizontally, (4) per-alien fire queries, (5) bullets
    /// advance and inactive ones are pruned.
    pub fn update(&mut self, fire: &mut dyn FireControl) {
        let reverse = self.active_aliens().any(|a| a.should_reverse());

        if reverse {
            for alien in self.aliens.iter_mut().filter(|a| a.body.active) {
                alien.reverse_direction();
            }
        }

        for alien in self.aliens.iter_mut().filter(|a| a.body.active) {
            if reverse {
                alien.move_down();
            }
            alien.move_horizontal();
            alien.body.sync_rect();

            if fire.should_fire(alien.id) {
                self.bullets.push(alien.create_bullet());
            }
        }

        for bullet in &mut self.bullets {
            bullet.update(SCREEN_HEIGHT);
        }
        self.bullets.retain(|b| b.body.active);
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn aliens_mut(&mut self) -> &mut [Alien] {
        &mut self.aliens
    }

    pub fn active_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| a.body.active)
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

    /// No active aliens left — the wave is cleared.
    pub fn is_empty(&self) -> bool {
        self.active_aliens().next().is_none()
    }

    /// Any active alien's bottom edge at or past `bottom_y`.
    pub fn reached_bottom(&self, bottom_y: f32) -> bool {
        self.active_aliens()
            .any(|a| a.body.y + a.body.height >= bottom_y)
    }
}
