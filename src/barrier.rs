//! Destructible barriers between the player and the wave.
//!
//! A barrier is a stencil of small segments; bullets chew through it one
//! segment at a time. A colliding bullet damages at most one segment per
//! check — the first overlapping segment in stored order — and the group
//! likewise stops at the first barrier that reports a hit. That single-hit
//! policy is intentional: one bullet, one block of damage.

use crate::bullet::Bullet;
use crate::config::{
    BARRIER_SEGMENTS_X, BARRIER_SEGMENTS_Y, BARRIER_SEGMENT_SIZE, BARRIER_WIDTH,
    SEGMENT_HEALTH,
};
use crate::entity::Body;

/// Visual state of a segment, a pure function of remaining health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentWear {
    Fresh,
    Worn,
    Crumbling,
}

#[derive(Clone, Debug)]
pub struct BarrierSegment {
    pub body: Body,
    pub barrier_id: u32,
    pub segment_id: u32,
    health: i32,
}

impl BarrierSegment {
    pub fn new(x: f32, y: f32, size: f32, barrier_id: u32, segment_id: u32) -> Self {
        BarrierSegment {
            body: Body::new(x, y, size, size),
            barrier_id,
            segment_id,
            health: SEGMENT_HEALTH,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn wear(&self) -> SegmentWear {
        match self.health {
            h if h >= SEGMENT_HEALTH => SegmentWear::Fresh,
            2 => SegmentWear::Worn,
            _ => SegmentWear::Crumbling,
        }
    }

    /// Record one hit. Returns `true` when this hit destroyed the segment.
    pub fn take_damage(&mut self) -> bool {
        self.health -= 1;
        if self.health <= 0 {
            self.body.deactivate();
            return true;
        }
        false
    }
}

#[derive(Clone, Debug)]
pub struct Barrier {
    pub x: f32,
    pub y: f32,
    pub id: u32,
    segments: Vec<BarrierSegment>,
    pub active: bool,
}

impl Barrier {
    /// Build a barrier centered on `center_x` with its top at `y`.
    pub fn new(center_x: f32, y: f32, id: u32) -> Self {
        let mut barrier = Barrier {
            x: center_x - BARRIER_WIDTH / 2.0,
            y,
            id,
            segments: Vec::new(),
            active: true,
        };
        barrier.create_segments();
        barrier
    }

    /// The classic stencil: a full grid minus the two top corners, minus a
    /// 2-wide notch in the bottom-center third.
    fn create_segments(&mut self) {
        let notch_width = 2;
        let notch_start = (BARRIER_SEGMENTS_X - notch_width) / 2;
        let notch_top_row = BARRIER_SEGMENTS_Y * 2 / 3;

        let mut segment_id = 0;
        for row in 0..BARRIER_SEGMENTS_Y {
            for col in 0..BARRIER_SEGMENTS_X {
                if row == 0 && (col == 0 || col == BARRIER_SEGMENTS_X - 1) {
                    continue;
                }
                if row >= notch_top_row && col >= notch_start && col < notch_start + notch_width {
                    continue;
                }

                let x = self.x + col as f32 * BARRIER_SEGMENT_SIZE;
                let y = self.y + row as f32 * BARRIER_SEGMENT_SIZE;
                self.segments
                    .push(BarrierSegment::new(x, y, BARRIER_SEGMENT_SIZE, self.id, segment_id));
                segment_id += 1;
            }
        }
    }

    /// Drop destroyed segments; the barrier goes inactive exactly when none
    /// remain.
    pub fn update(&mut self) {
        self.segments.retain(|s| s.body.active);
        if self.segments.is_empty() {
            self.active = false;
        }
    }

    pub fn segments(&self) -> &[BarrierSegment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [BarrierSegment] {
        &mut self.segments
    }

    /// Damage the first segment the bullet overlaps, if any. At most one
    /// segment takes damage per call.
    pub fn check_collision(&mut self, bullet: &Bullet) -> bool {
        if !self.active || !bullet.body.active {
            return false;
        }
        for segment in &mut self.segments {
            if segment.body.collides_with(&bullet.body) {
                segment.take_damage();
                return true;
            }
        }
        false
    }
}

/// The row of barriers, evenly spread across a span of the screen.
#[derive(Clone, Debug)]
pub struct BarrierGroup {
    barriers: Vec<Barrier>,
}

impl BarrierGroup {
    /// Distribute `count` barriers evenly across `width` starting at
    /// `start_x`, all with their tops at `y`. `count` must be nonzero.
    pub fn new(count: usize, start_x: f32, width: f32, y: f32) -> Self {
        let spacing = width / count as f32;
        let barriers = (0..count)
            .map(|i| {
                let center_x = start_x + i as f32 * spacing + spacing / 2.0;
                Barrier::new(center_x, y, i as u32 + 1)
            })
            .collect();
        BarrierGroup { barriers }
    }

    pub fn update(&mut self) {
        for barrier in self.barriers.iter_mut().filter(|b| b.active) {
            barrier.update();
        }
    }

    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    pub fn barriers_mut(&mut self) -> &mut [Barrier] {
        &mut self.barriers
    }

    pub fn active_barriers(&self) -> impl Iterator<Item = &Barrier> {
        self.barriers.iter().filter(|b| b.active)
    }

    /// Try each barrier in construction order; stop at the first hit.
    pub fn check_collision(&mut self, bullet: &Bullet) -> bool {
        for barrier in &mut self.barriers {
            if barrier.active && barrier.check_collision(bullet) {
                return true;
            }
        }
        false
    }
}
