//! Positional base shared by every game object.
//!
//! There is no entity hierarchy: each concrete type embeds a [`Body`] and
//! forwards to it. The body keeps a derived axis-aligned rectangle in sync
//! with its position; collision checks compare those rectangles.

/// An axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// Strict overlap test: rectangles that merely touch along an edge do
    /// not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Position, extent and liveness of a game object.
#[derive(Clone, Debug)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Collision rectangle, kept in sync with `x`/`y` by [`Body::sync_rect`].
    pub rect: Rect,
    /// Whether the object still participates in simulation and rendering.
    pub active: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Body {
            x,
            y,
            width,
            height,
            rect: Rect::new(x, y, width, height),
            active: true,
        }
    }

    /// Re-derive the collision rectangle from the current position. Every
    /// entity's per-tick update ends with this.
    pub fn sync_rect(&mut self) {
        self.rect.x = self.x;
        self.rect.y = self.y;
    }

    /// True if both bodies are active and their rectangles overlap.
    pub fn collides_with(&self, other: &Body) -> bool {
        if !self.active || !other.active {
            return false;
        }
        self.rect.overlaps(&other.rect)
    }

    /// Remove the object from play. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
