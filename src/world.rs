//! The composed simulation: one `tick` per rendered frame applies input,
//! advances every entity, resolves collisions and checks the terminal
//! conditions. Completely headless — the display layer only reads it —
//! which keeps the whole game exercisable from integration tests.

use crate::alien::AlienGroup;
use crate::barrier::BarrierGroup;
use crate::config::{
    ALIEN_COLS, ALIEN_HORIZONTAL_SPACING, ALIEN_ROWS, ALIEN_VERTICAL_SPACING,
    BARRIER_COUNT, BARRIER_WIDTH, GAME_AREA_BOTTOM, GAME_AREA_TOP, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::fire::{FireControl, WorldSnapshot};
use crate::game_state::GameStateManager;
use crate::player::Player;

/// Player intent for one frame, already debounced by the frontend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

pub struct World {
    pub player: Player,
    pub aliens: AlienGroup,
    pub barriers: BarrierGroup,
    pub state: GameStateManager,
    /// Set when the wave is cleared; play continues until a restart.
    pub won: bool,
    pub frame: u64,
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

impl World {
    pub fn new() -> Self {
        let (player, aliens, barriers) = World::build_entities();
        World {
            player,
            aliens,
            barriers,
            state: GameStateManager::default(),
            won: false,
            frame: 0,
        }
    }

    fn build_entities() -> (Player, AlienGroup, BarrierGroup) {
        let player = Player::new(SCREEN_WIDTH / 2.0, GAME_AREA_BOTTOM);
        let aliens = AlienGroup::new(
            ALIEN_ROWS,
            ALIEN_COLS,
            50.0,
            GAME_AREA_TOP + 50.0,
            ALIEN_HORIZONTAL_SPACING,
            ALIEN_VERTICAL_SPACING,
        );
        let barriers = BarrierGroup::new(BARRIER_COUNT, 0.0, SCREEN_WIDTH, GAME_AREA_BOTTOM - 100.0);
        (player, aliens, barriers)
    }

    /// Enter the Playing state with a fresh wave, fresh barriers and a
    /// fresh ship. Works from the menu, the game-over screen, or a win.
    pub fn start_game(&mut self) {
        let (player, aliens, barriers) = World::build_entities();
        self.player = player;
        self.aliens = aliens;
        self.barriers = barriers;
        self.won = false;
        self.frame = 0;
        self.state.start_game();
    }

    /// The view of the world pushed to the fire control each tick.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            player: (
                self.player.body.x + self.player.body.width / 2.0,
                self.player.body.y,
            ),
            aliens: self
                .aliens
                .active_aliens()
                .map(|a| (a.id, a.body.x + a.body.width / 2.0, a.body.y))
                .collect(),
            barriers: self
                .barriers
                .active_barriers()
                .map(|b| (b.id, b.x + BARRIER_WIDTH / 2.0, b.y))
                .collect(),
            screen: (SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    /// Advance one frame. Does nothing unless the game is in play.
    pub fn tick(&mut self, input: Input, fire: &mut dyn FireControl) {
        if !self.state.is_playing() {
            return;
        }
        self.frame += 1;

        if input.left {
            self.player.move_left();
        }
        if input.right {
            self.player.move_right();
        }
        if input.fire {
            self.player.shoot();
        }

        self.player.update();

        fire.update_state(&self.snapshot());
        self.aliens.update(fire);
        self.barriers.update();

        self.resolve_collisions();

        if self.aliens.is_empty() {
            self.won = true;
        }
        if self.aliens.reached_bottom(GAME_AREA_BOTTOM) {
            self.state.game_over();
        }
    }

    /// Collision phases, in order: player bullets against aliens, alien
    /// bullets against the player, then both bullet streams against the
    /// barriers. Each bullet spends itself on its first hit.
    fn resolve_collisions(&mut self) {
        for bullet in self.player.bullets_mut() {
            for alien in self.aliens.aliens_mut() {
                if bullet.body.collides_with(&alien.body) {
                    bullet.body.deactivate();
                    alien.body.deactivate();
                    self.state.add_score(alien.points);
                    break;
                }
            }
        }

        for bullet in self.aliens.bullets_mut() {
            if bullet.body.collides_with(&self.player.body) {
                bullet.body.deactivate();
                if self.player.take_damage() {
                    self.state.game_over();
                }
            }
        }

        for bullet in self.player.bullets_mut() {
            if self.barriers.check_collision(bullet) {
                bullet.body.deactivate();
            }
        }
        for bullet in self.aliens.bullets_mut() {
            if self.barriers.check_collision(bullet) {
                bullet.body.deactivate();
            }
        }
    }
}
