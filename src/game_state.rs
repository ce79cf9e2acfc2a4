//! Game-state progression and score bookkeeping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

/// Tracks the current state plus score and high score. The high score only
/// moves on the game-over transition and never decreases.
#[derive(Clone, Debug)]
pub struct GameStateManager {
    pub current_state: GameState,
    pub score: u32,
    pub high_score: u32,
}

impl Default for GameStateManager {
    fn default() -> Self {
        GameStateManager::new(GameState::Menu)
    }
}

impl GameStateManager {
    pub fn new(initial_state: GameState) -> Self {
        GameStateManager {
            current_state: initial_state,
            score: 0,
            high_score: 0,
        }
    }

    pub fn change_state(&mut self, new_state: GameState) {
        self.current_state = new_state;
    }

    /// Begin a new game from any state; the running score resets.
    pub fn start_game(&mut self) {
        self.current_state = GameState::Playing;
        self.score = 0;
    }

    /// End the current game, folding the score into the high score.
    pub fn game_over(&mut self) {
        self.current_state = GameState::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    pub fn return_to_menu(&mut self) {
        self.current_state = GameState::Menu;
    }

    /// Only meaningful during play; callers gate this on `is_playing`.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub fn is_menu(&self) -> bool {
        self.current_state == GameState::Menu
    }

    pub fn is_playing(&self) -> bool {
        self.current_state == GameState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.current_state == GameState::GameOver
    }
}
