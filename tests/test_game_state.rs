use space_invaders::game_state::{GameState, GameStateManager};

#[test]
fn starts_in_menu_with_zero_scores() {
    let m = GameStateManager::default();
    assert!(m.is_menu());
    assert_eq!(m.score, 0);
    assert_eq!(m.high_score, 0);
}

#[test]
fn start_game_enters_playing_and_resets_score() {
    let mut m = GameStateManager::default();
    m.start_game();
    m.add_score(500);
    assert!(m.is_playing());
    assert_eq!(m.score, 500);

    m.start_game(); // restart mid-game
    assert!(m.is_playing());
    assert_eq!(m.score, 0);
}

#[test]
fn game_over_promotes_the_high_score() {
    let mut m = GameStateManager::default();
    m.start_game();
    m.add_score(300);
    m.game_over();
    assert!(m.is_game_over());
    assert_eq!(m.high_score, 300);
}

#[test]
fn high_score_never_decreases() {
    let mut m = GameStateManager::default();

    m.start_game();
    m.add_score(300);
    m.game_over();
    assert_eq!(m.high_score, 300);

    // A worse game leaves the record untouched
    m.start_game();
    m.add_score(100);
    m.game_over();
    assert_eq!(m.high_score, 300);
    assert_eq!(m.score, 100);

    // A better one raises it
    m.start_game();
    m.add_score(1000);
    m.game_over();
    assert_eq!(m.high_score, 1000);
}

#[test]
fn high_score_survives_across_states() {
    let mut m = GameStateManager::default();
    m.start_game();
    m.add_score(42);
    m.game_over();
    m.return_to_menu();
    assert!(m.is_menu());
    assert_eq!(m.high_score, 42);

    m.start_game();
    assert_eq!(m.high_score, 42); // only the running score resets
    assert_eq!(m.score, 0);
}

#[test]
fn no_state_is_terminal() {
    let mut m = GameStateManager::new(GameState::GameOver);
    m.start_game();
    assert!(m.is_playing());

    m.return_to_menu();
    assert!(m.is_menu());

    m.change_state(GameState::GameOver);
    assert!(m.is_game_over());
    m.start_game();
    assert!(m.is_playing());
}

#[test]
fn state_queries_are_exclusive() {
    let mut m = GameStateManager::default();
    assert!(m.is_menu() && !m.is_playing() && !m.is_game_over());
    m.start_game();
    assert!(!m.is_menu() && m.is_playing() && !m.is_game_over());
    m.game_over();
    assert!(!m.is_menu() && !m.is_playing() && m.is_game_over());
}
