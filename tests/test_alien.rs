use space_invaders::alien::{Alien, AlienGroup, AlienId};
use space_invaders::config::{
    ALIEN_HEIGHT, ALIEN_HORIZONTAL_SPEED, ALIEN_VERTICAL_SPEED, ALIEN_WIDTH, SCREEN_WIDTH,
};
use space_invaders::fire::{FireControl, Strategy, WorldSnapshot};

// ── Fire-control stubs ────────────────────────────────────────────────────────

struct NeverFire;

impl FireControl for NeverFire {
    fn update_state(&mut self, _snapshot: &WorldSnapshot) {}
    fn should_fire(&mut self, _alien: AlienId) -> bool {
        false
    }
    fn set_strategy(&mut self, _strategy: Option<Strategy>) {}
}

struct AlwaysFire;

impl FireControl for AlwaysFire {
    fn update_state(&mut self, _snapshot: &WorldSnapshot) {}
    fn should_fire(&mut self, _alien: AlienId) -> bool {
        true
    }
    fn set_strategy(&mut self, _strategy: Option<Strategy>) {}
}

// ── Single alien ──────────────────────────────────────────────────────────────

#[test]
fn points_follow_the_row_table() {
    let points: Vec<u32> = (0..7)
        .map(|row| Alien::new(0.0, 0.0, row, 0, AlienId(1)).points)
        .collect();
    assert_eq!(points, vec![30, 20, 20, 10, 10, 10, 10]); // rows 5+ use the default
}

#[test]
fn should_reverse_only_at_edge_in_travel_direction() {
    // Fresh aliens travel right
    let mut a = Alien::new(0.0, 100.0, 0, 0, AlienId(1));
    assert!(!a.should_reverse()); // left edge, but moving right

    a.body.x = SCREEN_WIDTH - ALIEN_WIDTH;
    assert!(a.should_reverse()); // right edge, moving right

    a.reverse_direction();
    assert!(!a.should_reverse()); // right edge, but now moving left

    a.body.x = 0.0;
    assert!(a.should_reverse()); // left edge, moving left
}

#[test]
fn bullet_leaves_bottom_center() {
    let a = Alien::new(100.0, 200.0, 0, 0, AlienId(1));
    let b = a.create_bullet();
    assert_eq!(
        b.body.x + b.body.width / 2.0,
        100.0 + ALIEN_WIDTH / 2.0
    );
    assert_eq!(b.body.y, 200.0 + ALIEN_HEIGHT);
}

// ── Grid construction ─────────────────────────────────────────────────────────

#[test]
fn grid_is_row_major_with_monotonic_ids() {
    let group = AlienGroup::new(5, 11, 50.0, 110.0, 10.0, 10.0);
    assert_eq!(group.aliens().len(), 55);

    for (i, alien) in group.aliens().iter().enumerate() {
        assert_eq!(alien.id, AlienId(i as u32 + 1));
        assert_eq!(alien.row, i / 11);
        assert_eq!(alien.col, i % 11);
        let expected_x = 50.0 + (i % 11) as f32 * (ALIEN_WIDTH + 10.0);
        let expected_y = 110.0 + (i / 11) as f32 * (ALIEN_HEIGHT + 10.0);
        assert_eq!(alien.body.x, expected_x);
        assert_eq!(alien.body.y, expected_y);
    }
}

// ── Group movement ────────────────────────────────────────────────────────────

#[test]
fn no_edge_contact_means_no_reversal_and_no_descent() {
    let mut group = AlienGroup::new(1, 2, 100.0, 110.0, 10.0, 10.0);
    let ys: Vec<f32> = group.aliens().iter().map(|a| a.body.y).collect();

    group.update(&mut NeverFire);

    for (alien, y0) in group.aliens().iter().zip(&ys) {
        assert_eq!(alien.direction(), 1.0);
        assert_eq!(alien.body.y, *y0); // no descent
    }
    assert_eq!(group.aliens()[0].body.x, 100.0 + ALIEN_HORIZONTAL_SPEED);
}

#[test]
fn edge_contact_reverses_and_descends_the_whole_group() {
    // 1×2 wave with the rightmost alien flush against the right edge
    let start_x = SCREEN_WIDTH - ALIEN_WIDTH - (ALIEN_WIDTH + 10.0);
    let mut group = AlienGroup::new(1, 2, start_x, 110.0, 10.0, 10.0);
    assert_eq!(
        group.aliens()[1].body.x,
        SCREEN_WIDTH - ALIEN_WIDTH
    );

    let xs: Vec<f32> = group.aliens().iter().map(|a| a.body.x).collect();
    group.update(&mut NeverFire);

    for (alien, x0) in group.aliens().iter().zip(&xs) {
        assert_eq!(alien.direction(), -1.0); // every alien flipped
        assert_eq!(alien.body.y, 110.0 + ALIEN_VERTICAL_SPEED); // every alien stepped down
        assert_eq!(alien.body.x, x0 - ALIEN_HORIZONTAL_SPEED); // then stepped left
    }
}

#[test]
fn reversal_is_a_single_group_wide_trigger() {
    // Both aliens past the right edge at once: the flip happens exactly once,
    // not once per triggering alien
    let mut group = AlienGroup::new(1, 2, SCREEN_WIDTH - ALIEN_WIDTH, 110.0, 10.0, 10.0);
    group.update(&mut NeverFire);
    for alien in group.aliens() {
        assert_eq!(alien.direction(), -1.0);
        assert_eq!(alien.body.y, 110.0 + ALIEN_VERTICAL_SPEED); // one descent, not two
    }
}

#[test]
fn inactive_aliens_do_not_trigger_or_move() {
    let mut group = AlienGroup::new(1, 2, 100.0, 110.0, 10.0, 10.0);
    // Park the second alien on the edge, then kill it
    group.aliens_mut()[1].body.x = SCREEN_WIDTH - ALIEN_WIDTH;
    group.aliens_mut()[1].body.deactivate();

    group.update(&mut NeverFire);

    // The dead alien can no longer trigger a reversal
    assert_eq!(group.aliens()[0].direction(), 1.0);
    assert_eq!(group.aliens()[0].body.y, 110.0);
    // And it did not move either
    assert_eq!(group.aliens()[1].body.x, SCREEN_WIDTH - ALIEN_WIDTH);
}

// ── Firing & bullets ──────────────────────────────────────────────────────────

#[test]
fn each_active_alien_asks_the_fire_control() {
    let mut group = AlienGroup::new(1, 3, 100.0, 110.0, 10.0, 10.0);
    group.aliens_mut()[1].body.deactivate();

    group.update(&mut AlwaysFire);
    assert_eq!(group.bullets().len(), 2); // only the two live aliens fired

    group.update(&mut NeverFire);
    assert_eq!(group.bullets().len(), 2); // no new shots
}

#[test]
fn group_bullets_advance_and_prune() {
    let mut group = AlienGroup::new(1, 1, 100.0, 110.0, 10.0, 10.0);
    group.update(&mut AlwaysFire);
    assert_eq!(group.active_bullets().count(), 1);

    // Let the bullet fall off the bottom of the screen; it gets pruned
    for _ in 0..60 {
        group.update(&mut NeverFire);
    }
    assert!(group.bullets().is_empty());
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[test]
fn is_empty_tracks_active_aliens() {
    let mut group = AlienGroup::new(1, 2, 100.0, 110.0, 10.0, 10.0);
    assert!(!group.is_empty());

    for alien in group.aliens_mut() {
        alien.body.deactivate();
    }
    assert!(group.is_empty());
    assert_eq!(group.active_aliens().count(), 0);
}

#[test]
fn reached_bottom_uses_the_bottom_edge() {
    let mut group = AlienGroup::new(1, 1, 100.0, 110.0, 10.0, 10.0);
    assert!(!group.reached_bottom(550.0));

    group.aliens_mut()[0].body.y = 550.0 - ALIEN_HEIGHT;
    assert!(group.reached_bottom(550.0)); // bottom edge exactly at the line

    group.aliens_mut()[0].body.deactivate();
    assert!(!group.reached_bottom(550.0)); // dead aliens don't count
}
