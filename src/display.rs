//! Rendering layer — all terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world. No game logic is performed; this module only projects the logical
//! 800×600 playfield onto the terminal cell grid and translates state into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::alien::Alien;
use crate::barrier::SegmentWear;
use crate::bullet::{Bullet, Heading};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::fire::Strategy;
use crate::world::World;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ALIEN_TOP: Color = Color::Magenta;
const C_ALIEN_MID: Color = Color::Cyan;
const C_ALIEN_BOT: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ALIEN: Color = Color::Red;
const C_BARRIER_FRESH: Color = Color::Green;
const C_BARRIER_WORN: Color = Color::DarkYellow;
const C_BARRIER_CRUMBLING: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Projects logical playfield coordinates onto the cell grid inside the
/// border (columns `1..w-1`, rows `2..h-2`).
#[derive(Clone, Copy)]
struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }

    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let cols = self.width.saturating_sub(2).max(1) as f32;
        let rows = self.height.saturating_sub(4).max(1) as f32;
        let col = 1.0 + (x / SCREEN_WIDTH) * (cols - 1.0);
        let row = 2.0 + (y / SCREEN_HEIGHT) * (rows - 1.0);
        (
            (col as u16).min(self.width.saturating_sub(2)),
            (row as u16).min(self.height.saturating_sub(3)),
        )
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete in-game frame.
pub fn render<W: Write>(
    out: &mut W,
    world: &World,
    term_width: u16,
    term_height: u16,
) -> std::io::Result<()> {
    let view = Viewport::new(term_width, term_height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term_width, term_height)?;
    draw_hud(out, world, term_width)?;

    for alien in world.aliens.active_aliens() {
        draw_alien(out, alien, view)?;
    }
    for segment in world
        .barriers
        .active_barriers()
        .flat_map(|b| b.segments().iter())
    {
        let (col, row) = view.cell(segment.body.x, segment.body.y);
        let color = match segment.wear() {
            SegmentWear::Fresh => C_BARRIER_FRESH,
            SegmentWear::Worn => C_BARRIER_WORN,
            SegmentWear::Crumbling => C_BARRIER_CRUMBLING,
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print("█"))?;
    }
    for bullet in world.player.active_bullets() {
        draw_bullet(out, bullet, view)?;
    }
    for bullet in world.aliens.active_bullets() {
        draw_bullet(out, bullet, view)?;
    }

    draw_player(out, world, view)?;
    draw_controls_hint(out, term_height)?;

    if world.won {
        draw_overlay(
            out,
            term_width,
            term_height,
            "WAVE  CLEARED",
            Color::Green,
            &format!("Score: {:>6}", world.state.score),
            "ENTER - Next Wave  Q - Quit",
        )?;
    } else if world.state.is_game_over() {
        draw_overlay(
            out,
            term_width,
            term_height,
            "GAME  OVER",
            Color::Red,
            &format!(
                "Score: {:>6}   Best: {:>6}",
                world.state.score, world.state.high_score
            ),
            "ENTER - Play Again  M - Menu  Q - Quit",
        )?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Render the menu screen.
pub fn render_menu<W: Write>(
    out: &mut W,
    term_width: u16,
    term_height: u16,
    high_score: u32,
    strategy: Option<Strategy>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = term_width / 2;
    let cy = term_height / 2;

    let title = "★  SPACE  INVADERS  ★";
    centered(out, cx, cy.saturating_sub(8), title, Color::Cyan)?;

    if high_score > 0 {
        let hs = format!("Best Score: {}", high_score);
        centered(out, cx, cy.saturating_sub(7), &hs, Color::Yellow)?;
    }

    centered(
        out,
        cx,
        cy.saturating_sub(5),
        "Alien firing strategy:",
        Color::White,
    )?;

    let row_based = match strategy {
        None => Color::Green,
        Some(_) => Color::DarkGrey,
    };
    centered(out, cx, cy.saturating_sub(4), "[0] Row-Based (default)", row_based)?;
    for (i, s) in Strategy::ALL.iter().enumerate() {
        let color = if strategy == Some(*s) {
            Color::Green
        } else {
            Color::DarkGrey
        };
        let line = format!("[{}] {}", i + 1, s.label());
        centered(out, cx, cy.saturating_sub(3) + i as u16, &line, color)?;
    }

    centered(out, cx, cy + 4, "ENTER : Start   Q : Quit", Color::White)?;
    centered(out, cx, cy + 5, "← → / A D : Move   SPACE : Shoot", C_HINT)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn centered<W: Write>(
    out: &mut W,
    cx: u16,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, w: u16, h: u16) -> std::io::Result<()> {
    let inner = (w as usize).saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World, w: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if world.state.high_score > 0 {
        out.queue(Print(format!(
            "Score:{:>6}  Hi:{:>6}",
            world.state.score, world.state.high_score
        )))?;
    } else {
        out.queue(Print(format!("Score:{:>6}", world.state.score)))?;
    }

    let hearts: String = "♥".repeat(world.player.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = w.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, world: &World, view: Viewport) -> std::io::Result<()> {
    let p = &world.player;
    if !p.body.active {
        return Ok(());
    }
    // Flicker while invulnerable: hidden every other pair of frames. Purely
    // cosmetic — damage immunity does not depend on the visible phase.
    if p.is_invulnerable() && world.frame % 4 >= 2 {
        return Ok(());
    }

    let (col, row) = view.cell(p.body.x + p.body.width / 2.0, p.body.y);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
    out.queue(Print("/█\\"))?;

    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, alien: &Alien, view: Viewport) -> std::io::Result<()> {
    // Sprite and colour follow the row's point value; the top row is worth
    // the most.
    let (sprite, color) = match alien.points {
        30 => ("{@}", C_ALIEN_TOP),
        20 => ("<$>", C_ALIEN_MID),
        _ => ("/o\\", C_ALIEN_BOT),
    };
    let (col, row) = view.cell(alien.body.x + alien.body.width / 2.0, alien.body.y);
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, view: Viewport) -> std::io::Result<()> {
    let (col, row) = view.cell(bullet.body.x + bullet.body.width / 2.0, bullet.body.y);
    out.queue(cursor::MoveTo(col, row))?;
    match bullet.heading() {
        Heading::Up => {
            out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
            out.queue(Print("║"))?;
        }
        Heading::Down => {
            out.queue(style::SetForegroundColor(C_BULLET_ALIEN))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, h: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(
    out: &mut W,
    w: u16,
    h: u16,
    title: &str,
    title_color: Color,
    score_line: &str,
    hint: &str,
) -> std::io::Result<()> {
    let cx = w / 2;
    let start_row = (h / 2).saturating_sub(2);

    let box_width = title.chars().count() + 6;
    let top = format!("╔{}╗", "═".repeat(box_width));
    let mid = format!("║   {}   ║", title);
    let bottom = format!("╚{}╝", "═".repeat(box_width));

    centered(out, cx, start_row, &top, title_color)?;
    centered(out, cx, start_row + 1, &mid, title_color)?;
    centered(out, cx, start_row + 2, &bottom, title_color)?;
    centered(out, cx, start_row + 3, score_line, Color::Yellow)?;
    centered(out, cx, start_row + 4, hint, Color::White)?;

    Ok(())
}
