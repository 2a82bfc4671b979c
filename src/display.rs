/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only projects the
/// 800×450 simulation space onto the terminal grid and translates state
/// into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{
    EnemyKind, GameMode, GameState, Phase, PowerUpKind, Vec2,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_INFO: Color = Color::White;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY_NORMAL: Color = Color::Red;
const C_ENEMY_ELITE: Color = Color::Magenta;
const C_ENEMY_BOSS: Color = Color::DarkYellow;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_POWERUP: Color = Color::Green;
const C_BOMB_RING: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;
const C_GOLD: Color = Color::Yellow;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps simulation coordinates onto the terminal cell grid. Row 0 is the
/// HUD, row 1 and the second-to-last row are the border, the last row is
/// the controls hint; the play field fills the rows between.
struct Viewport {
    cols: u16,
    rows: u16,
    sim_w: f32,
    sim_h: f32,
}

impl Viewport {
    fn new(state: &GameState, cols: u16, rows: u16) -> Self {
        Viewport {
            cols,
            rows,
            sim_w: state.width,
            sim_h: state.height,
        }
    }

    fn field_top(&self) -> u16 {
        2
    }

    fn field_bottom(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    /// Cell for a simulation position, or `None` while the entity is
    /// still outside the visible band (e.g. just spawned above the top).
    fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        let field_rows = self.field_bottom().saturating_sub(self.field_top()) as f32;
        let col = 1.0 + pos.x / self.sim_w * (self.cols.saturating_sub(2) as f32 - 1.0);
        let row = self.field_top() as f32 + pos.y / self.sim_h * field_rows;
        if pos.x < 0.0 || pos.x > self.sim_w || pos.y < 0.0 || pos.y > self.sim_h {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = terminal::size()?;
    let vp = Viewport::new(state, cols, rows);

    match state.phase {
        Phase::Menu => draw_menu(out, state, &vp)?,
        Phase::Instructions => draw_instructions(out, &vp)?,
        Phase::Playing | Phase::Paused => {
            draw_field(out, state, &vp)?;
            if state.phase == Phase::Paused {
                draw_paused(out, &vp)?;
            }
        }
        Phase::GameOver => draw_game_over(out, state, &vp)?,
        Phase::TimeUp => draw_time_up(out, state, &vp)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Play field ────────────────────────────────────────────────────────────────

fn draw_field<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    draw_border(out, vp)?;
    draw_hud(out, state, vp)?;

    for p in state.powerups.iter_active() {
        if let Some((col, row)) = vp.cell(p.pos) {
            let glyph = match p.kind {
                PowerUpKind::Shotgun => "S",
                PowerUpKind::Health => "H",
                PowerUpKind::Bomb => "B",
            };
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_POWERUP))?;
            out.queue(Print(glyph))?;
        }
    }

    for e in state.enemies.iter_active() {
        if let Some((col, row)) = vp.cell(e.pos) {
            let (glyph, color) = match e.kind {
                EnemyKind::Normal => ("▼", C_ENEMY_NORMAL),
                EnemyKind::Elite => ("E", C_ENEMY_ELITE),
                EnemyKind::Boss => ("B", C_ENEMY_BOSS),
            };
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
            // Health readout above anything tougher than a one-hit kill
            if e.max_health > 1 && row > vp.field_top() {
                out.queue(cursor::MoveTo(col, row - 1))?;
                out.queue(style::SetForegroundColor(Color::Green))?;
                out.queue(Print(format!("{}", e.health)))?;
            }
        }
    }

    for b in state.bullets.iter_active() {
        if let Some((col, row)) = vp.cell(b.pos) {
            if b.from_player {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
                out.queue(Print("║"))?;
            } else {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
                out.queue(Print("↓"))?;
            }
        }
    }

    if state.bomb_effect.active {
        draw_bomb_ring(out, state, vp)?;
    }

    if let Some((col, row)) = vp.cell(state.player.pos) {
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("▲"))?;
        if row + 1 <= vp.field_bottom() {
            out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
            out.queue(Print("/|\\"))?;
        }
    }

    draw_controls_hint(out, vp)?;
    Ok(())
}

/// Twelve points around the blast circle; purely cosmetic.
fn draw_bomb_ring<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BOMB_RING))?;
    let fx = &state.bomb_effect;
    for i in 0..12 {
        let angle = i as f32 * std::f32::consts::TAU / 12.0;
        let pos = Vec2::new(
            fx.pos.x + fx.radius * angle.cos(),
            fx.pos.y + fx.radius * angle.sin(),
        );
        if let Some((col, row)) = vp.cell(pos) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("✶"))?;
        }
    }
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..vp.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", state.score)))?;

    // Mode readout — centre
    let mode_str = match state.mode {
        GameMode::Timed => format!("[ TIMED {:>5.1}s ]", state.time_remaining),
        GameMode::Infinite => format!("[ INFINITE  Lv {} ]", state.level),
    };
    let mx = (vp.cols / 2).saturating_sub(mode_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(mx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_INFO))?;
    out.queue(Print(&mode_str))?;

    // Health hearts — right: filled up to current, hollow up to max
    let hearts: String = (0..state.player.max_health)
        .map(|i| if i < state.player.health { '♥' } else { '♡' })
        .collect();
    let bombs = format!("  Bombs: {}", state.player.bombs);
    let right = format!("{}{}", hearts, bombs);
    let rx = vp.cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&right))?;

    // Status banners inside the top border row
    if state.player.has_shotgun {
        out.queue(cursor::MoveTo(1, 1))?;
        out.queue(style::SetForegroundColor(Color::Green))?;
        out.queue(Print(format!(" Shotgun {:.1}s ", state.player.shotgun_timer)))?;
    }
    if state.mode == GameMode::Infinite && state.level % 5 == 0 && !state.boss_alive {
        let banner = " BOSS INCOMING! ";
        let bx = (vp.cols / 2).saturating_sub(banner.len() as u16 / 2);
        out.queue(cursor::MoveTo(bx, 1))?;
        out.queue(style::SetForegroundColor(C_ENEMY_BOSS))?;
        out.queue(Print(banner))?;
    }

    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows: Move   SPACE: Shoot   B: Bomb   P: Pause   Q: Quit"))?;
    Ok(())
}

// ── Centered text helper ──────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    vp: &Viewport,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let col = (vp.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let cy = vp.rows / 2;

    draw_centered(out, vp, cy.saturating_sub(8), Color::Cyan, "★  PLANE  SHOOTER  ★")?;
    draw_centered(out, vp, cy.saturating_sub(6), C_HUD_INFO, "ENTER : start")?;

    let timed = format!(
        "{} T : Timed mode — 60 second sprint",
        if state.mode == GameMode::Timed { "▶" } else { " " }
    );
    let infinite = format!(
        "{} I : Infinite mode — power-ups & bosses",
        if state.mode == GameMode::Infinite { "▶" } else { " " }
    );
    draw_centered(
        out,
        vp,
        cy.saturating_sub(4),
        if state.mode == GameMode::Timed { Color::Green } else { C_HUD_INFO },
        &timed,
    )?;
    draw_centered(
        out,
        vp,
        cy.saturating_sub(3),
        if state.mode == GameMode::Infinite { Color::Green } else { C_HUD_INFO },
        &infinite,
    )?;

    draw_centered(out, vp, cy.saturating_sub(1), C_HINT, "H : how to play    Q : quit")?;

    draw_centered(
        out,
        vp,
        cy + 1,
        C_HUD_SCORE,
        &format!("Timed best: {}", state.high_scores.timed),
    )?;
    draw_centered(
        out,
        vp,
        cy + 2,
        C_HUD_SCORE,
        &format!("Infinite best: {}", state.high_scores.infinite),
    )?;

    if state.achievements.enthusiast {
        draw_centered(out, vp, cy + 4, C_GOLD, "ACHIEVEMENT: FLIGHT ENTHUSIAST")?;
    }
    if state.achievements.ace_pilot {
        draw_centered(out, vp, cy + 5, C_GOLD, "ACHIEVEMENT: ACE PILOT")?;
    }

    Ok(())
}

// ── Instructions ──────────────────────────────────────────────────────────────

fn draw_instructions<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("HOW TO PLAY", Color::Cyan),
        ("", C_HUD_INFO),
        ("Arrow keys move your craft; SPACE fires.", C_HUD_INFO),
        ("B triggers a bomb — damages everything nearby.", C_HUD_INFO),
        ("Timed mode: score as much as you can in 60 seconds.", C_HUD_INFO),
        ("Infinite mode: levels rise each minute; a boss arrives", C_HUD_INFO),
        ("every fifth level. Catch falling power-ups:", C_HUD_INFO),
        ("", C_HUD_INFO),
        ("S — Shotgun: three-way fire for a few seconds", Color::Green),
        ("H — Health: +1 health, or a bigger tank when full", Color::Green),
        ("B — Bomb: one more bomb in reserve", Color::Green),
        ("", C_HUD_INFO),
        ("H or ESC — back to menu", C_HINT),
    ];

    let start = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_centered(out, vp, start + i as u16, *color, text)?;
    }
    Ok(())
}

// ── End screens ───────────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let cy = vp.rows / 2;
    draw_centered(out, vp, cy.saturating_sub(4), Color::Red, "╔══════════════════╗")?;
    draw_centered(out, vp, cy.saturating_sub(3), Color::Red, "║    GAME  OVER    ║")?;
    draw_centered(out, vp, cy.saturating_sub(2), Color::Red, "╚══════════════════╝")?;
    draw_centered(out, vp, cy, C_HUD_SCORE, &format!("Your score: {}", state.score))?;
    draw_centered(
        out,
        vp,
        cy + 1,
        C_HUD_SCORE,
        &format!("Best: {}", state.high_scores.for_mode(state.mode)),
    )?;
    if state.mode == GameMode::Infinite {
        draw_centered(out, vp, cy + 2, C_HUD_INFO, &format!("Level reached: {}", state.level))?;
        if state.achievements.ace_pilot {
            draw_centered(out, vp, cy + 3, C_GOLD, "ACE PILOT ACHIEVED!")?;
        }
    }
    draw_centered(out, vp, cy + 5, C_HUD_INFO, "ENTER — back to menu")?;
    Ok(())
}

fn draw_time_up<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    let cy = vp.rows / 2;
    draw_centered(out, vp, cy.saturating_sub(3), Color::Green, "TIME'S UP!")?;
    draw_centered(out, vp, cy.saturating_sub(1), C_HUD_SCORE, &format!("Your score: {}", state.score))?;
    draw_centered(
        out,
        vp,
        cy,
        C_HUD_SCORE,
        &format!("Timed best: {}", state.high_scores.timed),
    )?;
    draw_centered(out, vp, cy + 2, C_HUD_INFO, "ENTER — back to menu")?;
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let cy = vp.rows / 2;
    draw_centered(out, vp, cy.saturating_sub(1), Color::Cyan, "║  PAUSED  ║")?;
    draw_centered(out, vp, cy + 1, C_HUD_INFO, "P — resume    ESC — menu")?;
    Ok(())
}
