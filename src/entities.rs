/// All game entity types — pure data, no logic.

use crate::pool::{Pool, Slot};

// ── Play area & pool capacities ───────────────────────────────────────────────

/// Simulation space, in abstract units. The renderer maps this onto
/// whatever grid it has; the core never thinks in pixels or cells.
pub const PLAY_WIDTH: f32 = 800.0;
pub const PLAY_HEIGHT: f32 = 450.0;

pub const MAX_BULLETS: usize = 200;
pub const MAX_ENEMIES: usize = 15;
pub const MAX_POWERUPS: usize = 5;

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Instructions,
    Playing,
    Paused,
    GameOver,
    TimeUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// 60-second countdown; no power-ups, no bosses.
    Timed,
    /// Endless; level rises every minute, with power-ups and periodic bosses.
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EnemyKind {
    #[default]
    Normal,
    Elite,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerUpKind {
    /// Three-way spread fire for the pickup's duration.
    #[default]
    Shotgun,
    /// +1 health, or +1 max health (refilled) when already full.
    Health,
    /// +1 stored bomb, up to the carry limit.
    Bomb,
}

// ── Vector ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

// ── Pooled entities ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    pub from_player: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    pub health: i32,
    pub max_health: i32,
    pub kind: EnemyKind,
    /// Accumulates elapsed seconds; fires when it reaches `shoot_interval`.
    /// Zero interval means the enemy never shoots (all Normal enemies).
    pub shoot_timer: f32,
    pub shoot_interval: f32,
    pub score_value: u32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    pub kind: PowerUpKind,
    /// Effect length in seconds, handed to the player on pickup.
    pub duration: f32,
}

/// The single area-damage pulse. Damage is dealt in full at trigger time;
/// this slot only tracks the cosmetic ring while `timer` runs down.
#[derive(Clone, Copy, Debug, Default)]
pub struct BombEffect {
    pub pos: Vec2,
    pub radius: f32,
    pub timer: f32,
    pub active: bool,
}

impl Slot for Bullet {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Slot for PowerUp {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    /// Movement step per frame while a direction key is held.
    pub vel: Vec2,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    pub has_shotgun: bool,
    /// Seconds of spread fire remaining.
    pub shotgun_timer: f32,
    pub bombs: u32,
    pub max_bombs: u32,
    pub bomb_damage: i32,
}

// ── Meta state ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct HighScores {
    pub timed: u32,
    pub infinite: u32,
}

impl HighScores {
    /// Record `score` for `mode` if it beats the stored best.
    pub fn commit(&mut self, mode: GameMode, score: u32) {
        let best = match mode {
            GameMode::Timed => &mut self.timed,
            GameMode::Infinite => &mut self.infinite,
        };
        if score > *best {
            *best = score;
        }
    }

    pub fn for_mode(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Timed => self.timed,
            GameMode::Infinite => self.infinite,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Achievements {
    /// Reached 3000 points in Infinite mode.
    pub ace_pilot: bool,
    /// Started at least 10 games this session.
    pub enthusiast: bool,
    pub games_played: u32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One frame's worth of input, already reduced to game actions.
/// The `*_pressed`-style fields are edge-triggered (seen this frame only);
/// the direction fields reflect keys currently held.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    pub confirm: bool,
    pub pause: bool,
    pub fire: bool,
    pub bomb: bool,
    pub select_timed: bool,
    pub select_infinite: bool,
    pub toggle_instructions: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole simulation context. Owned by the frame loop and threaded
/// through every update call; no component keeps hidden state of its own,
/// which is what makes ticks reproducible under injected dt and RNG.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: Phase,
    pub mode: GameMode,
    pub player: Player,

    pub bullets: Pool<Bullet>,
    pub enemies: Pool<Enemy>,
    pub powerups: Pool<PowerUp>,
    pub bomb_effect: BombEffect,

    pub score: u32,
    pub level: i32,
    /// True while a boss is on screen. Suppresses difficulty scaling,
    /// elite spawns and power-up drops until the boss is gone.
    pub boss_alive: bool,

    // Spawn timers — seconds since each category last fired
    pub enemy_spawn_timer: f32,
    pub elite_spawn_timer: f32,
    pub boss_spawn_timer: f32,
    pub powerup_spawn_timer: f32,

    // Timed mode
    pub time_elapsed: f32,
    pub time_remaining: f32,
    // Infinite mode: seconds into the current level's minute
    pub minute_timer: f32,

    pub high_scores: HighScores,
    pub achievements: Achievements,

    pub width: f32,
    pub height: f32,
}
