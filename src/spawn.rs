/// Spawn direction — when and with what stats new entities materialize.
///
/// Every category runs off its own interval timer accumulated in real
/// seconds. A timer that reaches its interval resets whether or not a free
/// pool slot exists: a full pool drops the spawn, it does not defer it.

use rand::Rng;

use crate::entities::{
    Bullet, Enemy, EnemyKind, GameMode, GameState, PowerUp, PowerUpKind, Vec2,
};
use crate::pool::Pool;

// ── Intervals (seconds) ──────────────────────────────────────────────────────

pub const ENEMY_SPAWN_INTERVAL: f32 = 1.5;
pub const ELITE_SPAWN_INTERVAL: f32 = 15.0;
pub const BOSS_SPAWN_INTERVAL: f32 = 30.0;
pub const POWERUP_SPAWN_INTERVAL: f32 = 10.0;

/// Seconds of effect a power-up grants on pickup.
pub const POWERUP_DURATION: f32 = 5.0;

/// Horizontal margin kept clear at both edges when rolling a spawn column.
const SPAWN_MARGIN: i32 = 20;
/// Spawn row just above the visible area.
const SPAWN_Y: f32 = -20.0;

// ── Stat tables ──────────────────────────────────────────────────────────────

/// Normal enemies scale with level in Infinite mode, but fall back to
/// 1 HP while a boss is up so the boss stays the fight's centerpiece.
pub fn normal_health(mode: GameMode, level: i32, boss_alive: bool) -> i32 {
    match mode {
        GameMode::Timed => 1,
        GameMode::Infinite => {
            if boss_alive {
                1
            } else {
                level
            }
        }
    }
}

pub fn elite_health(mode: GameMode, level: i32) -> i32 {
    match mode {
        GameMode::Timed => 2,
        GameMode::Infinite => 3 + level / 2,
    }
}

pub fn boss_health(level: i32) -> i32 {
    10 + (level / 5 - 1) * 10
}

pub fn boss_score(level: i32) -> u32 {
    (100 + (level / 5) * 50) as u32
}

/// Whether the elite timer may accumulate this frame.
///
/// Timed mode re-rolls a fresh percentage every frame, so the 15-second
/// timer counts only on frames that pass the 5% roll; the stop-start
/// accumulation this produces is the intended pacing. Infinite mode gates
/// on level instead, and stands down entirely while a boss is up.
pub fn elite_gate(mode: GameMode, level: i32, boss_alive: bool, roll: u32) -> bool {
    match mode {
        GameMode::Timed => roll < 5,
        GameMode::Infinite => level >= 2 && !boss_alive,
    }
}

// ── Per-frame driver ─────────────────────────────────────────────────────────

/// Advance all spawn timers by `dt` and materialize whatever came due.
pub fn run(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    // Normal enemies
    state.enemy_spawn_timer += dt;
    if state.enemy_spawn_timer >= ENEMY_SPAWN_INTERVAL {
        state.enemy_spawn_timer = 0.0;
        spawn_normal(state, rng);
    }

    // Elites — the timer only counts on frames where the gate holds
    let roll = match state.mode {
        GameMode::Timed => rng.gen_range(0..100),
        GameMode::Infinite => 0,
    };
    if elite_gate(state.mode, state.level, state.boss_alive, roll) {
        state.elite_spawn_timer += dt;
        if state.elite_spawn_timer >= ELITE_SPAWN_INTERVAL {
            state.elite_spawn_timer = 0.0;
            spawn_elite(state, rng);
        }
    }

    // Boss — Infinite mode, every fifth level, one at a time
    if state.mode == GameMode::Infinite && state.level % 5 == 0 && !state.boss_alive {
        state.boss_spawn_timer += dt;
        if state.boss_spawn_timer >= BOSS_SPAWN_INTERVAL {
            state.boss_spawn_timer = 0.0;
            spawn_boss(state, rng);
        }
    }

    // Power-ups — Infinite mode only, paused while a boss is up
    if state.mode == GameMode::Infinite && !state.boss_alive {
        state.powerup_spawn_timer += dt;
        if state.powerup_spawn_timer >= POWERUP_SPAWN_INTERVAL {
            state.powerup_spawn_timer = 0.0;
            spawn_powerup(state, rng);
        }
    }
}

// ── Materializers ────────────────────────────────────────────────────────────

fn spawn_column(width: f32, rng: &mut impl Rng) -> f32 {
    rng.gen_range(SPAWN_MARGIN..=(width as i32 - SPAWN_MARGIN)) as f32
}

fn spawn_normal(state: &mut GameState, rng: &mut impl Rng) {
    let x = spawn_column(state.width, rng);
    let vy = rng.gen_range(2..=5) as f32;
    let health = normal_health(state.mode, state.level, state.boss_alive);
    if let Some(slot) = state.enemies.acquire() {
        *slot = Enemy {
            pos: Vec2::new(x, SPAWN_Y),
            vel: Vec2::new(0.0, vy),
            radius: 15.0,
            active: true,
            health,
            max_health: health,
            kind: EnemyKind::Normal,
            shoot_timer: 0.0,
            shoot_interval: 0.0, // normals never fire
            score_value: 10,
        };
    }
}

fn spawn_elite(state: &mut GameState, rng: &mut impl Rng) {
    let x = spawn_column(state.width, rng);
    let vy = rng.gen_range(2..=4) as f32;
    let health = elite_health(state.mode, state.level);
    if let Some(slot) = state.enemies.acquire() {
        *slot = Enemy {
            pos: Vec2::new(x, SPAWN_Y),
            vel: Vec2::new(0.0, vy),
            radius: 18.0,
            active: true,
            health,
            max_health: health,
            kind: EnemyKind::Elite,
            shoot_timer: 0.0,
            shoot_interval: 2.0,
            score_value: 25,
        };
    }
}

fn spawn_boss(state: &mut GameState, rng: &mut impl Rng) {
    let vx = rng.gen_range(-2..=2) as f32;
    let health = boss_health(state.level);
    let score_value = boss_score(state.level);
    if let Some(slot) = state.enemies.acquire() {
        *slot = Enemy {
            pos: Vec2::new(state.width / 2.0, -50.0),
            vel: Vec2::new(vx, 1.0),
            radius: 30.0,
            active: true,
            health,
            max_health: health,
            kind: EnemyKind::Boss,
            shoot_timer: 0.0,
            shoot_interval: 1.5,
            score_value,
        };
        state.boss_alive = true;
    }
}

/// Fire one bullet into the shared pool; a full pool swallows the shot.
/// Used by the player's trigger and by enemy attack timers alike.
pub fn fire_bullet(bullets: &mut Pool<Bullet>, pos: Vec2, vel: Vec2, radius: f32, from_player: bool) {
    if let Some(slot) = bullets.acquire() {
        *slot = Bullet {
            pos,
            vel,
            radius,
            active: true,
            from_player,
        };
    }
}

fn spawn_powerup(state: &mut GameState, rng: &mut impl Rng) {
    let x = spawn_column(state.width, rng);
    let kind = match rng.gen_range(0..3) {
        0 => PowerUpKind::Shotgun,
        1 => PowerUpKind::Health,
        _ => PowerUpKind::Bomb,
    };
    if let Some(slot) = state.powerups.acquire() {
        *slot = PowerUp {
            pos: Vec2::new(x, SPAWN_Y),
            vel: Vec2::new(0.0, 3.0),
            radius: 10.0,
            active: true,
            kind,
            duration: POWERUP_DURATION,
        };
    }
}
