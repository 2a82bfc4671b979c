/// Game-state machine and per-frame orchestration.
///
/// `step` is the single entry point the frame loop calls: it dispatches on
/// the current phase, applies this frame's input, and — while Playing —
/// runs the full tick (clocks, player actions, spawns, kinematics,
/// collisions, achievements). All randomness comes through the injected
/// `rng` and all timing through `dt`, so a sequence of `step` calls with
/// fixed inputs is fully reproducible.

use rand::Rng;

use crate::collision;
use crate::entities::{
    BombEffect, GameMode, GameState, InputFrame, Phase, Player, Vec2, MAX_BULLETS, MAX_ENEMIES,
    MAX_POWERUPS,
};
use crate::pool::Pool;
use crate::spawn::{self, fire_bullet};
use crate::update;

// ── Clocks & thresholds ──────────────────────────────────────────────────────

/// Length of a Timed-mode run.
pub const TIMED_DURATION: f32 = 60.0;
/// Infinite mode gains a level each time this many seconds elapse.
const LEVEL_UP_INTERVAL: f32 = 60.0;
const ACE_PILOT_SCORE: u32 = 3000;
const ENTHUSIAST_GAMES: u32 = 10;

// ── Player tuning ────────────────────────────────────────────────────────────

const PLAYER_RADIUS: f32 = 20.0;
/// Movement step per frame while a direction key is held.
const PLAYER_STEP: f32 = 5.0;
const PLAYER_START_HEALTH: i32 = 3;
const PLAYER_MAX_HEALTH: i32 = 5;
const PLAYER_START_BOMBS: u32 = 1;
const PLAYER_MAX_BOMBS: u32 = 3;
const BOMB_DAMAGE: i32 = 5;

const PLAYER_BULLET_SPEED: f32 = 10.0;
const PLAYER_BULLET_RADIUS: f32 = 5.0;
/// Bullets leave from this far above the craft's center.
const MUZZLE_OFFSET: f32 = 20.0;
/// Column spacing of the three-way shotgun spread.
const SHOTGUN_SPREAD: f32 = 15.0;

// ── Constructors ─────────────────────────────────────────────────────────────

fn new_player(width: f32, height: f32) -> Player {
    Player {
        pos: Vec2::new(width / 2.0, height - 30.0),
        vel: Vec2::new(PLAYER_STEP, PLAYER_STEP),
        radius: PLAYER_RADIUS,
        health: PLAYER_START_HEALTH,
        max_health: PLAYER_MAX_HEALTH,
        has_shotgun: false,
        shotgun_timer: 0.0,
        bombs: PLAYER_START_BOMBS,
        max_bombs: PLAYER_MAX_BOMBS,
        bomb_damage: BOMB_DAMAGE,
    }
}

/// Fresh state sitting at the menu.
pub fn init_state(width: f32, height: f32) -> GameState {
    GameState {
        phase: Phase::Menu,
        mode: GameMode::Timed,
        player: new_player(width, height),
        bullets: Pool::with_capacity(MAX_BULLETS),
        enemies: Pool::with_capacity(MAX_ENEMIES),
        powerups: Pool::with_capacity(MAX_POWERUPS),
        bomb_effect: BombEffect::default(),
        score: 0,
        level: 1,
        boss_alive: false,
        enemy_spawn_timer: 0.0,
        elite_spawn_timer: 0.0,
        boss_spawn_timer: 0.0,
        powerup_spawn_timer: 0.0,
        time_elapsed: 0.0,
        time_remaining: TIMED_DURATION,
        minute_timer: 0.0,
        high_scores: Default::default(),
        achievements: Default::default(),
        width,
        height,
    }
}

/// Wipe one run's worth of state, keeping high scores and achievements.
pub fn reset_run(state: &mut GameState) {
    state.player = new_player(state.width, state.height);
    state.bullets.clear();
    state.enemies.clear();
    state.powerups.clear();
    state.bomb_effect = BombEffect::default();
    state.score = 0;
    state.level = 1;
    state.boss_alive = false;
    state.enemy_spawn_timer = 0.0;
    state.elite_spawn_timer = 0.0;
    state.boss_spawn_timer = 0.0;
    state.powerup_spawn_timer = 0.0;
    state.time_elapsed = 0.0;
    state.time_remaining = TIMED_DURATION;
    state.minute_timer = 0.0;
}

// ── Phase dispatch ───────────────────────────────────────────────────────────

/// Advance the whole game by one frame.
pub fn step(state: &mut GameState, input: &InputFrame, dt: f32, rng: &mut impl Rng) {
    match state.phase {
        Phase::Menu => {
            if input.select_timed {
                state.mode = GameMode::Timed;
            }
            if input.select_infinite {
                state.mode = GameMode::Infinite;
            }
            if input.toggle_instructions {
                state.phase = Phase::Instructions;
            } else if input.confirm {
                state.achievements.games_played += 1;
                if state.achievements.games_played >= ENTHUSIAST_GAMES {
                    state.achievements.enthusiast = true;
                }
                reset_run(state);
                state.phase = Phase::Playing;
            }
        }
        Phase::Instructions => {
            if input.toggle_instructions || input.back || input.confirm {
                state.phase = Phase::Menu;
            }
        }
        Phase::Playing => {
            if input.pause {
                state.phase = Phase::Paused;
            } else {
                tick_playing(state, input, dt, rng);
            }
        }
        Phase::Paused => {
            if input.pause {
                state.phase = Phase::Playing;
            } else if input.back {
                state.phase = Phase::Menu;
            }
        }
        Phase::GameOver | Phase::TimeUp => {
            if input.confirm {
                state.phase = Phase::Menu;
            }
        }
    }
}

// ── The Playing tick ─────────────────────────────────────────────────────────

fn tick_playing(state: &mut GameState, input: &InputFrame, dt: f32, rng: &mut impl Rng) {
    advance_clocks(state, dt);
    if state.phase != Phase::Playing {
        // Timed countdown expired this frame
        return;
    }

    move_player(state, input);
    if input.fire {
        player_fire(state);
    }
    if input.bomb {
        collision::trigger_bomb(state);
    }

    spawn::run(state, dt, rng);
    update::run(state, dt);
    collision::resolve(state);

    check_achievements(state);
}

/// Mode clock: the Timed countdown, or the Infinite level-up minute.
fn advance_clocks(state: &mut GameState, dt: f32) {
    match state.mode {
        GameMode::Timed => {
            state.time_elapsed += dt;
            state.time_remaining = TIMED_DURATION - state.time_elapsed;
            if state.time_remaining <= 0.0 {
                state.time_remaining = 0.0;
                state.high_scores.commit(GameMode::Timed, state.score);
                state.phase = Phase::TimeUp;
            }
        }
        GameMode::Infinite => {
            state.minute_timer += dt;
            if state.minute_timer >= LEVEL_UP_INTERVAL {
                state.minute_timer = 0.0;
                state.level += 1;
            }
        }
    }
}

fn move_player(state: &mut GameState, input: &InputFrame) {
    let p = &mut state.player;
    if input.left {
        p.pos.x -= p.vel.x;
    }
    if input.right {
        p.pos.x += p.vel.x;
    }
    if input.up {
        p.pos.y -= p.vel.y;
    }
    if input.down {
        p.pos.y += p.vel.y;
    }
    p.pos.x = p.pos.x.clamp(p.radius, state.width - p.radius);
    p.pos.y = p.pos.y.clamp(p.radius, state.height - p.radius);
}

/// Fire from the player's craft: one bullet, or the three-way spread
/// while the shotgun pickup is live.
pub fn player_fire(state: &mut GameState) {
    let muzzle_y = state.player.pos.y - MUZZLE_OFFSET;
    let vel = Vec2::new(0.0, -PLAYER_BULLET_SPEED);
    if state.player.has_shotgun {
        for k in -1..=1 {
            let pos = Vec2::new(state.player.pos.x + k as f32 * SHOTGUN_SPREAD, muzzle_y);
            fire_bullet(&mut state.bullets, pos, vel, PLAYER_BULLET_RADIUS, true);
        }
    } else {
        let pos = Vec2::new(state.player.pos.x, muzzle_y);
        fire_bullet(&mut state.bullets, pos, vel, PLAYER_BULLET_RADIUS, true);
    }
}

fn check_achievements(state: &mut GameState) {
    if state.mode == GameMode::Infinite
        && state.score >= ACE_PILOT_SCORE
        && !state.achievements.ace_pilot
    {
        state.achievements.ace_pilot = true;
    }
}
