/// Pairwise circle collision and combat resolution.
///
/// All hits reduce to one predicate: two circles collide when the squared
/// distance between centers is under the squared sum of radii. Resolution
/// runs in a fixed order every frame — player bullets against enemies,
/// enemy bullets against the player, enemy bodies against the player, then
/// power-up pickups — so outcomes are reproducible for a given layout.

use crate::entities::{EnemyKind, GameMode, GameState, Phase, Player, PowerUpKind, Vec2};
use crate::pool::Slot;

/// Blast radius of the player's bomb pulse.
pub const BOMB_RADIUS: f32 = 150.0;
/// Seconds the spent pulse's ring stays on screen. Cosmetic only; the
/// damage has already landed when the ring appears.
pub const BOMB_EFFECT_DURATION: f32 = 0.5;

/// Squared-distance circle overlap test, no square root needed.
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy < (ra + rb) * (ra + rb)
}

/// Run the frame's collision passes and apply their consequences.
pub fn resolve(state: &mut GameState) {
    let GameState {
        ref mut bullets,
        ref mut enemies,
        ref mut powerups,
        ref mut player,
        ref mut score,
        ref mut boss_alive,
        ..
    } = *state;

    // 1. Player bullets vs enemies. A bullet dies on its first hit, so it
    //    can damage at most one enemy per frame.
    for b in bullets.iter_active_mut().filter(|b| b.from_player) {
        for e in enemies.iter_active_mut() {
            if circles_overlap(b.pos, b.radius, e.pos, e.radius) {
                b.deactivate();
                e.health -= 1;
                if e.health <= 0 {
                    e.deactivate();
                    *score += e.score_value;
                    if e.kind == EnemyKind::Boss {
                        *boss_alive = false;
                    }
                }
                break;
            }
        }
    }

    // 2. Enemy bullets vs player
    for b in bullets.iter_active_mut().filter(|b| !b.from_player) {
        if circles_overlap(player.pos, player.radius, b.pos, b.radius) {
            b.deactivate();
            player.health -= 1;
        }
    }

    // 3. Enemy bodies vs player — ramming costs the enemy its slot too
    for e in enemies.iter_active_mut() {
        if circles_overlap(player.pos, player.radius, e.pos, e.radius) {
            e.deactivate();
            if e.kind == EnemyKind::Boss {
                *boss_alive = false;
            }
            player.health -= 1;
        }
    }

    // 4. Power-up pickups
    for p in powerups.iter_active_mut() {
        if circles_overlap(player.pos, player.radius, p.pos, p.radius) {
            p.deactivate();
            apply_powerup(player, p.kind, p.duration);
        }
    }

    if player.health <= 0 {
        if state.mode == GameMode::Infinite {
            state.high_scores.commit(state.mode, state.score);
        }
        state.phase = Phase::GameOver;
    }
}

fn apply_powerup(player: &mut Player, kind: PowerUpKind, duration: f32) {
    match kind {
        PowerUpKind::Shotgun => {
            player.has_shotgun = true;
            player.shotgun_timer = duration;
        }
        PowerUpKind::Health => {
            if player.health < player.max_health {
                player.health += 1;
            } else {
                player.max_health += 1;
                player.health = player.max_health;
            }
        }
        PowerUpKind::Bomb => {
            if player.bombs < player.max_bombs {
                player.bombs += 1;
            }
        }
    }
}

/// Detonate one stored bomb at the player's position. Damage lands in
/// full right now on every enemy overlapping the blast circle; only the
/// ring's display timer is left for the kinematic pass to run down.
pub fn trigger_bomb(state: &mut GameState) {
    if state.player.bombs == 0 {
        return;
    }
    state.player.bombs -= 1;

    let center = state.player.pos;
    let damage = state.player.bomb_damage;
    state.bomb_effect.pos = center;
    state.bomb_effect.radius = BOMB_RADIUS;
    state.bomb_effect.timer = BOMB_EFFECT_DURATION;
    state.bomb_effect.active = true;

    let GameState {
        ref mut enemies,
        ref mut score,
        ref mut boss_alive,
        ..
    } = *state;
    for e in enemies.iter_active_mut() {
        if circles_overlap(center, BOMB_RADIUS, e.pos, e.radius) {
            e.health -= damage;
            if e.health <= 0 {
                e.deactivate();
                *score += e.score_value;
                if e.kind == EnemyKind::Boss {
                    *boss_alive = false;
                }
            }
        }
    }
}
