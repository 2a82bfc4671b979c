/// Per-frame kinematic pass.
///
/// Positions advance by one velocity step per tick (velocities are in
/// units per frame, timers in real seconds). Anything that drifts past the
/// far edge of the play area frees its slot; the boss instead bounces
/// inside its arena. Elite and boss attack timers also run here, since
/// they ride along the same per-enemy scan.

use crate::entities::{EnemyKind, GameState, Vec2};
use crate::pool::Slot;
use crate::spawn::fire_bullet;

// ── Boss arena ───────────────────────────────────────────────────────────────

/// Horizontal inset from both side edges.
pub const BOSS_ARENA_MARGIN: f32 = 50.0;
/// Vertical band the boss patrols once it has descended into view.
pub const BOSS_ARENA_TOP: f32 = 40.0;
pub const BOSS_ARENA_BOTTOM: f32 = 150.0;

/// Margin past the bottom edge after which a descending entity despawns.
const ENEMY_DESPAWN_MARGIN: f32 = 50.0;
const POWERUP_DESPAWN_MARGIN: f32 = 20.0;

pub fn run(state: &mut GameState, dt: f32) {
    let GameState {
        ref mut bullets,
        ref mut enemies,
        ref mut powerups,
        ref mut bomb_effect,
        ref mut player,
        ref mut boss_alive,
        width,
        height,
        ..
    } = *state;

    // ── Bullets ──────────────────────────────────────────────────────────────
    for b in bullets.iter_active_mut() {
        b.pos.x += b.vel.x;
        b.pos.y += b.vel.y;
        if b.pos.y < -b.radius || b.pos.y > height + b.radius {
            b.deactivate();
        }
    }

    // ── Enemies ──────────────────────────────────────────────────────────────
    for e in enemies.iter_active_mut() {
        e.pos.y += e.vel.y;

        if e.kind == EnemyKind::Boss {
            e.pos.x += e.vel.x;
            if e.pos.x < BOSS_ARENA_MARGIN || e.pos.x > width - BOSS_ARENA_MARGIN {
                e.vel.x = -e.vel.x;
            }
            // Directional checks so the spawn descent from above the screen
            // isn't treated as a bounce.
            if (e.pos.y > BOSS_ARENA_BOTTOM && e.vel.y > 0.0)
                || (e.pos.y < BOSS_ARENA_TOP && e.vel.y < 0.0)
            {
                e.vel.y = -e.vel.y;
            }
        }

        if e.pos.y > height + ENEMY_DESPAWN_MARGIN {
            e.deactivate();
            if e.kind == EnemyKind::Boss {
                *boss_alive = false;
            }
            continue;
        }

        if e.shoot_interval > 0.0 {
            e.shoot_timer += dt;
            if e.shoot_timer >= e.shoot_interval {
                e.shoot_timer = 0.0;
                // Muzzle sits on the enemy's lower rim
                let muzzle = Vec2::new(e.pos.x, e.pos.y + e.radius);
                match e.kind {
                    EnemyKind::Elite => {
                        fire_bullet(bullets, muzzle, Vec2::new(0.0, 5.0), 4.0, false);
                    }
                    EnemyKind::Boss => {
                        for k in -1..=1 {
                            let pos = Vec2::new(muzzle.x + k as f32 * 15.0, muzzle.y);
                            fire_bullet(bullets, pos, Vec2::new(0.0, 4.0), 6.0, false);
                        }
                    }
                    EnemyKind::Normal => {}
                }
            }
        }
    }

    // ── Power-ups ────────────────────────────────────────────────────────────
    for p in powerups.iter_active_mut() {
        p.pos.x += p.vel.x;
        p.pos.y += p.vel.y;
        if p.pos.y > height + POWERUP_DESPAWN_MARGIN {
            p.deactivate();
        }
    }

    // ── Effect timers ────────────────────────────────────────────────────────
    if player.has_shotgun {
        player.shotgun_timer -= dt;
        if player.shotgun_timer <= 0.0 {
            player.has_shotgun = false;
            player.shotgun_timer = 0.0;
        }
    }

    if bomb_effect.active {
        bomb_effect.timer -= dt;
        if bomb_effect.timer <= 0.0 {
            bomb_effect.active = false;
        }
    }
}
