use plane_shooter::compute::init_state;
use plane_shooter::entities::{
    Bullet, Enemy, EnemyKind, GameMode, GameState, Phase, Vec2, PLAY_HEIGHT, PLAY_WIDTH,
};
use plane_shooter::update;

fn playing(mode: GameMode) -> GameState {
    let mut s = init_state(PLAY_WIDTH, PLAY_HEIGHT);
    s.mode = mode;
    s.phase = Phase::Playing;
    s
}

fn add_bullet(s: &mut GameState, x: f32, y: f32, vy: f32, from_player: bool) {
    *s.bullets.acquire().unwrap() = Bullet {
        pos: Vec2::new(x, y),
        vel: Vec2::new(0.0, vy),
        radius: 5.0,
        active: true,
        from_player,
    };
}

fn add_enemy(s: &mut GameState, pos: Vec2, vel: Vec2, kind: EnemyKind, shoot_interval: f32) {
    *s.enemies.acquire().unwrap() = Enemy {
        pos,
        vel,
        radius: if kind == EnemyKind::Boss { 30.0 } else { 18.0 },
        active: true,
        health: 5,
        max_health: 5,
        kind,
        shoot_timer: 0.0,
        shoot_interval,
        score_value: 25,
    };
}

// ── Bullets ───────────────────────────────────────────────────────────────────

#[test]
fn bullets_advance_by_their_velocity() {
    let mut s = playing(GameMode::Timed);
    add_bullet(&mut s, 100.0, 100.0, -10.0, true);
    add_bullet(&mut s, 200.0, 100.0, 5.0, false);
    update::run(&mut s, 0.016);
    let ys: Vec<f32> = s.bullets.iter_active().map(|b| b.pos.y).collect();
    assert_eq!(ys, vec![90.0, 105.0]);
}

#[test]
fn bullet_frees_slot_past_the_top() {
    let mut s = playing(GameMode::Timed);
    add_bullet(&mut s, 100.0, 2.0, -10.0, true); // moves to -8, past -radius
    update::run(&mut s, 0.016);
    assert_eq!(s.bullets.active_count(), 0);
}

#[test]
fn bullet_frees_slot_past_the_bottom() {
    let mut s = playing(GameMode::Timed);
    add_bullet(&mut s, 100.0, PLAY_HEIGHT + 1.0, 5.0, false);
    update::run(&mut s, 0.016);
    assert_eq!(s.bullets.active_count(), 0);
}

#[test]
fn bullet_survives_while_inside() {
    let mut s = playing(GameMode::Timed);
    add_bullet(&mut s, 100.0, 20.0, -10.0, true); // moves to 10, still in
    update::run(&mut s, 0.016);
    assert_eq!(s.bullets.active_count(), 1);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn enemies_descend() {
    let mut s = playing(GameMode::Timed);
    add_enemy(&mut s, Vec2::new(100.0, 50.0), Vec2::new(0.0, 3.0), EnemyKind::Normal, 0.0);
    update::run(&mut s, 0.016);
    assert_eq!(s.enemies.iter_active().next().unwrap().pos.y, 53.0);
}

#[test]
fn enemy_despawns_below_the_play_area() {
    let mut s = playing(GameMode::Timed);
    add_enemy(
        &mut s,
        Vec2::new(100.0, PLAY_HEIGHT + 49.0),
        Vec2::new(0.0, 3.0),
        EnemyKind::Normal,
        0.0,
    );
    update::run(&mut s, 0.016);
    assert_eq!(s.enemies.active_count(), 0);
}

#[test]
fn boss_bounces_off_arena_sides() {
    let mut s = playing(GameMode::Infinite);
    s.boss_alive = true;
    add_enemy(&mut s, Vec2::new(51.0, 100.0), Vec2::new(-2.0, 0.0), EnemyKind::Boss, 100.0);
    update::run(&mut s, 0.016);
    let boss = s.enemies.iter_active().next().unwrap();
    assert_eq!(boss.pos.x, 49.0);
    assert_eq!(boss.vel.x, 2.0); // reflected
}

#[test]
fn boss_bounces_inside_vertical_band() {
    let mut s = playing(GameMode::Infinite);
    s.boss_alive = true;
    add_enemy(&mut s, Vec2::new(400.0, 150.0), Vec2::new(0.0, 1.0), EnemyKind::Boss, 100.0);
    update::run(&mut s, 0.016);
    let boss = s.enemies.iter_active().next().unwrap();
    assert_eq!(boss.vel.y, -1.0);
}

#[test]
fn boss_descent_into_view_is_not_a_bounce() {
    let mut s = playing(GameMode::Infinite);
    s.boss_alive = true;
    // Fresh spawn, still above the arena band, heading down
    add_enemy(&mut s, Vec2::new(400.0, -50.0), Vec2::new(0.0, 1.0), EnemyKind::Boss, 100.0);
    update::run(&mut s, 0.016);
    let boss = s.enemies.iter_active().next().unwrap();
    assert_eq!(boss.vel.y, 1.0); // still descending
}

#[test]
fn boss_leaving_bounds_clears_boss_alive() {
    let mut s = playing(GameMode::Infinite);
    s.boss_alive = true;
    add_enemy(
        &mut s,
        Vec2::new(400.0, PLAY_HEIGHT + 60.0),
        Vec2::new(0.0, 1.0),
        EnemyKind::Boss,
        100.0,
    );
    update::run(&mut s, 0.016);
    assert_eq!(s.enemies.active_count(), 0);
    assert!(!s.boss_alive);
}

// ── Enemy fire ────────────────────────────────────────────────────────────────

#[test]
fn elite_fires_single_shot_on_interval() {
    let mut s = playing(GameMode::Timed);
    add_enemy(&mut s, Vec2::new(100.0, 50.0), Vec2::new(0.0, 2.0), EnemyKind::Elite, 2.0);
    update::run(&mut s, 2.0);
    assert_eq!(s.bullets.active_count(), 1);
    let b = s.bullets.iter_active().next().unwrap();
    assert!(!b.from_player);
    assert_eq!(b.vel, Vec2::new(0.0, 5.0));
    assert_eq!(b.radius, 4.0);
    // Muzzle on the lower rim, after this frame's movement
    assert_eq!(b.pos, Vec2::new(100.0, 52.0 + 18.0));
}

#[test]
fn elite_holds_fire_before_interval() {
    let mut s = playing(GameMode::Timed);
    add_enemy(&mut s, Vec2::new(100.0, 50.0), Vec2::new(0.0, 2.0), EnemyKind::Elite, 2.0);
    update::run(&mut s, 1.0);
    assert_eq!(s.bullets.active_count(), 0);
    update::run(&mut s, 1.0);
    assert_eq!(s.bullets.active_count(), 1);
}

#[test]
fn boss_fires_three_way_volley() {
    let mut s = playing(GameMode::Infinite);
    s.boss_alive = true;
    add_enemy(&mut s, Vec2::new(400.0, 100.0), Vec2::new(0.0, 0.0), EnemyKind::Boss, 1.5);
    update::run(&mut s, 1.5);
    assert_eq!(s.bullets.active_count(), 3);
    let xs: Vec<f32> = s.bullets.iter_active().map(|b| b.pos.x).collect();
    assert_eq!(xs, vec![385.0, 400.0, 415.0]);
    assert!(s.bullets.iter_active().all(|b| b.vel == Vec2::new(0.0, 4.0)));
    assert!(s.bullets.iter_active().all(|b| b.radius == 6.0));
}

// ── Effect timers ─────────────────────────────────────────────────────────────

#[test]
fn shotgun_expires_after_its_duration() {
    let mut s = playing(GameMode::Infinite);
    s.player.has_shotgun = true;
    s.player.shotgun_timer = 1.0;
    update::run(&mut s, 0.5);
    assert!(s.player.has_shotgun);
    update::run(&mut s, 0.6);
    assert!(!s.player.has_shotgun);
}

#[test]
fn bomb_ring_fades_out() {
    let mut s = playing(GameMode::Infinite);
    s.bomb_effect.active = true;
    s.bomb_effect.timer = 0.5;
    update::run(&mut s, 0.3);
    assert!(s.bomb_effect.active);
    update::run(&mut s, 0.3);
    assert!(!s.bomb_effect.active);
}
