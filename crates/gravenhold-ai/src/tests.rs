use glam::Vec2;

use gravenhold_core::components::EnemyBehavior;
use gravenhold_core::constants::*;
use gravenhold_core::enums::EnemyKind;

use crate::profiles::{initial_behavior, spawn_pool, stats};
use crate::steering::{evaluate, is_seen, speed_factor, SteerContext};

fn ctx(behavior: EnemyBehavior, position: Vec2, player_pos: Vec2, base_speed: f32) -> SteerContext {
    SteerContext {
        behavior,
        position,
        player_pos,
        base_speed,
        light_radius: PLAYER_LIGHT_RADIUS,
    }
}

// ---- Visibility & speed scaling ----

#[test]
fn seen_within_light_radius_plus_margin() {
    assert!(is_seen(0.0, PLAYER_LIGHT_RADIUS));
    assert!(is_seen(PLAYER_LIGHT_RADIUS + ENEMY_SEEN_MARGIN - 1.0, PLAYER_LIGHT_RADIUS));
    assert!(!is_seen(PLAYER_LIGHT_RADIUS + ENEMY_SEEN_MARGIN, PLAYER_LIGHT_RADIUS));
}

#[test]
fn unseen_or_distant_enemies_move_at_half_speed() {
    assert_eq!(speed_factor(100.0, true), 1.0);
    assert_eq!(speed_factor(100.0, false), ENEMY_FAR_SPEED_FACTOR);
    assert_eq!(speed_factor(ENEMY_NEAR_RADIUS + 1.0, true), ENEMY_FAR_SPEED_FACTOR);
}

#[test]
fn enemies_outside_cull_do_not_steer() {
    let update = evaluate(&ctx(
        EnemyBehavior::Skeleton,
        Vec2::ZERO,
        Vec2::new(ENEMY_AGGRO_CULL + 10.0, 0.0),
        1.4,
    ));
    assert!(update.velocity.is_none());
    assert!(!update.fire_arrow);
}

// ---- Chase ----

#[test]
fn skeleton_chases_straight_at_full_speed_when_lit() {
    let update = evaluate(&ctx(
        EnemyBehavior::Skeleton,
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        1.4,
    ));
    let v = update.velocity.unwrap();
    assert!((v.x - 1.4).abs() < 1e-5);
    assert!(v.y.abs() < 1e-5);
}

#[test]
fn bat_phase_advances_and_adds_drift() {
    let update = evaluate(&ctx(
        EnemyBehavior::Bat { phase: 0.0 },
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        2.6,
    ));
    match update.behavior {
        EnemyBehavior::Bat { phase } => assert!((phase - BAT_PHASE_PER_TICK).abs() < 1e-6),
        other => panic!("bat behavior changed kind: {other:?}"),
    }
    let v = update.velocity.unwrap();
    // Chase velocity plus (sin, cos) drift of the advanced phase.
    let expected = Vec2::new(
        2.6 + BAT_PHASE_PER_TICK.sin(),
        BAT_PHASE_PER_TICK.cos(),
    );
    assert!((v - expected).length() < 1e-5);
}

// ---- Archer ----

#[test]
fn archer_retreats_when_crowded_and_seen() {
    let update = evaluate(&ctx(
        initial_behavior(EnemyKind::Archer),
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        1.1,
    ));
    let v = update.velocity.unwrap();
    assert!(v.x < 0.0, "should back away from the player");
}

#[test]
fn archer_advances_when_beyond_range() {
    let update = evaluate(&ctx(
        initial_behavior(EnemyKind::Archer),
        Vec2::ZERO,
        Vec2::new(ARCHER_RANGE + 400.0, 0.0),
        1.1,
    ));
    let v = update.velocity.unwrap();
    assert!(v.x > 0.0, "should close toward the player");
}

#[test]
fn archer_holds_and_fires_after_cooldown() {
    // In band [retreat radius, range] and seen: holds position.
    let position = Vec2::ZERO;
    let player = Vec2::new(200.0, 0.0);
    let mut behavior = initial_behavior(EnemyKind::Archer);

    let mut fired_at = None;
    for tick in 0..ARCHER_SHOOT_COOLDOWN_TICKS + 2 {
        let update = evaluate(&ctx(behavior, position, player, 1.1));
        assert_eq!(update.velocity, Some(Vec2::ZERO));
        behavior = update.behavior;
        if update.fire_arrow {
            fired_at = Some(tick);
            break;
        }
    }
    assert_eq!(fired_at, Some(ARCHER_SHOOT_COOLDOWN_TICKS));

    // Cooldown resets after firing.
    match behavior {
        EnemyBehavior::Archer { shoot_cooldown, .. } => assert_eq!(shoot_cooldown, 0),
        other => panic!("archer behavior changed kind: {other:?}"),
    }
}

// ---- Profiles ----

#[test]
fn hp_scales_with_wave() {
    let w1 = stats(EnemyKind::Skeleton, 1);
    let w5 = stats(EnemyKind::Skeleton, 5);
    assert!((w1.hp - 40.0 * 1.15).abs() < 1e-4);
    assert!((w5.hp - 40.0 * 1.75).abs() < 1e-4);
    assert_eq!(w1.base_speed, w5.base_speed);
}

#[test]
fn zombie_is_tanky_and_slow() {
    let z = stats(EnemyKind::Zombie, 0);
    let b = stats(EnemyKind::Bat, 0);
    assert!(z.hp > b.hp);
    assert!(z.base_speed < b.base_speed);
}

#[test]
fn spawn_pool_widens_with_waves() {
    assert_eq!(spawn_pool(1), &[EnemyKind::Skeleton]);
    assert_eq!(spawn_pool(2), &[EnemyKind::Skeleton, EnemyKind::Zombie]);
    assert_eq!(spawn_pool(4).len(), 3);
    assert!(spawn_pool(5).contains(&EnemyKind::Archer));
    assert!(!spawn_pool(6).contains(&EnemyKind::Ghost));
    assert!(spawn_pool(7).contains(&EnemyKind::Ghost));
    assert_eq!(spawn_pool(10).len(), 5);
}
