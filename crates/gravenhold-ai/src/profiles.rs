//! Per-kind enemy stat profiles and the wave spawn pool.

use glam::Vec2;

use gravenhold_core::components::EnemyBehavior;
use gravenhold_core::constants::{ARCHER_RANGE, ENEMY_HP_WAVE_SCALE};
use gravenhold_core::enums::EnemyKind;

/// Base combat stats for one enemy kind at a given wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub hp: f32,
    pub base_speed: f32,
    pub size: Vec2,
}

/// Stats for a kind, with hp scaled by the wave multiplier.
pub fn stats(kind: EnemyKind, wave: u32) -> EnemyStats {
    let mult = 1.0 + wave as f32 * ENEMY_HP_WAVE_SCALE;
    let (hp, base_speed, w, h) = match kind {
        EnemyKind::Skeleton => (40.0, 1.4, 14.0, 16.0),
        EnemyKind::Zombie => (70.0, 0.7, 16.0, 18.0),
        EnemyKind::Bat => (15.0, 2.6, 12.0, 10.0),
        EnemyKind::Archer => (35.0, 1.1, 14.0, 16.0),
        EnemyKind::Ghost => (50.0, 0.6, 14.0, 16.0),
    };
    EnemyStats {
        hp: hp * mult,
        base_speed,
        size: Vec2::new(w, h),
    }
}

/// Fresh behavior state for a newly spawned enemy of `kind`.
pub fn initial_behavior(kind: EnemyKind) -> EnemyBehavior {
    match kind {
        EnemyKind::Skeleton => EnemyBehavior::Skeleton,
        EnemyKind::Zombie => EnemyBehavior::Zombie,
        EnemyKind::Bat => EnemyBehavior::Bat { phase: 0.0 },
        EnemyKind::Archer => EnemyBehavior::Archer {
            range: ARCHER_RANGE,
            shoot_cooldown: 0,
        },
        EnemyKind::Ghost => EnemyBehavior::Ghost,
    }
}

/// Kinds eligible to spawn in a given wave. Later waves widen the pool;
/// the order matches introduction thresholds, so the pool is a prefix.
pub fn spawn_pool(wave: u32) -> &'static [EnemyKind] {
    const POOL: [EnemyKind; 5] = [
        EnemyKind::Skeleton,
        EnemyKind::Zombie,
        EnemyKind::Bat,
        EnemyKind::Archer,
        EnemyKind::Ghost,
    ];
    let len = match wave {
        0 | 1 => 1,
        2 | 3 => 2,
        4 => 3,
        5 | 6 => 4,
        _ => 5,
    };
    &POOL[..len]
}
