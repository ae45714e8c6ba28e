//! Per-tick enemy steering.
//!
//! One pure evaluation per enemy: given its behavior state and the player's
//! position, produce the velocity for this tick, the advanced behavior
//! state, and whether an archer fires. The caller owns movement and
//! collision.

use glam::Vec2;

use gravenhold_core::components::EnemyBehavior;
use gravenhold_core::constants::*;

/// Input to one steering evaluation.
pub struct SteerContext {
    pub behavior: EnemyBehavior,
    /// Enemy position (top-left, matching the entity's stored position).
    pub position: Vec2,
    /// Player position (top-left).
    pub player_pos: Vec2,
    pub base_speed: f32,
    /// The player's current light radius; enemies just outside it still
    /// count as seen within a fixed margin.
    pub light_radius: f32,
}

/// Output of one steering evaluation.
pub struct SteerUpdate {
    /// New velocity for this tick. None when the enemy is outside the
    /// aggro cull; it neither steers nor moves.
    pub velocity: Option<Vec2>,
    /// Behavior state with phase/cooldown counters advanced.
    pub behavior: EnemyBehavior,
    /// An archer held position long enough to loose an arrow this tick.
    pub fire_arrow: bool,
}

/// Whether the player can see an enemy at this distance.
pub fn is_seen(distance: f32, light_radius: f32) -> bool {
    distance < light_radius + ENEMY_SEEN_MARGIN
}

/// Speed multiplier: full speed only when seen and close, half otherwise.
pub fn speed_factor(distance: f32, seen: bool) -> f32 {
    if !seen || distance > ENEMY_NEAR_RADIUS {
        ENEMY_FAR_SPEED_FACTOR
    } else {
        1.0
    }
}

/// Evaluate steering for one enemy.
pub fn evaluate(ctx: &SteerContext) -> SteerUpdate {
    let to_player = ctx.player_pos - ctx.position;
    let distance = to_player.length();

    if distance >= ENEMY_AGGRO_CULL {
        return SteerUpdate {
            velocity: None,
            behavior: ctx.behavior,
            fire_arrow: false,
        };
    }

    let seen = is_seen(distance, ctx.light_radius);
    let speed = ctx.base_speed * speed_factor(distance, seen);
    let dir = if distance > 0.0 {
        to_player / distance
    } else {
        Vec2::ZERO
    };

    match ctx.behavior {
        EnemyBehavior::Archer {
            range,
            shoot_cooldown,
        } => evaluate_archer(dir, distance, range, shoot_cooldown, seen, speed),
        EnemyBehavior::Bat { phase } => {
            let phase = phase + BAT_PHASE_PER_TICK;
            SteerUpdate {
                velocity: Some(dir * speed + Vec2::new(phase.sin(), phase.cos())),
                behavior: EnemyBehavior::Bat { phase },
                fire_arrow: false,
            }
        }
        behavior => SteerUpdate {
            velocity: Some(dir * speed),
            behavior,
            fire_arrow: false,
        },
    }
}

/// Archers back off when crowded, advance when out of range or unseen,
/// and otherwise hold position and fire on a tick cooldown.
fn evaluate_archer(
    dir: Vec2,
    distance: f32,
    range: f32,
    shoot_cooldown: u32,
    seen: bool,
    speed: f32,
) -> SteerUpdate {
    if distance < ARCHER_RETREAT_RADIUS && seen {
        SteerUpdate {
            velocity: Some(-dir * speed),
            behavior: EnemyBehavior::Archer {
                range,
                shoot_cooldown,
            },
            fire_arrow: false,
        }
    } else if distance > range || !seen {
        SteerUpdate {
            velocity: Some(dir * speed),
            behavior: EnemyBehavior::Archer {
                range,
                shoot_cooldown,
            },
            fire_arrow: false,
        }
    } else {
        let shoot_cooldown = shoot_cooldown + 1;
        let fire = shoot_cooldown > ARCHER_SHOOT_COOLDOWN_TICKS;
        SteerUpdate {
            velocity: Some(Vec2::ZERO),
            behavior: EnemyBehavior::Archer {
                range,
                shoot_cooldown: if fire { 0 } else { shoot_cooldown },
            },
            fire_arrow: fire,
        }
    }
}
