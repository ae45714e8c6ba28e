//! Entity component data.
//!
//! Components are plain data structs with no methods beyond small
//! constructors and accessors. Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Aabb;

/// World position component: the top-left corner of the entity's box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Per-variant enemy state. Only the fields a variant actually needs exist
/// on that variant; dispatch is a pattern match on this union.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    Skeleton,
    Zombie,
    /// Oscillation phase drives the sinusoidal drift; grows each tick.
    Bat { phase: f32 },
    /// Archers hold at range and fire on a tick cooldown.
    Archer { range: f32, shoot_cooldown: u32 },
    Ghost,
}

impl EnemyBehavior {
    pub fn kind(&self) -> EnemyKind {
        match self {
            EnemyBehavior::Skeleton => EnemyKind::Skeleton,
            EnemyBehavior::Zombie => EnemyKind::Zombie,
            EnemyBehavior::Bat { .. } => EnemyKind::Bat,
            EnemyBehavior::Archer { .. } => EnemyKind::Archer,
            EnemyBehavior::Ghost => EnemyKind::Ghost,
        }
    }
}

/// An enemy in the world. Position and Velocity are separate components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub behavior: EnemyBehavior,
    pub hp: f32,
    pub max_hp: f32,
    pub base_speed: f32,
    pub size: Vec2,
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }
}

/// A projectile in flight. Destroyed on first qualifying hit or when
/// `life` reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub velocity: Vec2,
    pub life: u32,
    /// Hostile projectiles hurt the player; friendly ones hurt enemies.
    pub hostile: bool,
}

impl Projectile {
    /// Collision box edge length for this projectile kind.
    pub fn extent(&self) -> f32 {
        match self.kind {
            ProjectileKind::Fireball => FIREBALL_SIZE,
            ProjectileKind::Arrow => ARROW_SIZE,
        }
    }
}

/// A pickup on the floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub value: f32,
}

/// A static prop: wall block or destructible crate. Broken crates keep
/// their entity with `active = false` so the renderer can skip them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prop {
    pub kind: PropKind,
    pub hp: f32,
    pub active: bool,
    pub size: Vec2,
}

/// Cosmetic particle. No gameplay effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub velocity: Vec2,
    pub life: u32,
    pub color: [u8; 3],
}

/// Melee swing state. The per-swing hit set lives in the engine (it holds
/// ECS entity handles).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SwingState {
    pub active: bool,
    /// Aim angle captured when the swing started.
    pub base_angle: f32,
    /// Current blade angle, swept across the arc as progress goes 0..1.
    pub angle: f32,
    pub progress: f32,
}

/// Ultimate dash state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UltimateState {
    pub active: bool,
    /// Remaining ticks of the dash.
    pub timer: u32,
    /// Locked travel direction (radians).
    pub direction: f32,
}

/// One-time altar unlocks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Unlocks {
    pub magnet: bool,
    pub minimap: bool,
    pub pause: bool,
}

impl Unlocks {
    pub fn owns(&self, unlock: AltarUnlock) -> bool {
        match unlock {
            AltarUnlock::Magnet => self.magnet,
            AltarUnlock::Minimap => self.minimap,
            AltarUnlock::Pause => self.pause,
        }
    }
}

/// The player. Exactly one exists; it is owned directly by the engine
/// rather than living in the ECS world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub mana: f32,
    pub max_mana: f32,
    /// Continuous currency from kills and crates.
    pub gold: f32,
    /// Discrete currency from chance kill drops.
    pub blood: u32,
    pub kills: u32,
    pub sword_tier: u8,
    pub light_radius: f32,
    pub swing: SwingState,
    pub ult: UltimateState,
    pub unlocks: Unlocks,
}

impl Player {
    pub fn spawn_at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::new(PLAYER_W, PLAYER_H),
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            mana: PLAYER_MAX_MANA,
            max_mana: PLAYER_MAX_MANA,
            gold: 0.0,
            blood: 0,
            kills: 0,
            sword_tier: 0,
            light_radius: PLAYER_LIGHT_RADIUS,
            swing: SwingState::default(),
            ult: UltimateState::default(),
            unlocks: Unlocks::default(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos(self.position, self.size)
    }

    /// World-space center of the player hitbox.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}
