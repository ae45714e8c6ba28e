//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant tag. Per-variant state lives in
/// [`crate::components::EnemyBehavior`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Skeleton,
    Zombie,
    Bat,
    Archer,
    Ghost,
}

/// Projectile variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Hostile archer shot: straight line, short lifetime.
    Arrow,
    /// Player spell: wobbles perpendicular to travel as it ages.
    Fireball,
}

/// Pickup variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Gold,
    Blood,
    Food,
}

/// Static prop variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    /// Indestructible wall block mirroring a wall tile.
    Wall,
    /// Destructible crate. Broken crates stay spawned with `active = false`.
    Crate,
}

/// Which upgrade modal is currently open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    None,
    Forge,
    Altar,
}

/// Top-level run state. GameOver and Victory are terminal: only a full
/// reset leaves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    GameOver,
    Victory,
}

/// One-time altar purchases, gated by blood thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltarUnlock {
    /// Pulls nearby items toward the player.
    Magnet,
    /// Reveals the minimap overlay.
    Minimap,
    /// Grants the ability to pause the simulation.
    Pause,
}
