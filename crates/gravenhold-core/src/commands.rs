//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are discrete intents, never raw device state. They are queued
//! and processed at the next tick boundary. Invalid commands (wrong state,
//! insufficient currency, out of range) are silent no-ops.

use serde::{Deserialize, Serialize};

use crate::enums::AltarUnlock;

/// All possible player intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Continuous input state ---
    /// Movement axis: two independent signed unit signals, clamped to
    /// [-1, 1]. Persists until the next SetMoveAxis.
    SetMoveAxis { x: f32, y: f32 },
    /// Pointer position in world coordinates, used for aim angles.
    PointerMoved { x: f32, y: f32 },

    // --- Combat ---
    /// Begin a melee swing toward the pointer.
    StartSwing,
    /// Cast a fireball toward the pointer (mana gated).
    FireRanged,
    /// Trigger the ultimate dash (max sword tier + mana gated).
    TriggerUltimate,

    // --- Landmarks & modals ---
    /// Interact with the forge (checked against proximity this tick).
    InteractForge,
    /// Interact with the altar (proximity + unlock gated).
    InteractAltar,
    /// Close the open modal and resume the simulation.
    CloseModal,
    /// Buy the next sword tier (only while the forge modal is open).
    UpgradeSword,
    /// Buy an altar unlock (only while the altar modal is open).
    BuyAltarUnlock { unlock: AltarUnlock },

    // --- Simulation control ---
    /// Toggle pause. Effective only once the pause unlock is owned.
    TogglePause,
    /// Full re-initialization through the startup path.
    Reset,
}
