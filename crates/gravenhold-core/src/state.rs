//! HUD snapshot: the per-tick state contract with the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::ModalState;
use crate::types::SimTime;

/// Immutable HUD state emitted once per tick, including while paused or in
/// a terminal state. This is the sole contract with any presentation layer;
/// entity rendering goes through the engine's read-only accessors instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub time: SimTime,
    pub hp: f32,
    pub max_hp: f32,
    pub mana: f32,
    pub max_mana: f32,
    pub gold: f32,
    pub blood: u32,
    pub kills: u32,
    pub wave: u32,
    pub max_wave: u32,
    /// Kill progress through the current wave, 0-100.
    pub wave_progress: u32,
    /// Seconds until the next wave, present only while the transition
    /// countdown is running.
    pub wave_countdown_secs: Option<u32>,
    pub sword_tier: u8,
    pub has_magnet: bool,
    pub has_minimap: bool,
    pub can_pause: bool,
    pub altar_unlocked: bool,
    pub paused: bool,
    pub game_over: bool,
    pub victory: bool,
    pub active_modal: ModalState,
}
