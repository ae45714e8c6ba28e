//! Snapshot system: assembles the per-tick HUD snapshot.
//!
//! Read-only; it never modifies any simulation state.

use gravenhold_core::components::Player;
use gravenhold_core::enums::{ModalState, RunState};
use gravenhold_core::state::HudSnapshot;
use gravenhold_core::types::SimTime;

use crate::systems::wave_director::WaveState;

pub fn build(
    player: &Player,
    wave: &WaveState,
    time: SimTime,
    run_state: RunState,
    modal: ModalState,
    altar_unlocked: bool,
) -> HudSnapshot {
    HudSnapshot {
        time,
        hp: player.hp,
        max_hp: player.max_hp,
        mana: player.mana,
        max_mana: player.max_mana,
        gold: player.gold,
        blood: player.blood,
        kills: player.kills,
        wave: wave.current,
        max_wave: wave.max,
        wave_progress: wave.progress_percent(),
        wave_countdown_secs: wave.countdown_secs(),
        sword_tier: player.sword_tier,
        has_magnet: player.unlocks.magnet,
        has_minimap: player.unlocks.minimap,
        can_pause: player.unlocks.pause,
        altar_unlocked,
        paused: run_state == RunState::Paused || modal != ModalState::None,
        game_over: run_state == RunState::GameOver,
        victory: run_state == RunState::Victory,
        active_modal: modal,
    }
}
