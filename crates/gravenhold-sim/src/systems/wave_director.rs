//! Wave director: timed enemy spawning, wave transitions, victory.
//!
//! All timing is counted in simulation ticks, so spawning and the
//! transition countdown suspend transparently whenever the engine is
//! paused or halted.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::Enemy;
use gravenhold_core::constants::*;

use crate::world_setup;

/// State of the active wave.
#[derive(Debug, Clone)]
pub struct WaveState {
    pub current: u32,
    pub max: u32,
    pub total_enemies: u32,
    pub killed_in_wave: u32,
    /// Enemies still owed to the current wave's quota.
    pub spawn_remaining: u32,
    /// Ticks until the next scheduled spawn.
    pub spawn_timer: u32,
    /// Ticks left on the armed wave transition.
    pub countdown: u32,
    pub transition_triggered: bool,
}

/// Raised by [`run`] when the final wave has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveEvent {
    Victory,
}

impl WaveState {
    pub fn new(max: u32) -> Self {
        Self {
            current: 0,
            max,
            total_enemies: 0,
            killed_in_wave: 0,
            spawn_remaining: 0,
            spawn_timer: 0,
            countdown: 0,
            transition_triggered: false,
        }
    }

    /// Reset per-wave counters and begin timed spawning for wave `n`.
    pub fn start_wave(&mut self, n: u32) {
        self.current = n;
        self.killed_in_wave = 0;
        self.transition_triggered = false;
        self.countdown = 0;
        self.total_enemies = WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * n;
        self.spawn_remaining = self.total_enemies;
        self.spawn_timer = WAVE_SPAWN_INTERVAL_TICKS;
    }

    /// Kill progress through the wave, 0-100. Guarded against an empty
    /// wave even though the size formula never produces one.
    pub fn progress_percent(&self) -> u32 {
        if self.total_enemies == 0 {
            return 0;
        }
        (100 * self.killed_in_wave / self.total_enemies).min(100)
    }

    /// Credit one kill to the wave, clamped to the quota so stragglers
    /// from a previous wave can't overshoot it.
    pub fn record_kill(&mut self) {
        if self.killed_in_wave < self.total_enemies {
            self.killed_in_wave += 1;
        }
    }

    /// Whole seconds left on the transition countdown, if armed.
    pub fn countdown_secs(&self) -> Option<u32> {
        self.transition_triggered
            .then(|| self.countdown.div_ceil(TICK_RATE))
    }
}

/// Advance the director by one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    gates: &[Vec2],
) -> Option<WaveEvent> {
    // Timed spawning: one enemy per interval until the quota is met.
    if wave.spawn_remaining > 0 {
        wave.spawn_timer = wave.spawn_timer.saturating_sub(1);
        if wave.spawn_timer == 0 {
            world_setup::spawn_enemy(world, rng, wave.current, gates);
            wave.spawn_remaining -= 1;
            wave.spawn_timer = WAVE_SPAWN_INTERVAL_TICKS;
        }
    }

    let percent = wave.progress_percent();

    if percent >= WAVE_TRANSITION_PERCENT && !wave.transition_triggered && wave.current < wave.max
    {
        wave.transition_triggered = true;
        wave.countdown = WAVE_COUNTDOWN_TICKS;
    }

    if wave.transition_triggered {
        wave.countdown = wave.countdown.saturating_sub(1);
        if wave.countdown == 0 {
            let next = wave.current + 1;
            wave.start_wave(next);
        }
    } else if percent >= 100 && wave.current == wave.max && live_enemy_count(world) == 0 {
        return Some(WaveEvent::Victory);
    }

    None
}

fn live_enemy_count(world: &World) -> usize {
    let mut query = world.query::<&Enemy>();
    query.iter().count()
}
