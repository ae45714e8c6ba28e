//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the player, processes
//! player commands at tick boundaries, runs all systems in a fixed order,
//! and produces `HudSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::commands::PlayerCommand;
use gravenhold_core::components::Player;
use gravenhold_core::constants::*;
use gravenhold_core::enums::{ModalState, RunState};
use gravenhold_core::state::HudSnapshot;
use gravenhold_core::types::{Aabb, SimTime};

use gravenhold_dungeon::fog::FogMask;
use gravenhold_dungeon::generator::{self, Decoration, DungeonPlan, Room};
use gravenhold_dungeon::grid::TileGrid;

use crate::systems;
use crate::systems::collision::SolidFilter;
use crate::systems::wave_director::{WaveEvent, WaveState};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same dungeon, same rolls.
    pub seed: u64,
    /// Rooms to carve at generation (minimum 3).
    pub room_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            room_count: 16,
        }
    }
}

/// The simulation engine. Owns the ECS world and all authoritative state.
pub struct SimulationEngine {
    world: World,
    player: Player,
    plan: DungeonPlan,
    fog: FogMask,
    wave: WaveState,
    time: SimTime,
    run_state: RunState,
    modal: ModalState,
    altar_unlocked: bool,
    camera: Vec2,
    pointer_world: Vec2,
    move_axis: Vec2,
    interact_forge: bool,
    interact_altar: bool,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    /// Enemies already damaged by the current swing.
    swing_hits: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation: generate the dungeon, spawn the player and
    /// initial props, and start wave 1.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let plan = generator::generate(&mut rng, config.room_count);

        let mut world = World::new();
        world_setup::spawn_wall_props(&mut world, &plan.grid);

        let player = Player::spawn_at(plan.player_spawn);
        for _ in 0..CRATE_INITIAL_ATTEMPTS {
            world_setup::try_spawn_crate(&mut world, &mut rng, &plan.rooms, player.position);
        }

        let mut wave = WaveState::new(WAVE_MAX);
        wave.start_wave(1);

        let camera = player.center() - Vec2::new(SCREEN_W, SCREEN_H) * 0.5;
        let pointer_world = player.center();

        Self {
            world,
            player,
            plan,
            fog: FogMask::new_opaque(),
            wave,
            time: SimTime::default(),
            run_state: RunState::default(),
            modal: ModalState::default(),
            altar_unlocked: false,
            camera,
            pointer_world,
            move_axis: Vec2::ZERO,
            interact_forge: false,
            interact_altar: false,
            rng,
            config,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            swing_hits: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. While paused, modal-frozen, or in a terminal state the
    /// world is left untouched but the snapshot still flows.
    pub fn tick(&mut self) -> HudSnapshot {
        self.process_commands();

        if self.halted() {
            // Interact intents don't survive a frozen tick.
            self.interact_forge = false;
            self.interact_altar = false;
        } else {
            self.run_systems();
            self.time.advance();
        }

        systems::snapshot::build(
            &self.player,
            &self.wave,
            self.time,
            self.run_state,
            self.modal,
            self.altar_unlocked,
        )
    }

    /// Full in-process re-initialization through the same path as startup.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    // --- Read-only accessors for the rendering collaborator ---

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &TileGrid {
        &self.plan.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.plan.rooms
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.plan.decorations
    }

    pub fn spawn_gates(&self) -> &[Vec2] {
        &self.plan.spawn_gates
    }

    pub fn forge(&self) -> Aabb {
        self.plan.forge
    }

    pub fn altar(&self) -> Aabb {
        self.plan.altar
    }

    pub fn altar_unlocked(&self) -> bool {
        self.altar_unlocked
    }

    pub fn fog(&self) -> &FogMask {
        &self.fog
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    // --- Test accessors ---

    #[cfg(test)]
    pub(crate) fn wave(&self) -> &WaveState {
        &self.wave
    }

    #[cfg(test)]
    pub(crate) fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy directly (for tests that bypass the spawn director).
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: gravenhold_core::enums::EnemyKind,
        pos: Vec2,
    ) -> hecs::Entity {
        use gravenhold_ai::profiles;
        use gravenhold_core::components::{Enemy, Position};

        let stats = profiles::stats(kind, self.wave.current);
        self.world.spawn((
            Enemy {
                behavior: profiles::initial_behavior(kind),
                hp: stats.hp,
                max_hp: stats.hp,
                base_speed: stats.base_speed,
                size: stats.size,
            },
            Position(pos),
        ))
    }

    // --- Internals ---

    /// The simulation is frozen: paused, modal open, or terminal state.
    fn halted(&self) -> bool {
        self.run_state != RunState::Running || self.modal != ModalState::None
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands are silent no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMoveAxis { x, y } => {
                self.move_axis = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
            }
            PlayerCommand::PointerMoved { x, y } => {
                self.pointer_world = Vec2::new(x, y);
            }
            PlayerCommand::StartSwing => {
                if !self.halted() {
                    systems::combat::start_swing(
                        &mut self.player,
                        self.pointer_world,
                        &mut self.swing_hits,
                    );
                }
            }
            PlayerCommand::FireRanged => {
                if !self.halted() {
                    systems::combat::cast_fireball(
                        &mut self.world,
                        &mut self.player,
                        self.pointer_world,
                    );
                }
            }
            PlayerCommand::TriggerUltimate => {
                if !self.halted() {
                    systems::combat::trigger_ultimate(&mut self.player, self.pointer_world);
                }
            }
            PlayerCommand::InteractForge => {
                if !self.halted() {
                    self.interact_forge = true;
                }
            }
            PlayerCommand::InteractAltar => {
                if !self.halted() {
                    self.interact_altar = true;
                }
            }
            PlayerCommand::CloseModal => {
                if self.modal != ModalState::None {
                    self.modal = ModalState::None;
                }
            }
            PlayerCommand::UpgradeSword => {
                if self.modal == ModalState::Forge {
                    systems::economy::try_upgrade_sword(&mut self.player);
                }
            }
            PlayerCommand::BuyAltarUnlock { unlock } => {
                if self.modal == ModalState::Altar {
                    systems::economy::try_buy_unlock(&mut self.player, unlock);
                }
            }
            PlayerCommand::TogglePause => {
                if self.player.unlocks.pause {
                    match self.run_state {
                        RunState::Running if self.modal == ModalState::None => {
                            self.run_state = RunState::Paused;
                        }
                        RunState::Paused => self.run_state = RunState::Running,
                        _ => {}
                    }
                }
            }
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Run all systems in order. The order is part of the simulation's
    /// semantics: later systems observe positions already updated earlier
    /// in the same tick.
    fn run_systems(&mut self) {
        // 1. Ambient crate respawn
        systems::crates_upkeep::run(
            &mut self.world,
            &mut self.rng,
            &self.plan.rooms,
            self.player.position,
        );

        // 2. Wave director: spawn timer, transition countdown, victory
        let event = systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.plan.spawn_gates,
        );
        if event == Some(WaveEvent::Victory) {
            self.run_state = RunState::Victory;
        }

        // 3. Player movement + ultimate resolution
        systems::movement::apply_input(&mut self.player, self.move_axis);
        systems::combat::run_ultimate(&mut self.world, &mut self.player, &mut self.rng);
        systems::movement::integrate(&mut self.player);

        // 4. Player wall/crate collision
        let mut crate_rects = Vec::new();
        systems::collision::collect_crate_rects(&self.world, &mut crate_rects);
        systems::collision::resolve(
            &mut self.player.position,
            self.player.size,
            &self.plan.grid,
            &crate_rects,
            SolidFilter::ALL,
        );

        // 5. Camera, fog reveal, mana regen
        self.camera = self.player.center() - Vec2::new(SCREEN_W, SCREEN_H) * 0.5;
        self.fog
            .reveal_circle(self.player.center(), self.player.light_radius);
        self.player.mana = (self.player.mana + MANA_REGEN_PER_TICK).min(self.player.max_mana);

        // 6. Landmark interaction checks
        self.check_landmarks();

        // 7. Melee swing update
        systems::combat::update_swing(
            &mut self.world,
            &mut self.player,
            &mut self.swing_hits,
            &mut self.rng,
        );

        // 8-13. Enemy / projectile / item / corpse / particle updates
        if systems::enemy::run(&mut self.world, &mut self.player, &self.plan.grid) {
            self.run_state = RunState::GameOver;
        }
        if systems::projectile::run(
            &mut self.world,
            &mut self.player,
            &self.plan.grid,
            &mut self.rng,
            &mut self.despawn_buffer,
        ) {
            self.run_state = RunState::GameOver;
        }
        systems::item::run(&mut self.world, &mut self.player, &mut self.despawn_buffer);
        systems::enemy::process_deaths(
            &mut self.world,
            &mut self.player,
            &mut self.wave,
            &mut self.rng,
            &mut self.despawn_buffer,
        );
        systems::particle::run(&mut self.world, &mut self.despawn_buffer);

        // 14. Despawn compaction
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Consume buffered interact intents against landmark proximity, then
    /// refresh the altar's kill-gated availability.
    fn check_landmarks(&mut self) {
        if self.interact_forge
            && self.player.position.distance(self.plan.forge.center())
                < LANDMARK_INTERACT_RADIUS
        {
            self.modal = ModalState::Forge;
        }
        if self.interact_altar
            && self.altar_unlocked
            && self.player.position.distance(self.plan.altar.center())
                < LANDMARK_INTERACT_RADIUS
        {
            self.modal = ModalState::Altar;
        }
        self.interact_forge = false;
        self.interact_altar = false;

        if self.player.kills >= ALTAR_KILL_THRESHOLD {
            self.altar_unlocked = true;
        }
    }
}
