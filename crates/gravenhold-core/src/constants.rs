//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- World geometry ---

/// Tile edge length in world units.
pub const TILE_SIZE: f32 = 40.0;

/// Map width in tiles.
pub const MAP_W: usize = 50;

/// Map height in tiles.
pub const MAP_H: usize = 50;

/// World width in world units.
pub const WORLD_W: f32 = MAP_W as f32 * TILE_SIZE;

/// World height in world units.
pub const WORLD_H: f32 = MAP_H as f32 * TILE_SIZE;

/// Viewport dimensions, used only for camera centering.
pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 600.0;

// --- Player ---

/// Player hitbox.
pub const PLAYER_W: f32 = 14.0;
pub const PLAYER_H: f32 = 18.0;

/// Acceleration added along the (normalized) input direction each tick.
pub const PLAYER_ACCEL: f32 = 0.6;

/// Velocity damping multiplier applied every tick, input or not.
pub const PLAYER_DAMPING: f32 = 0.8;

pub const PLAYER_MAX_HP: f32 = 100.0;
pub const PLAYER_MAX_MANA: f32 = 100.0;

/// Mana regenerated per tick while the simulation is live.
pub const MANA_REGEN_PER_TICK: f32 = 0.15;

/// Radius of the fog-revealing light around the player.
pub const PLAYER_LIGHT_RADIUS: f32 = 200.0;

// --- Melee swing ---

/// Swing progress added per tick; the swing completes at 1.0.
pub const SWING_PROGRESS_PER_TICK: f32 = 0.12;

/// Total angular sweep of a swing (radians), centered on the aim angle.
pub const SWING_ARC: f32 = 2.2;

/// Blade reach at tier 0; each sword tier adds `SWING_REACH_PER_TIER`.
pub const SWING_BASE_REACH: f32 = 28.0;
pub const SWING_REACH_PER_TIER: f32 = 8.0;

/// Square hit probe centered at the blade tip.
pub const SWING_PROBE_SIZE: f32 = 16.0;

/// Melee damage at tier 0; each sword tier adds `SWING_DAMAGE_PER_TIER`.
pub const SWING_BASE_DAMAGE: f32 = 30.0;
pub const SWING_DAMAGE_PER_TIER: f32 = 15.0;

/// Knockback distance applied along the blade direction on a melee hit.
pub const SWING_KNOCKBACK: f32 = 15.0;

/// Damage a swing probe deals to a crate each tick it overlaps.
pub const SWING_CRATE_DAMAGE: f32 = 15.0;

/// Maximum sword tier.
pub const SWORD_TIER_MAX: u8 = 3;

// --- Ranged ---

/// Fireball mana cost; casting with less is a silent no-op.
pub const FIREBALL_MANA_COST: f32 = 25.0;
pub const FIREBALL_SPEED: f32 = 4.0;
pub const FIREBALL_LIFE_TICKS: u32 = 80;
pub const FIREBALL_DAMAGE: f32 = 40.0;
/// Fireball collision box edge length.
pub const FIREBALL_SIZE: f32 = 12.0;

pub const ARROW_SPEED: f32 = 4.0;
pub const ARROW_LIFE_TICKS: u32 = 60;
/// Damage a hostile arrow deals to the player.
pub const ARROW_DAMAGE: f32 = 10.0;
pub const ARROW_SIZE: f32 = 4.0;

/// Damage any projectile deals to a crate it strikes.
pub const PROJECTILE_CRATE_DAMAGE: f32 = 10.0;

// --- Ultimate ---

/// Mana cost of the ultimate dash.
pub const ULT_MANA_COST: f32 = 50.0;

/// Locked dash speed while the ultimate is active.
pub const ULT_SPEED: f32 = 14.0;

/// Ultimate duration in ticks.
pub const ULT_DURATION_TICKS: u32 = 30;

/// Length of the backward damage triangle.
pub const ULT_TRIANGLE_LENGTH: f32 = 100.0;

/// Half-angle of the triangle edges off the reverse travel direction (radians).
pub const ULT_TRIANGLE_HALF_ANGLE: f32 = 0.6;

/// Damage per tick to enemies inside the triangle. No per-hit limiting.
pub const ULT_TRIANGLE_DAMAGE: f32 = 5.0;

/// Damage per tick to enemies overlapping the player during the dash.
pub const ULT_CONTACT_DAMAGE: f32 = 10.0;

/// Damage per tick to crates inside the triangle.
pub const ULT_CRATE_DAMAGE: f32 = 5.0;

// --- Enemies ---

/// Enemies beyond this distance from the player do not run AI.
pub const ENEMY_AGGRO_CULL: f32 = 1000.0;

/// Beyond this distance enemies move at half speed even when lit.
pub const ENEMY_NEAR_RADIUS: f32 = 500.0;

/// Margin beyond the light radius within which an enemy counts as seen.
pub const ENEMY_SEEN_MARGIN: f32 = 50.0;

/// Speed multiplier for unseen or distant enemies.
pub const ENEMY_FAR_SPEED_FACTOR: f32 = 0.5;

/// Contact damage per tick from an enemy overlapping the player.
pub const ENEMY_CONTACT_DAMAGE: f32 = 0.5;

/// Archers closer than this (and seen) back away.
pub const ARCHER_RETREAT_RADIUS: f32 = 120.0;

/// Archer firing range.
pub const ARCHER_RANGE: f32 = 280.0;

/// Ticks between archer shots while holding position.
pub const ARCHER_SHOOT_COOLDOWN_TICKS: u32 = 90;

/// Bat oscillation phase advance per tick.
pub const BAT_PHASE_PER_TICK: f32 = 0.2;

/// Per-wave enemy hp multiplier: `1 + wave * ENEMY_HP_WAVE_SCALE`.
pub const ENEMY_HP_WAVE_SCALE: f32 = 0.15;

// --- Waves ---

/// Highest wave; clearing it wins the run.
pub const WAVE_MAX: u32 = 10;

/// Enemies in wave n: `WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * n`.
pub const WAVE_BASE_ENEMIES: u32 = 8;
pub const WAVE_ENEMIES_PER_LEVEL: u32 = 3;

/// Ticks between individual enemy spawns within a wave (~800 ms).
pub const WAVE_SPAWN_INTERVAL_TICKS: u32 = 48;

/// Countdown from transition trigger to the next wave starting.
pub const WAVE_COUNTDOWN_TICKS: u32 = 500;

/// Kill percentage that arms the next-wave countdown.
pub const WAVE_TRANSITION_PERCENT: u32 = 85;

/// Positional jitter applied around a spawn gate.
pub const SPAWN_GATE_JITTER: f32 = 20.0;

// --- Props ---

pub const CRATE_SIZE: f32 = 24.0;
pub const CRATE_HP: f32 = 20.0;

/// Ambient respawning keeps roughly this many live crates in the world.
pub const CRATE_CAP: usize = 30;

/// Per-tick chance of an ambient crate spawn while under the cap.
pub const CRATE_RESPAWN_CHANCE: f64 = 0.02;

/// Crate placement attempts during initial world build.
pub const CRATE_INITIAL_ATTEMPTS: usize = 60;

/// Crates never spawn within this distance of the player.
pub const CRATE_MIN_PLAYER_DIST: f32 = 100.0;

// --- Loot ---

/// Gold value dropped by every slain enemy.
pub const KILL_GOLD_VALUE: f32 = 10.0;

/// Chance of an additional blood drop per kill.
pub const KILL_BLOOD_CHANCE: f64 = 0.2;

/// Chance a broken crate drops an item at all.
pub const CRATE_DROP_CHANCE: f64 = 0.5;

/// Of crate drops, the share that is food (the rest is gold).
pub const CRATE_FOOD_SHARE: f64 = 0.3;

/// Hp restored by a food pickup, capped at max hp.
pub const FOOD_HEAL: f32 = 20.0;

/// Item pickup box edge length.
pub const ITEM_SIZE: f32 = 8.0;

/// Magnet pull radius and per-tick lerp factor.
pub const MAGNET_RADIUS: f32 = 150.0;
pub const MAGNET_PULL: f32 = 0.1;

// --- Economy ---

/// Gold cost to upgrade the sword, indexed by current tier.
pub const FORGE_COSTS: [u32; 3] = [80, 250, 600];

/// Blood costs of the altar unlocks.
pub const ALTAR_COST_MAGNET: u32 = 15;
pub const ALTAR_COST_MINIMAP: u32 = 25;
pub const ALTAR_COST_PAUSE: u32 = 10;

/// Kills required before the altar becomes interactable.
pub const ALTAR_KILL_THRESHOLD: u32 = 10;

/// Interaction radius around the forge and altar.
pub const LANDMARK_INTERACT_RADIUS: f32 = 60.0;

// --- Particles ---

/// Cosmetic particle lifetime in ticks.
pub const PARTICLE_LIFE_TICKS: u32 = 15;

/// Particle launch velocity is uniform in ±this on each axis.
pub const PARTICLE_SPREAD: f32 = 2.0;

// --- Particle colors (rgb) ---

pub const COLOR_HIT_FLASH: [u8; 3] = [255, 255, 255];
pub const COLOR_BLOOD: [u8; 3] = [192, 57, 43];
pub const COLOR_WOOD: [u8; 3] = [141, 110, 99];
pub const COLOR_EMBER: [u8; 3] = [230, 126, 34];
pub const COLOR_ULT_TRAIL: [u8; 3] = [231, 76, 60];
pub const COLOR_CRATE_CHIP: [u8; 3] = [221, 221, 221];

// --- Fog ---

/// Fog mask cell edge length in world units.
pub const FOG_CELL: f32 = 8.0;
