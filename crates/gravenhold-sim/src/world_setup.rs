//! Entity spawn factories for populating the simulation world.
//!
//! Creates wall props, crates, enemies, projectiles, items, and particle
//! bursts with appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::*;
use gravenhold_core::constants::*;
use gravenhold_core::enums::*;

use gravenhold_ai::profiles;
use gravenhold_dungeon::generator::Room;
use gravenhold_dungeon::grid::{Tile, TileGrid};

/// Walls are never damaged; the hp field only exists for prop uniformity.
const WALL_PROP_HP: f32 = 9999.0;

/// Spawn one wall prop per wall cell of the carved grid.
pub fn spawn_wall_props(world: &mut World, grid: &TileGrid) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            if grid.get(x, y) == Some(Tile::Wall) {
                world.spawn((
                    Prop {
                        kind: PropKind::Wall,
                        hp: WALL_PROP_HP,
                        active: true,
                        size: Vec2::splat(TILE_SIZE),
                    },
                    Position(Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE)),
                ));
            }
        }
    }
}

/// Try to place a crate at a random point inside a random room. Placements
/// too close to the player are rejected (the attempt is spent either way).
pub fn try_spawn_crate(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    rooms: &[Room],
    player_pos: Vec2,
) -> Option<hecs::Entity> {
    let room = rooms[rng.gen_range(0..rooms.len())];
    let pos = Vec2::new(
        (room.x as f32 + rng.gen::<f32>() * room.w as f32) * TILE_SIZE,
        (room.y as f32 + rng.gen::<f32>() * room.h as f32) * TILE_SIZE,
    );
    if pos.distance(player_pos) <= CRATE_MIN_PLAYER_DIST {
        return None;
    }
    Some(world.spawn((
        Prop {
            kind: PropKind::Crate,
            hp: CRATE_HP,
            active: true,
            size: Vec2::splat(CRATE_SIZE),
        },
        Position(pos),
    )))
}

/// Spawn one enemy at a random gate with positional jitter. The kind is
/// drawn from the wave's spawn pool and stats scale with the wave.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    gates: &[Vec2],
) -> hecs::Entity {
    let gate = gates[rng.gen_range(0..gates.len())];
    let pos = gate
        + Vec2::new(
            rng.gen_range(-SPAWN_GATE_JITTER..SPAWN_GATE_JITTER),
            rng.gen_range(-SPAWN_GATE_JITTER..SPAWN_GATE_JITTER),
        );

    let pool = profiles::spawn_pool(wave);
    let kind = pool[rng.gen_range(0..pool.len())];
    let stats = profiles::stats(kind, wave);

    world.spawn((
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

pub fn spawn_projectile(
    world: &mut World,
    pos: Vec2,
    kind: ProjectileKind,
    velocity: Vec2,
    hostile: bool,
) -> hecs::Entity {
    let life = match kind {
        ProjectileKind::Fireball => FIREBALL_LIFE_TICKS,
        ProjectileKind::Arrow => ARROW_LIFE_TICKS,
    };
    world.spawn((
        Projectile {
            kind,
            velocity,
            life,
            hostile,
        },
        Position(pos),
    ))
}

pub fn spawn_item(world: &mut World, pos: Vec2, kind: ItemKind, value: f32) -> hecs::Entity {
    world.spawn((Item { kind, value }, Position(pos)))
}

/// Burst of `count` cosmetic particles scattered from `pos`.
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pos: Vec2,
    color: [u8; 3],
    count: usize,
) {
    for _ in 0..count {
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            rng.gen_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
        );
        world.spawn((
            Particle {
                velocity,
                life: PARTICLE_LIFE_TICKS,
                color,
            },
            Position(pos),
        ));
    }
}

/// Resolve the aftermath of broken crates: debris particles and a chance
/// drop (mostly gold, sometimes food).
pub fn crate_breaks(world: &mut World, rng: &mut ChaCha8Rng, positions: &[Vec2]) {
    for &pos in positions {
        spawn_particles(world, rng, pos, COLOR_WOOD, 6);
        if rng.gen_bool(CRATE_DROP_CHANCE) {
            let kind = if rng.gen_bool(CRATE_FOOD_SHARE) {
                ItemKind::Food
            } else {
                ItemKind::Gold
            };
            spawn_item(world, pos + Vec2::splat(5.0), kind, KILL_GOLD_VALUE);
        }
    }
}
