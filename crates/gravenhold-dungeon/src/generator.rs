//! One-shot procedural dungeon generator.
//!
//! Carves rooms and L-shaped corridors into a wall-filled grid, then
//! derives landmarks, spawn gates, and static decoration. Generation
//! always succeeds; room rectangles are clamped to stay inside the grid.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::constants::{MAP_H, MAP_W, TILE_SIZE};
use gravenhold_core::types::Aabb;

use crate::grid::{Tile, TileGrid};

/// Room side length range in tiles.
const ROOM_MIN_SIDE: usize = 4;
const ROOM_MAX_SIDE: usize = 9;

/// Forge and altar footprints in world units.
const FORGE_SIZE: Vec2 = Vec2::new(40.0, 30.0);
const ALTAR_SIZE: Vec2 = Vec2::new(30.0, 40.0);

const CARPET_SIZE: Vec2 = Vec2::new(20.0, 20.0);
const TORCH_SIZE: Vec2 = Vec2::new(4.0, 10.0);

/// A carved room rectangle in tile coordinates, with its center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    pub cx: usize,
    pub cy: usize,
}

impl Room {
    /// World position of the room's center cell.
    pub fn center_world(&self) -> Vec2 {
        Vec2::new(self.cx as f32 * TILE_SIZE, self.cy as f32 * TILE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Carpet,
    Torch,
}

/// Static cosmetic decoration, placed once at generation.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub kind: DecorKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything the generator produces. Immutable after generation except
/// for the prop/crate layer the simulation builds on top of the grid.
#[derive(Debug, Clone)]
pub struct DungeonPlan {
    pub grid: TileGrid,
    pub rooms: Vec<Room>,
    /// The four extremal room centers enemies enter from: N, S, W, E.
    pub spawn_gates: Vec<Vec2>,
    pub player_spawn: Vec2,
    pub forge: Aabb,
    pub altar: Aabb,
    pub decorations: Vec<Decoration>,
}

/// Generate a dungeon with `room_count` rooms (at least 3: spawn room,
/// forge room, altar room).
pub fn generate(rng: &mut ChaCha8Rng, room_count: usize) -> DungeonPlan {
    let room_count = room_count.max(3);
    let mut grid = TileGrid::filled_walls(MAP_W, MAP_H);
    let mut rooms: Vec<Room> = Vec::with_capacity(room_count);

    for i in 0..room_count {
        let w = rng.gen_range(ROOM_MIN_SIDE..=ROOM_MAX_SIDE);
        let h = rng.gen_range(ROOM_MIN_SIDE..=ROOM_MAX_SIDE);

        let (x, y) = if i == 0 {
            // Spawn room is always map-centered.
            (MAP_W / 2 - w / 2, MAP_H / 2 - h / 2)
        } else {
            (
                rng.gen_range(1..=MAP_W - w - 2),
                rng.gen_range(1..=MAP_H - h - 2),
            )
        };

        // Defensive clamp: room must sit fully inside the outer wall ring.
        let x = x.clamp(1, MAP_W.saturating_sub(w + 1));
        let y = y.clamp(1, MAP_H.saturating_sub(h + 1));

        let room = Room {
            x,
            y,
            w,
            h,
            cx: x + w / 2,
            cy: y + h / 2,
        };

        for ry in y..y + h {
            for rx in x..x + w {
                grid.set(rx, ry, Tile::Floor);
            }
        }

        if i > 0 {
            let prev = rooms[i - 1];
            carve_corridor(&mut grid, (prev.cx, prev.cy), (room.cx, room.cy));
        }
        rooms.push(room);
    }

    let spawn_gates = find_spawn_gates(&rooms);
    let decorations = place_decorations(&grid, &rooms);

    DungeonPlan {
        player_spawn: rooms[0].center_world(),
        forge: Aabb::from_pos(rooms[1].center_world(), FORGE_SIZE),
        altar: Aabb::from_pos(rooms[2].center_world(), ALTAR_SIZE),
        spawn_gates,
        decorations,
        rooms,
        grid,
    }
}

/// Carve an L-shaped corridor: straight along x to the target column,
/// then along y to the target row.
fn carve_corridor(grid: &mut TileGrid, from: (usize, usize), to: (usize, usize)) {
    let (mut x, y0) = from;
    let (tx, ty) = to;
    while x != tx {
        grid.set(x, y0, Tile::Floor);
        x = if tx > x { x + 1 } else { x - 1 };
    }
    let mut y = y0;
    while y != ty {
        grid.set(tx, y, Tile::Floor);
        y = if ty > y { y + 1 } else { y - 1 };
    }
    grid.set(tx, ty, Tile::Floor);
}

/// The four room centers extremal in y (north/south) and x (west/east).
fn find_spawn_gates(rooms: &[Room]) -> Vec<Vec2> {
    // rooms is never empty; unwraps are safe.
    let north = rooms.iter().min_by_key(|r| r.y).expect("rooms non-empty");
    let south = rooms.iter().max_by_key(|r| r.y).expect("rooms non-empty");
    let west = rooms.iter().min_by_key(|r| r.x).expect("rooms non-empty");
    let east = rooms.iter().max_by_key(|r| r.x).expect("rooms non-empty");
    vec![
        north.center_world(),
        south.center_world(),
        west.center_world(),
        east.center_world(),
    ]
}

/// Carpet at every room center; torches above the room's top edge at the
/// center column and the one beside it, wherever the cell above is a wall.
fn place_decorations(grid: &TileGrid, rooms: &[Room]) -> Vec<Decoration> {
    let mut decor = Vec::new();
    for room in rooms {
        decor.push(Decoration {
            kind: DecorKind::Carpet,
            pos: room.center_world() - CARPET_SIZE * 0.5,
            size: CARPET_SIZE,
        });
        if room.y == 0 {
            continue;
        }
        for col in [room.cx, room.cx + 1] {
            if grid.is_wall(col, room.y - 1) {
                decor.push(Decoration {
                    kind: DecorKind::Torch,
                    pos: Vec2::new(
                        col as f32 * TILE_SIZE + TILE_SIZE * 0.4,
                        room.y as f32 * TILE_SIZE,
                    ),
                    size: TORCH_SIZE,
                });
            }
        }
    }
    decor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn plan_with_seed(seed: u64) -> DungeonPlan {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate(&mut rng, 16)
    }

    #[test]
    fn generates_requested_room_count() {
        for seed in 0..8 {
            let plan = plan_with_seed(seed);
            assert_eq!(plan.rooms.len(), 16);
        }
    }

    #[test]
    fn rooms_stay_inside_the_outer_wall_ring() {
        for seed in 0..8 {
            let plan = plan_with_seed(seed);
            for room in &plan.rooms {
                assert!(room.x >= 1);
                assert!(room.y >= 1);
                assert!(room.x + room.w < MAP_W);
                assert!(room.y + room.h < MAP_H);
            }
        }
    }

    #[test]
    fn room_centers_are_floor() {
        for seed in 0..8 {
            let plan = plan_with_seed(seed);
            for room in &plan.rooms {
                assert!(plan.grid.is_floor(room.cx, room.cy));
            }
        }
    }

    #[test]
    fn every_room_reachable_from_spawn_room() {
        for seed in 0..8 {
            let plan = plan_with_seed(seed);
            let start = (plan.rooms[0].cx, plan.rooms[0].cy);
            let seen = plan.grid.flood_reachable(start);
            for room in &plan.rooms {
                assert!(
                    seen[room.cy * plan.grid.width + room.cx],
                    "room at ({}, {}) unreachable with seed {seed}",
                    room.cx,
                    room.cy
                );
            }
        }
    }

    #[test]
    fn exactly_four_gates_at_extremal_room_centers() {
        let plan = plan_with_seed(7);
        assert_eq!(plan.spawn_gates.len(), 4);

        let min_y = plan.rooms.iter().map(|r| r.y).min().unwrap();
        let max_y = plan.rooms.iter().map(|r| r.y).max().unwrap();
        let min_x = plan.rooms.iter().map(|r| r.x).min().unwrap();
        let max_x = plan.rooms.iter().map(|r| r.x).max().unwrap();

        let matches_extremal = |gate: &Vec2| {
            plan.rooms.iter().any(|r| {
                r.center_world() == *gate
                    && (r.y == min_y || r.y == max_y || r.x == min_x || r.x == max_x)
            })
        };
        assert!(plan.spawn_gates.iter().all(matches_extremal));
    }

    #[test]
    fn landmarks_sit_on_designated_rooms() {
        let plan = plan_with_seed(3);
        assert_eq!(plan.player_spawn, plan.rooms[0].center_world());
        assert_eq!(plan.forge.pos, plan.rooms[1].center_world());
        assert_eq!(plan.altar.pos, plan.rooms[2].center_world());
    }

    #[test]
    fn spawn_room_is_map_centered() {
        let plan = plan_with_seed(11);
        let room = plan.rooms[0];
        assert_eq!(room.x, MAP_W / 2 - room.w / 2);
        assert_eq!(room.y, MAP_H / 2 - room.h / 2);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = plan_with_seed(42);
        let b = plan_with_seed(42);
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.spawn_gates, b.spawn_gates);
    }

    #[test]
    fn torches_only_under_wall_cells() {
        let plan = plan_with_seed(5);
        for d in &plan.decorations {
            if d.kind == DecorKind::Torch {
                let col = (d.pos.x / TILE_SIZE).floor() as usize;
                let row = (d.pos.y / TILE_SIZE).floor() as usize;
                assert!(row >= 1);
                assert!(plan.grid.is_wall(col, row - 1));
            }
        }
    }
}
