//! Axis-aligned collision resolution against wall tiles and crates.
//!
//! Scans the 3x3 tile neighborhood around the entity's center plus any
//! overlapping active crate, and pushes the entity out along the axis
//! with the larger center-to-center delta (the axis of smaller
//! penetration), clamping it flush against that edge.

use glam::Vec2;
use hecs::World;

use gravenhold_core::components::{Position, Prop};
use gravenhold_core::constants::TILE_SIZE;
use gravenhold_core::enums::PropKind;
use gravenhold_core::types::Aabb;

use gravenhold_dungeon::grid::TileGrid;

/// Which solid categories an entity collides with. Ghosts pass through
/// wall tiles; bats fly over everything.
#[derive(Debug, Clone, Copy)]
pub struct SolidFilter {
    pub walls: bool,
    pub crates: bool,
}

impl SolidFilter {
    pub const ALL: Self = Self {
        walls: true,
        crates: true,
    };
    pub const CRATES_ONLY: Self = Self {
        walls: false,
        crates: true,
    };
}

/// Snapshot the rects of all active crates. Crates don't move, so one
/// collection per pass is enough.
pub fn collect_crate_rects(world: &World, out: &mut Vec<Aabb>) {
    out.clear();
    let mut query = world.query::<(&Prop, &Position)>();
    for (_entity, (prop, pos)) in query.iter() {
        if prop.active && prop.kind == PropKind::Crate {
            out.push(Aabb::from_pos(pos.0, prop.size));
        }
    }
}

/// Resolve one entity against the grid and the collected crate rects.
pub fn resolve(pos: &mut Vec2, size: Vec2, grid: &TileGrid, crates: &[Aabb], filter: SolidFilter) {
    if filter.walls {
        resolve_walls(pos, size, grid);
    }
    if filter.crates {
        for rect in crates {
            push_out(pos, size, rect);
        }
    }
}

fn resolve_walls(pos: &mut Vec2, size: Vec2, grid: &TileGrid) {
    let center = *pos + size * 0.5;
    // Out-of-map centers skip the scan entirely; no out-of-range lookups.
    let Some((cx, cy)) = grid.world_to_tile(center) else {
        return;
    };

    let x0 = cx.saturating_sub(1);
    let y0 = cy.saturating_sub(1);
    for ty in y0..=(cy + 1).min(grid.height - 1) {
        for tx in x0..=(cx + 1).min(grid.width - 1) {
            if grid.is_wall(tx, ty) {
                let wall = Aabb::new(
                    tx as f32 * TILE_SIZE,
                    ty as f32 * TILE_SIZE,
                    TILE_SIZE,
                    TILE_SIZE,
                );
                push_out(pos, size, &wall);
            }
        }
    }
}

/// Separate an entity from one solid, if they overlap.
fn push_out(pos: &mut Vec2, size: Vec2, solid: &Aabb) {
    let entity = Aabb::from_pos(*pos, size);
    if !entity.overlaps(solid) {
        return;
    }
    let delta = entity.center() - solid.center();
    if delta.x.abs() > delta.y.abs() {
        pos.x = if delta.x > 0.0 {
            solid.pos.x + solid.size.x
        } else {
            solid.pos.x - size.x
        };
    } else {
        pos.y = if delta.y > 0.0 {
            solid.pos.y + solid.size.y
        } else {
            solid.pos.y - size.y
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravenhold_dungeon::grid::Tile;

    fn open_grid_with_wall(wx: usize, wy: usize) -> TileGrid {
        let mut grid = TileGrid::filled_walls(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                grid.set(x, y, Tile::Floor);
            }
        }
        grid.set(wx, wy, Tile::Wall);
        grid
    }

    #[test]
    fn pushes_out_along_shallow_axis() {
        let grid = open_grid_with_wall(5, 5);
        // Entity overlapping the wall's left edge, slightly above center:
        // horizontal delta dominates, so it resolves in x.
        let mut pos = Vec2::new(5.0 * TILE_SIZE - 10.0, 5.0 * TILE_SIZE + 2.0);
        resolve(&mut pos, Vec2::new(14.0, 18.0), &grid, &[], SolidFilter::ALL);
        assert_eq!(pos.x, 5.0 * TILE_SIZE - 14.0);
        assert_eq!(pos.y, 5.0 * TILE_SIZE + 2.0);
    }

    #[test]
    fn clamps_flush_below_wall() {
        let grid = open_grid_with_wall(5, 5);
        let mut pos = Vec2::new(5.0 * TILE_SIZE + 13.0, 6.0 * TILE_SIZE - 6.0);
        resolve(&mut pos, Vec2::new(14.0, 18.0), &grid, &[], SolidFilter::ALL);
        assert_eq!(pos.y, 6.0 * TILE_SIZE);
    }

    #[test]
    fn crate_filter_applies_without_walls() {
        let grid = open_grid_with_wall(0, 0);
        let crate_rect = Aabb::new(100.0, 100.0, 24.0, 24.0);
        let mut pos = Vec2::new(90.0, 104.0);
        resolve(
            &mut pos,
            Vec2::new(14.0, 16.0),
            &grid,
            &[crate_rect],
            SolidFilter::CRATES_ONLY,
        );
        assert_eq!(pos.x, 100.0 - 14.0);
    }

    #[test]
    fn non_overlapping_solid_is_untouched() {
        let grid = open_grid_with_wall(5, 5);
        let mut pos = Vec2::new(40.0, 40.0);
        let before = pos;
        resolve(&mut pos, Vec2::new(14.0, 18.0), &grid, &[], SolidFilter::ALL);
        assert_eq!(pos, before);
    }
}
