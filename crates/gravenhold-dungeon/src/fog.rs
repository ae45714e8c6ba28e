//! Fog-of-war reveal mask.
//!
//! A world-sized boolean grid at coarse cell resolution. Starts fully
//! opaque; circular reveals around the player are permanent. There is no
//! occlusion and no re-darkening; revealed area only ever grows.

use glam::Vec2;

use gravenhold_core::constants::{FOG_CELL, WORLD_H, WORLD_W};

/// Monotonic reveal mask. One cell per `FOG_CELL`-sized square of world.
#[derive(Debug, Clone)]
pub struct FogMask {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    revealed: usize,
}

impl FogMask {
    /// A fully opaque mask covering the whole world.
    pub fn new_opaque() -> Self {
        let cols = (WORLD_W / FOG_CELL).ceil() as usize;
        let rows = (WORLD_H / FOG_CELL).ceil() as usize;
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
            revealed: 0,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of revealed cells. Non-decreasing over the mask's lifetime.
    pub fn revealed_cells(&self) -> usize {
        self.revealed
    }

    /// Whether the cell under a world position has been revealed.
    pub fn is_revealed(&self, pos: Vec2) -> bool {
        match self.cell_index(pos) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Raw cell row, for renderers compositing the mask.
    pub fn row(&self, r: usize) -> &[bool] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Permanently reveal every cell whose center lies within `radius`
    /// of `center`.
    pub fn reveal_circle(&mut self, center: Vec2, radius: f32) {
        let r_sq = radius * radius;
        let min_col = (((center.x - radius) / FOG_CELL).floor().max(0.0)) as usize;
        let min_row = (((center.y - radius) / FOG_CELL).floor().max(0.0)) as usize;
        let max_col = (((center.x + radius) / FOG_CELL).ceil() as usize).min(self.cols);
        let max_row = (((center.y + radius) / FOG_CELL).ceil() as usize).min(self.rows);

        for row in min_row..max_row {
            for col in min_col..max_col {
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) * FOG_CELL,
                    (row as f32 + 0.5) * FOG_CELL,
                );
                if cell_center.distance_squared(center) <= r_sq {
                    let i = row * self.cols + col;
                    if !self.cells[i] {
                        self.cells[i] = true;
                        self.revealed += 1;
                    }
                }
            }
        }
    }

    fn cell_index(&self, pos: Vec2) -> Option<usize> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = (pos.x / FOG_CELL) as usize;
        let row = (pos.y / FOG_CELL) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }
}
