// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Discretized occupancy map for the router.
//!
//! The canvas is cut into square cells of `cell_size` canvas units. Cells live in a flat row-major
//! arena and are addressed by [`Cell`] coordinates; nothing outside the grid holds a reference to
//! cell state.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Grid coordinate of a cell (`row` grows downwards, `col` grows rightwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: i32,
    col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn manhattan(&self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }

    pub(crate) fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Up to four cardinal neighbours; never spills to the heap.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// Cardinal offsets in `(d_row, d_col)` form: N, S, E, W.
const CARDINAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq)]
struct CellState {
    occupied: bool,
    // Uniform for now; kept per cell so weighted routing does not need a layout change.
    cost: f32,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            occupied: false,
            cost: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions: cell {cell_size}, canvas {canvas_width}x{canvas_height}")]
    InvalidDimensions {
        cell_size: f64,
        canvas_width: f64,
        canvas_height: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cell_size: f64,
    canvas_width: f64,
    canvas_height: f64,
    width_cells: usize,
    height_cells: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Builds an all-walkable grid covering a `canvas_width` x `canvas_height` canvas.
    ///
    /// Fails with [`GridError::InvalidDimensions`] when the cell size is not a positive finite
    /// number, when either canvas side is not positive, or when flooring leaves zero cells in
    /// either direction.
    pub fn new(cell_size: f64, canvas_width: f64, canvas_height: f64) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidDimensions {
            cell_size,
            canvas_width,
            canvas_height,
        };

        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(invalid());
        }
        if !canvas_width.is_finite() || !canvas_height.is_finite() {
            return Err(invalid());
        }
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(invalid());
        }

        let width_cells = (canvas_width / cell_size).floor();
        let height_cells = (canvas_height / cell_size).floor();
        if width_cells < 1.0 || height_cells < 1.0 {
            return Err(invalid());
        }
        // Cell coordinates are i32; anything larger is not a usable canvas anyway.
        if width_cells > i32::MAX as f64 || height_cells > i32::MAX as f64 {
            return Err(invalid());
        }

        let width_cells = width_cells as usize;
        let height_cells = height_cells as usize;
        let len = width_cells.checked_mul(height_cells).ok_or_else(invalid)?;

        Ok(Self {
            cell_size,
            canvas_width,
            canvas_height,
            width_cells,
            height_cells,
            cells: vec![CellState::default(); len],
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn width_cells(&self) -> usize {
        self.width_cells
    }

    pub fn height_cells(&self) -> usize {
        self.height_cells
    }

    /// Row containing canvas `y`, clamped to the grid.
    pub fn row_of(&self, y: f64) -> i32 {
        clamp_index((y / self.cell_size).floor(), self.height_cells)
    }

    /// Column containing canvas `x`, clamped to the grid.
    pub fn col_of(&self, x: f64) -> i32 {
        clamp_index((x / self.cell_size).floor(), self.width_cells)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// Resets occupancy for the next pass. The arena is reused as-is.
    pub fn clear(&mut self) {
        for state in self.cells.iter_mut() {
            state.occupied = false;
        }
    }

    /// Marks every in-bounds cell as occupied. Out-of-bounds cells are ignored.
    pub fn mark_occupied<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Cell>,
    {
        for cell in cells {
            let cell: &Cell = cell.borrow();
            if let Some(idx) = self.index_of(*cell) {
                self.cells[idx].occupied = true;
            }
        }
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.index_of(Cell::new(row, col))
            .is_some_and(|idx| self.cells[idx].occupied)
    }

    pub fn is_walkable(&self, row: i32, col: i32) -> bool {
        self.index_of(Cell::new(row, col))
            .is_some_and(|idx| !self.cells[idx].occupied)
    }

    pub fn cell_cost(&self, cell: Cell) -> Option<f32> {
        self.index_of(cell).map(|idx| self.cells[idx].cost)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|state| state.occupied).count()
    }

    /// In-bounds cardinal neighbours in N, S, E, W order.
    pub fn neighbors4(&self, cell: Cell) -> Neighbors {
        CARDINAL
            .iter()
            .map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|next| self.contains(*next))
            .collect()
    }

    pub fn walkable_neighbors(&self, cell: Cell) -> Neighbors {
        CARDINAL
            .iter()
            .map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|next| self.is_walkable(next.row, next.col))
            .collect()
    }

    pub(crate) fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.height_cells || col >= self.width_cells {
            return None;
        }
        Some(row * self.width_cells + col)
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

fn clamp_index(raw: f64, len: usize) -> i32 {
    let max = (len - 1) as f64;
    // NaN falls through both comparisons; treat it like an off-canvas coordinate at the origin.
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    if raw >= max {
        return max as i32;
    }
    raw as i32
}
