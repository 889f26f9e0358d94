// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::grid::{Cell, Grid};
use crate::model::Obstacle;

use super::path::Path;
use super::search::PathSearch;

/// Cells claimed by an obstacle for one pass.
pub type CoveredCells = BTreeSet<Cell>;

/// Cells an obstacle claims on `grid`.
///
/// Rows run from `row(y) + 1` up to and including `row(y + height)`, columns likewise. The first
/// row/column under the rectangle stays free so every obstacle keeps a walkable rim on its top and
/// left side. Indices that fall off the grid are dropped, so an obstacle hugging the bottom/right
/// canvas edge can end up covering nothing.
pub fn covered_cells(grid: &Grid, obstacle: &Obstacle) -> CoveredCells {
    let row_start = grid.row_of(obstacle.y()) + 1;
    let row_end = grid.row_of(obstacle.y() + obstacle.height()) + 1;
    let col_start = grid.col_of(obstacle.x()) + 1;
    let col_end = grid.col_of(obstacle.x() + obstacle.width()) + 1;

    (row_start..row_end)
        .flat_map(|row| (col_start..col_end).map(move |col| Cell::new(row, col)))
        .filter(|cell| grid.contains(*cell))
        .collect()
}

/// Midpoint of the covered cells' bounding box (integer-truncated).
pub fn center_cell(cells: &CoveredCells) -> Option<Cell> {
    let first = cells.first()?;
    let (mut min_row, mut max_row) = (first.row(), first.row());
    let (mut min_col, mut max_col) = (first.col(), first.col());
    for cell in cells {
        min_row = min_row.min(cell.row());
        max_row = max_row.max(cell.row());
        min_col = min_col.min(cell.col());
        max_col = max_col.max(cell.col());
    }
    Some(Cell::new((min_row + max_row) / 2, (min_col + max_col) / 2))
}

/// Covered cells with at least one walkable 4-neighbour, in cell order.
pub fn boundary_walkable(grid: &Grid, cells: &CoveredCells) -> Vec<Cell> {
    cells
        .iter()
        .copied()
        .filter(|cell| !grid.walkable_neighbors(*cell).is_empty())
        .collect()
}

fn ranked_towards(mut candidates: Vec<Cell>, anchor: Cell) -> Vec<Cell> {
    candidates.sort_by_key(|cell| (cell.manhattan(anchor), *cell));
    candidates
}

/// Picks start/goal cells for an edge and runs the search until a pair connects.
#[derive(Debug, Default)]
pub struct EndpointSelector {
    search: PathSearch,
    searches: u64,
}

impl EndpointSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of A* runs issued so far.
    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Returns the first non-empty path between a source and a destination candidate.
    ///
    /// Source candidates are tried nearest-first to the destination's center cell; for each of
    /// them destination candidates are tried nearest-first to that source candidate. The first
    /// success wins, which bounds the work but does not look for the globally shortest pair.
    pub fn select(&mut self, grid: &Grid, source: &CoveredCells, dest: &CoveredCells) -> Path {
        let Some(dest_center) = center_cell(dest) else {
            return Path::empty();
        };

        let sources = ranked_towards(boundary_walkable(grid, source), dest_center);
        if sources.is_empty() {
            return Path::empty();
        }
        let dests = boundary_walkable(grid, dest);
        if dests.is_empty() {
            return Path::empty();
        }

        for start in sources {
            for goal in ranked_towards(dests.clone(), start) {
                self.searches += 1;
                let path = self.search.find_path(grid, start, goal);
                if !path.is_empty() {
                    return path;
                }
            }
        }

        Path::empty()
    }
}
