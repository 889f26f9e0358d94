// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A* over the 4-connected occupancy grid.
//!
//! The heuristic is Manhattan distance plus a turn penalty, which makes the search favour long
//! straight runs over staircases. The penalty makes the heuristic inadmissible, so results are
//! not guaranteed to be shortest.

use crate::grid::{Cell, Grid};

use super::frontier::PriorityFrontier;
use super::path::Path;

/// Penalty when the step into a cell and the cell's bearing to the goal disagree.
const TURN_PENALTY: u32 = 10;
/// Penalty for the same disagreement when the incoming step is classified as diagonal.
const DIAGONAL_TURN_PENALTY: u32 = 20;

/// 8-way bearing classification. Indices 0-3 are cardinal, 4-7 diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Bearing {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    NorthEast = 4,
    SouthEast = 5,
    SouthWest = 6,
    NorthWest = 7,
}

impl Bearing {
    fn between(from: Cell, to: Cell) -> Option<Self> {
        let d_row = (to.row() - from.row()).signum();
        let d_col = (to.col() - from.col()).signum();
        let bearing = match (d_row, d_col) {
            (-1, 0) => Self::North,
            (0, 1) => Self::East,
            (1, 0) => Self::South,
            (0, -1) => Self::West,
            (-1, 1) => Self::NorthEast,
            (1, 1) => Self::SouthEast,
            (1, -1) => Self::SouthWest,
            (-1, -1) => Self::NorthWest,
            _ => return None,
        };
        Some(bearing)
    }

    fn is_diagonal(self) -> bool {
        (4..=7).contains(&(self as u8))
    }
}

fn turn_penalty(from: Cell, next: Cell, goal: Cell) -> u32 {
    let Some(to_goal) = Bearing::between(next, goal) else {
        return 0;
    };
    let Some(incoming) = Bearing::between(from, next) else {
        return 0;
    };
    if incoming == to_goal {
        return 0;
    }
    if incoming.is_diagonal() {
        DIAGONAL_TURN_PENALTY
    } else {
        TURN_PENALTY
    }
}

/// Heuristic for `next` when it is relaxed from `current`.
///
/// `predecessor` is the cell `current` was reached from. The start cell has none, so its
/// neighbours are scored by distance alone.
fn estimate(predecessor: Option<Cell>, current: Cell, next: Cell, goal: Cell) -> u32 {
    let distance = next.manhattan(goal);
    match predecessor {
        Some(_) => distance + turn_penalty(current, next, goal),
        None => distance,
    }
}

/// Reusable A* state.
///
/// Per-cell buffers are stamped with a generation so a new search does not have to clear them.
#[derive(Debug, Default)]
pub struct PathSearch {
    frontier: PriorityFrontier,
    gen: u32,
    g_gen: Vec<u32>,
    g_cost: Vec<u32>,
    came_from: Vec<Option<Cell>>,
    closed_gen: Vec<u32>,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, len: usize) -> u32 {
        if self.g_gen.len() != len {
            self.g_gen = vec![0; len];
            self.g_cost = vec![0; len];
            self.came_from = vec![None; len];
            self.closed_gen = vec![0; len];
            self.gen = 0;
        }

        self.gen = self.gen.wrapping_add(1);
        if self.gen == 0 {
            self.g_gen.fill(0);
            self.closed_gen.fill(0);
            self.gen = 1;
        }
        self.frontier.clear();
        self.gen
    }

    fn g(&self, idx: usize, gen: u32) -> u32 {
        if self.g_gen[idx] == gen {
            self.g_cost[idx]
        } else {
            u32::MAX
        }
    }

    fn set_g(&mut self, idx: usize, gen: u32, cost: u32, came_from: Option<Cell>) {
        self.g_gen[idx] = gen;
        self.g_cost[idx] = cost;
        self.came_from[idx] = came_from;
    }

    /// Finds a walkable route from `start` towards `goal`.
    ///
    /// `start` and `goal` themselves may be occupied (they usually sit inside obstacles); every
    /// other cell on the route is walkable. The search stops as soon as it pops `goal` or a
    /// 4-neighbour of `goal`, so `goal` is never expanded. The returned path begins with `start`
    /// and ends with `goal`. Returns an empty path when `start == goal`, when either cell is off
    /// the grid, or when the frontier runs dry.
    pub fn find_path(&mut self, grid: &Grid, start: Cell, goal: Cell) -> Path {
        if start == goal {
            return Path::empty();
        }
        let (Some(start_idx), Some(_)) = (grid.index_of(start), grid.index_of(goal)) else {
            return Path::empty();
        };

        let gen = self.begin(grid.len());
        self.set_g(start_idx, gen, 0, None);
        self.frontier.push(start, start.manhattan(goal));

        while let Ok(current) = self.frontier.pop() {
            if current == goal || current.is_adjacent(goal) {
                return self.reconstruct(grid, current, goal);
            }

            let Some(current_idx) = grid.index_of(current) else {
                continue;
            };
            self.closed_gen[current_idx] = gen;
            let current_g = self.g(current_idx, gen);
            let predecessor = self.came_from[current_idx];

            for next in grid.walkable_neighbors(current) {
                let Some(next_idx) = grid.index_of(next) else {
                    continue;
                };
                if self.closed_gen[next_idx] == gen {
                    continue;
                }

                let tentative = current_g + 1;
                if tentative >= self.g(next_idx, gen) {
                    continue;
                }
                self.set_g(next_idx, gen, tentative, Some(current));

                let h = estimate(predecessor, current, next, goal);
                self.frontier.push(next, tentative + h);
            }
        }

        Path::empty()
    }

    fn reconstruct(&self, grid: &Grid, reached: Cell, goal: Cell) -> Path {
        let mut cells = Vec::new();
        let mut cursor = Some(reached);
        while let Some(cell) = cursor {
            cells.push(cell);
            cursor = grid.index_of(cell).and_then(|idx| self.came_from[idx]);
        }
        cells.reverse();

        if reached != goal {
            cells.push(goal);
        }
        Path::from(cells)
    }
}

/// One-shot convenience over [`PathSearch::find_path`].
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Path {
    PathSearch::new().find_path(grid, start, goal)
}
