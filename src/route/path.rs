// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// An ordered run of grid cells from a start boundary cell to a goal boundary cell.
///
/// An empty path is the "no route" outcome; it is data, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Cells strictly between the two endpoints.
    pub fn interior(&self) -> &[Cell] {
        match self.cells.len() {
            0..=2 => &[],
            len => &self.cells[1..len - 1],
        }
    }

    /// Number of heading changes along the path.
    pub fn turns(&self) -> usize {
        let mut turns = 0usize;
        let mut prev = None;
        for window in self.cells.windows(2) {
            let dir = (window[1].row() - window[0].row(), window[1].col() - window[0].col());
            if prev.is_some_and(|prev| prev != dir) {
                turns += 1;
            }
            prev = Some(dir);
        }
        turns
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
