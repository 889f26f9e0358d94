// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,
}

/// Min-priority open set with decrease-key semantics.
///
/// Superseded heap entries are deleted lazily: `live` holds the current `(score, seq)` for every
/// queued cell and `pop` discards heap entries that no longer match it. Ties pop in push order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<(u32, u64, Cell)>>,
    live: HashMap<Cell, (u32, u64)>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            live: HashMap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Queues `cell` with `score`, or lowers its score if it is already queued higher.
    ///
    /// Returns `false` when the cell is already queued with a score that is lower or equal.
    pub fn push(&mut self, cell: Cell, score: u32) -> bool {
        if let Some(&(existing, _)) = self.live.get(&cell) {
            if existing <= score {
                return false;
            }
        }

        let seq = self.seq;
        self.seq += 1;
        self.live.insert(cell, (score, seq));
        self.heap.push(Reverse((score, seq, cell)));
        true
    }

    pub fn pop(&mut self) -> Result<Cell, FrontierError> {
        self.pop_with_score().map(|(cell, _score)| cell)
    }

    pub fn pop_with_score(&mut self) -> Result<(Cell, u32), FrontierError> {
        while let Some(Reverse((score, seq, cell))) = self.heap.pop() {
            if self.live.get(&cell) != Some(&(score, seq)) {
                continue;
            }
            self.live.remove(&cell);
            return Ok((cell, score));
        }
        Err(FrontierError::Empty)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains_key(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.seq = 0;
    }
}
