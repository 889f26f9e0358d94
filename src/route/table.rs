// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::grid::Cell;
use crate::model::{Edge, Obstacle, ObstacleId};

use super::path::Path;

/// Resolved paths keyed by edge.
pub type RouteMap = BTreeMap<Edge, Path>;

/// Positions of an edge's endpoints in the obstacle snapshot of the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRefs {
    pub source: usize,
    pub dest: usize,
}

/// Registered edges in routing order, plus what the last pass derived for them.
///
/// Registration order matters: earlier edges claim cells first. The order is also where failed
/// edges get promoted, and that promotion survives into later passes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    order: Vec<Edge>,
    refs: BTreeMap<Edge, EndpointRefs>,
    paths: RouteMap,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Edges in current routing order.
    pub fn edges(&self) -> &[Edge] {
        &self.order
    }

    fn position(&self, edge: &Edge) -> Option<usize> {
        self.order
            .iter()
            .position(|registered| registered.same_link(edge))
    }

    /// `true` if `edge` or its reverse is registered.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.position(edge).is_some()
    }

    /// Appends `edge` to the routing order. Returns `false` if the link is already registered in
    /// either direction.
    pub fn register(&mut self, edge: Edge) -> bool {
        if self.contains(&edge) {
            return false;
        }
        self.order.push(edge);
        true
    }

    /// Removes the link (either direction) together with its derived state.
    pub fn deregister(&mut self, edge: &Edge) -> bool {
        let Some(idx) = self.position(edge) else {
            return false;
        };
        let removed = self.order.remove(idx);
        self.refs.remove(&removed);
        self.paths.remove(&removed);
        true
    }

    /// Makes the registrations match `edges`.
    ///
    /// Survivors keep their relative order, unknown edges are appended in the given order.
    /// Returns the number of `(added, removed)` edges.
    pub fn sync_with(&mut self, edges: &[Edge]) -> (usize, usize) {
        let stale = self
            .order
            .iter()
            .filter(|registered| !edges.iter().any(|edge| edge.same_link(registered)))
            .cloned()
            .collect::<Vec<_>>();
        for edge in &stale {
            self.deregister(edge);
        }

        let mut added = 0usize;
        for edge in edges {
            if self.register(edge.clone()) {
                added += 1;
            }
        }
        (added, stale.len())
    }

    /// Points every edge at its endpoints in `obstacles`.
    ///
    /// Edges whose source or destination is not in `obstacles` are deregistered and returned.
    pub fn resolve(&mut self, obstacles: &[Obstacle]) -> Vec<Edge> {
        let index = obstacles
            .iter()
            .enumerate()
            .map(|(idx, obstacle)| (obstacle.id(), idx))
            .collect::<BTreeMap<&ObstacleId, usize>>();

        self.refs.clear();
        let mut dropped = Vec::new();
        for edge in std::mem::take(&mut self.order) {
            match (index.get(edge.source()), index.get(edge.dest())) {
                (Some(&source), Some(&dest)) => {
                    let refs = EndpointRefs { source, dest };
                    self.refs.insert(edge.clone(), refs);
                    self.order.push(edge);
                }
                _ => {
                    self.paths.remove(&edge);
                    dropped.push(edge);
                }
            }
        }
        dropped
    }

    pub fn refs(&self, edge: &Edge) -> Option<EndpointRefs> {
        self.refs.get(edge).copied()
    }

    /// Moves the edge at `idx` to the front of the routing order.
    pub fn move_to_front(&mut self, idx: usize) {
        if idx < self.order.len() {
            let edge = self.order.remove(idx);
            self.order.insert(0, edge);
        }
    }

    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }

    pub fn set_path(&mut self, edge: Edge, path: Path) {
        self.paths.insert(edge, path);
    }

    /// Path of `edge` (matched in either direction); empty when unrouted or unknown.
    pub fn get_path(&self, edge: &Edge) -> &[Cell] {
        self.paths
            .get(edge)
            .or_else(|| self.paths.get(&edge.reversed()))
            .map(Path::cells)
            .unwrap_or(&[])
    }

    pub fn paths(&self) -> &RouteMap {
        &self.paths
    }
}
