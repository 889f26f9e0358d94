// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::config::RouterConfig;
use crate::grid::{Cell, Grid, GridError};
use crate::model::{Edge, ObstacleId, RoutingHost};

use super::endpoints::{covered_cells, CoveredCells, EndpointSelector};
use super::path::Path;
use super::table::{RouteMap, RouteTable};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Outcome of one recomputation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Times the pass restarted after promoting a failed edge.
    pub restarts: usize,
    pub routed: usize,
    /// Edges left with an empty path once the restart budget was spent.
    pub failed: usize,
    /// Edges removed because an endpoint obstacle is gone.
    pub dropped: Vec<Edge>,
}

/// Owns the occupancy grid and the route table for one diagram.
///
/// Every pass starts from scratch: the grid is cleared, obstacles are re-read from the host, and
/// edges are routed greedily in table order so each path avoids obstacles and earlier paths.
#[derive(Debug)]
pub struct Router {
    config: RouterConfig,
    grid: Grid,
    table: RouteTable,
    covered: BTreeMap<ObstacleId, CoveredCells>,
    selector: EndpointSelector,
    passes: u64,
    last_report: Option<PassReport>,
}

impl Router {
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        let grid = config.build_grid()?;
        Ok(Self {
            config,
            grid,
            table: RouteTable::new(),
            covered: BTreeMap::new(),
            selector: EndpointSelector::new(),
            passes: 0,
            last_report: None,
        })
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn routes(&self) -> &RouteMap {
        self.table.paths()
    }

    pub fn get_path(&self, edge: &Edge) -> &[Cell] {
        self.table.get_path(edge)
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.grid.is_occupied(row, col)
    }

    /// Cells claimed by `id` during the last pass.
    pub fn covered_cells(&self, id: &ObstacleId) -> Option<&CoveredCells> {
        self.covered.get(id)
    }

    /// Covered cells of every obstacle seen by the last pass.
    pub fn footprints(&self) -> &BTreeMap<ObstacleId, CoveredCells> {
        &self.covered
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn last_report(&self) -> Option<&PassReport> {
        self.last_report.as_ref()
    }

    pub fn recompute<H: RoutingHost + ?Sized>(&mut self, host: &H) -> PassReport {
        self.recompute_with(host, |_| {})
    }

    /// Runs a full pass against the host's current state and hands the result to `render`.
    pub fn recompute_with<H, R>(&mut self, host: &H, render: R) -> PassReport
    where
        H: RoutingHost + ?Sized,
        R: FnOnce(&RouteMap),
    {
        let obstacles = host.list_obstacles();
        let (added, removed) = self.table.sync_with(&host.list_edges());
        if added > 0 || removed > 0 {
            debug!(added, removed, "route table synced with host edges");
        }

        let dropped = self.table.resolve(&obstacles);
        for edge in &dropped {
            warn!(%edge, "dropping edge with a missing endpoint obstacle");
        }

        let footprints = obstacles
            .iter()
            .map(|obstacle| covered_cells(&self.grid, obstacle))
            .collect::<Vec<_>>();

        let budget = self.table.len();
        let mut restarts = 0usize;
        let (routed, failed) = loop {
            self.grid.clear();
            self.table.clear_paths();
            for cells in &footprints {
                self.grid.mark_occupied(cells);
            }

            match self.route_in_order(&footprints, restarts < budget) {
                RoutingRound::Complete { routed, failed } => break (routed, failed),
                RoutingRound::Restart { failed_at } => {
                    let edge = &self.table.edges()[failed_at];
                    trace!(%edge, restarts, "promoting unroutable edge and restarting");
                    self.table.move_to_front(failed_at);
                    restarts += 1;
                }
            }
        };

        self.covered = obstacles
            .iter()
            .zip(footprints)
            .map(|(obstacle, cells)| (obstacle.id().clone(), cells))
            .collect();
        self.passes += 1;

        let report = PassReport {
            restarts,
            routed,
            failed,
            dropped,
        };
        debug!(
            pass = self.passes,
            restarts = report.restarts,
            routed = report.routed,
            failed = report.failed,
            dropped = report.dropped.len(),
            "route pass finished"
        );

        render(self.table.paths());
        self.last_report = Some(report.clone());
        report
    }

    /// Routes every edge in table order, claiming each path's cells as it goes.
    ///
    /// When `may_restart` is set, the first failing edge that is not already at the front aborts
    /// the round so the caller can promote it; an edge at the front cannot gain anything from a
    /// restart and is accepted as failed.
    fn route_in_order(&mut self, footprints: &[CoveredCells], may_restart: bool) -> RoutingRound {
        let order = self.table.edges().to_vec();
        let mut routed = 0usize;
        let mut failed = 0usize;

        for (idx, edge) in order.into_iter().enumerate() {
            let Some(refs) = self.table.refs(&edge) else {
                continue;
            };
            let path = match (footprints.get(refs.source), footprints.get(refs.dest)) {
                (Some(source), Some(dest)) => self.selector.select(&self.grid, source, dest),
                _ => Path::empty(),
            };

            if path.is_empty() {
                if may_restart && idx > 0 {
                    return RoutingRound::Restart { failed_at: idx };
                }
                debug!(%edge, "no route found; leaving edge empty for this pass");
                failed += 1;
            } else {
                routed += 1;
            }

            self.grid.mark_occupied(path.cells());
            self.table.set_path(edge, path);
        }

        RoutingRound::Complete { routed, failed }
    }
}

enum RoutingRound {
    Complete { routed: usize, failed: usize },
    Restart { failed_at: usize },
}
