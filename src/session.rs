// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-facing routing surface.
//!
//! A [`RoutingSession`] owns the [`Router`] for one diagram and the scheduler task that runs its
//! passes. Hosts report obstacle changes and read paths back; they never touch the grid directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::RouterConfig;
use crate::grid::Cell;
use crate::model::{Edge, ObstacleId, RoutingHost};
use crate::route::{PassReport, RouteMap, Router, RouterError};
use crate::schedule::RouteScheduler;

fn lock(router: &Mutex<Router>) -> MutexGuard<'_, Router> {
    router.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct RoutingSession<H> {
    router: Arc<Mutex<Router>>,
    host: Arc<H>,
    scheduler: Option<RouteScheduler>,
}

impl<H> std::fmt::Debug for RoutingSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingSession")
            .field("running", &self.scheduler.is_some())
            .finish_non_exhaustive()
    }
}

impl<H> RoutingSession<H>
where
    H: RoutingHost + Send + Sync + 'static,
{
    /// Builds the router and spawns its scheduler on the current tokio runtime.
    ///
    /// An initial pass is queued right away so routes exist before the first change arrives.
    /// Passes run on tokio's blocking pool while holding the router lock, so the query methods
    /// can wait out a pass in progress but never stall the runtime's other tasks.
    pub fn start(config: RouterConfig, host: Arc<H>) -> Result<Self, RouterError> {
        Self::start_with_renderer(config, host, |_| {})
    }

    /// Like [`RoutingSession::start`], with `render` called after every pass.
    pub fn start_with_renderer<R>(
        config: RouterConfig,
        host: Arc<H>,
        mut render: R,
    ) -> Result<Self, RouterError>
    where
        R: FnMut(&RouteMap) + Send + 'static,
    {
        let window = config.debounce();
        let router = Arc::new(Mutex::new(Router::new(config)?));

        let scheduler = {
            let router = Arc::clone(&router);
            let host = Arc::clone(&host);
            RouteScheduler::spawn(window, move |_cause| {
                lock(&router).recompute_with(host.as_ref(), &mut render);
            })
        };
        scheduler.trigger_recompute();

        Ok(Self {
            router,
            host,
            scheduler: Some(scheduler),
        })
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Reports a moved or resized obstacle. Returns `false` after shutdown.
    pub fn on_obstacle_changed(&self, id: ObstacleId) -> bool {
        self.scheduler
            .as_ref()
            .is_some_and(|scheduler| scheduler.notify_obstacle_changed(id))
    }

    /// Requests a pass without waiting for a debounce window.
    pub fn trigger_recompute(&self) -> bool {
        self.scheduler
            .as_ref()
            .is_some_and(RouteScheduler::trigger_recompute)
    }

    /// Cells of the last routed path for `edge`, empty if unrouted or unknown.
    pub fn get_path(&self, edge: &Edge) -> Vec<Cell> {
        lock(&self.router).get_path(edge).to_vec()
    }

    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        lock(&self.router).is_occupied(row, col)
    }

    pub fn routes(&self) -> RouteMap {
        lock(&self.router).routes().clone()
    }

    pub fn last_report(&self) -> Option<PassReport> {
        lock(&self.router).last_report().cloned()
    }

    pub fn passes(&self) -> u64 {
        lock(&self.router).passes()
    }

    /// Stops the scheduler after any pending window has run. Later notifications are ignored.
    pub async fn shutdown(&mut self) -> u64 {
        match self.scheduler.take() {
            Some(scheduler) => scheduler.shutdown().await,
            None => 0,
        }
    }
}
