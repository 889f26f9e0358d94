// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Mutex;

use super::ids::ObstacleId;
use super::obstacle::{Edge, Obstacle, RoutingHost};

pub(crate) fn oid(value: &str) -> ObstacleId {
    ObstacleId::new(value).expect("obstacle id")
}

pub(crate) fn edge(source: &str, dest: &str) -> Edge {
    Edge::new(oid(source), oid(dest))
}

pub(crate) fn rect(id: &str, x: f64, y: f64, width: f64, height: f64) -> Obstacle {
    Obstacle::new(oid(id), x, y, width, height)
}

/// In-memory host whose obstacles/edges can be edited between passes.
#[derive(Debug, Default)]
pub(crate) struct StaticHost {
    inner: Mutex<(Vec<Obstacle>, Vec<Edge>)>,
}

impl StaticHost {
    pub(crate) fn new(obstacles: Vec<Obstacle>, edges: Vec<Edge>) -> Self {
        Self {
            inner: Mutex::new((obstacles, edges)),
        }
    }

    pub(crate) fn move_obstacle(&self, id: &str, x: f64, y: f64) {
        let mut inner = self.inner.lock().expect("host lock");
        for obstacle in inner.0.iter_mut() {
            if obstacle.id().as_str() == id {
                obstacle.set_position(x, y);
            }
        }
    }

    pub(crate) fn remove_obstacle(&self, id: &str) {
        let mut inner = self.inner.lock().expect("host lock");
        inner.0.retain(|obstacle| obstacle.id().as_str() != id);
    }
}

impl RoutingHost for StaticHost {
    fn list_obstacles(&self) -> Vec<Obstacle> {
        self.inner.lock().expect("host lock").0.clone()
    }

    fn list_edges(&self) -> Vec<Edge> {
        self.inner.lock().expect("host lock").1.clone()
    }
}

/// 10x10 cells: `a` covers rows/cols 1-2, `b` covers rows/cols 8-9, one edge `a -> b`.
pub(crate) fn corner_pair() -> StaticHost {
    StaticHost::new(
        vec![rect("a", 0.0, 0.0, 20.0, 20.0), rect("b", 70.0, 70.0, 20.0, 20.0)],
        vec![edge("a", "b")],
    )
}

/// Three obstacles on a 10x10 grid where both edges leave `a` towards the right-hand column.
pub(crate) fn shared_corridor() -> StaticHost {
    StaticHost::new(
        vec![
            rect("a", 0.0, 40.0, 20.0, 20.0),
            rect("b", 70.0, 40.0, 20.0, 20.0),
            rect("c", 70.0, 0.0, 20.0, 20.0),
        ],
        vec![edge("a", "b"), edge("a", "c")],
    )
}
