// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::ObstacleId;

/// A rectangle on the canvas that routes must not pass through.
///
/// Coordinates are canvas units (not cells). The router only ever reads obstacles; the host owns
/// them and hands out fresh snapshots every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Obstacle {
    id: ObstacleId,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Obstacle {
    pub fn new(id: ObstacleId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
        }
    }

    pub fn id(&self) -> &ObstacleId {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

/// A connector between two obstacles.
///
/// `source`/`dest` are directed for rendering only; existence checks treat `a -> b` and `b -> a`
/// as the same link (see [`Edge::same_link`]).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct Edge {
    source: ObstacleId,
    dest: ObstacleId,
}

impl Edge {
    pub fn new(source: ObstacleId, dest: ObstacleId) -> Self {
        Self { source, dest }
    }

    pub fn source(&self) -> &ObstacleId {
        &self.source
    }

    pub fn dest(&self) -> &ObstacleId {
        &self.dest
    }

    pub fn reversed(&self) -> Self {
        Self {
            source: self.dest.clone(),
            dest: self.source.clone(),
        }
    }

    pub fn same_link(&self, other: &Edge) -> bool {
        (self.source == other.source && self.dest == other.dest)
            || (self.source == other.dest && self.dest == other.source)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

/// The host application's side of the routing contract.
///
/// Both lists are re-read at the start of every pass; the router keeps no copy of obstacle
/// geometry between passes.
pub trait RoutingHost {
    fn list_obstacles(&self) -> Vec<Obstacle>;
    fn list_edges(&self) -> Vec<Edge>;
}

impl<H: RoutingHost + ?Sized> RoutingHost for &H {
    fn list_obstacles(&self) -> Vec<Obstacle> {
        (**self).list_obstacles()
    }

    fn list_edges(&self) -> Vec<Edge> {
        (**self).list_edges()
    }
}

impl<H: RoutingHost + ?Sized> RoutingHost for std::sync::Arc<H> {
    fn list_obstacles(&self) -> Vec<Obstacle> {
        (**self).list_obstacles()
    }

    fn list_edges(&self) -> Vec<Edge> {
        (**self).list_edges()
    }
}
