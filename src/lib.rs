// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nereid route: obstacle-aware orthogonal connector routing.
//!
//! The canvas is discretised into a grid of cells. Every pass marks the cells under obstacles as
//! occupied and routes each edge with A*, claiming the cells of every finished path so later edges
//! do not overlap it. A [`RoutingSession`] runs passes on a tokio task and debounces the change
//! notifications a drag produces.

pub mod config;
pub mod grid;
pub mod model;
pub mod render;
pub mod route;
pub mod schedule;
pub mod session;

pub use config::RouterConfig;
pub use grid::{Cell, Grid, GridError};
pub use model::{Edge, Obstacle, ObstacleId, RoutingHost};
pub use route::{Path, PassReport, RouteMap, Router, RouterError};
pub use schedule::{PassCause, RouteScheduler, Trigger};
pub use session::RoutingSession;
