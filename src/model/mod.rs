// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-facing data model.
//!
//! Obstacles and edges are opaque to the router: an obstacle is an id plus a canvas rectangle and
//! an edge is a pair of obstacle ids.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod obstacle;

pub use ids::{Id, IdError, ObstacleId};
pub use obstacle::{Edge, Obstacle, RoutingHost};
