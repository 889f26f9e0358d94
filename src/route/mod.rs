// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edge routing over the occupancy grid.
//!
//! A pass re-reads obstacles, claims their cells, and then routes edges one after another with
//! A*. Each routed path is claimed too, so later edges route around earlier ones.

mod endpoints;
mod frontier;
mod path;
mod router;
mod search;
mod table;

pub use endpoints::{boundary_walkable, center_cell, covered_cells, CoveredCells, EndpointSelector};
pub use frontier::{FrontierError, PriorityFrontier};
pub use path::Path;
pub use router::{PassReport, Router, RouterError};
pub use search::{find_path, PathSearch};
pub use table::{EndpointRefs, RouteMap, RouteTable};
