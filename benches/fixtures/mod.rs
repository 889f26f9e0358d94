// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use nereid_route::grid::{Cell, Grid};
use nereid_route::{Edge, Obstacle, ObstacleId, RouteMap, RouterConfig, RoutingHost};

/// A fixed diagram: the router config it was laid out for plus its obstacles and edges.
pub struct Scene {
    pub config: RouterConfig,
    pub obstacles: Vec<Obstacle>,
    pub edges: Vec<Edge>,
}

impl RoutingHost for Scene {
    fn list_obstacles(&self) -> Vec<Obstacle> {
        self.obstacles.clone()
    }

    fn list_edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 4x3 boxes with generous gaps, neighbour edges only.
    Sparse,
    /// 8x6 boxes, neighbour edges plus a few long diagonals.
    Dense,
    /// 12x10 boxes with narrow corridors; forces detours and restarts.
    Crowded,
}

struct LatticeParams {
    cols: usize,
    rows: usize,
    box_size: f64,
    gap: f64,
    long_edge_stride: usize,
}

fn params(case: Case) -> LatticeParams {
    match case {
        Case::Sparse => LatticeParams {
            cols: 4,
            rows: 3,
            box_size: 40.0,
            gap: 80.0,
            long_edge_stride: 0,
        },
        Case::Dense => LatticeParams {
            cols: 8,
            rows: 6,
            box_size: 40.0,
            gap: 40.0,
            long_edge_stride: 5,
        },
        Case::Crowded => LatticeParams {
            cols: 12,
            rows: 10,
            box_size: 40.0,
            gap: 20.0,
            long_edge_stride: 3,
        },
    }
}

fn id(col: usize, row: usize) -> ObstacleId {
    ObstacleId::new(format!("n{row}_{col}")).expect("valid obstacle id")
}

/// Boxes on a regular lattice; each box links to its right and lower neighbour, and every
/// `long_edge_stride`-th box also links to the box mirrored across the lattice centre.
pub fn scene(case: Case) -> Scene {
    let p = params(case);
    let pitch = p.box_size + p.gap;

    let mut obstacles = Vec::with_capacity(p.cols * p.rows);
    for row in 0..p.rows {
        for col in 0..p.cols {
            obstacles.push(Obstacle::new(
                id(col, row),
                p.gap + col as f64 * pitch,
                p.gap + row as f64 * pitch,
                p.box_size,
                p.box_size,
            ));
        }
    }

    let mut edges = Vec::new();
    for row in 0..p.rows {
        for col in 0..p.cols {
            if col + 1 < p.cols {
                edges.push(Edge::new(id(col, row), id(col + 1, row)));
            }
            if row + 1 < p.rows {
                edges.push(Edge::new(id(col, row), id(col, row + 1)));
            }
            let idx = row * p.cols + col;
            let (mirror_col, mirror_row) = (p.cols - 1 - col, p.rows - 1 - row);
            if p.long_edge_stride > 0
                && idx % p.long_edge_stride == 0
                && idx < mirror_row * p.cols + mirror_col
            {
                edges.push(Edge::new(id(col, row), id(mirror_col, mirror_row)));
            }
        }
    }

    let config = RouterConfig::new(
        10.0,
        p.gap + p.cols as f64 * pitch,
        p.gap + p.rows as f64 * pitch,
    );
    Scene {
        config,
        obstacles,
        edges,
    }
}

/// Open grid with a comb of walls that forces a serpentine route from the top-left corner to the
/// bottom-right one.
pub fn comb_grid(size: usize) -> (Grid, Cell, Cell) {
    let side = size as f64 * 10.0;
    let mut grid = Grid::new(10.0, side, side).expect("grid");
    let last = size as i32 - 1;
    for col in (2..last).step_by(4) {
        grid.mark_occupied((0..last).map(|row| Cell::new(row, col)));
        grid.mark_occupied((1..=last).map(|row| Cell::new(row, col + 2)));
    }
    (grid, Cell::new(0, 0), Cell::new(last, last))
}

fn mix(acc: u64, value: u64) -> u64 {
    acc.wrapping_mul(131).wrapping_add(value)
}

pub fn checksum_routes(routes: &RouteMap) -> u64 {
    let mut acc = 0u64;
    for (edge, path) in routes {
        acc = mix(acc, edge.source().as_str().len() as u64);
        acc = mix(acc, path.len() as u64);
        for cell in path {
            acc = mix(acc, u64::from(cell.row().unsigned_abs()));
            acc = mix(acc, u64::from(cell.col().unsigned_abs()));
        }
    }
    acc
}
