// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::grid::Cell;
use crate::route::{center_cell, RouteMap, Router};

use super::text::{canvas_to_string_trimmed, truncate_label};
use super::{Canvas, CanvasError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub free: char,
    pub covered: char,
    /// Write each obstacle's id across the middle row of its covered cells.
    pub labels: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            free: '.',
            covered: '#',
            labels: true,
        }
    }
}

fn point(cell: Cell) -> Option<(usize, usize)> {
    let x = usize::try_from(cell.col()).ok()?;
    let y = usize::try_from(cell.row()).ok()?;
    Some((x, y))
}

/// Draws the router's last pass: one character per grid cell, obstacles filled in, paths drawn
/// with box-drawing characters.
pub fn render_overlay(router: &Router, options: OverlayOptions) -> Result<String, CanvasError> {
    let grid = router.grid();
    let mut canvas = Canvas::new_filled(grid.width_cells(), grid.height_cells(), options.free)?;

    for (id, cells) in router.footprints() {
        for (x, y) in cells.iter().copied().filter_map(point) {
            canvas.set(x, y, options.covered)?;
        }

        if !options.labels {
            continue;
        }
        let (Some(center), Some(first), Some(last)) =
            (center_cell(cells), cells.first(), cells.last())
        else {
            continue;
        };
        let (Some((x0, y)), Some((x1, _))) = (
            point(Cell::new(center.row(), first.col())),
            point(Cell::new(center.row(), last.col())),
        ) else {
            continue;
        };
        canvas.write_str(x0, y, &truncate_label(id.as_str(), x1 + 1 - x0))?;
    }

    for path in router.routes().values() {
        for pair in path.cells().windows(2) {
            if let (Some(from), Some(to)) = (point(pair[0]), point(pair[1])) {
                canvas.link(from, to)?;
            }
        }
    }

    Ok(canvas_to_string_trimmed(&canvas, ' '))
}

/// One line per edge: `source -> dest: (r, c) (r, c) ...`, or `unrouted` for an empty path.
pub fn render_route_listing(routes: &RouteMap) -> String {
    let mut out = String::new();
    for (edge, path) in routes {
        let _ = write!(out, "{edge}:");
        if path.is_empty() {
            out.push_str(" unrouted");
        }
        for cell in path {
            let _ = write!(out, " {cell}");
        }
        out.push('\n');
    }
    out
}
