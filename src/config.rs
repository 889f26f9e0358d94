// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridError};

pub const DEFAULT_CELL_SIZE: f64 = 10.0;
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Router settings. Every field has a default, so a serialized config may omit any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RouterConfig {
    /// Side length of one grid cell, in canvas units.
    pub cell_size: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Quiescence window between the first obstacle change and the pass it schedules.
    pub debounce_ms: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl RouterConfig {
    pub fn new(cell_size: f64, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            cell_size,
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.cell_size, self.canvas_width, self.canvas_height)
    }
}
