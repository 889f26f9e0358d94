// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering of routing state.
//!
//! Used for diagnostics; hosts draw their own connectors from the cell paths.

mod canvas;
mod overlay;
mod text;

pub use canvas::{
    Canvas, CanvasError, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT, UNICODE_BOX_CROSS,
    UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TEE_DOWN, UNICODE_BOX_TEE_LEFT, UNICODE_BOX_TEE_RIGHT,
    UNICODE_BOX_TEE_UP, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};
pub use overlay::{render_overlay, render_route_listing, OverlayOptions};
