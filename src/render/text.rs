// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// Shortens `text` to at most `max_len` chars, marking the cut with `~`.
pub(crate) fn truncate_label(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    if max_len <= 1 {
        return "~".repeat(max_len);
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('~');
    out
}

/// Canvas text with trailing blanks removed from every line and trailing empty lines dropped.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas, blank: char) -> String {
    let rendered = canvas.to_string();
    let mut lines = rendered
        .split('\n')
        .map(|line| line.trim_end_matches(blank).to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
