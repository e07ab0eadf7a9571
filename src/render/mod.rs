// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for schematic line diagrams.
//!
//! One row per render entry: a glyph column per open branch slot, then the
//! station name. The output is deterministic, which makes it a readable
//! golden format for tests; richer renderers consume the same entries.

use crate::layout::RenderEntry;
use crate::model::StationTable;

const STOP: char = '●';
const TRACK: char = '│';
const FORK: char = '┐';
const MERGE: char = '┘';
const BREAK: char = '┄';

/// Renders one line's diagram as text, one row per entry.
///
/// Station names come from the table, falling back to the raw stop id for
/// stations the table no longer knows. Gap entries render as a break row.
pub fn render_line_text(table: &StationTable, entries: &[RenderEntry]) -> String {
    let width = entries.iter().map(row_width).max().unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let mut row = String::new();
        if entry.is_gap() {
            row.push(BREAK);
        } else {
            for col in 0..row_width(entry) {
                row.push(glyph(entry, col));
            }
            let name = table
                .stop_name(entry.stop_id())
                .unwrap_or_else(|| entry.stop_id().as_str());
            for _ in row.chars().count()..width {
                row.push(' ');
            }
            row.push_str("  ");
            row.push_str(name);
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn row_width(entry: &RenderEntry) -> usize {
    let corners = entry
        .branch_start()
        .max(entry.branch_end())
        .map_or(0, |slot| slot + 1);
    entry.active_branches().len().max(corners)
}

fn glyph(entry: &RenderEntry, col: usize) -> char {
    // A corner connects to a neighbouring track; a single-slot row (e.g. a
    // fresh group right after a break) gets its stop dot instead.
    let multi = row_width(entry) > 1;
    if multi && entry.branch_start() == Some(col) {
        FORK
    } else if multi && entry.branch_end() == Some(col) {
        MERGE
    } else if entry.active_branches().get(col).copied().unwrap_or(false) {
        STOP
    } else {
        TRACK
    }
}

#[cfg(test)]
mod tests {
    use super::render_line_text;
    use crate::layout::layout_line;
    use crate::model::fixtures;

    #[test]
    fn forked_line_renders_fork_and_merge_corners() {
        let table = fixtures::rockaway_table();
        let layout = layout_line(&table, &fixtures::forked_routings()).expect("layout");

        let text = render_line_text(&table, layout.entries());
        let expected = "\
●   Dellwood Av
●   Carver St
●   Hollis Pk
●┐  Junction Blvd
│●  Marsh Av
│●  Pennview
●┘  Seaside Rd
●   Breaker Pt
";
        assert_eq!(text, expected);
    }

    #[test]
    fn disconnected_shuttle_groups_render_a_break_row() {
        let table = fixtures::shuttle_table();
        let layout = layout_line(&table, &fixtures::shuttle_routings()).expect("layout");

        let text = render_line_text(&table, layout.entries());
        let expected = "\
●  Quarry North
●  Quarry South
┄
●  Ferry Ldg
●  Harbor Ter
";
        assert_eq!(text, expected);
    }

    #[test]
    fn unknown_station_names_fall_back_to_the_stop_id() {
        let table = fixtures::rockaway_table();
        let layout = layout_line(&table, &fixtures::forked_routings()).expect("layout");

        let empty = crate::model::StationTable::new();
        let text = render_line_text(&empty, layout.entries());
        assert!(text.lines().next().expect("first row").ends_with("A01"));
    }
}
