// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::model::{DirectionalRoutings, RouteId, StationTable};

use super::merge::merge_all;
use super::normalize::{normalize, retain_known};
use super::path::StopSequence;
use super::resolve::{resolve, RenderEntry};
use super::trunk::select_trunk;

/// What the pipeline filtered or dropped while building one line's layout.
///
/// Degraded diagrams are policy, not errors; these counts are how the caller
/// finds out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Routings referencing a station missing from the table.
    pub filtered_unknown: usize,
    /// Routings whose stops were already fully on the trunk (the reference
    /// routing itself included).
    pub skipped_redundant: usize,
    /// Routings sharing no stop with the trunk, discovered during merging.
    pub dropped_disjoint: usize,
}

/// One line's finished schematic layout, frozen after the rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayout {
    trunk: StopSequence,
    branches: Vec<StopSequence>,
    entries: Vec<RenderEntry>,
    stats: LayoutStats,
}

impl LineLayout {
    pub fn trunk(&self) -> &StopSequence {
        &self.trunk
    }

    pub fn branches(&self) -> &[StopSequence] {
        &self.branches
    }

    /// Per-stop render entries in final trunk walk order, gap rows included.
    pub fn entries(&self) -> &[RenderEntry] {
        &self.entries
    }

    pub fn stats(&self) -> LayoutStats {
        self.stats
    }
}

/// Computes one line's schematic layout for the current poll cycle.
///
/// Returns `None` when no usable routing survives normalization and
/// filtering; a line without a diagram is a valid terminal state, not an
/// error.
pub fn layout_line(
    table: &StationTable,
    directional: &DirectionalRoutings,
) -> Option<LineLayout> {
    let mut stats = LayoutStats::default();

    let normalized = normalize(directional);
    let (known, filtered) = retain_known(normalized, table);
    stats.filtered_unknown = filtered;

    let selection = select_trunk(&known, table)?;
    let mut trunk = selection.trunk;
    let mut branches = selection.branches;

    let totals = merge_all(&mut trunk, &mut branches, &known);
    stats.skipped_redundant = totals.redundant;
    stats.dropped_disjoint = totals.disjoint;

    let entries = resolve(&trunk, &branches);

    Some(LineLayout {
        trunk,
        branches,
        entries,
        stats,
    })
}

/// Recomputes every line's layout for one poll cycle.
///
/// Lines are laid out independently, so the rebuild fans out across the
/// rayon pool; collection into a `BTreeMap` keeps iteration deterministic.
/// Lines without a diagram are simply absent from the result.
pub fn layout_network(
    table: &StationTable,
    routes: &BTreeMap<RouteId, DirectionalRoutings>,
) -> BTreeMap<RouteId, LineLayout> {
    routes
        .par_iter()
        .filter_map(|(route_id, directional)| {
            layout_line(table, directional).map(|layout| (route_id.clone(), layout))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{layout_line, layout_network};
    use crate::model::fixtures;
    use crate::model::{DirectionalRoutings, Routing, StopId};

    fn stop(value: &str) -> StopId {
        StopId::new(value).expect("stop id")
    }

    fn routing(values: &[&str]) -> Routing {
        Routing::new(values.iter().map(|value| stop(value)).collect()).expect("routing")
    }

    #[test]
    fn no_routings_yields_no_layout() {
        let table = fixtures::rockaway_table();
        assert_eq!(layout_line(&table, &DirectionalRoutings::default()), None);
    }

    #[test]
    fn forked_line_lays_out_one_trunk_and_one_bottom_branch() {
        let table = fixtures::rockaway_table();
        let layout = layout_line(&table, &fixtures::forked_routings()).expect("layout");

        let trunk = layout
            .trunk()
            .iter()
            .map(StopId::as_str)
            .collect::<Vec<_>>();
        assert_eq!(trunk, vec!["A01", "A02", "A03", "A04", "A07", "A08", "A05", "A06"]);

        assert_eq!(layout.branches().len(), 2);
        let branch = layout.branches()[1]
            .iter()
            .map(StopId::as_str)
            .collect::<Vec<_>>();
        assert_eq!(branch, vec!["A04", "A07", "A08"]);

        // Fork corner at A04, branch closes when its slot drains at A05.
        assert_eq!(layout.entries()[3].branch_start(), Some(1));
        assert_eq!(layout.entries()[6].branch_end(), Some(1));
        assert_eq!(layout.stats().dropped_disjoint, 0);
    }

    #[test]
    fn unknown_stations_filter_the_routing_and_surface_in_stats() {
        let table = fixtures::rockaway_table();
        let base = fixtures::forked_routings();
        let directional = DirectionalRoutings::new(
            [base.north().to_vec(), vec![routing(&["A01N", "Z99N"])]].concat(),
            base.south().to_vec(),
        );

        let layout = layout_line(&table, &directional).expect("layout");
        assert_eq!(layout.stats().filtered_unknown, 1);
        assert!(!layout.trunk().contains(&stop("Z99")));
    }

    #[test]
    fn network_rebuild_collects_only_lines_with_diagrams() {
        let table = fixtures::rockaway_table();
        let mut routes = BTreeMap::new();
        routes.insert(
            "A".parse().expect("route id"),
            fixtures::forked_routings(),
        );
        routes.insert("H".parse().expect("route id"), DirectionalRoutings::default());

        let network = layout_network(&table, &routes);
        assert_eq!(network.len(), 1);
        assert!(network.contains_key("A"));
    }
}
