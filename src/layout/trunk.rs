// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Routing, StationTable};

use super::path::StopSequence;

/// The initial trunk plus its branch collection.
///
/// Branch 0 is always the main branch: a copy of the winning candidate.
/// Promoted disconnected groups each contribute one further branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrunkSelection {
    pub(crate) trunk: StopSequence,
    pub(crate) branches: Vec<StopSequence>,
}

/// Picks the reference trunk for a line: longest routing, then the
/// northernmost first stop among candidates, ties broken by input order.
///
/// Candidates are the first longest routing, every other routing of that
/// length, and every routing fully disjoint from the first longest one.
/// Losing candidates that stay fully disjoint from everything already placed
/// are appended as gap-separated groups; overlapping losers are left for the
/// merger.
pub(crate) fn select_trunk(
    routings: &[Routing],
    table: &StationTable,
) -> Option<TrunkSelection> {
    let max_len = routings.iter().map(Routing::len).max()?;
    if max_len == 0 {
        return None;
    }
    let primary = routings
        .iter()
        .position(|routing| routing.len() == max_len)
        .expect("max length came from this slice");

    let mut candidates = (0..routings.len())
        .filter(|&idx| {
            routings[idx].len() == max_len || !routings[idx].intersects(&routings[primary])
        })
        .map(|idx| (idx, first_stop_latitude(&routings[idx], table)))
        .collect::<Vec<_>>();

    // Northernmost first stop wins; the stable sort leaves equal latitudes in
    // input order, so the first occurrence wins exact ties.
    candidates.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let (winner, _) = candidates[0];
    let mut trunk = StopSequence::from_routing(&routings[winner]);
    let mut branches = vec![trunk.clone()];

    for &(idx, _) in &candidates[1..] {
        let candidate = &routings[idx];
        if candidate.iter().any(|stop| trunk.contains(stop)) {
            continue;
        }
        trunk.push_gap();
        trunk.append_run(candidate.stops());
        branches.push(StopSequence::from_routing(candidate));
    }

    Some(TrunkSelection { trunk, branches })
}

fn first_stop_latitude(routing: &Routing, table: &StationTable) -> f64 {
    routing
        .first()
        .and_then(|stop| table.stop_latitude(stop))
        .unwrap_or(f64::NEG_INFINITY)
}
