// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{DirectionalRoutings, Routing, StationTable, StopId};

/// Canonicalizes one line's directional routings for layout.
///
/// North sequences keep their order; south sequences are fully reversed so
/// every routing reads in north-ordering convention. Directional stop ids
/// collapse to their schematic station-level form, and exact-duplicate
/// sequences are removed (first occurrence wins). A degenerate sequence that
/// collapses onto the same station twice is dropped. Pure and deterministic:
/// the same input always yields the same output.
pub fn normalize(directional: &DirectionalRoutings) -> Vec<Routing> {
    let mut seen = BTreeSet::<Vec<StopId>>::new();
    let mut normalized = Vec::new();

    let north = directional
        .north()
        .iter()
        .map(|routing| schematic_stops(routing.iter()));
    let south = directional
        .south()
        .iter()
        .map(|routing| schematic_stops(routing.iter().rev()));

    for stops in north.chain(south) {
        if stops.is_empty() {
            continue;
        }
        let Ok(routing) = Routing::new(stops) else {
            // Collapsing N/S forms folded two stops onto one station.
            continue;
        };
        if seen.insert(routing.stops().to_vec()) {
            normalized.push(routing);
        }
    }

    normalized
}

fn schematic_stops<'a>(stops: impl Iterator<Item = &'a StopId>) -> Vec<StopId> {
    stops.map(StopId::schematic).collect()
}

/// Drops every routing that references a station missing from the table.
/// Returns the surviving routings and how many were filtered out.
pub fn retain_known(routings: Vec<Routing>, table: &StationTable) -> (Vec<Routing>, usize) {
    let before = routings.len();
    let known = routings
        .into_iter()
        .filter(|routing| routing.iter().all(|stop| table.knows_stop(stop)))
        .collect::<Vec<_>>();
    let dropped = before - known.len();
    (known, dropped)
}
