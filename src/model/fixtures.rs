// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::StopId;
use super::routing::{DirectionalRoutings, Routing};
use super::station::{Station, StationTable};

fn stop(value: &str) -> StopId {
    StopId::new(value).expect("stop id")
}

fn routing(values: &[&str]) -> Routing {
    Routing::new(values.iter().map(|value| stop(value)).collect()).expect("routing")
}

/// A southbound-forking line: the trunk runs A01..A06, with an alternate
/// terminal branch A04 -> A07 -> A08. Latitudes decrease heading south.
pub(crate) fn rockaway_table() -> StationTable {
    let mut table = StationTable::new();
    let stations = [
        ("A01", "Dellwood Av", 40.790),
        ("A02", "Carver St", 40.781),
        ("A03", "Hollis Pk", 40.772),
        ("A04", "Junction Blvd", 40.763),
        ("A05", "Seaside Rd", 40.741),
        ("A06", "Breaker Pt", 40.730),
        ("A07", "Marsh Av", 40.752),
        ("A08", "Pennview", 40.744),
    ];
    for (id, name, latitude) in stations {
        table.insert(
            id.parse().expect("station id"),
            Station::new(name, latitude, -73.83),
        );
    }
    table
}

pub(crate) fn forked_routings() -> DirectionalRoutings {
    DirectionalRoutings::new(
        vec![
            routing(&["A01N", "A02N", "A03N", "A04N", "A05N", "A06N"]),
            routing(&["A01N", "A02N", "A03N", "A04N", "A07N", "A08N"]),
        ],
        vec![
            routing(&["A06S", "A05S", "A04S", "A03S", "A02S", "A01S"]),
            routing(&["A08S", "A07S", "A04S", "A03S", "A02S", "A01S"]),
        ],
    )
}

/// Two shuttle variants with no shared stop; lays out as gap-separated
/// groups.
pub(crate) fn shuttle_table() -> StationTable {
    let mut table = StationTable::new();
    let stations = [
        ("S01", "Quarry North", 40.820),
        ("S02", "Quarry South", 40.812),
        ("S03", "Ferry Ldg", 40.705),
        ("S04", "Harbor Ter", 40.698),
    ];
    for (id, name, latitude) in stations {
        table.insert(
            id.parse().expect("station id"),
            Station::new(name, latitude, -73.91),
        );
    }
    table
}

pub(crate) fn shuttle_routings() -> DirectionalRoutings {
    DirectionalRoutings::new(
        vec![routing(&["S01N", "S02N"]), routing(&["S03N", "S04N"])],
        Vec::new(),
    )
}
