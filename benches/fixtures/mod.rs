// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::collections::BTreeMap;

use naiad::model::{DirectionalRoutings, RouteId, Routing, Station, StationTable, StopId};

pub struct NetworkCase {
    pub table: StationTable,
    pub routes: BTreeMap<RouteId, DirectionalRoutings>,
}

fn main_stop(line: usize, idx: usize) -> String {
    format!("L{line:02}S{idx:03}")
}

fn branch_stop(line: usize, branch: usize, idx: usize) -> String {
    format!("L{line:02}B{branch}K{idx}")
}

fn directional(ids: &[String], suffix: char) -> Routing {
    let stops = ids
        .iter()
        .map(|id| StopId::new(format!("{id}{suffix}")).expect("stop id"))
        .collect();
    Routing::new(stops).expect("routing")
}

/// A synthetic network: per line, one full-length routing plus
/// `branches_per_line` express-style variants that each swap a two-stop
/// window for fresh stops, in both directions.
pub fn network(lines: usize, stops_per_line: usize, branches_per_line: usize) -> NetworkCase {
    assert!(stops_per_line >= 4 * (branches_per_line + 1));

    let mut table = StationTable::new();
    let mut routes = BTreeMap::new();

    for line in 0..lines {
        let main = (0..stops_per_line)
            .map(|idx| main_stop(line, idx))
            .collect::<Vec<_>>();
        for (idx, id) in main.iter().enumerate() {
            table.insert(
                id.parse().expect("station id"),
                Station::new(id.clone(), 41.0 - idx as f64 * 0.004, -73.9),
            );
        }

        let mut north = vec![directional(&main, 'N')];
        let mut south = Vec::new();
        for branch in 0..branches_per_line {
            // Fork windows spread evenly along the line, two stops wide.
            let fork = (branch + 1) * stops_per_line / (branches_per_line + 1);
            let mut variant = main.clone();
            for offset in 0..2 {
                let id = branch_stop(line, branch, offset);
                table.insert(
                    id.parse().expect("station id"),
                    Station::new(id.clone(), 41.0 - (fork + offset) as f64 * 0.004, -73.89),
                );
                variant[fork + offset] = id;
            }
            north.push(directional(&variant, 'N'));

            let mut reversed = variant;
            reversed.reverse();
            south.push(directional(&reversed, 'S'));
        }

        let route_id: RouteId = format!("L{line:02}").parse().expect("route id");
        routes.insert(route_id, DirectionalRoutings::new(north, south));
    }

    NetworkCase { table, routes }
}
