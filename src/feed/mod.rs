// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary records from the data-fetching collaborator.
//!
//! Feeds deliver plain JSON documents; these types define that shape and the
//! conversion into the typed model. Serde stays at this boundary: model and
//! layout types never derive it. Unknown fields are ignored so feed-side
//! additions don't break older clients.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::model::{
    DirectionalRoutings, IdError, RouteId, Routing, RoutingError, Station, StationTable, StopId,
};

/// One line's raw routings, keyed by route id in the enclosing document.
/// Stop ids are in directional form (station prefix plus `N`/`S` suffix).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRecord {
    #[serde(default)]
    pub north: Vec<Vec<String>>,
    #[serde(default)]
    pub south: Vec<Vec<String>>,
}

/// One station record, keyed by station id in the enclosing document.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug)]
pub enum FeedError {
    Json(serde_json::Error),
    InvalidRouteId {
        raw: String,
        source: IdError,
    },
    InvalidStationId {
        raw: String,
        source: IdError,
    },
    InvalidStopId {
        route: RouteId,
        raw: String,
        source: IdError,
    },
    InvalidRouting {
        route: RouteId,
        source: RoutingError,
    },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => write!(f, "feed document is not valid JSON: {source}"),
            Self::InvalidRouteId { raw, source } => {
                write!(f, "route id {raw:?} is invalid: {source}")
            }
            Self::InvalidStationId { raw, source } => {
                write!(f, "station id {raw:?} is invalid: {source}")
            }
            Self::InvalidStopId { route, raw, source } => {
                write!(f, "route {route}: stop id {raw:?} is invalid: {source}")
            }
            Self::InvalidRouting { route, source } => write!(f, "route {route}: {source}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::InvalidRouteId { source, .. } | Self::InvalidStationId { source, .. } => {
                Some(source)
            }
            Self::InvalidStopId { source, .. } => Some(source),
            Self::InvalidRouting { source, .. } => Some(source),
        }
    }
}

pub fn parse_station_records(json: &str) -> Result<BTreeMap<String, StationRecord>, FeedError> {
    serde_json::from_str(json).map_err(FeedError::Json)
}

pub fn parse_route_records(json: &str) -> Result<BTreeMap<String, RouteRecord>, FeedError> {
    serde_json::from_str(json).map_err(FeedError::Json)
}

/// Builds the caller-owned station table for one poll cycle.
pub fn station_table(
    records: &BTreeMap<String, StationRecord>,
) -> Result<StationTable, FeedError> {
    let mut table = StationTable::new();
    for (raw, record) in records {
        let station_id = raw
            .parse()
            .map_err(|source| FeedError::InvalidStationId {
                raw: raw.clone(),
                source,
            })?;
        table.insert(
            station_id,
            Station::new(record.name.clone(), record.latitude, record.longitude),
        );
    }
    Ok(table)
}

/// Converts one route record into the model's directional routings.
pub fn directional_routings(
    route: &RouteId,
    record: &RouteRecord,
) -> Result<DirectionalRoutings, FeedError> {
    Ok(DirectionalRoutings::new(
        convert_direction(route, &record.north)?,
        convert_direction(route, &record.south)?,
    ))
}

/// Converts a whole routes document, keyed by route id.
pub fn network_routings(
    records: &BTreeMap<String, RouteRecord>,
) -> Result<BTreeMap<RouteId, DirectionalRoutings>, FeedError> {
    let mut routes = BTreeMap::new();
    for (raw, record) in records {
        let route: RouteId = raw.parse().map_err(|source| FeedError::InvalidRouteId {
            raw: raw.clone(),
            source,
        })?;
        let directional = directional_routings(&route, record)?;
        routes.insert(route, directional);
    }
    Ok(routes)
}

fn convert_direction(
    route: &RouteId,
    sequences: &[Vec<String>],
) -> Result<Vec<Routing>, FeedError> {
    sequences
        .iter()
        .map(|sequence| {
            let stops = sequence
                .iter()
                .map(|raw| {
                    StopId::new(raw).map_err(|source| FeedError::InvalidStopId {
                        route: route.clone(),
                        raw: raw.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Routing::new(stops).map_err(|source| FeedError::InvalidRouting {
                route: route.clone(),
                source,
            })
        })
        .collect()
}
