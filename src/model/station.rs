// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{StationId, StopId};

/// One physical station.
///
/// Coordinates are only consulted for the trunk selector's latitude tie-break
/// and by geographic consumers outside this crate; the layout itself is
/// purely topological.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Caller-owned station registry for one poll cycle.
///
/// Rebuilt wholesale whenever fresh station data arrives and passed into the
/// layout entry points explicitly; nothing in this crate holds onto one
/// between polls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    stations: BTreeMap<StationId, Station>,
}

impl StationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, station_id: StationId, station: Station) -> Option<Station> {
        self.stations.insert(station_id, station)
    }

    pub fn get(&self, station_id: &StationId) -> Option<&Station> {
        self.stations.get(station_id)
    }

    pub fn contains(&self, station_id: &StationId) -> bool {
        self.stations.contains_key(station_id)
    }

    /// Whether the station a stop belongs to is known. The gap sentinel
    /// belongs to no station.
    pub fn knows_stop(&self, stop_id: &StopId) -> bool {
        !stop_id.is_gap() && self.contains(&stop_id.station())
    }

    pub fn stop_latitude(&self, stop_id: &StopId) -> Option<f64> {
        if stop_id.is_gap() {
            return None;
        }
        self.get(&stop_id.station()).map(Station::latitude)
    }

    pub fn stop_name(&self, stop_id: &StopId) -> Option<&str> {
        if stop_id.is_gap() {
            return None;
        }
        self.get(&stop_id.station()).map(Station::name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationId, &Station)> {
        self.stations.iter()
    }
}
