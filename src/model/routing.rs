// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use super::ids::StopId;

/// One ordered path of stops a train follows in one direction.
///
/// Invariant: no stop repeats within a routing, and the gap sentinel never
/// appears (it exists only inside a finished trunk).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routing {
    stops: Vec<StopId>,
}

impl Routing {
    pub fn new(stops: Vec<StopId>) -> Result<Self, RoutingError> {
        let mut seen = BTreeSet::new();
        for stop in &stops {
            if stop.is_gap() {
                return Err(RoutingError::GapStop);
            }
            if !seen.insert(stop.clone()) {
                return Err(RoutingError::DuplicateStop { stop: stop.clone() });
            }
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<&StopId> {
        self.stops.first()
    }

    pub fn contains(&self, stop: &StopId) -> bool {
        self.stops.contains(stop)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StopId> {
        self.stops.iter()
    }

    /// Whether the two routings share at least one stop.
    pub fn intersects(&self, other: &Routing) -> bool {
        self.stops.iter().any(|stop| other.contains(stop))
    }
}

impl<'a> IntoIterator for &'a Routing {
    type Item = &'a StopId;
    type IntoIter = std::slice::Iter<'a, StopId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    DuplicateStop { stop: StopId },
    GapStop,
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateStop { stop } => {
                write!(f, "routing visits stop {stop} more than once")
            }
            Self::GapStop => f.write_str("routing contains the gap sentinel"),
        }
    }
}

impl std::error::Error for RoutingError {}

/// The raw routings of one line as the data-fetching collaborator hands them
/// over: one list per physical direction, in directional stop-id form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionalRoutings {
    north: Vec<Routing>,
    south: Vec<Routing>,
}

impl DirectionalRoutings {
    pub fn new(north: Vec<Routing>, south: Vec<Routing>) -> Self {
        Self { north, south }
    }

    pub fn north(&self) -> &[Routing] {
        &self.north
    }

    pub fn south(&self) -> &[Routing] {
        &self.south
    }

    pub fn is_empty(&self) -> bool {
        self.north.is_empty() && self.south.is_empty()
    }
}
