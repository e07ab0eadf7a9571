// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Routing, StopId};

/// An owned, ordered stop sequence backing both the trunk and every branch.
///
/// The merger grows a sequence only through the anchored insert/append
/// operations below, which keep one invariant: stops already placed are never
/// reordered, new stops are only inserted between them. Raw index mutation is
/// not exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopSequence {
    stops: Vec<StopId>,
}

impl StopSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_routing(routing: &Routing) -> Self {
        Self {
            stops: routing.stops().to_vec(),
        }
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

    pub fn last(&self) -> Option<&StopId> {
        self.stops.last()
    }

    pub fn contains(&self, stop: &StopId) -> bool {
        self.stops.contains(stop)
    }

    pub fn position(&self, stop: &StopId) -> Option<usize> {
        self.stops.iter().position(|candidate| candidate == stop)
    }

    /// Whether `second` immediately follows `first` in this sequence.
    pub fn follows(&self, first: &StopId, second: &StopId) -> bool {
        match self.position(first) {
            Some(idx) => self.stops.get(idx + 1) == Some(second),
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StopId> {
        self.stops.iter()
    }

    pub fn push(&mut self, stop: StopId) {
        self.stops.push(stop);
    }

    /// Appends the gap sentinel separating disconnected route groups.
    pub fn push_gap(&mut self) {
        self.stops.push(StopId::gap());
    }

    pub fn append_run(&mut self, run: &[StopId]) {
        self.stops.extend_from_slice(run);
    }

    pub fn prepend_run(&mut self, run: &[StopId]) {
        self.stops.splice(0..0, run.iter().cloned());
    }

    /// Inserts `run` immediately before `anchor`. The anchor must be present;
    /// callers establish that during attachment classification.
    pub fn insert_before(&mut self, anchor: &StopId, run: &[StopId]) {
        let idx = self.position(anchor).expect("anchor present (classified)");
        self.stops.splice(idx..idx, run.iter().cloned());
    }

    /// Inserts `run` immediately after `anchor`. The anchor must be present;
    /// callers establish that during attachment classification.
    pub fn insert_after(&mut self, anchor: &StopId, run: &[StopId]) {
        let idx = self.position(anchor).expect("anchor present (classified)");
        self.stops.splice(idx + 1..idx + 1, run.iter().cloned());
    }
}

impl<'a> IntoIterator for &'a StopSequence {
    type Item = &'a StopId;
    type IntoIter = std::slice::Iter<'a, StopId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
