// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Routing, StopId};

use super::path::StopSequence;

/// Where a pending run of not-yet-placed stops attaches to the diagram.
///
/// Classified once per run from the surrounding matches and the existing
/// branch shapes, then dispatched; classification never mutates anything,
/// which keeps every case independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attachment {
    /// Trailing run continuing past the trunk's last stop.
    Extend,
    /// Run before the first match, with no branch starting at that match:
    /// an alternative origin feeding into the middle of the trunk.
    NewTop,
    /// Trailing run departing from a mid-trunk match and ending off-diagram.
    NewBottom,
    /// Run between two matches that no existing branch accommodates.
    NewMiddle,
    /// Run between two stops that sit adjacent in an existing branch.
    InsertMiddle { branch: usize },
    /// Run feeding into the first stop of an existing branch.
    BridgePrefix { branch: usize },
    /// Run continuing out of the last stop of an existing branch.
    BridgeSuffix { branch: usize },
    /// The routing never matched the trunk at all; it cannot be placed.
    Disconnected,
}

/// What the merger did with one routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MergeOutcome {
    Merged,
    /// Every stop already sat in the trunk (set semantics, not order).
    Redundant,
    /// No stop shared with the trunk; dropped without touching the diagram.
    Disjoint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MergeTotals {
    pub(crate) merged: usize,
    pub(crate) redundant: usize,
    pub(crate) disjoint: usize,
}

/// Folds every routing into the trunk and branch collection, in input order.
pub(crate) fn merge_all(
    trunk: &mut StopSequence,
    branches: &mut Vec<StopSequence>,
    routings: &[Routing],
) -> MergeTotals {
    let mut totals = MergeTotals::default();
    for routing in routings {
        match merge_routing(trunk, branches, routing) {
            MergeOutcome::Merged => totals.merged += 1,
            MergeOutcome::Redundant => totals.redundant += 1,
            MergeOutcome::Disjoint => totals.disjoint += 1,
        }
    }
    totals
}

/// Folds one routing into the trunk and branches.
///
/// Scans left to right, buffering stops the trunk does not know yet; each
/// time the scan lands back on a trunk stop (or runs out), the buffered run
/// is classified and attached. Splices only ever insert between already
/// placed stops, so established order is preserved on both the trunk and
/// every branch.
pub(crate) fn merge_routing(
    trunk: &mut StopSequence,
    branches: &mut Vec<StopSequence>,
    routing: &Routing,
) -> MergeOutcome {
    if routing.stops() == trunk.stops() {
        return MergeOutcome::Redundant;
    }
    if routing.iter().all(|stop| trunk.contains(stop)) {
        return MergeOutcome::Redundant;
    }

    let mut last_match: Option<StopId> = None;
    let mut pending: Vec<StopId> = Vec::new();

    for stop in routing {
        if trunk.contains(stop) {
            if !pending.is_empty() {
                let attachment = classify(trunk, branches, last_match.as_ref(), Some(stop));
                attach(
                    trunk,
                    branches,
                    attachment,
                    last_match.as_ref(),
                    Some(stop),
                    &pending,
                );
                pending.clear();
            }
            last_match = Some(stop.clone());
        } else {
            pending.push(stop.clone());
        }
    }

    if !pending.is_empty() {
        let attachment = classify(trunk, branches, last_match.as_ref(), None);
        if attachment == Attachment::Disconnected {
            return MergeOutcome::Disjoint;
        }
        attach(trunk, branches, attachment, last_match.as_ref(), None, &pending);
    }

    MergeOutcome::Merged
}

/// Classifies one pending run. `current` is the trunk stop the scan landed
/// on, or `None` at the end of the routing. Branch searches run in creation
/// order; the first branch satisfying a predicate wins.
pub(crate) fn classify(
    trunk: &StopSequence,
    branches: &[StopSequence],
    last_match: Option<&StopId>,
    current: Option<&StopId>,
) -> Attachment {
    match (last_match, current) {
        (None, Some(current)) => branches
            .iter()
            .position(|branch| branch.first() == Some(current))
            .map(|branch| Attachment::BridgePrefix { branch })
            .unwrap_or(Attachment::NewTop),
        (Some(last), Some(current)) => {
            if let Some(branch) = branches
                .iter()
                .position(|branch| branch.follows(last, current))
            {
                Attachment::InsertMiddle { branch }
            } else if let Some(branch) = branches
                .iter()
                .position(|branch| branch.first() == Some(current) && !branch.contains(last))
            {
                Attachment::BridgePrefix { branch }
            } else if let Some(branch) = branches
                .iter()
                .position(|branch| branch.last() == Some(last) && !branch.contains(current))
            {
                Attachment::BridgeSuffix { branch }
            } else {
                Attachment::NewMiddle
            }
        }
        (Some(last), None) => {
            if trunk.last() == Some(last) {
                Attachment::Extend
            } else {
                Attachment::NewBottom
            }
        }
        (None, None) => Attachment::Disconnected,
    }
}

fn attach(
    trunk: &mut StopSequence,
    branches: &mut Vec<StopSequence>,
    attachment: Attachment,
    last_match: Option<&StopId>,
    current: Option<&StopId>,
    pending: &[StopId],
) {
    match attachment {
        Attachment::Extend => {
            trunk.append_run(pending);
            branches[0].append_run(pending);
        }
        Attachment::NewTop => {
            let current = current.expect("new-top run lands on a match");
            trunk.insert_before(current, pending);
            let mut branch = StopSequence::new();
            branch.append_run(pending);
            branch.push(current.clone());
            branches.push(branch);
        }
        Attachment::NewBottom => {
            let last = last_match.expect("new-bottom run departs from a match");
            trunk.insert_after(last, pending);
            let mut branch = StopSequence::new();
            branch.push(last.clone());
            branch.append_run(pending);
            branches.push(branch);
        }
        Attachment::NewMiddle => {
            let last = last_match.expect("new-middle run departs from a match");
            let current = current.expect("new-middle run lands on a match");
            trunk.insert_before(current, pending);
            let mut branch = StopSequence::new();
            branch.push(last.clone());
            branch.append_run(pending);
            branch.push(current.clone());
            branches.push(branch);
        }
        Attachment::InsertMiddle { branch } => {
            let current = current.expect("insert-middle run lands on a match");
            trunk.insert_before(current, pending);
            branches[branch].insert_before(current, pending);
        }
        Attachment::BridgePrefix { branch } => {
            let current = current.expect("bridge-prefix run lands on a match");
            trunk.insert_before(current, pending);
            let mut run = Vec::with_capacity(pending.len() + 1);
            if let Some(last) = last_match {
                run.push(last.clone());
            }
            run.extend_from_slice(pending);
            branches[branch].prepend_run(&run);
        }
        Attachment::BridgeSuffix { branch } => {
            let last = last_match.expect("bridge-suffix run departs from a match");
            let current = current.expect("bridge-suffix run lands on a match");
            trunk.insert_after(last, pending);
            branches[branch].append_run(pending);
            branches[branch].push(current.clone());
        }
        Attachment::Disconnected => {
            unreachable!("disconnected routings are dropped by merge_routing")
        }
    }
}
