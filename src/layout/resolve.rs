// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::model::StopId;

use super::path::StopSequence;

/// One row of the finished diagram, in trunk walk order.
///
/// `active_branches` is indexed by stack slot: `true` means the stop sits on
/// that open branch, `false` means the branch merely runs alongside and its
/// track must still be drawn. `branch_start`/`branch_end` name the stack slot
/// that opens/closes at this row, for corner glyphs. A gap row carries the
/// gap sentinel and no open branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    stop_id: StopId,
    active_branches: SmallVec<[bool; 4]>,
    branch_start: Option<usize>,
    branch_end: Option<usize>,
}

impl RenderEntry {
    pub(crate) fn new(
        stop_id: StopId,
        active_branches: SmallVec<[bool; 4]>,
        branch_start: Option<usize>,
        branch_end: Option<usize>,
    ) -> Self {
        Self {
            stop_id,
            active_branches,
            branch_start,
            branch_end,
        }
    }

    pub fn stop_id(&self) -> &StopId {
        &self.stop_id
    }

    pub fn is_gap(&self) -> bool {
        self.stop_id.is_gap()
    }

    pub fn active_branches(&self) -> &[bool] {
        &self.active_branches
    }

    pub fn branch_start(&self) -> Option<usize> {
        self.branch_start
    }

    pub fn branch_end(&self) -> Option<usize> {
        self.branch_end
    }
}

/// Walks the frozen trunk and derives each stop's branch state.
///
/// The walk consumes private queue copies of the branches; the trunk and
/// branch collection stay untouched. The stack of open branches starts with
/// the main branch. A branch opens at most once: after a gap closes
/// everything, only branches never seen before can open again.
pub(crate) fn resolve(trunk: &StopSequence, branches: &[StopSequence]) -> Vec<RenderEntry> {
    let mut remaining = branches
        .iter()
        .map(|branch| branch.iter().cloned().collect::<VecDeque<_>>())
        .collect::<Vec<_>>();
    let mut opened = vec![false; branches.len()];
    let mut stack = Vec::<usize>::new();
    if !branches.is_empty() {
        opened[0] = true;
        stack.push(0);
    }

    let mut entries = Vec::with_capacity(trunk.len());
    for stop in trunk {
        if stop.is_gap() {
            stack.clear();
            entries.push(RenderEntry::new(StopId::gap(), SmallVec::new(), None, None));
            continue;
        }

        let mut branch_start = None;
        let mut branch_end = None;

        let newly_open =
            (0..remaining.len()).find(|&idx| !opened[idx] && remaining[idx].contains(stop));
        if let Some(idx) = newly_open {
            // Stops before the shared point were already drawn under other
            // branches; consume them so the queue fronts stay aligned.
            while remaining[idx].front().is_some_and(|front| front != stop) {
                remaining[idx].pop_front();
            }
            opened[idx] = true;
            stack.push(idx);
            branch_start = Some(stack.len() - 1);
        } else if stack.len() >= 2 {
            let top = *stack.last().expect("stack holds at least two branches");
            let below = stack[stack.len() - 2];
            let consumed = remaining[top].is_empty();
            let rejoins =
                remaining[top].back() == Some(stop) && remaining[below].contains(stop);
            if consumed || rejoins {
                stack.pop();
                branch_end = Some(stack.len());
            }
        }

        let mut active = SmallVec::new();
        for &idx in &stack {
            if remaining[idx].front() == Some(stop) {
                remaining[idx].pop_front();
                active.push(true);
            } else {
                active.push(false);
            }
        }

        entries.push(RenderEntry::new(stop.clone(), active, branch_start, branch_end));
    }

    entries
}
