// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The branch-topology layout pipeline.
//!
//! Normalizes a line's directional routings, selects a trunk, folds every
//! remaining routing in as branches, and resolves per-stop branch state for
//! the rendering loop.

pub mod line;
mod merge;
pub mod normalize;
pub mod path;
pub mod resolve;
mod trunk;

pub use line::{layout_line, layout_network, LayoutStats, LineLayout};
pub use normalize::{normalize, retain_known};
pub use path::StopSequence;
pub use resolve::RenderEntry;
