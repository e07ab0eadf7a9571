// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — branch-topology layout for real-time subway line diagrams.
//!
//! Given a line's directional stop sequences (which may fork and rejoin),
//! the layout pipeline derives one linear trunk plus side branches and
//! resolves, per stop, which branches are open, so a schematic line diagram
//! can be drawn with correctly nested branch glyphs. Fetching and the actual
//! map rendering live outside this crate; [`feed`] defines the record shapes
//! they exchange with it.

pub mod feed;
pub mod layout;
pub mod model;
pub mod render;
