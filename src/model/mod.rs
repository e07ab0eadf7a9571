// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: typed ids, the station table, and routings.
//!
//! Everything here is rebuilt wholesale on each poll cycle; nothing owns
//! state across polls.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod routing;
pub mod station;

pub use ids::{Direction, Id, IdError, RouteId, StationId, StopId};
pub use routing::{DirectionalRoutings, Routing, RoutingError};
pub use station::{Station, StationTable};
