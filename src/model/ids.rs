// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smol_str::SmolStr;

/// A stable identifier used across the feed and model surfaces.
///
/// Feed ids are short (three or four characters in practice), so this is
/// backed by `SmolStr`: layout splicing clones ids constantly and the clones
/// must stay cheap. Validation only enforces that the id is non-empty and
/// free of whitespace; feeds own the actual id vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub(crate) fn from_smol(value: SmolStr) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsWhitespace => f.write_str("id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteIdTag {}
/// Identifies one train line (route) of the network.
pub type RouteId = Id<RouteIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationIdTag {}
/// The station-level prefix of a stop id; the key into the station table.
pub type StationId = Id<StationIdTag>;

/// Physical travel direction encoded in a directional stop id's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
}

impl Direction {
    fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }
}

/// The unique key for a stop record.
///
/// Two forms share this type. Feeds deliver the *directional* form (a station
/// prefix plus a trailing `N`/`S` suffix); the layout works on the
/// *schematic* form (the bare station id) produced by [`StopId::schematic`].
/// The layout's gap sentinel is the empty stop id, [`StopId::gap`], which is
/// deliberately not constructible through [`StopId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId {
    value: SmolStr,
}

impl StopId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
        })
    }

    /// The sentinel marking "no physical connection here" in a trunk walk.
    pub fn gap() -> Self {
        Self {
            value: SmolStr::new_static(""),
        }
    }

    pub fn is_gap(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The direction suffix, if this is a directional-form stop id.
    pub fn direction(&self) -> Option<Direction> {
        // A bare one-character id is a station id, not a direction suffix.
        if self.value.chars().count() < 2 {
            return None;
        }
        let suffix = self.value.chars().next_back()?;
        Direction::from_suffix(suffix)
    }

    /// The station-level id this stop belongs to.
    pub fn station(&self) -> StationId {
        match self.direction() {
            Some(_) => {
                let prefix = &self.value[..self.value.len() - 1];
                StationId::from_smol(SmolStr::new(prefix))
            }
            None => StationId::from_smol(self.value.clone()),
        }
    }

    /// The schematic (station-level) form of this stop id.
    pub fn schematic(&self) -> StopId {
        match self.direction() {
            Some(_) => Self {
                value: SmolStr::new(&self.value[..self.value.len() - 1]),
            },
            None => self.clone(),
        }
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_gap() {
            f.write_str("<gap>")
        } else {
            f.write_str(&self.value)
        }
    }
}

impl AsRef<str> for StopId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for StopId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for StopId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
