// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors used by the `Board` and its placement checks.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::Ship;

/// Error returned when text could not be read as a [`Coordinate`][super::Coordinate].
#[derive(Error, Clone, Eq, PartialEq)]
#[error("invalid coordinate {input:?}, expected a row A-J followed by a column 1-10")]
pub struct ParseCoordinateError {
    /// The text that failed to parse.
    input: String,
}

impl ParseCoordinateError {
    /// Create a [`ParseCoordinateError`] for the given input.
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Debug for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a ship could not be placed with the given endpoints.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One of the endpoints was not a valid coordinate.
    #[error("an endpoint was not a valid coordinate")]
    InvalidFormat,
    /// The endpoints were not in the same row or the same column.
    #[error("the endpoints are not in a straight line")]
    WrongShape,
    /// The span between the endpoints does not match the ship's length.
    #[error("the span does not match the ship's length")]
    WrongLength,
    /// The span overlaps or touches a ship that was already placed.
    #[error("the span overlaps or touches another ship")]
    TooClose,
    /// No legal position for the ship could be found.
    #[error("no space left on the board for the ship")]
    NoSpace,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place the {ship}: {reason}")]
pub struct PlaceError {
    /// Ship that was being placed.
    ship: Ship,
    /// Why the placement was rejected.
    #[source]
    reason: CannotPlaceReason,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error for the ship with the given reason.
    pub(super) fn new(ship: Ship, reason: CannotPlaceReason) -> Self {
        Self { ship, reason }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship that was being placed.
    pub fn ship(&self) -> Ship {
        self.ship
    }
}
