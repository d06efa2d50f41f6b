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

//! The fixed fleet each player places at the start of the game.

use std::fmt;

/// Ship types in the fleet. Every player places exactly one of each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ship {
    /// Aircraft Carrier: length 5.
    AircraftCarrier,
    /// Battleship: length 4.
    Battleship,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

/// The fleet in the order players are asked to place it.
pub const FLEET: [Ship; 5] = [
    Ship::AircraftCarrier,
    Ship::Battleship,
    Ship::Submarine,
    Ship::Cruiser,
    Ship::Destroyer,
];

/// Total number of cells covered by a fully placed fleet.
pub const FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

impl Ship {
    /// Get the length of this ship type.
    pub const fn len(self) -> usize {
        match self {
            Ship::AircraftCarrier => 5,
            Ship::Battleship => 4,
            Ship::Submarine => 3,
            Ship::Cruiser => 3,
            Ship::Destroyer => 2,
        }
    }

    /// Name of the ship as shown to players.
    pub const fn name(self) -> &'static str {
        match self {
            Ship::AircraftCarrier => "Aircraft Carrier",
            Ship::Battleship => "Battleship",
            Ship::Submarine => "Submarine",
            Ship::Cruiser => "Cruiser",
            Ship::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
