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

//! Engine for the classic two-player game of Battleship on a 10x10 grid.
//!
//! [`board`] holds a single player's ocean: parsing cell references, placing ships
//! with the no-touching rule, resolving shots and drawing the grid.
//!
//! [`game`] runs a whole match between two players sharing one device: both players
//! place the [`FLEET`][ships::FLEET] in order, then take turns firing until one fleet
//! is sunk.
//!
//! ```
//! use seabattle::game::{GameSession, Phase, Player};
//!
//! let mut game = GameSession::new();
//! game.place_next("A1", "A5").unwrap();
//! assert_eq!(game.phase(), Phase::PlacingFleet(Player::Player1));
//! ```

pub mod board;
pub mod game;
pub mod ships;
