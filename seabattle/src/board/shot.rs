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

//! Resolving shots against a defender's board.

use std::iter;

use log::{debug, trace};

use crate::board::{Board, Cell, Coordinate, ShotOutcome};

/// Row and column steps for the four directions a ship can extend in.
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Fire at `coord` on the defender's board and mirror the result into the attacker's
/// fog view of that board. Cells already shot are left untouched and reported as
/// [`ShotOutcome::AlreadyShot`].
pub fn fire(fog: &mut Board, defender: &mut Board, coord: Coordinate) -> ShotOutcome {
    let outcome = match defender.grid[coord] {
        Cell::Ship => {
            defender.grid[coord] = Cell::Hit;
            fog.grid[coord] = Cell::Hit;
            if defender.fleet_eliminated() {
                ShotOutcome::HitAndFleetEliminated
            } else if defender.is_sunk_at(coord) {
                ShotOutcome::HitAndSunk
            } else {
                ShotOutcome::Hit
            }
        }
        Cell::Empty => {
            defender.grid[coord] = Cell::Miss;
            fog.grid[coord] = Cell::Miss;
            ShotOutcome::Miss
        }
        Cell::Hit | Cell::Miss => ShotOutcome::AlreadyShot,
    };
    debug!("shot at {}: {:?}", coord, outcome);
    outcome
}

impl Board {
    /// Returns true if `coord` is a hit cell whose ship has no unhit cells left.
    ///
    /// Walks outward along the row and the column from `coord` until open water or the
    /// edge of the board. Ships never touch, so every ship or hit cell met on the way
    /// belongs to the same ship.
    pub fn is_sunk_at(&self, coord: Coordinate) -> bool {
        if self.grid[coord] != Cell::Hit {
            return false;
        }
        DIRECTIONS.iter().all(|&(drow, dcol)| {
            let run = iter::successors(coord.offset(drow, dcol), |c| c.offset(drow, dcol))
                .map(|c| self.grid[c])
                .take_while(|&cell| cell == Cell::Ship || cell == Cell::Hit);
            for cell in run {
                if cell == Cell::Ship {
                    trace!("{} still afloat", coord);
                    return false;
                }
            }
            true
        })
    }
}
