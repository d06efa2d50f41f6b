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

//! Types that make up a player's board.

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, COLUMNS, ROWS},
    errors::{CannotPlaceReason, ParseCoordinateError, PlaceError},
    grid::Cell,
    setup::Span,
    shot::fire,
    view::{FogView, FullView},
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;
pub mod shot;
mod view;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot hit a ship that still has unhit cells.
    Hit,
    /// The shot hit the last unhit cell of a ship, but the player has more ships left.
    HitAndSunk,
    /// The shot hit the last unhit cell of the player's last ship.
    HitAndFleetEliminated,
    /// The cell had already been shot. Nothing changed.
    AlreadyShot,
}

impl ShotOutcome {
    /// Whether the shot struck a ship.
    pub fn is_hit(self) -> bool {
        match self {
            ShotOutcome::Hit | ShotOutcome::HitAndSunk | ShotOutcome::HitAndFleetEliminated => {
                true
            }
            ShotOutcome::Miss | ShotOutcome::AlreadyShot => false,
        }
    }

    /// Whether the shot sank a ship. The last ship of a fleet counts.
    pub fn is_sunk(self) -> bool {
        match self {
            ShotOutcome::HitAndSunk | ShotOutcome::HitAndFleetEliminated => true,
            _ => false,
        }
    }

    /// Whether the shot ended the game.
    pub fn ends_game(self) -> bool {
        self == ShotOutcome::HitAndFleetEliminated
    }
}

/// Represents a single player's side of the ocean.
///
/// Ships are not stored separately: a ship is a straight run of [`Cell::Ship`] and
/// [`Cell::Hit`] cells. Because placement never lets two ships touch, the run through
/// any ship cell belongs to exactly one ship. The board does not track which ship is
/// which; [`GameSession`][crate::game::GameSession] makes sure each ship of the fleet is
/// placed once.
///
/// The same type doubles as an attacker's fog view of the opponent, which only ever
/// holds [`Cell::Hit`] and [`Cell::Miss`] marks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Get the state of the cell at the given coordinate.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.grid[coord]
    }

    /// Number of ship cells that have not been hit.
    pub fn ship_cells(&self) -> usize {
        self.grid.count(Cell::Ship)
    }

    /// Returns true if no unhit ship cells remain.
    pub fn fleet_eliminated(&self) -> bool {
        !self.grid.contains(Cell::Ship)
    }

    /// Get an iterator over the rows of this board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLUMNS]> {
        self.grid.rows()
    }

    /// Display adapter showing every cell, including unhit ships.
    pub fn full_view(&self) -> FullView<'_> {
        FullView::new(self)
    }

    /// Display adapter showing only the cells that have been shot.
    pub fn fog_view(&self) -> FogView<'_> {
        FogView::new(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(Coordinate::all().all(|coord| board.cell(coord) == Cell::Empty));
        assert_eq!(board.ship_cells(), 0);
        assert!(board.fleet_eliminated());
        assert_eq!(board.rows().count(), ROWS);
    }

    #[test]
    fn outcome_helpers() {
        assert!(ShotOutcome::Hit.is_hit());
        assert!(!ShotOutcome::Hit.is_sunk());
        assert!(ShotOutcome::HitAndSunk.is_sunk());
        assert!(ShotOutcome::HitAndFleetEliminated.is_sunk());
        assert!(ShotOutcome::HitAndFleetEliminated.ends_game());
        assert!(!ShotOutcome::HitAndSunk.ends_game());
        assert!(!ShotOutcome::Miss.is_hit());
        assert!(!ShotOutcome::AlreadyShot.is_hit());
    }
}
