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

//! Defines the cells that make up a board and the fixed-size grid holding them.

use std::ops::{Index, IndexMut};

use crate::board::{Coordinate, COLUMNS, ROWS};

/// State of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// Part of a ship that has not been hit.
    Ship,
    /// Part of a ship that has been hit. Terminal.
    Hit,
    /// Open water that has been shot. Terminal.
    Miss,
}

impl Cell {
    /// Whether a shot has already landed on this cell.
    pub fn is_shot(self) -> bool {
        match self {
            Cell::Hit | Cell::Miss => true,
            Cell::Empty | Cell::Ship => false,
        }
    }

    /// How this cell looks to the opponent: ships stay hidden until hit.
    pub fn fogged(self) -> Cell {
        match self {
            Cell::Ship => Cell::Empty,
            other => other,
        }
    }

    /// Character used to draw this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship => 'O',
            Cell::Hit => 'X',
            Cell::Miss => 'M',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Row-major storage for one board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Iterate the rows of the grid, top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Cell; COLUMNS]> {
        self.cells.iter()
    }

    /// Count the cells in the given state.
    pub(super) fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Whether any cell is in the given state.
    pub(super) fn contains(&self, state: Cell) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == state))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[coord.row()][coord.col()]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        &mut self.cells[coord.row()][coord.col()]
    }
}
