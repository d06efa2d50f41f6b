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

//! Text rendering of boards.

use std::fmt::{self, Write};

use crate::board::{coordinate::ROW_LETTERS, Board, Cell, COLUMNS};

/// Display adapter that draws every cell of a board, including unhit ships.
#[derive(Debug, Copy, Clone)]
pub struct FullView<'a>(&'a Board);

/// Display adapter that draws a board as the opponent sees it: ships stay hidden
/// until hit.
#[derive(Debug, Copy, Clone)]
pub struct FogView<'a>(&'a Board);

impl<'a> FullView<'a> {
    pub(super) fn new(board: &'a Board) -> Self {
        FullView(board)
    }
}

impl<'a> FogView<'a> {
    pub(super) fn new(board: &'a Board) -> Self {
        FogView(board)
    }
}

impl fmt::Display for FullView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        show_board(f, self.0, |cell| cell)
    }
}

impl fmt::Display for FogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        show_board(f, self.0, Cell::fogged)
    }
}

/// Draw the grid with column numbers across the top and row letters down the side.
/// Every label and cell is followed by a single space.
fn show_board(f: &mut fmt::Formatter, board: &Board, reveal: impl Fn(Cell) -> Cell) -> fmt::Result {
    f.write_str("  ")?;
    for col in 1..=COLUMNS {
        write!(f, "{} ", col)?;
    }
    f.write_char('\n')?;
    for (letter, row) in ROW_LETTERS.iter().zip(board.rows()) {
        write!(f, "{} ", letter)?;
        for &cell in row.iter() {
            write!(f, "{} ", reveal(cell).glyph())?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{fire, Coordinate},
        ships::Ship,
    };

    const HEADER: &str = "  1 2 3 4 5 6 7 8 9 10 \n";
    const WATER: &str = "~ ~ ~ ~ ~ ~ ~ ~ ~ ~ \n";

    #[test]
    fn empty_board_layout() {
        let mut expected = String::from(HEADER);
        for letter in ROW_LETTERS.iter() {
            expected.push(*letter);
            expected.push(' ');
            expected.push_str(WATER);
        }
        let board = Board::new();
        assert_eq!(board.full_view().to_string(), expected);
        assert_eq!(board.fog_view().to_string(), expected);
    }

    #[test]
    fn fog_hides_unhit_ships() {
        let mut board = Board::new();
        let mut fog = Board::new();
        board.try_place(Ship::Cruiser, "B2", "B4").unwrap();
        fire(&mut fog, &mut board, "B3".parse::<Coordinate>().unwrap());
        fire(&mut fog, &mut board, "D5".parse::<Coordinate>().unwrap());

        let full = board.full_view().to_string();
        let fogged = board.fog_view().to_string();
        let full_rows: Vec<_> = full.lines().collect();
        let fog_rows: Vec<_> = fogged.lines().collect();

        assert_eq!(full_rows[2], "B ~ O X O ~ ~ ~ ~ ~ ~ ");
        assert_eq!(fog_rows[2], "B ~ ~ X ~ ~ ~ ~ ~ ~ ~ ");
        assert_eq!(full_rows[4], "D ~ ~ ~ ~ M ~ ~ ~ ~ ~ ");
        assert_eq!(fog_rows[4], full_rows[4]);
        assert!(!fogged.contains('O'));
        // The attacker's own fog board renders the same as the fogged target.
        assert_eq!(fog.full_view().to_string(), fogged);
    }
}
