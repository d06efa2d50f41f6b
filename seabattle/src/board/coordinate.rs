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

//! Cell references on the board, written as a row letter followed by a column number.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::ParseCoordinateError;

/// Number of rows on the board, labelled `A` through `J`.
pub const ROWS: usize = 10;
/// Number of columns on the board, labelled `1` through `10`.
pub const COLUMNS: usize = 10;

/// Labels used for the rows, indexed by row.
pub(crate) const ROW_LETTERS: [char; ROWS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Matcher for the textual form. Bounds on the number are checked after matching.
static COORDINATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-J])([0-9]{1,2})$").unwrap());

/// The coordinates of a single cell on the board. Always in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index, `0` is row `A`.
    row: usize,
    /// Column index, `0` is column `1`.
    col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from zero-based row and column indexes. Returns `None`
    /// if either is outside the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLUMNS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Parse a cell reference such as `A1` or `J10`. Row letters are upper case only.
    pub fn parse(text: &str) -> Result<Self, ParseCoordinateError> {
        let invalid = || ParseCoordinateError::new(text);
        let captures = COORDINATE.captures(text).ok_or_else(invalid)?;
        let row = captures[1]
            .chars()
            .next()
            .and_then(|letter| ROW_LETTERS.iter().position(|&l| l == letter))
            .ok_or_else(invalid)?;
        let number: usize = captures[2].parse().map_err(|_| invalid())?;
        match number.checked_sub(1).and_then(|col| Self::new(row, col)) {
            Some(coord) => Ok(coord),
            None => Err(invalid()),
        }
    }

    /// Zero-based row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Letter labelling this coordinate's row.
    pub fn row_letter(self) -> char {
        ROW_LETTERS[self.row]
    }

    /// Iterate every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |col| Coordinate { row, col }))
    }

    /// Step by the given number of rows and columns. Returns `None` when the step
    /// leaves the board.
    pub(crate) fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        let row = checked_add_signed(self.row, drow)?;
        let col = checked_add_signed(self.col, dcol)?;
        Self::new(row, col)
    }
}

fn checked_add_signed(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(delta.unsigned_abs())
    } else {
        base.checked_add(delta as usize)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
