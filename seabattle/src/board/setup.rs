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

//! Ship placement: straight spans, their validation, and putting them on the board.

use std::cmp;

use log::{debug, trace};

use crate::{
    board::{Board, CannotPlaceReason, Cell, Coordinate, PlaceError, COLUMNS, ROWS},
    ships::Ship,
};

/// Inclusive straight run of cells between two endpoints in the same row or column.
/// The start is always the top-left end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    start: Coordinate,
    end: Coordinate,
}

impl Span {
    /// Build the span between two endpoints, given in either order. Returns
    /// [`CannotPlaceReason::WrongShape`] if they share neither a row nor a column.
    pub fn new(a: Coordinate, b: Coordinate) -> Result<Self, CannotPlaceReason> {
        if a.row() != b.row() && a.col() != b.col() {
            return Err(CannotPlaceReason::WrongShape);
        }
        Ok(Self {
            start: cmp::min(a, b),
            end: cmp::max(a, b),
        })
    }

    /// Top-left end of the span.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Bottom-right end of the span.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of cells covered, counting both endpoints.
    pub fn len(&self) -> usize {
        (self.end.row() - self.start.row()) + (self.end.col() - self.start.col()) + 1
    }

    /// Whether the given cell is part of this span.
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.start.row()..=self.end.row()).contains(&coord.row())
            && (self.start.col()..=self.end.col()).contains(&coord.col())
    }

    /// Iterate the cells of the span from start to end.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let (start, end) = (self.start, self.end);
        (start.row()..=end.row()).flat_map(move |row| {
            (start.col()..=end.col()).filter_map(move |col| Coordinate::new(row, col))
        })
    }

    /// Iterate the span plus a one-cell border around it, clipped to the board.
    fn with_margin(&self) -> impl Iterator<Item = Coordinate> {
        let rows = self.start.row().saturating_sub(1)..=cmp::min(self.end.row() + 1, ROWS - 1);
        let cols = self.start.col().saturating_sub(1)..=cmp::min(self.end.col() + 1, COLUMNS - 1);
        rows.flat_map(move |row| cols.clone().filter_map(move |col| Coordinate::new(row, col)))
    }
}

impl Board {
    /// Try to place the ship between two endpoints given as text, such as `"A1"` and
    /// `"A5"`. Checks run in order and stop at the first failure: both endpoints parse,
    /// they lie in a straight line, the span matches the ship's length, and nothing
    /// already placed is within one cell of the span. Returns the placed span.
    pub fn try_place(&mut self, ship: Ship, start: &str, end: &str) -> Result<Span, PlaceError> {
        let parse = |text: &str| {
            Coordinate::parse(text).map_err(|_| PlaceError::new(ship, CannotPlaceReason::InvalidFormat))
        };
        let start = parse(start)?;
        let end = parse(end)?;
        let span = Span::new(start, end).map_err(|reason| PlaceError::new(ship, reason))?;
        self.place(ship, span)?;
        Ok(span)
    }

    /// Check if the ship could be placed on the span, without placing it.
    pub fn check_placement(&self, ship: Ship, span: &Span) -> Result<(), PlaceError> {
        if span.len() != ship.len() {
            Err(PlaceError::new(ship, CannotPlaceReason::WrongLength))
        } else if span.with_margin().any(|coord| self.grid[coord] == Cell::Ship) {
            Err(PlaceError::new(ship, CannotPlaceReason::TooClose))
        } else {
            Ok(())
        }
    }

    /// Place the ship on the span if the placement is legal.
    pub fn place(&mut self, ship: Ship, span: Span) -> Result<(), PlaceError> {
        if let Err(err) = self.check_placement(ship, &span) {
            debug!("rejected {}: {}", ship, err.reason());
            return Err(err);
        }
        for coord in span.iter() {
            self.grid[coord] = Cell::Ship;
        }
        debug!("placed {}", ship);
        trace!("{} occupies {}-{}", ship, span.start(), span.end());
        Ok(())
    }

    /// Every legal span for the ship on the board as it is now.
    pub fn legal_spans(&self, ship: Ship) -> Vec<Span> {
        let reach = ship.len() as isize - 1;
        let mut spans = Vec::new();
        for start in Coordinate::all() {
            let ends = [start.offset(0, reach), start.offset(reach, 0)];
            for end in ends.iter().flatten() {
                if let Ok(span) = Span::new(start, *end) {
                    if !spans.contains(&span) && self.check_placement(ship, &span).is_ok() {
                        spans.push(span);
                    }
                }
            }
        }
        spans
    }
}

#[cfg(feature = "rng_gen")]
mod random {
    use rand::{seq::SliceRandom, Rng};

    use super::Span;
    use crate::{
        board::{Board, CannotPlaceReason, PlaceError},
        ships::{Ship, FLEET},
    };

    impl Board {
        /// Place the ship on a legal span chosen uniformly at random. Fails with
        /// [`CannotPlaceReason::NoSpace`] if no legal span remains.
        pub fn place_randomly<R: Rng + ?Sized>(
            &mut self,
            ship: Ship,
            rng: &mut R,
        ) -> Result<Span, PlaceError> {
            let span = *self
                .legal_spans(ship)
                .choose(rng)
                .ok_or_else(|| PlaceError::new(ship, CannotPlaceReason::NoSpace))?;
            self.place(ship, span)?;
            Ok(span)
        }

        /// Place every ship of the fleet at random, in fleet order.
        pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlaceError> {
            for &ship in FLEET.iter() {
                self.place_randomly(ship, rng)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    #[test]
    fn span_normalizes_endpoints() {
        let span = Span::new(coord("A5"), coord("A1")).unwrap();
        assert_eq!(span.start(), coord("A1"));
        assert_eq!(span.end(), coord("A5"));
        assert_eq!(span.len(), 5);

        let span = Span::new(coord("J3"), coord("F3")).unwrap();
        assert_eq!(span.start(), coord("F3"));
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn span_rejects_diagonal() {
        assert_eq!(
            Span::new(coord("A1"), coord("B2")),
            Err(CannotPlaceReason::WrongShape)
        );
    }

    #[test]
    fn span_iterates_cells_in_order() {
        let cells: Vec<_> = Span::new(coord("C2"), coord("E2"))
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(cells, ["C2", "D2", "E2"]);
    }

    #[test]
    fn margin_is_clipped_at_corner() {
        let span = Span::new(coord("A1"), coord("A2")).unwrap();
        let margin: Vec<_> = span.with_margin().map(|c| c.to_string()).collect();
        assert_eq!(margin, ["A1", "A2", "A3", "B1", "B2", "B3"]);
    }

    #[test]
    fn margin_around_middle_span() {
        let span = Span::new(coord("E5"), coord("G5")).unwrap();
        assert_eq!(span.with_margin().count(), 5 * 3);
        assert!(span.contains(coord("F5")));
        assert!(!span.contains(coord("F6")));
    }

    #[test]
    fn validation_order() {
        let mut board = Board::new();
        let reason = |res: Result<Span, PlaceError>| res.unwrap_err().reason();
        assert_eq!(
            reason(board.try_place(Ship::Cruiser, "K1", "B2")),
            CannotPlaceReason::InvalidFormat
        );
        assert_eq!(
            reason(board.try_place(Ship::Cruiser, "A1", "A11")),
            CannotPlaceReason::InvalidFormat
        );
        assert_eq!(
            reason(board.try_place(Ship::Cruiser, "A1", "C3")),
            CannotPlaceReason::WrongShape
        );
        assert_eq!(
            reason(board.try_place(Ship::Cruiser, "A1", "A4")),
            CannotPlaceReason::WrongLength
        );
        assert_eq!(
            reason(board.try_place(Ship::Destroyer, "A1", "A1")),
            CannotPlaceReason::WrongLength
        );
        assert_eq!(board.ship_cells(), 0);
    }

    #[test]
    fn wrong_length_reported_before_too_close() {
        let mut board = Board::new();
        board.try_place(Ship::Destroyer, "A1", "A2").unwrap();
        assert_eq!(
            board.try_place(Ship::Cruiser, "A1", "A2").unwrap_err().reason(),
            CannotPlaceReason::WrongLength
        );
    }

    #[test]
    fn touching_ships_rejected() {
        let mut board = Board::new();
        board.try_place(Ship::Destroyer, "A1", "A2").unwrap();
        assert_eq!(board.cell(coord("A1")), Cell::Ship);
        assert_eq!(board.cell(coord("A2")), Cell::Ship);

        let err = board.try_place(Ship::Cruiser, "A3", "A5").unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::TooClose);
        assert_eq!(err.ship(), Ship::Cruiser);
        // Diagonal contact counts too.
        assert_eq!(
            board.try_place(Ship::Cruiser, "B3", "D3").unwrap_err().reason(),
            CannotPlaceReason::TooClose
        );
        assert_eq!(board.ship_cells(), 2);

        // One cell of clearance is enough.
        board.try_place(Ship::Cruiser, "A4", "A6").unwrap();
        assert_eq!(board.ship_cells(), 5);
    }

    #[test]
    fn reversed_endpoints_place_same_cells() {
        let mut forward = Board::new();
        let mut backward = Board::new();
        forward.try_place(Ship::Battleship, "C3", "C6").unwrap();
        backward.try_place(Ship::Battleship, "C6", "C3").unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn legal_spans_on_empty_board() {
        let board = Board::new();
        // Horizontal: 10 rows * (10 - len + 1) starts, and the same vertically.
        assert_eq!(board.legal_spans(Ship::AircraftCarrier).len(), 2 * 10 * 6);
        assert_eq!(board.legal_spans(Ship::Destroyer).len(), 2 * 10 * 9);
    }
}
