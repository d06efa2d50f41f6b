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

//! Two-player game session: each player places their fleet, then the players take turns
//! firing at each other until one fleet is gone.

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::{
    board::{self, Board, Coordinate, ParseCoordinateError, PlaceError, ShotOutcome, Span},
    ships::{Ship, FLEET},
};

/// Player ID. The session always has exactly two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// The player's number as shown to players, 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Where the session is in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The player is placing their fleet.
    PlacingFleet(Player),
    /// The player is about to fire.
    AwaitingShot(Player),
    /// The player sank the opponent's whole fleet. Terminal.
    GameOver(Player),
}

/// What happens to the turn when a player fires at a cell they already shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RepeatShotPolicy {
    /// The shot uses up the turn, like any other shot.
    PassTurn,
    /// The same player fires again.
    ShootAgain,
}

impl Default for RepeatShotPolicy {
    fn default() -> Self {
        RepeatShotPolicy::PassTurn
    }
}

/// Called whenever the device has to go from one player to the other, so the front
/// end can hide the board that is about to become secret.
///
/// The session records a handoff when a player finishes placing their fleet or when a
/// shot passes the turn. It is delivered by [`GameSession::hand_over`], which the front
/// end calls once it has finished showing the result, or at the latest before the next
/// placement or shot is made.
pub trait Handoff {
    /// Pass the device from `from` to `to`.
    fn hand_over(&mut self, from: Player, to: Player);
}

/// [`Handoff`] that does nothing.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoHandoff;

impl Handoff for NoHandoff {
    fn hand_over(&mut self, _from: Player, _to: Player) {}
}

impl<H: Handoff + ?Sized> Handoff for &mut H {
    fn hand_over(&mut self, from: Player, to: Player) {
        (**self).hand_over(from, to)
    }
}

/// Error returned when an action on the session was rejected. Boards and phase are left
/// as they were. A [`SessionError::WrongPhase`] rejection also leaves any pending
/// handoff undelivered.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SessionError {
    /// The action is not allowed in the current phase.
    #[error("action not allowed while {0:?}")]
    WrongPhase(Phase),
    /// The ship placement was rejected.
    #[error(transparent)]
    Place(#[from] PlaceError),
    /// The shot's target was not a valid coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] ParseCoordinateError),
}

/// A ship that was successfully placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// Owner of the ship.
    pub player: Player,
    /// The ship that was placed.
    pub ship: Ship,
    /// Cells the ship covers.
    pub span: Span,
    /// Phase after the placement.
    pub next: Phase,
}

/// A shot that was fired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Player who fired.
    pub shooter: Player,
    /// Cell that was targeted on the opponent's board.
    pub target: Coordinate,
    /// What the shot did.
    pub outcome: ShotOutcome,
    /// Phase after the shot.
    pub next: Phase,
}

/// Per-player state.
#[derive(Debug, Clone)]
struct Side {
    /// The player's own ships.
    board: Board,
    /// What the player knows about the opponent's board.
    fog: Board,
}

/// A game between two players sharing one device.
pub struct GameSession<H = NoHandoff> {
    /// Indexed by [`Player::index`].
    sides: [Side; 2],
    phase: Phase,
    /// Index into [`FLEET`] of the next ship to place.
    next_ship: usize,
    policy: RepeatShotPolicy,
    handoff: H,
    /// Handoff recorded but not yet delivered, as `(from, to)`.
    pending_handoff: Option<(Player, Player)>,
    last_shot: Option<TurnReport>,
}

impl GameSession<NoHandoff> {
    /// Start a game with the default repeated-shot policy and no handoff.
    pub fn new() -> Self {
        Self::with_handoff(NoHandoff, RepeatShotPolicy::default())
    }
}

impl Default for GameSession<NoHandoff> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handoff> GameSession<H> {
    /// Start a game that calls `handoff` every time the turn changes hands.
    pub fn with_handoff(handoff: H, policy: RepeatShotPolicy) -> Self {
        let side = Side {
            board: Board::new(),
            fog: Board::new(),
        };
        Self {
            sides: [side.clone(), side],
            phase: Phase::PlacingFleet(Player::Player1),
            next_ship: 0,
            policy,
            handoff,
            pending_handoff: None,
            last_shot: None,
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Get the repeated-shot policy this game is played with.
    pub fn policy(&self) -> RepeatShotPolicy {
        self.policy
    }

    /// Get the ship that has to be placed next, if the game is in a placement phase.
    pub fn pending_ship(&self) -> Option<Ship> {
        match self.phase {
            Phase::PlacingFleet(_) => FLEET.get(self.next_ship).copied(),
            _ => None,
        }
    }

    /// The player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.sides[player.index()].board
    }

    /// The player's fog view of their opponent's board.
    pub fn fog(&self, player: Player) -> &Board {
        &self.sides[player.index()].fog
    }

    /// The most recent shot, if any have been fired.
    pub fn last_shot(&self) -> Option<&TurnReport> {
        self.last_shot.as_ref()
    }

    /// Get the handoff collaborator.
    pub fn handoff(&self) -> &H {
        &self.handoff
    }

    /// Mutably get the handoff collaborator.
    pub fn handoff_mut(&mut self) -> &mut H {
        &mut self.handoff
    }

    /// Handoff that has been recorded but not delivered yet, as `(from, to)`.
    pub fn pending_handoff(&self) -> Option<(Player, Player)> {
        self.pending_handoff
    }

    /// Deliver the pending handoff, if any. Returns true if the handoff was called.
    pub fn hand_over(&mut self) -> bool {
        match self.pending_handoff.take() {
            Some((from, to)) => {
                debug!("handing over from {} to {}", from, to);
                self.handoff.hand_over(from, to);
                true
            }
            None => false,
        }
    }

    /// Place the pending ship for the player who is placing their fleet, with the
    /// endpoints given as text. On rejection the same ship is still pending.
    pub fn place_next(&mut self, start: &str, end: &str) -> Result<Placement, SessionError> {
        let (player, ship) = self.placing()?;
        self.hand_over();
        let span = self.sides[player.index()].board.try_place(ship, start, end)?;
        Ok(self.finish_placement(player, ship, span))
    }

    /// Place the pending ship on a random legal span.
    #[cfg(feature = "rng_gen")]
    pub fn place_next_randomly<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Placement, SessionError> {
        let (player, ship) = self.placing()?;
        self.hand_over();
        let span = self.sides[player.index()].board.place_randomly(ship, rng)?;
        Ok(self.finish_placement(player, ship, span))
    }

    /// Check that the game is in a placement phase, and get the player and ship.
    fn placing(&self) -> Result<(Player, Ship), SessionError> {
        match (self.phase, self.pending_ship()) {
            (Phase::PlacingFleet(player), Some(ship)) => Ok((player, ship)),
            (phase, _) => Err(SessionError::WrongPhase(phase)),
        }
    }

    fn finish_placement(&mut self, player: Player, ship: Ship, span: Span) -> Placement {
        self.next_ship += 1;
        if self.next_ship == FLEET.len() {
            self.next_ship = 0;
            self.phase = match player {
                Player::Player1 => Phase::PlacingFleet(Player::Player2),
                Player::Player2 => Phase::AwaitingShot(Player::Player1),
            };
            info!("{} finished placing their fleet", player);
            self.pending_handoff = Some((player, player.opponent()));
        }
        Placement {
            player,
            ship,
            span,
            next: self.phase,
        }
    }

    /// Fire at the cell given as text on the opponent's board. Invalid text is rejected
    /// without using up the turn.
    pub fn fire(&mut self, target: &str) -> Result<TurnReport, SessionError> {
        let shooter = match self.phase {
            Phase::AwaitingShot(player) => player,
            phase => return Err(SessionError::WrongPhase(phase)),
        };
        self.hand_over();
        let target = Coordinate::parse(target)?;
        Ok(self.fire_at(shooter, target))
    }

    /// Fire at an already parsed coordinate. The caller has checked the phase.
    fn fire_at(&mut self, shooter: Player, target: Coordinate) -> TurnReport {
        let [first, second] = &mut self.sides;
        let (attacker, defender) = match shooter {
            Player::Player1 => (first, second),
            Player::Player2 => (second, first),
        };
        let outcome = board::fire(&mut attacker.fog, &mut defender.board, target);

        self.phase = match outcome {
            ShotOutcome::HitAndFleetEliminated => {
                info!("{} won", shooter);
                Phase::GameOver(shooter)
            }
            ShotOutcome::AlreadyShot if self.policy == RepeatShotPolicy::ShootAgain => {
                debug!("{} shoots again", shooter);
                Phase::AwaitingShot(shooter)
            }
            _ => {
                self.pending_handoff = Some((shooter, shooter.opponent()));
                Phase::AwaitingShot(shooter.opponent())
            }
        };
        let report = TurnReport {
            shooter,
            target,
            outcome,
            next: self.phase,
        };
        self.last_shot = Some(report);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }

    #[test]
    fn starts_placing_carrier_for_player1() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::PlacingFleet(Player::Player1));
        assert_eq!(session.pending_ship(), Some(Ship::AircraftCarrier));
        assert_eq!(session.winner(), None);
        assert_eq!(session.policy(), RepeatShotPolicy::PassTurn);
        assert!(session.last_shot().is_none());
    }

    #[test]
    fn fire_during_placement_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(
            session.fire("A1"),
            Err(SessionError::WrongPhase(Phase::PlacingFleet(Player::Player1)))
        );
    }

    #[test]
    fn rejected_placement_keeps_ship_pending() {
        let mut session = GameSession::new();
        let err = session.place_next("A1", "A4").unwrap_err();
        match err {
            SessionError::Place(err) => {
                assert_eq!(err.reason(), board::CannotPlaceReason::WrongLength);
                assert_eq!(err.ship(), Ship::AircraftCarrier);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(session.pending_ship(), Some(Ship::AircraftCarrier));
        assert_eq!(session.board(Player::Player1).ship_cells(), 0);

        let placed = session.place_next("A1", "A5").unwrap();
        assert_eq!(placed.ship, Ship::AircraftCarrier);
        assert_eq!(placed.next, Phase::PlacingFleet(Player::Player1));
        assert_eq!(session.pending_ship(), Some(Ship::Battleship));
    }
}
