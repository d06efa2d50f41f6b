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

use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use log::{debug, warn};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use seabattle::{
    board::{CannotPlaceReason, PlaceError, ShotOutcome},
    game::{GameSession, Handoff, Phase, Player, RepeatShotPolicy, SessionError},
};

/// Number of blank lines printed to push the previous player's board off screen.
const CLEAR_LINES: usize = 30;

/// Message for any input that isn't a valid coordinate or pair of coordinates.
const WRONG_COORDINATES: &str = "Error! You entered the wrong coordinates! Try again:";

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line battleship game for a shared screen.")
        .arg(
            Arg::with_name("repeat_shot")
                .long("repeat-shot")
                .value_name("POLICY")
                .help("what happens when a player fires at a cell they already shot")
                .long_help(
                    "What happens when a player fires at a cell they already shot. \
                     \"pass\" uses up the turn, \"again\" lets the player fire again.",
                )
                .takes_value(true)
                .possible_values(&["pass", "again"])
                .case_insensitive(true)
                .default_value("pass"),
        )
        .arg(
            Arg::with_name("no_clear")
                .long("no-clear")
                .help("don't print blank lines to hide the board when passing the move"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log to stderr, repeat for more detail; RUST_LOG overrides"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));
    let policy = repeat_shot_policy(&matches);
    debug!("repeated shots: {:?}", policy);

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), !matches.is_present("no_clear"));
    let mut game = GameSession::with_handoff(console, policy);
    let mut rng = rand::thread_rng();

    if play(&mut game, &mut rng)?.is_none() {
        debug!("input closed before the game ended");
    }
    Ok(())
}

/// Set up `env_logger`. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Read the repeated-shot policy from the args.
fn repeat_shot_policy(matches: &ArgMatches) -> RepeatShotPolicy {
    match matches.value_of("repeat_shot").map(str::to_ascii_lowercase).as_deref() {
        Some("again") => RepeatShotPolicy::ShootAgain,
        _ => RepeatShotPolicy::PassTurn,
    }
}

/// Run a whole game. Returns the winner, or `None` if input ran out first.
fn play<B: BufRead>(
    game: &mut GameSession<Console<B>>,
    rng: &mut impl Rng,
) -> io::Result<Option<Player>> {
    for &player in [Player::Player1, Player::Player2].iter() {
        if !place_fleet(game, player, rng)? {
            return Ok(None);
        }
        game.hand_over();
    }
    loop {
        let player = match game.phase() {
            Phase::AwaitingShot(player) => player,
            Phase::GameOver(winner) => return Ok(Some(winner)),
            Phase::PlacingFleet(_) => unreachable!(),
        };
        if !take_turn(game, player)? {
            return Ok(None);
        }
        game.hand_over();
    }
}

/// Ask the player for the position of each ship in turn. Returns false if input ran
/// out.
fn place_fleet<B: BufRead>(
    game: &mut GameSession<Console<B>>,
    player: Player,
    rng: &mut impl Rng,
) -> io::Result<bool> {
    /// Two endpoints separated by whitespace.
    static PLACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+)\s+(\S+)$").unwrap());
    /// Places the rest of the fleet at random.
    static RANDOM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i:random|rand)$").unwrap());

    println!("{}, place your ships on the game field", player);
    print!("{}", game.board(player).full_view());
    while game.phase() == Phase::PlacingFleet(player) {
        let ship = match game.pending_ship() {
            Some(ship) => ship,
            None => break,
        };
        println!("Enter the coordinates of the {} ({} cells):", ship, ship.len());
        let line = match game.handoff_mut().read_line()? {
            Some(line) => line,
            None => return Ok(false),
        };

        if RANDOM.is_match(&line) {
            place_rest_randomly(game, player, rng);
            print!("{}", game.board(player).full_view());
        } else if let Some(captures) = PLACE.captures(&line) {
            match game.place_next(&captures[1], &captures[2]) {
                Ok(_) => print!("{}", game.board(player).full_view()),
                Err(SessionError::Place(err)) => println!("{}", place_error_message(&err)),
                Err(err) => unreachable!("{}", err),
            }
        } else {
            println!("{}", WRONG_COORDINATES);
        }
    }
    Ok(true)
}

/// Place the player's remaining ships at random positions. Stops at the first ship
/// that doesn't fit, leaving it for the player.
fn place_rest_randomly<B: BufRead>(
    game: &mut GameSession<Console<B>>,
    player: Player,
    rng: &mut impl Rng,
) {
    while game.phase() == Phase::PlacingFleet(player) {
        match game.place_next_randomly(rng) {
            Ok(placement) => debug!("randomly placed {}", placement.ship),
            Err(SessionError::Place(err)) => {
                println!("{}", place_error_message(&err));
                return;
            }
            Err(err) => unreachable!("{}", err),
        }
    }
}

/// Message shown to the player when a placement is rejected.
fn place_error_message(err: &PlaceError) -> String {
    match err.reason() {
        CannotPlaceReason::InvalidFormat => WRONG_COORDINATES.to_owned(),
        CannotPlaceReason::WrongShape => "Error! Wrong ship location! Try again:".to_owned(),
        CannotPlaceReason::WrongLength => {
            format!("Error! Wrong length of the {}! Try again:", err.ship())
        }
        CannotPlaceReason::TooClose => {
            "Error! You placed it too close to another one. Try again:".to_owned()
        }
        CannotPlaceReason::NoSpace => {
            format!("Error! There is no room left for the {}! Try again:", err.ship())
        }
    }
}

/// Show the player's view of the game and read shots until one is accepted. Returns
/// false if input ran out.
fn take_turn<B: BufRead>(game: &mut GameSession<Console<B>>, player: Player) -> io::Result<bool> {
    print!("{}", game.fog(player).fog_view());
    println!("---------------------");
    print!("{}", game.board(player).full_view());
    println!("{}, it's your turn:", player);

    loop {
        let line = match game.handoff_mut().read_line()? {
            Some(line) => line,
            None => return Ok(false),
        };
        let report = match game.fire(&line) {
            Ok(report) => report,
            Err(SessionError::InvalidCoordinate(err)) => {
                debug!("{}", err);
                println!("{}", WRONG_COORDINATES);
                continue;
            }
            Err(err) => unreachable!("{}", err),
        };
        match report.outcome {
            ShotOutcome::Miss => println!("You missed!"),
            ShotOutcome::Hit => println!("You hit a ship!"),
            ShotOutcome::HitAndSunk => println!("You sank a ship!"),
            ShotOutcome::HitAndFleetEliminated => {
                println!("You sank the last ship. You won. Congratulations!")
            }
            ShotOutcome::AlreadyShot if report.next == Phase::AwaitingShot(player) => {
                println!("You already shot here. Try again:");
                continue;
            }
            ShotOutcome::AlreadyShot => println!("You already shot here. "),
        }
        return Ok(true);
    }
}

/// Line-based access to the players, shared by the prompts and the handoff between
/// turns.
struct Console<B> {
    read: B,
    buf: String,
    /// Whether to push the screen contents away when handing over.
    clear: bool,
    /// Set once the input has reached its end.
    closed: bool,
}

impl<B> Console<B> {
    fn new(read: B, clear: bool) -> Self {
        Self {
            read,
            buf: String::new(),
            clear,
            closed: false,
        }
    }
}

impl<B: BufRead> Console<B> {
    /// Read one line, trimmed. Returns `None` once the input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        io::stdout().flush()?;
        if self.closed {
            return Ok(None);
        }
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(self.buf.trim().to_owned()))
    }
}

impl<B: BufRead> Handoff for Console<B> {
    fn hand_over(&mut self, from: Player, to: Player) {
        debug!("passing the move from {} to {}", from, to);
        println!("Press Enter and pass the move to another player");
        if let Err(err) = self.read_line() {
            warn!("could not wait for the next player: {}", err);
        }
        if self.clear {
            println!("{}", "\n".repeat(CLEAR_LINES));
        }
    }
}
