//! Rock, Paper, Scissors, Lizard, Spock.
//!
//! Each move beats exactly two others and loses to the remaining two:
//! scissors cuts paper, paper covers rock, rock crushes lizard, lizard poisons
//! spock, spock smashes scissors, scissors decapitates lizard, lizard eats
//! paper, paper disproves spock, spock vaporizes rock, rock crushes scissors.

pub mod distribution;
pub mod game;
pub mod history;
pub mod opponent;

use strum_macros::{Display, EnumCount, EnumString};

use crate::GameError;

pub const NUMBER_OF_MOVES: usize = 5;

/// Canonical enumeration order. Ties between moves are always broken in this order.
pub const ALL_MOVES: [Move; NUMBER_OF_MOVES] = [
    Move::Rock,
    Move::Paper,
    Move::Scissors,
    Move::Lizard,
    Move::Spock,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumCount)]
#[strum(ascii_case_insensitive)]
pub enum Move {
    #[strum(to_string = "rock", serialize = "r")]
    Rock = 0,
    #[strum(to_string = "paper", serialize = "p")]
    Paper,
    #[strum(to_string = "scissors", serialize = "x")]
    Scissors,
    #[strum(to_string = "lizard", serialize = "l")]
    Lizard,
    #[strum(to_string = "spock", serialize = "s")]
    Spock,
}

// Row beats column, both in canonical order.
const DOMINANCE: [[bool; NUMBER_OF_MOVES]; NUMBER_OF_MOVES] = [
    // rock   paper  sciss  lizard spock
    [false, false, true, true, false], // rock
    [true, false, false, false, true], // paper
    [false, true, false, true, false], // scissors
    [false, true, false, false, true], // lizard
    [true, false, true, false, false], // spock
];

impl Move {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn beats(self, other: Move) -> bool {
        DOMINANCE[self.index()][other.index()]
    }
}

/// Whether `a` beats `b`.
pub fn beats(a: Move, b: Move) -> bool {
    a.beats(b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    FirstWins,
    SecondWins,
    Tie,
}

pub fn resolve(a: Move, b: Move) -> Resolution {
    if beats(a, b) {
        Resolution::FirstWins
    } else if beats(b, a) {
        Resolution::SecondWins
    } else {
        Resolution::Tie
    }
}

/// Rules of an RPSLS match and of the adaptive opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpslsRule {
    /// Round wins needed to take the match.
    pub match_target: u32,
    /// The adaptive opponent only reacts to a move winning at least this percentage of rounds.
    pub win_percentage_threshold: f64,
    /// The adaptive opponent only reacts once more than this many rounds were played.
    pub data_headstart: usize,
}

impl RpslsRule {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.match_target == 0 {
            return Err(GameError::InvalidRule(String::from(
                "match_target must be at least 1",
            )));
        }
        if !(0.0..=100.0).contains(&self.win_percentage_threshold) {
            return Err(GameError::InvalidRule(format!(
                "win_percentage_threshold must be within 0 and 100, got {}",
                self.win_percentage_threshold
            )));
        }
        Ok(())
    }
}

impl Default for RpslsRule {
    fn default() -> Self {
        RpslsRule {
            match_target: 7,
            win_percentage_threshold: 20.0,
            data_headstart: 3,
        }
    }
}
