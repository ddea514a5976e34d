pub mod match_runner;
pub mod rpsls;
pub mod twenty_one;

use std::fmt;

pub use match_runner::{run_match, MatchEventHandler, MatchGame, MatchSummary, RoundOutcome, Side};
use twenty_one::{Card, GamePhase};

/// The bust limit of standard Twenty-One.
pub const DEFAULT_WINNING_VALUE: u32 = 21;

/// Rules of a Twenty-One match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    /// Any hand totalling more than this is bust.
    pub winning_value: u32,
    /// The dealer keeps drawing while the dealer total is below this value.
    pub dealer_stand_threshold: u32,
    /// Round wins needed to take the match.
    pub match_target: u32,
}

impl Rule {
    /// The "Whatever-One" variant: bust above 31, dealer stands on 27.
    pub fn whatever_one() -> Self {
        Rule {
            winning_value: 31,
            dealer_stand_threshold: 27,
            match_target: 5,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.winning_value == 0 {
            return Err(GameError::InvalidRule(String::from(
                "winning_value must be positive",
            )));
        }
        if self.dealer_stand_threshold > self.winning_value {
            return Err(GameError::InvalidRule(format!(
                "dealer_stand_threshold ({}) cannot exceed winning_value ({})",
                self.dealer_stand_threshold, self.winning_value
            )));
        }
        if self.match_target == 0 {
            return Err(GameError::InvalidRule(String::from(
                "match_target must be at least 1",
            )));
        }
        Ok(())
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            winning_value: DEFAULT_WINNING_VALUE,
            dealer_stand_threshold: 17,
            match_target: 5,
        }
    }
}

/// What the player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A card was requested from an empty deck.
    DeckExhausted,
    /// A stacked deal order asked for a card that is no longer in the deck.
    CardUnavailable(Card),
    /// A table operation was called outside the phase it belongs to.
    WrongPhase {
        operation: &'static str,
        expected: GamePhase,
        actual: GamePhase,
    },
    /// Explicit choice weights summed to zero or to more than 100.
    InvalidDistribution { total: u32 },
    InvalidRule(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::DeckExhausted => write!(f, "cannot deal from an empty deck"),
            GameError::CardUnavailable(card) => {
                write!(f, "{} has already been dealt from this deck", card)
            }
            GameError::WrongPhase {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "{} is only allowed in {:?} phase (table is in {:?})",
                operation, expected, actual
            ),
            GameError::InvalidDistribution { total } => write!(
                f,
                "choice weights must sum to between 1 and 100, got {}",
                total
            ),
            GameError::InvalidRule(reason) => write!(f, "invalid rule: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
