use rand::Rng;

use crate::{match_runner::MatchGame, GameError, Rule, Side};

use super::{strategy::Strategy, Table, TableEventHandler, TableOutcome};

/// A Twenty-One match: one table, the player's decision source and a display.
pub struct TwentyOneGame<R, S, H> {
    table: Table,
    rng: R,
    strategy: S,
    handler: H,
}

impl<R, S, H> TwentyOneGame<R, S, H>
where
    R: Rng,
    S: Strategy,
    H: TableEventHandler,
{
    pub fn new(rule: &Rule, rng: R, strategy: S, handler: H) -> Self {
        TwentyOneGame {
            table: Table::new(rule),
            rng,
            strategy,
            handler,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<R, S, H> MatchGame for TwentyOneGame<R, S, H>
where
    R: Rng,
    S: Strategy,
    H: TableEventHandler,
{
    type Outcome = TableOutcome;

    fn play_round(&mut self) -> Result<TableOutcome, GameError> {
        self.table.new_round();
        self.handler
            .on_round_begin(self.table.player().score(), self.table.dealer().score());
        self.table
            .automatic_play_round(&mut self.rng, &mut self.strategy, &mut self.handler)
    }

    fn award(&mut self, side: Side) {
        self.table.award(side);
    }

    fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.table.player().score(),
            Side::Opponent => self.table.dealer().score(),
        }
    }

    fn reset_match(&mut self) {
        self.table.new_match();
    }
}
