use super::{Move, Resolution, ALL_MOVES, NUMBER_OF_MOVES};

/// Result of one round from one contestant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Won,
    Lost,
    Tie,
}

impl RoundResult {
    /// `resolution` is read with this contestant's move as the first one.
    pub fn from_resolution(resolution: Resolution) -> Self {
        match resolution {
            Resolution::FirstWins => RoundResult::Won,
            Resolution::SecondWins => RoundResult::Lost,
            Resolution::Tie => RoundResult::Tie,
        }
    }
}

/// Everything one contestant played this match and how each round went.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveHistory {
    choices: Vec<Move>,
    results: Vec<RoundResult>,
    wins_with: [u32; NUMBER_OF_MOVES],
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, played: Move, result: RoundResult) {
        self.choices.push(played);
        self.results.push(result);
        if result == RoundResult::Won {
            self.wins_with[played.index()] += 1;
        }
    }

    pub fn rounds_played(&self) -> usize {
        self.results.len()
    }

    pub fn choices(&self) -> &[Move] {
        &self.choices
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.results.last().copied()
    }

    /// Rounds won while playing `mv`.
    pub fn wins_with(&self, mv: Move) -> u32 {
        self.wins_with[mv.index()]
    }

    /// Rounds won with `mv` as a percentage of all rounds played, 0 before the first round.
    pub fn win_percentage(&self, mv: Move) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.wins_with(mv) as f64 * 100.0 / self.rounds_played() as f64
    }

    /// The move with the highest win percentage. Equal percentages go to the
    /// earliest move in canonical order, so an empty history yields rock.
    /// The old console scripts kept the latest tied move instead.
    pub fn dominant_move(&self) -> Move {
        let mut dominant = ALL_MOVES[0];
        for mv in ALL_MOVES.into_iter().skip(1) {
            if self.wins_with(mv) > self.wins_with(dominant) {
                dominant = mv;
            }
        }
        dominant
    }

    pub fn clear(&mut self) {
        self.choices.clear();
        self.results.clear();
        self.wins_with = [0; NUMBER_OF_MOVES];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(rounds: &[(Move, RoundResult)]) -> MoveHistory {
        let mut history = MoveHistory::new();
        for &(mv, result) in rounds {
            history.record(mv, result);
        }
        history
    }

    #[test]
    fn percentages_are_over_all_rounds() {
        let history = history_of(&[
            (Move::Scissors, RoundResult::Won),
            (Move::Scissors, RoundResult::Won),
            (Move::Rock, RoundResult::Lost),
            (Move::Scissors, RoundResult::Won),
            (Move::Scissors, RoundResult::Lost),
            (Move::Paper, RoundResult::Tie),
        ]);
        assert_eq!(history.rounds_played(), 6);
        assert_eq!(history.wins_with(Move::Scissors), 3);
        assert_eq!(history.win_percentage(Move::Scissors), 50.0);
        assert_eq!(history.win_percentage(Move::Rock), 0.0);
        assert_eq!(history.dominant_move(), Move::Scissors);
        assert_eq!(history.last_result(), Some(RoundResult::Tie));
        assert_eq!(history.choices().len(), 6);
    }

    #[test]
    fn ties_go_to_canonical_order() {
        assert_eq!(MoveHistory::new().dominant_move(), Move::Rock);
        assert_eq!(MoveHistory::new().win_percentage(Move::Spock), 0.0);

        let history = history_of(&[
            (Move::Spock, RoundResult::Won),
            (Move::Lizard, RoundResult::Won),
        ]);
        assert_eq!(history.dominant_move(), Move::Lizard);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut history = history_of(&[(Move::Rock, RoundResult::Won)]);
        history.clear();
        assert_eq!(history, MoveHistory::new());
    }

    #[test]
    fn result_from_resolution() {
        assert_eq!(
            RoundResult::from_resolution(Resolution::FirstWins),
            RoundResult::Won
        );
        assert_eq!(
            RoundResult::from_resolution(Resolution::SecondWins),
            RoundResult::Lost
        );
        assert_eq!(RoundResult::from_resolution(Resolution::Tie), RoundResult::Tie);
    }
}
