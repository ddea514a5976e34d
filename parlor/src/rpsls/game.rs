use rand::Rng;

use crate::{
    match_runner::{MatchGame, RoundOutcome},
    GameError, Side,
};

use super::{
    history::{MoveHistory, RoundResult},
    resolve, Move, Resolution,
};

/// Picks a move for one contestant, given both contestants' histories.
pub trait MoveSource {
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        own: &MoveHistory,
        opponent: &MoveHistory,
    ) -> Move;

    /// Forgets anything adjusted during the previous match.
    fn reset(&mut self) {}
}

/// One side of an RPSLS match.
#[derive(Debug, Clone)]
pub struct Contestant<S> {
    name: String,
    score: u32,
    history: MoveHistory,
    source: S,
}

impl<S: MoveSource> Contestant<S> {
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Contestant {
            name: name.into(),
            score: 0,
            history: MoveHistory::new(),
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn reset(&mut self) {
        self.score = 0;
        self.history.clear();
        self.source.reset();
    }
}

/// Both moves of a round, read from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub player: Move,
    pub opponent: Move,
    pub resolution: Resolution,
}

impl Throw {
    pub fn new(player: Move, opponent: Move) -> Self {
        Throw {
            player,
            opponent,
            resolution: resolve(player, opponent),
        }
    }
}

impl RoundOutcome for Throw {
    fn winner(&self) -> Option<Side> {
        match self.resolution {
            Resolution::FirstWins => Some(Side::Player),
            Resolution::SecondWins => Some(Side::Opponent),
            Resolution::Tie => None,
        }
    }
}

pub trait RpslsEventHandler {
    fn on_round_begin(&mut self, _player_score: u32, _opponent_score: u32) {}
    fn on_moves_chosen(&mut self, _throw: &Throw) {}
}

/// Human (or any [`MoveSource`]) against a computer contestant.
pub struct RpslsGame<R, P, C, H> {
    rng: R,
    player: Contestant<P>,
    opponent: Contestant<C>,
    handler: H,
}

impl<R, P, C, H> RpslsGame<R, P, C, H>
where
    R: Rng,
    P: MoveSource,
    C: MoveSource,
    H: RpslsEventHandler,
{
    pub fn new(rng: R, player: Contestant<P>, opponent: Contestant<C>, handler: H) -> Self {
        RpslsGame {
            rng,
            player,
            opponent,
            handler,
        }
    }

    pub fn player(&self) -> &Contestant<P> {
        &self.player
    }

    pub fn opponent(&self) -> &Contestant<C> {
        &self.opponent
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<R, P, C, H> MatchGame for RpslsGame<R, P, C, H>
where
    R: Rng,
    P: MoveSource,
    C: MoveSource,
    H: RpslsEventHandler,
{
    type Outcome = Throw;

    fn play_round(&mut self) -> Result<Throw, GameError> {
        self.handler
            .on_round_begin(self.player.score, self.opponent.score);

        let player = &mut self.player;
        let opponent = &mut self.opponent;
        let player_move = player
            .source
            .choose_move(&mut self.rng, &player.history, &opponent.history);
        let opponent_move = opponent
            .source
            .choose_move(&mut self.rng, &opponent.history, &player.history);

        let throw = Throw::new(player_move, opponent_move);
        log::debug!(
            "{} plays {}, {} plays {}: {:?}",
            self.player.name,
            throw.player,
            self.opponent.name,
            throw.opponent,
            throw.resolution
        );
        self.handler.on_moves_chosen(&throw);
        Ok(throw)
    }

    fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player.score += 1,
            Side::Opponent => self.opponent.score += 1,
        }
    }

    fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player.score,
            Side::Opponent => self.opponent.score,
        }
    }

    fn finish_round(&mut self, throw: &Throw) {
        self.player
            .history
            .record(throw.player, RoundResult::from_resolution(throw.resolution));
        self.opponent.history.record(
            throw.opponent,
            RoundResult::from_resolution(resolve(throw.opponent, throw.player)),
        );
    }

    fn reset_match(&mut self) {
        self.player.reset();
        self.opponent.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_runner::{run_match, MatchEventHandler, MatchSummary};
    use crate::rpsls::opponent::{Computer, Personality};
    use crate::rpsls::RpslsRule;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Move>);

    impl MoveSource for Scripted {
        fn choose_move<R: Rng + ?Sized>(&mut self, _: &mut R, _: &MoveHistory, _: &MoveHistory) -> Move {
            self.0.pop_front().unwrap_or(Move::Rock)
        }
    }

    fn scripted(moves: &[Move]) -> Scripted {
        Scripted(moves.iter().copied().collect())
    }

    #[derive(Default)]
    struct Recorder {
        throws: Vec<Throw>,
    }

    impl RpslsEventHandler for Recorder {
        fn on_moves_chosen(&mut self, throw: &Throw) {
            self.throws.push(*throw);
        }
    }

    struct KeepPlaying;

    impl MatchEventHandler<Throw> for KeepPlaying {
        fn on_round_settled(&mut self, _: u32, _: &Throw, _: u32, _: u32) {}

        fn play_again(&mut self) -> bool {
            true
        }

        fn on_match_over(&mut self, _: &MatchSummary) {}
    }

    #[test]
    fn throw_winner_follows_dominance() {
        assert_eq!(Throw::new(Move::Rock, Move::Scissors).winner(), Some(Side::Player));
        assert_eq!(Throw::new(Move::Rock, Move::Spock).winner(), Some(Side::Opponent));
        assert_eq!(Throw::new(Move::Lizard, Move::Lizard).winner(), None);
    }

    #[test]
    fn scripted_match_records_both_histories() {
        let mut game = RpslsGame::new(
            StdRng::seed_from_u64(0),
            Contestant::new(
                "Ada",
                scripted(&[Move::Rock, Move::Paper, Move::Spock, Move::Rock]),
            ),
            Contestant::new(
                "Computer",
                scripted(&[Move::Scissors, Move::Paper, Move::Lizard, Move::Lizard]),
            ),
            Recorder::default(),
        );
        let summary = run_match(&mut game, 2, &mut KeepPlaying).unwrap();

        // Rock crushes scissors, paper ties, lizard poisons spock, rock crushes lizard.
        assert_eq!(summary.rounds_played, 4);
        assert_eq!(summary.player_score, 2);
        assert_eq!(summary.opponent_score, 1);
        assert_eq!(summary.grand_winner, Some(Side::Player));

        let player = game.player().history();
        assert_eq!(player.rounds_played(), 4);
        assert_eq!(player.wins_with(Move::Rock), 2);
        assert_eq!(player.win_percentage(Move::Rock), 50.0);
        let opponent = game.opponent().history();
        assert_eq!(opponent.wins_with(Move::Lizard), 1);
        assert_eq!(
            opponent.results(),
            &[
                RoundResult::Lost,
                RoundResult::Tie,
                RoundResult::Won,
                RoundResult::Lost
            ]
        );
        assert_eq!(game.handler().throws.len(), 4);
    }

    #[test]
    fn new_match_clears_scores_and_histories() {
        let rule = RpslsRule::default();
        let mut game = RpslsGame::new(
            StdRng::seed_from_u64(7),
            Contestant::new("Ada", scripted(&[Move::Scissors; 40])),
            Contestant::new(
                Personality::DeepThought.name(),
                Computer::new(Personality::DeepThought, &rule),
            ),
            Recorder::default(),
        );
        run_match(&mut game, rule.match_target, &mut KeepPlaying).unwrap();
        assert!(game.player().history().rounds_played() > 0);

        game.reset_match();
        assert_eq!(game.score(Side::Player), 0);
        assert_eq!(game.score(Side::Opponent), 0);
        assert_eq!(game.player().history().rounds_played(), 0);
        assert_eq!(game.opponent().history().rounds_played(), 0);
        assert_eq!(
            game.opponent().source().distribution(),
            &Personality::DeepThought.baseline()
        );
    }

    #[test]
    fn computer_matches_are_reproducible() {
        let rule = RpslsRule::default();
        let play = |seed: u64| {
            let mut game = RpslsGame::new(
                StdRng::seed_from_u64(seed),
                Contestant::new("Hal", Computer::new(Personality::Hal, &rule)),
                Contestant::new("Deep", Computer::new(Personality::DeepThought, &rule)),
                Recorder::default(),
            );
            let summary = run_match(&mut game, rule.match_target, &mut KeepPlaying).unwrap();
            (summary, game.handler().throws.clone())
        };
        let (summary, throws) = play(99);
        assert_eq!(play(99), (summary, throws));
        assert!(summary.grand_winner.is_some());
    }
}
