use crate::GameError;

/// The two seats of every game here: the human and the computer or dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Anything a round can end with. `None` means nobody scores.
pub trait RoundOutcome {
    fn winner(&self) -> Option<Side>;
}

/// A game that can be played round after round and keeps both scores.
pub trait MatchGame {
    type Outcome: RoundOutcome;

    /// Plays one round to completion.
    fn play_round(&mut self) -> Result<Self::Outcome, GameError>;

    /// Adds one round win to the given side.
    fn award(&mut self, side: Side);

    fn score(&self, side: Side) -> u32;

    /// Called after scores are updated, before the next round is played.
    fn finish_round(&mut self, _outcome: &Self::Outcome) {}

    /// Zeroes scores and forgets anything learned during a previous match.
    fn reset_match(&mut self);
}

/// Receives match progress and decides whether to keep playing.
pub trait MatchEventHandler<O> {
    fn on_round_settled(&mut self, round: u32, outcome: &O, player_score: u32, opponent_score: u32);

    /// Asked after every round that did not end the match.
    fn play_again(&mut self) -> bool;

    fn on_match_over(&mut self, summary: &MatchSummary);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub rounds_played: u32,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Set when a side reached the target; None if the match was abandoned.
    pub grand_winner: Option<Side>,
}

/// Plays rounds until one side has `target` wins or the handler declines
/// another round.
pub fn run_match<G, H>(game: &mut G, target: u32, handler: &mut H) -> Result<MatchSummary, GameError>
where
    G: MatchGame,
    H: MatchEventHandler<G::Outcome>,
{
    game.reset_match();
    let mut rounds_played = 0;

    let grand_winner = loop {
        let outcome = game.play_round()?;
        rounds_played += 1;
        if let Some(side) = outcome.winner() {
            game.award(side);
        }
        game.finish_round(&outcome);

        let player_score = game.score(Side::Player);
        let opponent_score = game.score(Side::Opponent);
        handler.on_round_settled(rounds_played, &outcome, player_score, opponent_score);

        if player_score >= target {
            break Some(Side::Player);
        }
        if opponent_score >= target {
            break Some(Side::Opponent);
        }
        if !handler.play_again() {
            break None;
        }
    };

    let summary = MatchSummary {
        rounds_played,
        player_score: game.score(Side::Player),
        opponent_score: game.score(Side::Opponent),
        grand_winner,
    };
    log::info!("match over after {} rounds: {:?}", rounds_played, summary);
    handler.on_match_over(&summary);
    Ok(summary)
}
