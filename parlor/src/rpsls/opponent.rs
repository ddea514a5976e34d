use rand::Rng;
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

use super::{
    distribution::ChoiceDistribution, game::MoveSource, history::MoveHistory, Move, RpslsRule,
};

/// The computer characters a human can play against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Personality {
    /// Plays every move equally often.
    Uniform,
    /// Favours scissors.
    Hal,
    /// Favours rock.
    R2d2,
    /// Counters the human's most successful move.
    DeepThought,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Uniform,
        Personality::Hal,
        Personality::R2d2,
        Personality::DeepThought,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Personality::Uniform => "Computer",
            Personality::Hal => "HAL 9000",
            Personality::R2d2 => "R2D2",
            Personality::DeepThought => "Deep Thought",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Personality::Uniform => "The computer has no favourites.",
            Personality::Hal => "HAL likes scissors like a psycho!",
            Personality::R2d2 => "R2D2 has an affinity for the rocks of Tatooine.",
            Personality::DeepThought => "Deep Thought analyses and chooses smartly.",
        }
    }

    /// The distribution this character starts every match with.
    pub fn baseline(&self) -> ChoiceDistribution {
        match self {
            Personality::Uniform | Personality::DeepThought => ChoiceDistribution::uniform(),
            Personality::Hal => ChoiceDistribution::favoring(Move::Scissors, 60),
            Personality::R2d2 => ChoiceDistribution::favoring(Move::Rock, 60),
        }
    }

    pub fn is_adaptive(&self) -> bool {
        *self == Personality::DeepThought
    }
}

/// A computer contestant's move chooser.
#[derive(Debug, Clone)]
pub struct Computer {
    personality: Personality,
    baseline: ChoiceDistribution,
    /// Drifts away from `baseline` over a match when adaptive.
    distribution: ChoiceDistribution,
    win_percentage_threshold: f64,
    data_headstart: usize,
}

impl Computer {
    pub fn new(personality: Personality, rule: &RpslsRule) -> Self {
        Self::with_distribution(personality, personality.baseline(), rule)
    }

    /// Uses `baseline` instead of the personality's own starting weights.
    pub fn with_distribution(
        personality: Personality,
        baseline: ChoiceDistribution,
        rule: &RpslsRule,
    ) -> Self {
        Computer {
            personality,
            baseline,
            distribution: baseline,
            win_percentage_threshold: rule.win_percentage_threshold,
            data_headstart: rule.data_headstart,
        }
    }

    pub fn name(&self) -> &'static str {
        self.personality.name()
    }

    pub fn distribution(&self) -> &ChoiceDistribution {
        &self.distribution
    }

    /// Adaptive play only starts after the headstart rounds, and only against
    /// a move that has won at least the threshold percentage of rounds.
    pub fn threshold_condition_met(
        &self,
        own: &MoveHistory,
        opponent: &MoveHistory,
        opponent_dominant_move: Move,
    ) -> bool {
        own.rounds_played() > self.data_headstart
            && opponent.win_percentage(opponent_dominant_move) >= self.win_percentage_threshold
    }

    fn choose_based_on<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        own: &MoveHistory,
        opponent: &MoveHistory,
        opponent_dominant_move: Move,
    ) -> Move {
        let difference = opponent.win_percentage(opponent_dominant_move)
            - own.win_percentage(opponent_dominant_move);
        self.distribution
            .shift_away_from(opponent_dominant_move, difference);
        self.distribution.choose(rng)
    }
}

impl MoveSource for Computer {
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        own: &MoveHistory,
        opponent: &MoveHistory,
    ) -> Move {
        if !self.personality.is_adaptive() {
            return self.distribution.choose(rng);
        }

        let opponent_dominant_move = opponent.dominant_move();
        if self.threshold_condition_met(own, opponent, opponent_dominant_move) {
            log::info!(
                "{} is choosing smartly against {}",
                self.name(),
                opponent_dominant_move
            );
            self.choose_based_on(rng, own, opponent, opponent_dominant_move)
        } else {
            self.baseline.choose(rng)
        }
    }

    fn reset(&mut self) {
        self.distribution = self.baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpsls::history::RoundResult;
    use rand::{rngs::StdRng, SeedableRng};

    fn scissors_heavy_history() -> (MoveHistory, MoveHistory) {
        let mut human = MoveHistory::new();
        let mut computer = MoveHistory::new();
        let rounds = [
            (Move::Scissors, Move::Paper),
            (Move::Scissors, Move::Lizard),
            (Move::Rock, Move::Paper),
            (Move::Scissors, Move::Paper),
            (Move::Scissors, Move::Rock),
            (Move::Spock, Move::Spock),
        ];
        for (h, c) in rounds {
            let resolution = crate::rpsls::resolve(h, c);
            human.record(h, RoundResult::from_resolution(resolution));
            computer.record(c, RoundResult::from_resolution(crate::rpsls::resolve(c, h)));
        }
        (human, computer)
    }

    #[test]
    fn personalities_parse_from_names() {
        assert_eq!("Hal".parse::<Personality>().unwrap(), Personality::Hal);
        assert_eq!(
            "DeepThought".parse::<Personality>().unwrap(),
            Personality::DeepThought
        );
        assert!("Marvin".parse::<Personality>().is_err());
        assert_eq!(Personality::R2d2.baseline().weight(Move::Rock), 60);
        assert_eq!(Personality::Hal.baseline().weight(Move::Scissors), 60);
    }

    #[test]
    fn adaptive_engages_against_dominant_scissors() {
        let rule = RpslsRule::default();
        let (human, computer_history) = scissors_heavy_history();
        assert_eq!(human.rounds_played(), 6);
        assert_eq!(human.wins_with(Move::Scissors), 3);
        assert_eq!(human.dominant_move(), Move::Scissors);

        let mut deep_thought = Computer::new(Personality::DeepThought, &rule);
        assert!(deep_thought.threshold_condition_met(&computer_history, &human, Move::Scissors));

        let mut rng = StdRng::seed_from_u64(17);
        deep_thought.choose_move(&mut rng, &computer_history, &human);
        let weights = deep_thought.distribution();
        // Human 50% with scissors, computer 0%: 12 off scissors, 3 onto the rest.
        assert_eq!(weights.weight(Move::Scissors), 8);
        for mv in [Move::Rock, Move::Paper, Move::Lizard, Move::Spock] {
            assert_eq!(weights.weight(mv), 23);
        }
        assert!(weights.total() <= 100);
    }

    #[test]
    fn adaptive_waits_for_headstart() {
        let rule = RpslsRule::default();
        let mut human = MoveHistory::new();
        let mut own = MoveHistory::new();
        for _ in 0..3 {
            human.record(Move::Rock, RoundResult::Won);
            own.record(Move::Scissors, RoundResult::Lost);
        }
        let mut deep_thought = Computer::new(Personality::DeepThought, &rule);
        assert!(!deep_thought.threshold_condition_met(&own, &human, Move::Rock));

        let mut rng = StdRng::seed_from_u64(5);
        deep_thought.choose_move(&mut rng, &own, &human);
        assert_eq!(deep_thought.distribution(), &ChoiceDistribution::uniform());

        human.record(Move::Rock, RoundResult::Won);
        own.record(Move::Scissors, RoundResult::Lost);
        assert!(deep_thought.threshold_condition_met(&own, &human, Move::Rock));
    }

    #[test]
    fn adaptive_ignores_weak_dominant_move() {
        let rule = RpslsRule::default();
        let mut human = MoveHistory::new();
        let mut own = MoveHistory::new();
        human.record(Move::Paper, RoundResult::Won);
        for _ in 0..9 {
            human.record(Move::Paper, RoundResult::Tie);
            own.record(Move::Paper, RoundResult::Tie);
        }
        own.record(Move::Rock, RoundResult::Lost);
        let deep_thought = Computer::new(Personality::DeepThought, &rule);
        // 1 win in 10 rounds is 10%, under the 20% threshold.
        assert!(!deep_thought.threshold_condition_met(&own, &human, Move::Paper));
    }

    #[test]
    fn drift_persists_until_reset() {
        let rule = RpslsRule::default();
        let (human, computer_history) = scissors_heavy_history();
        let mut deep_thought = Computer::new(Personality::DeepThought, &rule);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            deep_thought.choose_move(&mut rng, &computer_history, &human);
            assert!(deep_thought.distribution().total() <= 100);
        }
        assert!(deep_thought.distribution().weight(Move::Scissors) < 20);
        deep_thought.reset();
        assert_eq!(deep_thought.distribution(), &ChoiceDistribution::uniform());
    }

    #[test]
    fn fixed_personalities_never_adapt() {
        let rule = RpslsRule::default();
        let (human, computer_history) = scissors_heavy_history();
        let mut hal = Computer::new(Personality::Hal, &rule);
        let mut rng = StdRng::seed_from_u64(8);
        let mut scissors = 0;
        for _ in 0..200 {
            if hal.choose_move(&mut rng, &computer_history, &human) == Move::Scissors {
                scissors += 1;
            }
        }
        assert_eq!(hal.distribution(), &Personality::Hal.baseline());
        assert!(scissors > 80, "HAL picked scissors only {} times", scissors);
    }
}
