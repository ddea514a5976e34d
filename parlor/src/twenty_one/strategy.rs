use crate::{Decision, Rule};

use super::{hand::Hand, Card};

/// Decides hit or stand for the player. Implemented by the console front end
/// for a human, and by `ThresholdStrategy` for simulated play.
pub trait Strategy {
    fn make_decision(&mut self, rule: &Rule, current_hand: &Hand, dealer_visible: &[Card]) -> Decision;
}

/// Hits while the hand total is below `stand_at`, the same way the dealer plays.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdStrategy {
    stand_at: u32,
}

impl ThresholdStrategy {
    pub fn new(stand_at: u32) -> Self {
        ThresholdStrategy { stand_at }
    }

    pub fn like_dealer(rule: &Rule) -> Self {
        Self::new(rule.dealer_stand_threshold)
    }
}

impl Strategy for ThresholdStrategy {
    fn make_decision(&mut self, rule: &Rule, current_hand: &Hand, _: &[Card]) -> Decision {
        if current_hand.total_with_limit(rule.winning_value) < self.stand_at {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::twenty_one::{Rank, Suit};

    use super::*;

    #[test]
    fn hits_below_threshold_only() {
        let rule = Rule::default();
        let mut strategy = ThresholdStrategy::like_dealer(&rule);
        let sixteen: Hand = [Rank::Ten, Rank::Six]
            .into_iter()
            .map(|rank| Card::new(rank, Suit::Heart))
            .collect();
        let soft_seventeen: Hand = [Rank::Ace, Rank::Six]
            .into_iter()
            .map(|rank| Card::new(rank, Suit::Heart))
            .collect();
        assert_eq!(strategy.make_decision(&rule, &sixteen, &[]), Decision::Hit);
        assert_eq!(
            strategy.make_decision(&rule, &soft_seventeen, &[]),
            Decision::Stand
        );
    }
}
