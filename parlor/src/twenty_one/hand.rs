use crate::DEFAULT_WINNING_VALUE;

use super::Card;

/// Represents the cards one participant holds in the current round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Total under standard rules, see `total_with_limit`.
    pub fn total(&self) -> u32 {
        self.total_with_limit(DEFAULT_WINNING_VALUE)
    }

    /// Sums base values (aces as 11), then while the sum is above `limit`
    /// counts one more ace as 1 instead, until the sum fits or no ace is left.
    pub fn total_with_limit(&self, limit: u32) -> u32 {
        let mut total: u32 = self.cards.iter().map(Card::base_value).sum();
        let mut soft_aces = self.cards.iter().filter(|c| c.is_ace()).count();
        while total > limit && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total
    }

    pub fn busted(&self) -> bool {
        self.total() > DEFAULT_WINNING_VALUE
    }

    pub fn busted_with_limit(&self, limit: u32) -> bool {
        self.total_with_limit(limit) > limit
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}
