use std::collections::VecDeque;

use crate::GameError;

use super::{Card, Rank, Suit};

use strum::IntoEnumIterator;

use rand::Rng;

pub const CARDS_PER_DECK: usize = 52;

/// Represents a single 52-card deck. Dealt cards leave the deck for good until
/// `reset` rebuilds it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    /// Cards pulled out of `cards` to be dealt first, front to back.
    stacked: VecDeque<Card>,
}

impl Deck {
    /// Creates a full deck.
    pub fn new() -> Deck {
        Deck {
            cards: build(),
            stacked: VecDeque::new(),
        }
    }

    /// Discards what is left and rebuilds a full deck.
    pub fn reset(&mut self) {
        self.cards = build();
        self.stacked.clear();
    }

    /// Makes sure the given cards are the next ones dealt, in the given order.
    /// Everything after them is still drawn at random. Fails without changing
    /// the deck if any of the cards is no longer available.
    pub fn stack(&mut self, firsts: &[Card]) -> Result<(), GameError> {
        let mut remaining = self.cards.clone();
        for card in firsts {
            let position = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(GameError::CardUnavailable(*card))?;
            remaining.swap_remove(position);
        }
        self.cards = remaining;
        self.stacked.extend(firsts.iter().copied());
        Ok(())
    }

    /// Deals a uniformly random card among those left. Stacked cards come first.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, GameError> {
        if let Some(card) = self.stacked.pop_front() {
            return Ok(card);
        }
        if self.cards.is_empty() {
            return Err(GameError::DeckExhausted);
        }
        let index = rng.gen_range(0..self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.cards.len() + self.stacked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card) || self.stacked.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn build() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK);
    for suit in Suit::iter() {
        for rank in Rank::iter() {
            cards.push(Card { rank, suit });
        }
    }
    cards
}
