use rand::seq::SliceRandom;
use rand::Rng;

use crate::GameError;

use super::{Move, ALL_MOVES, NUMBER_OF_MOVES};

pub const TOTAL_WEIGHT: u32 = 100;

/// Integer weights over the five moves, summing to at most 100. A move with
/// weight `w` is picked with probability `w / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceDistribution {
    weights: [u32; NUMBER_OF_MOVES],
}

impl ChoiceDistribution {
    /// 20 on every move.
    pub fn uniform() -> Self {
        ChoiceDistribution {
            weights: [TOTAL_WEIGHT / NUMBER_OF_MOVES as u32; NUMBER_OF_MOVES],
        }
    }

    /// `weight` on `favorite`, the rest split evenly over the other moves.
    /// A weight above 100 is treated as 100.
    pub fn favoring(favorite: Move, weight: u32) -> Self {
        let weight = weight.min(TOTAL_WEIGHT);
        let others = (TOTAL_WEIGHT - weight) / (NUMBER_OF_MOVES as u32 - 1);
        let mut weights = [others; NUMBER_OF_MOVES];
        weights[favorite.index()] = weight;
        ChoiceDistribution { weights }
    }

    /// Weights in canonical move order. They must sum to between 1 and 100.
    pub fn from_weights(weights: [u32; NUMBER_OF_MOVES]) -> Result<Self, GameError> {
        let total: u32 = weights.iter().sum();
        if total == 0 || total > TOTAL_WEIGHT {
            return Err(GameError::InvalidDistribution { total });
        }
        Ok(ChoiceDistribution { weights })
    }

    pub fn weight(&self, mv: Move) -> u32 {
        self.weights[mv.index()]
    }

    pub fn weights(&self) -> &[u32; NUMBER_OF_MOVES] {
        &self.weights
    }

    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Moves weight away from `dominant` by `difference / 4` and hands
    /// `difference / 16` to each of the other moves, both truncated to whole
    /// weights. Each half is skipped on its own if it would take `dominant`
    /// below zero or the total above 100. Returns whether anything changed.
    pub fn shift_away_from(&mut self, dominant: Move, difference: f64) -> bool {
        if difference <= 0.0 {
            return false;
        }
        let other_moves = (NUMBER_OF_MOVES - 1) as f64;
        let subtracted = self.subtract_from(dominant, (difference / other_moves) as u32);
        let added = self.add_to_others(dominant, (difference / (other_moves * other_moves)) as u32);
        log::debug!(
            "shifted away from {} by {:.2}: {:?} (subtracted: {}, added: {})",
            dominant,
            difference,
            self.weights,
            subtracted,
            added
        );
        subtracted || added
    }

    fn subtract_from(&mut self, mv: Move, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        let weight = &mut self.weights[mv.index()];
        match weight.checked_sub(amount) {
            Some(rest) => {
                *weight = rest;
                true
            }
            None => {
                log::trace!("skip subtracting {} from {}: weight is {}", amount, mv, weight);
                false
            }
        }
    }

    fn add_to_others(&mut self, excluded: Move, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        let increase = amount * (NUMBER_OF_MOVES as u32 - 1);
        if self.total() + increase > TOTAL_WEIGHT {
            log::trace!(
                "skip adding {} to moves other than {}: total would be {}",
                amount,
                excluded,
                self.total() + increase
            );
            return false;
        }
        for mv in ALL_MOVES {
            if mv != excluded {
                self.weights[mv.index()] += amount;
            }
        }
        true
    }

    /// Every move repeated as many times as its weight, in canonical order.
    pub fn pool(&self) -> Vec<Move> {
        let mut pool = Vec::with_capacity(self.total() as usize);
        for mv in ALL_MOVES {
            for _ in 0..self.weight(mv) {
                pool.push(mv);
            }
        }
        pool
    }

    /// Draws uniformly from the pool. If every weight has dropped to zero,
    /// every move is equally likely.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match self.pool().choose(rng) {
            Some(mv) => *mv,
            None => ALL_MOVES[rng.gen_range(0..NUMBER_OF_MOVES)],
        }
    }
}

impl Default for ChoiceDistribution {
    fn default() -> Self {
        Self::uniform()
    }
}
