pub mod deck;
pub mod game;
pub mod hand;
pub mod strategy;

use crate::{match_runner::RoundOutcome, Decision, GameError, Rule, Side};
use parlor_macros::allowed_phase;
use rand::Rng;
use strum_macros::EnumIter;

use self::{deck::Deck, hand::Hand, strategy::Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Heart = 0,
    Diamond,
    Club,
    Spade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Face cards count 10, an ace counts 11 until the hand resolver downgrades it.
    pub fn base_value(&self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            numeral => *numeral as u32,
        }
    }
}

/// Represents a card in the real world with a suit and a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn base_value(&self) -> u32 {
        self.rank.base_value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = match self.suit {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Spade => "Spades",
        };
        match self.rank {
            Rank::Jack => write!(f, "Jack of {}", suit),
            Rank::Queen => write!(f, "Queen of {}", suit),
            Rank::King => write!(f, "King of {}", suit),
            Rank::Ace => write!(f, "Ace of {}", suit),
            numeral => write!(f, "{} of {}", numeral as u32, suit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// How a round of Twenty-One ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOutcome {
    PlayerBusted,
    DealerBusted,
    PlayerWins,
    DealerWins,
    Tie,
}

impl RoundOutcome for TableOutcome {
    fn winner(&self) -> Option<Side> {
        match self {
            TableOutcome::DealerBusted | TableOutcome::PlayerWins => Some(Side::Player),
            TableOutcome::PlayerBusted | TableOutcome::DealerWins => Some(Side::Opponent),
            TableOutcome::Tie => None,
        }
    }
}

/// One seat at the table: the cards held this round and the rounds won this match.
#[derive(Debug, Clone, Default)]
pub struct Participant {
    hand: Hand,
    score: u32,
}

impl Participant {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn busted(&self, rule: &Rule) -> bool {
        self.hand.busted_with_limit(rule.winning_value)
    }

    pub fn total(&self, rule: &Rule) -> u32 {
        self.hand.total_with_limit(rule.winning_value)
    }
}

/// A Twenty-One table with one player and the dealer. The player always acts
/// first; the dealer only plays if the player stood without busting.
pub struct Table {
    rule: Rule,

    // Round state
    current_game_phase: GamePhase,
    deck: Deck,
    outcome: Option<TableOutcome>,

    player: Participant,
    dealer: Participant,
}

impl Table {
    pub fn new(rule: &Rule) -> Self {
        Self {
            rule: *rule,
            current_game_phase: GamePhase::Dealing,
            deck: Deck::new(),
            outcome: None,
            player: Participant::default(),
            dealer: Participant::default(),
        }
    }

    /// Clears both hands, rebuilds a full deck and goes back to the Dealing phase.
    /// Scores are kept. Can be called in any phase.
    pub fn new_round(&mut self) {
        self.deck.reset();
        self.player.hand.clear();
        self.dealer.hand.clear();
        self.outcome = None;
        self.current_game_phase = GamePhase::Dealing;
    }

    /// Zeroes both scores and starts a fresh round.
    pub fn new_match(&mut self) {
        self.player.score = 0;
        self.dealer.score = 0;
        self.new_round();
    }

    /// Can be called at Dealing phase.
    /// Makes the given cards come off the deck first, in order.
    #[allowed_phase(Dealing)]
    pub fn stack_deck(&mut self, firsts: &[Card]) -> Result<(), GameError> {
        self.deck.stack(firsts)
    }

    /// Can be called at Dealing phase.
    /// Deals two cards each, alternating player then dealer. The dealer's first
    /// card is the hole card. Under a low enough limit two cards can already
    /// bust; the round is then settled at once, the player's bust first.
    #[allowed_phase(Dealing)]
    pub fn deal_initial_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.deck.deal(rng)?;
            self.player.hand.receive_card(card);
            let card = self.deck.deal(rng)?;
            self.dealer.hand.receive_card(card);
        }
        log::debug!(
            "dealt player {:?}, dealer {:?}",
            self.player.hand.cards(),
            self.dealer.hand.cards()
        );

        if self.player.busted(&self.rule) {
            self.settle(TableOutcome::PlayerBusted);
        } else if self.dealer.busted(&self.rule) {
            self.settle(TableOutcome::DealerBusted);
        } else {
            self.current_game_phase = GamePhase::PlayerTurn;
        }
        Ok(())
    }

    /// Can be called at PlayerTurn phase.
    /// Returns the card drawn. If it busts the player the round is settled.
    #[allowed_phase(PlayerTurn)]
    pub fn play_hit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, GameError> {
        let card = self.deck.deal(rng)?;
        self.player.hand.receive_card(card);
        if self.player.busted(&self.rule) {
            self.settle(TableOutcome::PlayerBusted);
        }
        Ok(card)
    }

    /// Can be called at PlayerTurn phase.
    #[allowed_phase(PlayerTurn)]
    pub fn play_stand(&mut self) -> Result<(), GameError> {
        self.current_game_phase = GamePhase::DealerTurn;
        Ok(())
    }

    /// Can be called at DealerTurn phase.
    /// Draws one card for the dealer if the dealer total is below the stand
    /// threshold and returns it. Returns None once the dealer stands, in which
    /// case the round is settled by comparing totals.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_play_step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Card>, GameError> {
        if self.dealer.total(&self.rule) < self.rule.dealer_stand_threshold {
            let card = self.deck.deal(rng)?;
            self.dealer.hand.receive_card(card);
            log::debug!("dealer hits and draws {}", card);
            if self.dealer.busted(&self.rule) {
                self.settle(TableOutcome::DealerBusted);
            }
            return Ok(Some(card));
        }

        let player_total = self.player.total(&self.rule);
        let dealer_total = self.dealer.total(&self.rule);
        let outcome = if player_total > dealer_total {
            TableOutcome::PlayerWins
        } else if dealer_total > player_total {
            TableOutcome::DealerWins
        } else {
            TableOutcome::Tie
        };
        self.settle(outcome);
        Ok(None)
    }

    /// Can be called at DealerTurn phase.
    /// Lets the dealer draw until standing or busting.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_plays<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TableOutcome, GameError> {
        while self.current_game_phase == GamePhase::DealerTurn {
            self.dealer_play_step(rng)?;
        }
        self.settled_outcome("dealer_plays")
    }

    /// Plays a whole round from the Dealing phase, asking the strategy for every
    /// player decision and reporting each event to the handler.
    #[allowed_phase(Dealing)]
    pub fn automatic_play_round<R, S, H>(
        &mut self,
        rng: &mut R,
        strategy: &mut S,
        handler: &mut H,
    ) -> Result<TableOutcome, GameError>
    where
        R: Rng + ?Sized,
        S: Strategy,
        H: TableEventHandler,
    {
        self.deal_initial_cards(rng)?;
        handler.on_deal_cards(&self.player.hand, self.dealer_visible_cards());
        if self.outcome == Some(TableOutcome::PlayerBusted) {
            handler.on_player_bust(&self.player.hand);
        }

        while self.current_game_phase == GamePhase::PlayerTurn {
            let decision =
                strategy.make_decision(&self.rule, &self.player.hand, self.dealer_visible_cards());
            handler.on_make_decision(decision);
            match decision {
                Decision::Hit => {
                    let card = self.play_hit(rng)?;
                    handler.on_player_card(card, &self.player.hand);
                    if self.current_game_phase == GamePhase::Settled {
                        handler.on_player_bust(&self.player.hand);
                    }
                }
                Decision::Stand => self.play_stand()?,
            }
        }

        if self.current_game_phase == GamePhase::DealerTurn {
            handler.on_dealer_turn(&self.dealer.hand);
            while self.current_game_phase == GamePhase::DealerTurn {
                if let Some(card) = self.dealer_play_step(rng)? {
                    handler.on_dealer_card(card, &self.dealer.hand);
                }
            }
        }

        let outcome = self.settled_outcome("automatic_play_round")?;
        handler.on_summary_round(&self.player.hand, &self.dealer.hand, outcome);
        Ok(outcome)
    }

    /// Gives a round win to the given side.
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player.score += 1,
            Side::Opponent => self.dealer.score += 1,
        }
    }

    pub fn get_phase(&self) -> GamePhase {
        self.current_game_phase
    }

    pub fn get_outcome(&self) -> Option<TableOutcome> {
        self.outcome
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// The dealer's cards as the player sees them: everything but the hole card
    /// until the round is settled.
    pub fn dealer_visible_cards(&self) -> &[Card] {
        let cards = self.dealer.hand.cards();
        if self.current_game_phase == GamePhase::Settled || cards.is_empty() {
            cards
        } else {
            &cards[1..]
        }
    }

    pub fn get_number_of_cards_in_deck(&self) -> usize {
        self.deck.len()
    }

    fn settle(&mut self, outcome: TableOutcome) {
        log::info!(
            "round settled: {:?} (player {}, dealer {})",
            outcome,
            self.player.total(&self.rule),
            self.dealer.total(&self.rule)
        );
        self.outcome = Some(outcome);
        self.current_game_phase = GamePhase::Settled;
    }

    fn settled_outcome(&self, operation: &'static str) -> Result<TableOutcome, GameError> {
        self.outcome.ok_or(GameError::WrongPhase {
            operation,
            expected: GamePhase::Settled,
            actual: self.current_game_phase,
        })
    }
}

/// Receives everything that happens at the table, for display.
pub trait TableEventHandler {
    fn on_round_begin(&mut self, _player_score: u32, _dealer_score: u32) {}
    fn on_deal_cards(&mut self, _player_hand: &Hand, _dealer_visible: &[Card]) {}
    fn on_make_decision(&mut self, _decision: Decision) {}
    fn on_player_card(&mut self, _card: Card, _player_hand: &Hand) {}
    fn on_player_bust(&mut self, _player_hand: &Hand) {}
    fn on_dealer_turn(&mut self, _dealer_hand: &Hand) {}
    fn on_dealer_card(&mut self, _card: Card, _dealer_hand: &Hand) {}
    fn on_summary_round(&mut self, _player_hand: &Hand, _dealer_hand: &Hand, _outcome: TableOutcome) {}
}
