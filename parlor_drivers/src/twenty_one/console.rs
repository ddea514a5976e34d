use parlor::twenty_one::{hand::Hand, strategy::Strategy, Card, TableEventHandler, TableOutcome};
use parlor::{Decision, MatchEventHandler, MatchSummary, Rule, Side};
use parlor_drivers::{ask, parse_decision, parse_yes_no};

/// Asks the human at the terminal for every decision.
pub struct ConsoleStrategy;

impl Strategy for ConsoleStrategy {
    fn make_decision(&mut self, _: &Rule, _: &Hand, _: &[Card]) -> Decision {
        ask(
            "Do you want to hit ('h') or stay ('s')?",
            "Invalid answer. Please enter 'h' for hit or 's' for stay.",
            parse_decision,
        )
        .unwrap_or_else(|| {
            log::warn!("input closed, standing");
            Decision::Stand
        })
    }
}

fn list_cards(cards: &[Card]) -> String {
    match cards.split_last() {
        None => String::from("nothing"),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let rest: Vec<String> = rest.iter().map(Card::to_string).collect();
            format!("{} and {}", rest.join(", "), last)
        }
    }
}

/// Prints the table to stdout.
pub struct ConsoleTable {
    rule: Rule,
    /// Whether to ask before every round after the first.
    interactive: bool,
}

impl ConsoleTable {
    pub fn new(rule: &Rule, interactive: bool) -> Self {
        ConsoleTable {
            rule: *rule,
            interactive,
        }
    }

    fn show_player(&self, hand: &Hand) {
        println!("You have: {}", list_cards(hand.cards()));
        println!("Your total is: {}.", hand.total_with_limit(self.rule.winning_value));
    }

    fn show_dealer(&self, hand: &Hand) {
        println!("The dealer has: {}", list_cards(hand.cards()));
        println!(
            "The dealer's total is: {}.",
            hand.total_with_limit(self.rule.winning_value)
        );
    }

    pub fn welcome(&self) {
        println!("Welcome to Twenty-One!");
        println!();
        println!(
            "Get as close as you can to {} without busting to win!",
            self.rule.winning_value
        );
        println!("First to {} rounds is the grand winner.", self.rule.match_target);
        println!();
    }

    pub fn goodbye(&self) {
        println!("Thanks for playing Twenty-One! Goodbye!");
    }
}

impl TableEventHandler for ConsoleTable {
    fn on_round_begin(&mut self, player_score: u32, dealer_score: u32) {
        println!();
        println!(" You: {} | Dealer: {}", player_score, dealer_score);
        println!();
    }

    fn on_deal_cards(&mut self, player_hand: &Hand, dealer_visible: &[Card]) {
        println!(
            "The dealer has: {} and an unknown card",
            list_cards(dealer_visible)
        );
        self.show_player(player_hand);
    }

    fn on_make_decision(&mut self, decision: Decision) {
        if decision == Decision::Stand {
            println!("You chose to stay.");
        }
    }

    fn on_player_card(&mut self, card: Card, player_hand: &Hand) {
        println!("You drew the {}.", card);
        self.show_player(player_hand);
    }

    fn on_dealer_turn(&mut self, dealer_hand: &Hand) {
        println!();
        self.show_dealer(dealer_hand);
    }

    fn on_dealer_card(&mut self, card: Card, dealer_hand: &Hand) {
        println!("The dealer chose to hit and drew the {}.", card);
        self.show_dealer(dealer_hand);
    }

    fn on_summary_round(&mut self, player_hand: &Hand, dealer_hand: &Hand, outcome: TableOutcome) {
        println!();
        self.show_player(player_hand);
        self.show_dealer(dealer_hand);
        println!();
        let message = match outcome {
            TableOutcome::PlayerBusted => "You busted! The dealer won!",
            TableOutcome::DealerBusted => "The dealer busted! You won!",
            TableOutcome::PlayerWins => "You won!",
            TableOutcome::DealerWins => "The dealer won!",
            TableOutcome::Tie => "It's a tie!",
        };
        println!("{}", message);
    }
}

impl MatchEventHandler<TableOutcome> for ConsoleTable {
    fn on_round_settled(&mut self, round: u32, _: &TableOutcome, player_score: u32, dealer_score: u32) {
        log::debug!("round {} done, {}:{}", round, player_score, dealer_score);
    }

    fn play_again(&mut self) -> bool {
        if !self.interactive {
            return true;
        }
        ask(
            "Do you want to play again? (y/n)",
            "Invalid answer.  Please enter 'y' or 'n'.",
            parse_yes_no,
        )
        .unwrap_or(false)
    }

    fn on_match_over(&mut self, summary: &MatchSummary) {
        println!();
        println!(
            " You: {} | Dealer: {}",
            summary.player_score, summary.opponent_score
        );
        match summary.grand_winner {
            Some(Side::Player) => println!("You are the grand winner!"),
            Some(Side::Opponent) => println!("The dealer is the grand winner!"),
            None => println!("Nobody reached {} rounds.", self.rule.match_target),
        }
    }
}
