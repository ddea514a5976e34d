use parlor::rpsls::{
    game::{MoveSource, RpslsEventHandler, Throw},
    history::MoveHistory,
    Move, Resolution, ALL_MOVES,
};
use parlor::{MatchEventHandler, MatchSummary, Side};
use parlor_drivers::{ask, parse_yes_no};
use rand::Rng;

fn parse_move(answer: &str) -> Option<Move> {
    answer.trim().parse().ok()
}

/// Reads the human's moves from the terminal.
pub struct ConsolePlayer;

impl MoveSource for ConsolePlayer {
    fn choose_move<R: Rng + ?Sized>(&mut self, rng: &mut R, _: &MoveHistory, _: &MoveHistory) -> Move {
        let names: Vec<String> = ALL_MOVES.iter().map(Move::to_string).collect();
        ask(
            &format!(
                "=> Choose one: {}\n=> Shortened: r, p, x, l, s",
                names.join(", ")
            ),
            "=> That's not a valid choice.",
            parse_move,
        )
        .unwrap_or_else(|| {
            let mv = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
            log::warn!("input closed, playing {}", mv);
            mv
        })
    }
}

/// Prints rounds and asks whether to continue.
pub struct ConsoleReferee {
    player_name: String,
    opponent_name: String,
    match_target: u32,
}

impl ConsoleReferee {
    pub fn new(player_name: &str, opponent_name: &str, match_target: u32) -> Self {
        ConsoleReferee {
            player_name: String::from(player_name),
            opponent_name: String::from(opponent_name),
            match_target,
        }
    }

    pub fn welcome(&self, opponent_description: &str) {
        println!("Welcome to Rock, Paper, Scissors, Lizard, Spock!");
        println!(
            "First to reach {} wins is the grand winner.",
            self.match_target
        );
        println!("Today you play against {}. {}", self.opponent_name, opponent_description);
    }

    pub fn goodbye(&self) {
        println!("=> Thank you for playing. Goodbye!");
    }

    fn scores(&self, player_score: u32, opponent_score: u32) {
        println!(
            "{}: {} | {}: {}",
            self.player_name, player_score, self.opponent_name, opponent_score
        );
    }
}

impl RpslsEventHandler for ConsoleReferee {
    fn on_round_begin(&mut self, player_score: u32, opponent_score: u32) {
        println!();
        self.scores(player_score, opponent_score);
    }

    fn on_moves_chosen(&mut self, throw: &Throw) {
        println!(
            "{} chose: {}; {} chose: {}",
            self.player_name, throw.player, self.opponent_name, throw.opponent
        );
        match throw.resolution {
            Resolution::FirstWins => println!("=> {} won!", self.player_name),
            Resolution::SecondWins => println!("=> {} won!", self.opponent_name),
            Resolution::Tie => println!("=> It's a tie!"),
        }
    }
}

impl MatchEventHandler<Throw> for ConsoleReferee {
    fn on_round_settled(&mut self, round: u32, _: &Throw, player_score: u32, opponent_score: u32) {
        log::debug!("round {} done, {}:{}", round, player_score, opponent_score);
    }

    fn play_again(&mut self) -> bool {
        ask(
            "=> Do you want to play another round? (y/n)",
            "=> Invalid answer.  Please enter 'y' or 'n'.",
            parse_yes_no,
        )
        .unwrap_or(false)
    }

    fn on_match_over(&mut self, summary: &MatchSummary) {
        println!();
        self.scores(summary.player_score, summary.opponent_score);
        match summary.grand_winner {
            Some(Side::Player) => println!("=> {} is the Grand Winner!", self.player_name),
            Some(Side::Opponent) => println!("=> {} is the Grand Winner!", self.opponent_name),
            None => println!("=> Nobody reached {} wins.", self.match_target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_with_whitespace() {
        assert_eq!(parse_move("Rock\n"), Some(Move::Rock));
        assert_eq!(parse_move(" x "), Some(Move::Scissors));
        assert_eq!(parse_move("l\r\n"), Some(Move::Lizard));
        assert_eq!(parse_move("stone"), None);
    }
}
