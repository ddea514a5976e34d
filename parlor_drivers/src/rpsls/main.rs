mod console;

use anyhow::Context;
use clap::Parser;
use parlor::rpsls::{
    game::{Contestant, RpslsGame},
    opponent::{Computer, Personality},
    RpslsRule,
};
use parlor::run_match;
use parlor_drivers::{init_logging, load_config, make_rng, DEFAULT_CONFIG_PATH};

use console::{ConsolePlayer, ConsoleReferee};

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Seed for reproducible computer moves
    #[arg(short, long)]
    seed: Option<u64>,

    /// Computer personality (Uniform, Hal, R2d2 or DeepThought), overriding the config
    #[arg(short, long)]
    opponent: Option<String>,

    /// Your name on the scoreboard
    #[arg(short, long, default_value_t = String::from("Player"))]
    name: String,

    /// Log opponent internals
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();
    init_logging(args.verbose);

    let mut config = load_config(&args.config)?;
    log::debug!("{:#?}", config);
    if let Some(opponent) = args.opponent {
        config.rpsls.opponent = opponent;
    }
    let personality: Personality = config.rpsls.personality().with_context(|| {
        let known: Vec<String> = Personality::ALL.iter().map(|p| format!("{:?}", p)).collect();
        format!(
            "unknown opponent {}, expected one of {}",
            config.rpsls.opponent,
            known.join(", ")
        )
    })?;
    let baseline = config.rpsls.baseline()?;
    let rule: RpslsRule = config.rpsls.try_into()?;

    let computer = match baseline {
        Some(baseline) => Computer::with_distribution(personality, baseline, &rule),
        None => Computer::new(personality, &rule),
    };
    let mut referee = ConsoleReferee::new(&args.name, personality.name(), rule.match_target);
    referee.welcome(personality.description());

    let mut game = RpslsGame::new(
        make_rng(args.seed),
        Contestant::new(args.name.as_str(), ConsolePlayer),
        Contestant::new(personality.name(), computer),
        ConsoleReferee::new(&args.name, personality.name(), rule.match_target),
    );
    let summary = run_match(&mut game, rule.match_target, &mut referee)?;
    log::info!("{:?}", summary);

    referee.goodbye();
    Ok(())
}
