mod console;

use clap::Parser;
use parlor::twenty_one::{game::TwentyOneGame, strategy::ThresholdStrategy};
use parlor::{run_match, Rule};
use parlor_drivers::{init_logging, load_config, make_rng, DEFAULT_CONFIG_PATH};

use console::{ConsoleStrategy, ConsoleTable};

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Seed for a reproducible deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Let a threshold strategy play instead of asking for decisions
    #[arg(short, long)]
    auto: bool,

    /// Log table internals
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLineArgs::parse();
    init_logging(args.verbose);

    let config = load_config(&args.config)?;
    log::debug!("{:#?}", config);
    let auto_stand_at = config.twenty_one.auto_stand_at;
    let rule: Rule = config.twenty_one.try_into()?;
    let rng = make_rng(args.seed);

    let mut table = ConsoleTable::new(&rule, !args.auto);
    table.welcome();

    let summary = if args.auto {
        let mut game = TwentyOneGame::new(
            &rule,
            rng,
            ThresholdStrategy::new(auto_stand_at),
            ConsoleTable::new(&rule, false),
        );
        run_match(&mut game, rule.match_target, &mut table)?
    } else {
        let mut game = TwentyOneGame::new(&rule, rng, ConsoleStrategy, ConsoleTable::new(&rule, true));
        run_match(&mut game, rule.match_target, &mut table)?
    };
    log::info!("{:?}", summary);

    table.goodbye();
    Ok(())
}
