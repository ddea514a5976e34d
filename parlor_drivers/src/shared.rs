use anyhow::Context;
use parlor::rpsls::{distribution::ChoiceDistribution, opponent::Personality, RpslsRule};
use parlor::{Decision, GameError};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "~/.parlor.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub twenty_one: ConfigTwentyOne,
    #[serde(default)]
    pub rpsls: ConfigRpsls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTwentyOne {
    pub winning_value: u32,
    pub dealer_stand_threshold: u32,
    pub match_target: u32,
    /// Total at which the `--auto` player stands.
    pub auto_stand_at: u32,
}

impl Default for ConfigTwentyOne {
    fn default() -> Self {
        let rule = parlor::Rule::default();
        ConfigTwentyOne {
            winning_value: rule.winning_value,
            dealer_stand_threshold: rule.dealer_stand_threshold,
            match_target: rule.match_target,
            auto_stand_at: rule.dealer_stand_threshold,
        }
    }
}

impl TryInto<parlor::Rule> for ConfigTwentyOne {
    type Error = GameError;

    fn try_into(self) -> Result<parlor::Rule, Self::Error> {
        let rule = parlor::Rule {
            winning_value: self.winning_value,
            dealer_stand_threshold: self.dealer_stand_threshold,
            match_target: self.match_target,
        };
        rule.validate()?;
        Ok(rule)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRpsls {
    pub match_target: u32,
    pub win_percentage_threshold: f64,
    pub data_headstart: usize,
    pub opponent: String,
    /// Overrides the opponent's starting weights, in rock, paper, scissors,
    /// lizard, spock order.
    #[serde(default)]
    pub weights: Option<[u32; 5]>,
}

impl Default for ConfigRpsls {
    fn default() -> Self {
        let rule = RpslsRule::default();
        ConfigRpsls {
            match_target: rule.match_target,
            win_percentage_threshold: rule.win_percentage_threshold,
            data_headstart: rule.data_headstart,
            opponent: String::from("DeepThought"),
            weights: None,
        }
    }
}

impl ConfigRpsls {
    pub fn personality(&self) -> Result<Personality, serde::de::value::Error> {
        self.opponent.parse()
    }

    pub fn baseline(&self) -> Result<Option<ChoiceDistribution>, GameError> {
        self.weights.map(ChoiceDistribution::from_weights).transpose()
    }
}

impl TryInto<RpslsRule> for ConfigRpsls {
    type Error = GameError;

    fn try_into(self) -> Result<RpslsRule, Self::Error> {
        let rule = RpslsRule {
            match_target: self.match_target,
            win_percentage_threshold: self.win_percentage_threshold,
            data_headstart: self.data_headstart,
        };
        rule.validate()?;
        Ok(rule)
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &Path) -> anyhow::Result<Config> {
    let file_content = fs::read_to_string(filename)
        .with_context(|| format!("cannot read config file {}", filename.display()))?;
    serde_yaml::from_str(&file_content)
        .with_context(|| format!("cannot parse config file {}", filename.display()))
}

/// Loads the config named on the command line. The default path is looked up
/// in the home directory and may be absent, in which case built-in rules apply.
pub fn load_config(config_arg: &str) -> anyhow::Result<Config> {
    if config_arg != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(Path::new(config_arg));
    }
    match default_config_path() {
        Some(path) if path.is_file() => parse_config_from_file(&path),
        Some(path) if path.is_dir() => {
            anyhow::bail!("{} should be a file rather than a directory", path.display())
        }
        _ => {
            log::debug!("no config file found, using built-in rules");
            Ok(Config::default())
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home_dir| home_dir.join(".parlor.yml"))
}

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn parse_decision(answer: &str) -> Option<Decision> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(Decision::Hit),
        "s" | "stay" | "stand" => Some(Decision::Stand),
        _ => None,
    }
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks `question` until `parse` accepts a line, printing `invalid` after each
/// rejected answer. Returns None once the input is closed.
pub fn prompt_until<T, I, O, F>(
    input: &mut I,
    output: &mut O,
    question: &str,
    invalid: &str,
    parse: F,
) -> Option<T>
where
    I: BufRead,
    O: Write,
    F: Fn(&str) -> Option<T>,
{
    let mut line = String::new();
    loop {
        if let Err(err) = writeln!(output, "{}", question).and_then(|_| output.flush()) {
            log::warn!("cannot write prompt: {}", err);
        }
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {
                if let Some(answer) = parse(&line) {
                    return Some(answer);
                }
                if let Err(err) = writeln!(output, "{}", invalid) {
                    log::warn!("cannot write prompt: {}", err);
                }
            }
            Err(err) => {
                log::warn!("cannot read answer: {}", err);
                return None;
            }
        }
    }
}

/// [`prompt_until`] on the process's stdin and stdout.
pub fn ask<T, F>(question: &str, invalid: &str, parse: F) -> Option<T>
where
    F: Fn(&str) -> Option<T>,
{
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    prompt_until(&mut stdin.lock(), &mut stdout.lock(), question, invalid, parse)
}
