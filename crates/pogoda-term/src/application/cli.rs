#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Shell;
use serde::Serialize;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Bucket;
use crate::domain::models::Screen;
use crate::domain::services::WeatherSession;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// What the binary should do once arguments and config are resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Evaluate {
        city: String,
        temperature: String,
        json: bool,
    },
    Done,
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("POGODA_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ))
        .global(true);
}

fn arg_initial_screen() -> Arg {
    return Arg::new(ConfigKey::InitialScreen.to_string())
        .long(ConfigKey::InitialScreen.to_string())
        .env("POGODA_INITIAL_SCREEN")
        .num_args(1)
        .help(format!(
            "Screen shown when the terminal opens. [default: {}]",
            Config::default(ConfigKey::InitialScreen)
        ))
        .value_parser(PossibleValuesParser::new(Screen::VARIANTS.iter().copied()));
}

fn arg_log_file() -> Arg {
    return Arg::new(ConfigKey::LogFile.to_string())
        .long(ConfigKey::LogFile.to_string())
        .env("POGODA_LOG_FILE")
        .num_args(1)
        .help(format!(
            "File that receives JSON logs. [default: {}]",
            Config::default(ConfigKey::LogFile)
        ))
        .global(true);
}

fn arg_log_level() -> Arg {
    return Arg::new(ConfigKey::LogLevel.to_string())
        .long(ConfigKey::LogLevel.to_string())
        .env("POGODA_LOG_LEVEL")
        .num_args(1)
        .help(format!(
            "Minimum level written to the log file. [default: {}]",
            Config::default(ConfigKey::LogLevel)
        ))
        .value_parser(PossibleValuesParser::new(LOG_LEVELS))
        .global(true);
}

fn subcommand_evaluate() -> Command {
    return Command::new("evaluate")
        .about("Classifies a single temperature and prints the result.")
        .arg(
            Arg::new("city")
                .long("city")
                .num_args(1)
                .default_value("")
                .help("City name, any text."),
        )
        .arg(
            Arg::new("temperature")
                .short('t')
                .long("temperature")
                .num_args(1)
                .required(true)
                .allow_hyphen_values(true)
                .help("Temperature in °C as a whole number."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON."),
        );
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .num_args(1)
                .value_parser(clap::value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Prints the default config file."));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nClassifies the temperature in a city and keeps a history of your queries for this session.",
        env!("CARGO_PKG_DESCRIPTION")
    );

    return Command::new("pogoda")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_evaluate())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_config_file())
        .arg(arg_initial_screen())
        .arg(arg_log_file())
        .arg(arg_log_level());
}

pub async fn parse() -> Result<Invocation> {
    let matches = build().get_matches();
    return parse_matches(matches, &mut io::stdout()).await;
}

/// Loads config from the parsed arguments and handles subcommands that only
/// print output.
pub async fn parse_matches(matches: ArgMatches, out: &mut impl Write) -> Result<Invocation> {
    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                generate(completions, &mut app, "pogoda", out);
            }
            return Ok(Invocation::Done);
        }
        Some(("config", subcmd_matches)) => {
            if subcmd_matches.subcommand_matches("default").is_some() {
                writeln!(out, "{}", Config::serialize_default(build()))?;
            }
            return Ok(Invocation::Done);
        }
        Some(("evaluate", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let city = subcmd_matches
                .get_one::<String>("city")
                .cloned()
                .unwrap_or_default();
            let temperature = subcmd_matches
                .get_one::<String>("temperature")
                .cloned()
                .unwrap_or_default();

            return Ok(Invocation::Evaluate {
                city,
                temperature,
                json: subcmd_matches.get_flag("json"),
            });
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(Invocation::Interactive);
        }
    }
}

#[derive(Serialize)]
struct EvaluationReport<'a> {
    city: &'a str,
    temperature: &'a str,
    bucket: Bucket,
    text: &'a str,
}

/// Runs one query through a fresh session and prints the outcome.
pub fn evaluate(city: &str, temperature: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let mut session = WeatherSession::default();
    session.set_city(city);
    session.set_temperature(temperature);

    let result = match session.submit() {
        Ok(result) => result,
        Err(err) => bail!("{err}: {:?}", err.raw),
    };

    let records = session.history().records();
    let Some(record) = records.last() else {
        bail!("submission was accepted but not logged");
    };

    if json {
        let report = EvaluationReport {
            city: record.city(),
            temperature: record.signed_temperature(),
            bucket: result.bucket,
            text: &result.rendered_text,
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{}", result.rendered_text)?;
        writeln!(out, "{record}")?;
    }

    return Ok(());
}
