use std::io;

use anyhow::Result;
use pogoda_term::application::cli;
use pogoda_term::application::cli::Invocation;
use pogoda_term::application::logging;
use pogoda_term::application::ui;
use pogoda_term::Config;
use pogoda_term::ConfigKey;

// One logical UI thread: every event is handled to completion before the next.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let invocation = cli::parse().await?;

    let _guard = logging::init_for(
        &invocation,
        &Config::get(ConfigKey::LogFile),
        &Config::get(ConfigKey::LogLevel),
    )?;
    if invocation != Invocation::Done {
        Config::log_summary();
    }

    match invocation {
        Invocation::Interactive => {
            ui::run().await?;
        }
        Invocation::Evaluate {
            city,
            temperature,
            json,
        } => {
            tracing::debug!(city = city.as_str(), "one-shot evaluation");
            cli::evaluate(&city, &temperature, json, &mut io::stdout())?;
        }
        Invocation::Done => {}
    }

    return Ok(());
}
