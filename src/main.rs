//! label-input - replay label input scenarios headlessly
//!
//! Usage:
//!   label-input scenarios/commit.yaml
//!   label-input --json --reject "@ " scenarios/*.yaml

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use label_input::config::LabelInputConfig;
use label_input::scenario::{Scenario, ScenarioOutcome};

use cli::{CliArgs, OutputFormat, RunConfig};

fn main() -> Result<()> {
    label_input::tracing::init();

    let args = CliArgs::parse();
    let config = args
        .into_config(LabelInputConfig::load())
        .map_err(anyhow::Error::msg)?;

    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    for path in &config.scenarios {
        let scenario = Scenario::load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?;

        tracing::info!(path = %path.display(), steps = scenario.steps.len(), "replaying scenario");

        let outcome = scenario
            .run(&config.widget, config.reject.as_deref())
            .with_context(|| format!("Failed to replay scenario {}", path.display()))?;

        match config.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
            OutputFormat::Text => print_text(path.display().to_string(), &outcome),
        }
    }
    Ok(())
}

fn print_text(label: String, outcome: &ScenarioOutcome) {
    let title = outcome.name.clone().unwrap_or(label);
    println!("== {}", title);
    for (i, change) in outcome.changes.iter().enumerate() {
        println!("  change {}: {:?}", i + 1, change);
    }
    println!("  value: {:?}", outcome.value);
    for line in outcome.row.lines() {
        println!("  | {}", line);
    }
}
