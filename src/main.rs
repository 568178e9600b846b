use anyhow::Result;
use clap::Parser;
use std::path::Path;

mod advisor;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

#[cfg(test)]
mod test_utils;

use crate::advisor::{AdvisoryClient, GeminiAdvisor};
use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    log::info!("🔐 Starting password meter");
    for warning in &config.warnings {
        log::warn!("{}", warning);
        eprintln!("⚠️  {}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::new(config.generator_strategy);
    log::debug!("Generator strategy: {:?}", generator.strategy());

    let advisor = if args.no_advice {
        None
    } else {
        match GeminiAdvisor::from_config(&config) {
            Ok(advisor) => {
                if !config.has_api_key() {
                    log::warn!("GEMINI_API_KEY is not set; advice requests will fail");
                }
                Some(advisor)
            }
            Err(e) => {
                log::error!("Could not create advisory client: {}", e);
                eprintln!("⚠️  AI recommendations unavailable: {}", e);
                None
            }
        }
    };
    let advisor = advisor.as_ref().map(|a| a as &dyn AdvisoryClient);

    match args.command {
        Some(CliCommand::Check { password, json }) => {
            cli::handlers::handle_check(&password, json, &generator, advisor)
        }
        Some(CliCommand::Generate { count }) => cli::handlers::handle_generate(count, &generator),
        None => {
            ctrlc::set_handler(|| {
                log::info!("🔴 Ctrl+C received. Exiting...");
                println!("\n👋 Goodbye!");
                std::process::exit(130);
            })?;

            cli::menu::run_cli_menu(&generator, advisor)
        }
    }
}
