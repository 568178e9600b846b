// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check how secure your password is", long_about = None)]
pub struct Args {
    /// Skip the AI security recommendations
    #[arg(long, global = true, env = "PASSWORD_METER_NO_ADVICE")]
    pub no_advice: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
