// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate strong passwords
    Generate {
        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
}
