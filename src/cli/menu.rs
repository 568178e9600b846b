// src/cli/menu.rs
use anyhow::Result;
use inquire::error::InquireResult;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select};

use crate::advisor::AdvisoryClient;
use crate::cli::handlers::{print_history, print_outcome};
use crate::core::checker::{self, CheckError};
use crate::core::session::Session;
use crate::generators::PasswordGenerator;

const CHECK: &str = "🔍  Check password strength";
const GENERATE: &str = "🔐  Generate strong password";
const HISTORY: &str = "🔄  Previous password checks";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(generator: &PasswordGenerator, advisor: Option<&dyn AdvisoryClient>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🔐 PASSWORD STRENGTH METER      ║");
    println!("╚══════════════════════════════════════╝");
    println!("Check how secure your password is! 🔍");

    if advisor.is_none() {
        println!("ℹ️  AI security recommendations are disabled.");
    }

    let mut session = Session::new();

    loop {
        let options = vec![CHECK, GENERATE, HISTORY, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        match selection {
            Ok(Some(CHECK)) => {
                let password = match prompt_password()? {
                    Some(password) => password,
                    None => continue,
                };

                if advisor.is_some() {
                    println!("🧠 Asking for AI security recommendations...");
                }

                match checker::check_password(&mut session, &password, generator, advisor) {
                    Ok(outcome) => {
                        print_outcome(&outcome);
                        if outcome.suggestion.is_some() {
                            offer_regeneration(&mut session, generator)?;
                        }
                    }
                    Err(CheckError::EmptyPassword) => {
                        println!("⚠️  {}", CheckError::EmptyPassword);
                    }
                }

                print_history(&session);
            }
            Ok(Some(GENERATE)) => {
                let password = checker::regenerate(&mut session, generator);
                println!("\n### Suggested Strong Password 🔒");
                println!("{}", password);
            }
            Ok(Some(HISTORY)) => {
                print_history(&session);
                if let Some(suggestion) = session.generated() {
                    println!("\nCurrent suggestion: {}", suggestion);
                }
            }
            Ok(Some(_)) | Ok(None) => break,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Session ended after {} checks", session.history_len());
    println!("👋 Goodbye!");
    Ok(())
}

// Hidden password prompt; `None` when the user backs out
fn prompt_password() -> Result<Option<String>> {
    let answer = Password::new("Enter your password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt_skippable();

    interrupted_as_skipped(answer)
}

// Ctrl+C inside a prompt backs out like Esc instead of failing the menu
fn interrupted_as_skipped<T>(answer: InquireResult<Option<T>>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn offer_regeneration(session: &mut Session, generator: &PasswordGenerator) -> Result<()> {
    loop {
        let again = interrupted_as_skipped(
            Confirm::new("Generate another strong password?")
                .with_default(false)
                .prompt_skippable(),
        )?;

        if again != Some(true) {
            return Ok(());
        }

        let password = checker::regenerate(session, generator);
        println!("{}", password);
    }
}
