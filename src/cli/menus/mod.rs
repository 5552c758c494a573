//! Interactive menu loops
//!
//! One module per entity, each a small loop of numbered options over the
//! matching service. Failed operations are reported and the loop continues;
//! nothing past startup takes the program down. The loops are generic over
//! the prompter's reader, so integration tests drive them with scripted
//! input.

pub mod doctors;
pub mod histories;
pub mod patients;
pub mod procedures;

use crate::cli::prompt::Prompter;
use crate::domain::{MedrecError, Result};
use crate::services::Services;
use tokio::io::AsyncBufRead;

/// Top-level menu loop
///
/// Runs until the operator picks Exit or the input stream closes.
pub async fn main_menu<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    services: &Services,
) -> Result<()> {
    loop {
        println!();
        println!("=== Medical Records Manager ===");
        println!("1. Patients");
        println!("2. Patient History");
        println!("3. Procedures");
        println!("4. Doctors");
        println!("5. Exit");

        let choice = match prompter.line("Select an option: ").await {
            Ok(choice) => choice,
            Err(MedrecError::Io(_)) => return Ok(()),
            Err(e) => return Err(e),
        };

        let outcome = match choice.as_str() {
            "1" => patients::run(prompter, services).await,
            "2" => histories::run(prompter, services).await,
            "3" => procedures::run(prompter, services).await,
            "4" => doctors::run(prompter, services).await,
            "5" => {
                println!("Goodbye.");
                return Ok(());
            }
            _ => {
                println!("[ERROR] Unknown option.");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            // Input closed mid-flow; leave as quietly as an explicit exit.
            Err(MedrecError::Io(_)) => return Ok(()),
            Err(e) => return Err(e),
        }
    }
}

/// Print a failed operation and log it; the menu carries on afterwards
pub(super) fn report(err: &MedrecError) {
    tracing::error!(error = %err, "operation failed");
    match err {
        MedrecError::NotFound { .. } => println!("[NOT FOUND] {err}"),
        _ => println!("[ERROR] {err}"),
    }
}
