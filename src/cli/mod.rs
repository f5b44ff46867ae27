use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::{AccountService, Outcome};
use crate::domain::format_cents;
use crate::storage::BalanceStore;

/// Passbook - Single-Account Balance Ledger
#[derive(Parser)]
#[command(name = "passbook")]
#[command(about = "A single-account balance ledger for the command line")]
#[command(version)]
pub struct Cli {
    /// Balance file path
    #[arg(short, long, default_value = "balance.json")]
    pub file: String,

    /// Command to run (omit for the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current balance
    Balance,

    /// Credit the account
    Credit {
        /// Amount to credit (e.g., "50.00" or "50")
        amount: String,
    },

    /// Debit the account
    Debit {
        /// Amount to debit (e.g., "50.00" or "50")
        amount: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = AccountService::new(BalanceStore::new(self.file));

        match self.command {
            Some(Commands::Balance) => {
                let balance = service.view_balance()?;
                println!("Current balance: ${}", format_cents(balance));
            }

            Some(Commands::Credit { amount }) => {
                report_outcome(service.credit(&amount)?, "credited");
            }

            Some(Commands::Debit { amount }) => {
                report_outcome(service.debit(&amount)?, "debited");
            }

            None => run_menu(&service)?,
        }

        Ok(())
    }
}

fn report_outcome(outcome: Outcome, verb: &str) {
    match outcome {
        Outcome::Success { balance } => {
            println!("Amount {}. New balance: ${}", verb, format_cents(balance));
        }
        Outcome::Failure { message } => println!("{}", message),
    }
}

/// Interactive menu loop. Invalid menu choices reprompt; end of input exits.
fn run_menu(service: &AccountService) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("--------------------------------");
        println!("Account Management System");
        println!("1. View Balance");
        println!("2. Credit Account");
        println!("3. Debit Account");
        println!("4. Exit");
        println!("--------------------------------");

        let choice = match prompt(&mut lines, "Enter your choice (1-4): ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.trim() {
            "1" => {
                let balance = service.view_balance()?;
                println!("Current balance: ${}", format_cents(balance));
            }
            "2" => match prompt(&mut lines, "Enter credit amount: ")? {
                Some(input) => report_outcome(service.credit(&input)?, "credited"),
                None => break,
            },
            "3" => match prompt(&mut lines, "Enter debit amount: ")? {
                Some(input) => report_outcome(service.debit(&input)?, "debited"),
                None => break,
            },
            "4" => {
                println!("Exiting the program. Goodbye!");
                break;
            }
            _ => println!("Invalid choice, please select 1-4."),
        }
    }

    Ok(())
}

/// Print a prompt and read one line. Returns `None` on end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}
