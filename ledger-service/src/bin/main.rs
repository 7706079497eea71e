use clap::{Parser, Subcommand};
use common::money::Amount;
use dotenv::dotenv;
use ledger_service::{LedgerService, LedgerServiceConfig, WithdrawalOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ledger Service CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ledger session
    Start {
        /// Log every recorded transaction at info level
        #[arg(short, long)]
        transaction_logging: bool,

        /// Compare withdrawal requests by magnitude instead of raw value
        #[arg(short, long)]
        normalize_withdrawals: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("ledger_service={}", cli.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Process commands
    match cli.command {
        Commands::Start { transaction_logging, normalize_withdrawals } => {
            // Create config using provided flags or env vars
            let config = if transaction_logging || normalize_withdrawals {
                LedgerServiceConfig::new(transaction_logging, normalize_withdrawals)
            } else {
                LedgerServiceConfig::from_env()
            };

            info!(
                "Starting ledger service with transaction logging: {}, normalized withdrawals: {}",
                config.transaction_logging, config.normalize_withdrawals
            );

            // Initialize service
            let service = LedgerService::with_config(&config);

            info!("Ledger session started. Type 'help' for commands, Ctrl+C to stop.");
            if let Err(err) = run_session(&service).await {
                error!("Session ended with error: {}", err);
            }

            info!("Shutting down ledger service...");
        }
    }

    Ok(())
}

/// Drive the interactive session until quit, end of input, or Ctrl+C
async fn run_session(service: &LedgerService) -> common::error::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !execute_command(service, line.trim()).await? {
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = signal::ctrl_c() => {
                info!("Ctrl+C received");
                break;
            }
        }
    }

    Ok(())
}

/// Execute one session command, returning false when the session should end
async fn execute_command(service: &LedgerService, input: &str) -> common::error::Result<bool> {
    let mut parts = input.split_whitespace();

    match parts.next() {
        Some("deposit") => {
            if let Some((account_number, amount)) = parse_operation(parts.next(), parts.next()) {
                let account = service.deposit(account_number, amount).await?;
                println!(
                    "Balance of {} is now {}",
                    account.account_number, account.current_balance
                );
            } else {
                print_usage();
            }
        }
        Some("withdraw") => {
            if let Some((account_number, amount)) = parse_operation(parts.next(), parts.next()) {
                match service.withdraw(account_number, amount).await? {
                    WithdrawalOutcome::Completed(account) => {
                        println!(
                            "Balance of {} is now {}",
                            account.account_number, account.current_balance
                        );
                    }
                    WithdrawalOutcome::InsufficientFunds(account) => {
                        println!(
                            "Insufficient funds: balance of {} is {}",
                            account.account_number, account.current_balance
                        );
                    }
                }
            } else {
                print_usage();
            }
        }
        Some("balance") => {
            if let Some(account_number) = parts.next() {
                let account = service.retrieve_account(account_number).await?;
                println!(
                    "Balance of {} is {}",
                    account.account_number, account.current_balance
                );
            } else {
                print_usage();
            }
        }
        Some("history") => {
            if let Some(account_number) = parts.next() {
                let account = service.retrieve_account(account_number).await?;
                println!("{}", serde_json::to_string_pretty(&account.transactions)?);
            } else {
                print_usage();
            }
        }
        Some("help") => print_usage(),
        Some("quit") => return Ok(false),
        Some(command) => {
            println!("Unknown command: {}", command);
            print_usage();
        }
        None => {}
    }

    Ok(true)
}

/// Parse an account number and amount argument pair
fn parse_operation<'a>(
    account_number: Option<&'a str>,
    amount: Option<&str>,
) -> Option<(&'a str, Amount)> {
    let account_number = account_number?;
    let amount = amount?.parse::<Amount>().ok()?;
    Some((account_number, amount))
}

/// Print the session command reference
fn print_usage() {
    println!("Commands:");
    println!("  deposit <account> <amount>   credit the magnitude of <amount>");
    println!("  withdraw <account> <amount>  debit <amount> if the balance covers it");
    println!("  balance <account>            show the current balance");
    println!("  history <account>            show the transaction history as JSON");
    println!("  help                         show this message");
    println!("  quit                         end the session");
}
