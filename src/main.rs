use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_manager::cli::{
    handle_balance, handle_deposit, handle_expense_command, handle_export_command,
    handle_report_command, ExpenseCommands, ExportFormat,
};
use expense_manager::config::{paths::DATA_DIR_ENV, DataPaths, Settings};
use expense_manager::display::format_overview;
use expense_manager::session::Session;
use expense_manager::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Persistent personal expense manager",
    long_about = "Track a running balance: deposit money, log expenses by category, \
                  and keep everything in expenses.json and balance.txt."
)]
struct Cli {
    /// Directory holding expenses.json and balance.txt
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add money to the balance
    Deposit {
        /// Amount (e.g., "100" or "99.50")
        amount: String,
    },

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show the current balance
    Balance,

    /// Show spending by category
    Report,

    /// Export the ledger
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => DataPaths::with_base_dir(dir),
        None => DataPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    let interactive = matches!(cli.command, Some(Commands::Tui));
    init_logging(&paths, &settings, interactive)?;

    let (mut session, warnings) = Session::open(FileStore::new(&paths))?;

    match cli.command {
        Some(Commands::Tui) => {
            expense_manager::tui::run_tui(&mut session, &settings, &warnings)?;
        }
        command => {
            for warning in &warnings {
                eprintln!("Warning: {}", warning);
            }
            match command {
                Some(Commands::Deposit { amount }) => {
                    handle_deposit(&mut session, &settings, &amount)?;
                }
                Some(Commands::Expense(cmd)) => {
                    handle_expense_command(&mut session, &settings, cmd)?;
                }
                Some(Commands::Balance) => handle_balance(&session, &settings),
                Some(Commands::Report) => handle_report_command(&session, &settings),
                Some(Commands::Export { format, output }) => {
                    handle_export_command(&session, format, output)?;
                }
                Some(Commands::Config) => {
                    println!("Expense Manager Configuration");
                    println!("=============================");
                    println!("Data directory: {}", paths.base_dir().display());
                    println!("Expenses file:  {}", paths.expenses_file().display());
                    println!("Balance file:   {}", paths.balance_file().display());
                    println!("Settings file:  {}", paths.settings_file().display());
                    println!("Log file (TUI): {}", paths.log_file().display());
                    println!();
                    println!("Settings:");
                    println!("  Currency symbol: {}", settings.currency_symbol);
                    println!("  Log level:       {}", settings.log_level);
                }
                Some(Commands::Tui) | None => {
                    let state = session.state();
                    print!(
                        "{}",
                        format_overview(&state.ledger, state.balance, &settings.currency_symbol)
                    );
                    println!();
                    println!("Run 'expense --help' for usage information.");
                    println!("Run 'expense tui' to launch the interactive interface.");
                }
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber
///
/// While the TUI owns the terminal, logs go to a file in the data directory.
fn init_logging(paths: &DataPaths, settings: &Settings, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if interactive {
        paths.ensure_directories()?;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .try_init()
            .map_err(anyhow::Error::msg)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(anyhow::Error::msg)?;
    }

    Ok(())
}
