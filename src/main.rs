use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendwise::cli::{
    handle_budget_command, handle_expense_command, handle_history_command, handle_reset_command,
    open_tracker, run_shell,
};
use spendwise::config::{Settings, TrackerPaths};
use spendwise::display::DisplayOptions;
use spendwise::view::TerminalView;

const LOG_ENV: &str = "SPENDWISE_LOG";

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Track spending against a periodic budget",
    long_about = "SpendWise keeps a single weekly, biweekly or monthly budget and the \
                  expenses recorded against it, and shows how much is left after \
                  every change."
)]
struct Cli {
    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Print debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget commands
    #[command(subcommand)]
    Budget(spendwise::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(spendwise::cli::ExpenseCommands),

    /// Delete the budget and every expense
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Start an interactive session
    Shell,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("SpendWise - periodic budget and expense tracker");
        println!();
        println!("Run 'spendwise --help' for usage information.");
        println!("Run 'spendwise shell' to start an interactive session.");
        return Ok(());
    };

    match command {
        Commands::History { count } => {
            handle_history_command(&paths, count)?;
            return Ok(());
        }
        Commands::Config => {
            print_config(&paths, &settings);
            return Ok(());
        }
        _ => {}
    }

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let view = TerminalView::new(DisplayOptions::from_settings(&settings, color));
    let mut tracker = open_tracker(&paths, &settings, cli.ephemeral, view);

    let result = match command {
        Commands::Budget(cmd) => handle_budget_command(&mut tracker, cmd),
        Commands::Expense(cmd) => handle_expense_command(&mut tracker, cmd),
        Commands::Reset { yes } => handle_reset_command(&mut tracker, yes),
        Commands::Shell => run_shell(&mut tracker),
        Commands::History { .. } | Commands::Config => Ok(()),
    };

    // The view has already shown the failure
    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        std::process::exit(1);
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("SpendWise Configuration");
    println!("=======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Store file:     {}", paths.store_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Default period:     {}", settings.default_period);
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Date format:        {}", settings.date_format);
    println!("  Notification (s):   {}", settings.notification_secs);
    println!("  Overspend policy:   {:?}", settings.overspend_policy);
    println!("  Storage backend:    {:?}", settings.storage_backend);
}
