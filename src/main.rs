use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, ExpenseCommands, ExportFormat, Menu,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings, CorruptDataPolicy};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Records what you spend, with a description, category and amount, \
                  in a local JSON file. Run without a subcommand for the interactive \
                  menu, or use the subcommands for scripting."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Diagnostic log level (RUST_LOG takes precedence when set)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export the ledger to a file ("-" for stdout)
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Write the default configuration file if there is none
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize paths and settings
    let mut paths = ExpensePaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_expenses_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => return init(&paths, &settings),
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        _ => {}
    }

    // Initialize storage
    let storage = Storage::new(paths, &settings)?;
    load_ledger(&storage, &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(&storage, &settings, stdin.lock(), stdout.lock()).run()?;
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, &output, format)?
        }
        Some(Commands::Init) | Some(Commands::Config) => {}
    }

    Ok(())
}

/// Load the ledger, applying the configured policy for a damaged file
fn load_ledger(storage: &Storage, settings: &Settings) -> Result<()> {
    let path = storage.expenses.path().to_path_buf();

    match storage.load_all() {
        Ok(()) => Ok(()),
        Err(e) if e.is_corrupt() && settings.on_corrupt == CorruptDataPolicy::StartEmpty => {
            warn!("{}", e);
            eprintln!(
                "Warning: {}\nStarting with an empty ledger. {} will be replaced on the next change.",
                e,
                path.display()
            );
            Ok(())
        }
        Err(e) if e.is_corrupt() => Err(e).with_context(|| {
            format!(
                "Refusing to open {}. Repair or move the file, or set \"on_corrupt\": \"start_empty\" in the configuration",
                path.display()
            )
        }),
        Err(e) => Err(e.into()),
    }
}

fn init(paths: &ExpensePaths, settings: &Settings) -> Result<()> {
    paths.ensure_directories()?;

    if paths.settings_file().exists() {
        println!(
            "Configuration already exists at: {}",
            paths.settings_file().display()
        );
    } else {
        settings.save(paths)?;
        println!("Wrote default configuration to: {}", paths.settings_file().display());
    }

    println!("Expenses will be stored in: {}", paths.expenses_file().display());
    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Expenses file:   {}", paths.expenses_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  On corrupt data:   {:?}", settings.on_corrupt);
    println!("  Audit log enabled: {}", settings.audit_enabled);
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "expense_tracker={},{}={}",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
