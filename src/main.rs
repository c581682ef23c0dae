use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_guardian::config::{GuardianPaths, Settings};
use finance_guardian::display::format_template;
use finance_guardian::session::{run_session, Console};
use finance_guardian::storage::init::needs_initialization;
use finance_guardian::storage::{initialize_workbook, CsvWorkbook, LedgerStore};

#[derive(Parser)]
#[command(
    name = "guardian",
    version,
    about = "Terminal budgeting assistant",
    long_about = "Finance Guardian derives a monthly budget from your income and a \
                  percentage template, and keeps track of what you spend against it."
)]
struct Cli {
    /// Directory holding the workbook, settings and log file
    #[arg(long, global = true, env = "FINANCE_GUARDIAN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Session,

    /// Create the workbook and settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Show the category template
    Template,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => GuardianPaths::with_base_dir(dir),
        None => GuardianPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&paths, &settings)?;

    let mut workbook = CsvWorkbook::open(paths.workbook_dir())?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            if needs_initialization(&workbook)? {
                tracing::info!(dir = %paths.base_dir().display(), "first run, initializing");
                initialize_workbook(&mut workbook)?;
            }

            let mut console = Console::new(io::stdin().lock(), io::stdout());
            if let Err(e) = run_session(&mut workbook, &settings, &mut console) {
                tracing::error!(error = %e, "session ended with an error");
                return Err(e.into());
            }
        }
        Commands::Init => {
            println!("Initializing Finance Guardian at: {}", paths.base_dir().display());
            initialize_workbook(&mut workbook)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("The category template has been created:");
            print!("{}", format_template(&workbook.read_template()?));
            println!();
            println!("Run 'guardian' to start a session.");
        }
        Commands::Config => {
            println!("Finance Guardian Configuration");
            println!("==============================");
            println!("Data directory:     {}", paths.base_dir().display());
            println!("Workbook directory: {}", paths.workbook_dir().display());
            println!("Settings file:      {}", paths.settings_file().display());
            println!("Log file:           {}", paths.log_file().display());
            println!(
                "Initialized:        {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Overwrite policy: {:?}", settings.overwrite_policy);
            println!("  Log level:        {}", settings.log_level);
        }
        Commands::Template => {
            initialize_workbook(&mut workbook)?;
            print!("{}", format_template(&workbook.read_template()?));
        }
    }

    Ok(())
}

/// Send `tracing` output to the log file so the terminal stays clean
fn init_logging(paths: &GuardianPaths, settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .with_context(|| format!("Failed to open log file {}", paths.log_file().display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
