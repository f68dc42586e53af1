//! Bizdesk CLI - inspect what a user profile is allowed to do.
//!
//! ```bash
//! bizdesk rules --permissions companies.view,companies.create
//! bizdesk check --role admin delete users
//! bizdesk flags --profile user.json --json
//! ```
//!
//! See `bizdesk --help` for all available commands and options.

mod commands;

use bizdesk_core::config::BizdeskConfig;
use bizdesk_core::logging::init_logging;
use clap::{Parser, Subcommand};
use commands::source::ProfileSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bizdesk",
    about = "Bizdesk ability inspection tool",
    version,
    after_help = "Permissions use the \"<subject>.<action>\" form, e.g. companies.view"
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "bizdesk.toml")]
    config: PathBuf,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled rules
    Rules {
        #[command(flatten)]
        source: ProfileSource,
    },
    /// Answer a single can(action, subject) question
    Check {
        #[command(flatten)]
        source: ProfileSource,

        /// Action, e.g. view
        action: String,

        /// Subject, e.g. companies
        subject: String,
    },
    /// Print the navigation visibility flags
    Flags {
        #[command(flatten)]
        source: ProfileSource,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = BizdeskConfig::load_from(&cli.config)?;
    let mut logging = config.logging.clone();
    if let Some(level) = cli.log_level {
        logging = logging.with_level(level);
    }
    logging.stderr = true;
    init_logging(&logging)?;

    match cli.command {
        Commands::Rules { source } => {
            print!("{}", commands::rules::run(&source.load()?));
            Ok(true)
        }
        Commands::Check { source, action, subject } => {
            let allowed = commands::check::run(&source.load()?, &action, &subject)?;
            println!("{}", if allowed { "allowed" } else { "denied" });
            Ok(allowed)
        }
        Commands::Flags { source, json } => {
            print!("{}", commands::flags::run(&source.load()?, json)?);
            Ok(true)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
