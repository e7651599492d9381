use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use khata::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for khata::AppCommand {
    fn from(cmd: Commands) -> khata::AppCommand {
        match cmd {
            Commands::Login { name, email } => khata::AppCommand::Login { name, email },
            Commands::Logout => khata::AppCommand::Logout,
            Commands::Whoami => khata::AppCommand::Whoami,
            Commands::Add {
                description,
                amount,
                kind,
                date,
            } => khata::AppCommand::Add {
                description,
                amount,
                kind,
                date,
            },
            Commands::Edit {
                row,
                description,
                amount,
                kind,
                date,
            } => khata::AppCommand::Edit {
                row,
                description,
                amount,
                kind,
                date,
            },
            Commands::Rm { rows, all } => khata::AppCommand::Remove { rows, all },
            Commands::List => khata::AppCommand::List,
            Commands::Summary => khata::AppCommand::Summary,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Start a session as the given user
    Login { name: String, email: String },
    /// End the active session, keeping its ledger
    Logout,
    /// Show the active session user
    Whoami,
    /// Record a new income or expense entry
    Add {
        description: String,
        amount: String,
        /// income or expense
        kind: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit the entry at the given row number
    Edit {
        row: usize,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete the entries at the given row numbers
    Rm {
        rows: Vec<usize>,
        /// Delete every entry in the ledger
        #[arg(long, conflicts_with = "rows")]
        all: bool,
    },
    /// Show the ledger with running balances
    List,
    /// Show income, expense and net totals
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => khata::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = khata::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
# Currency code shown next to amounts. Display only, no conversion.
currency: "INR"

# Uncomment to store ledger data somewhere other than the default data dir.
# data_path: "/path/to/khata/data"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
