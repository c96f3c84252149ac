use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use registro_cli::cli::{
    handle_add_command, handle_delete_command, handle_export_command, handle_list_command,
    handle_years_command,
};
use registro_cli::config::RegistroPaths;
use registro_cli::export::ExportFormat;
use registro_cli::services::RegistrationService;
use registro_cli::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "registro",
    version,
    about = "Terminal-based inspection-fee registration manager",
    long_about = "Registro CLI records inspection-fee registrations (payer, period, \
                  amount, category), keeps them on disk, and exports filtered \
                  views to CSV or PDF."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new registration
    Add {
        /// Payer/subject name
        name: String,
        /// Amount (e.g. "1000.00")
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Month (Spanish label or 1-12; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List registrations with an optional filter and period total
    List {
        /// Free-text search over name and category
        #[arg(short, long)]
        search: Option<String>,
        /// Month for the total ("all" or a month; never narrows the table)
        #[arg(short, long)]
        month: Option<String>,
        /// Year for the total ("all" or a year; never narrows the table)
        #[arg(short, long)]
        year: Option<String>,
    },

    /// Delete a registration by id
    Delete {
        /// Registration id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the distinct years present across all registrations
    Years,

    /// Export the filtered registrations to a file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Free-text search over name and category
        #[arg(short, long)]
        search: Option<String>,
        /// Output directory (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the exported rows
        #[arg(long)]
        show: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RegistroPaths::new()?;
    paths.ensure_directories()?;

    let store = JsonFileStore::new(paths.registrations_file());
    let mut service = RegistrationService::new(Box::new(store));

    match cli.command {
        Commands::Add {
            name,
            amount,
            category,
            month,
            year,
        } => handle_add_command(&mut service, name, amount, category, month, year)?,
        Commands::List {
            search,
            month,
            year,
        } => handle_list_command(&service, search, month, year)?,
        Commands::Delete { id, yes } => handle_delete_command(&mut service, id, yes)?,
        Commands::Years => handle_years_command(&service)?,
        Commands::Export {
            format,
            search,
            output,
            show,
        } => handle_export_command(&service, format, search, output, show)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.registrations_file().display());
        }
    }

    Ok(())
}
