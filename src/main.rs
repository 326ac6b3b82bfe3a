mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clinic_core::config::Clinic;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Book, edit and browse clinic appointments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Book a new appointment
    New {
        #[command(flatten)]
        fields: commands::AppointmentFields,
    },
    /// Change fields of an existing appointment
    Edit {
        /// Appointment id
        id: String,

        #[command(flatten)]
        fields: commands::AppointmentFields,
    },
    /// Delete an appointment
    Delete {
        /// Appointment id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show a single appointment
    Show {
        /// Appointment id
        id: String,
    },
    /// List appointments, optionally filtered (dashboard view)
    List {
        /// Patient name contains (case-insensitive)
        #[arg(short, long)]
        patient: Option<String>,

        /// Doctor name contains (case-insensitive)
        #[arg(short, long)]
        doctor: Option<String>,

        /// Only appointments on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only appointments on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a month grid with the appointments booked on each day
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after
        #[arg(long, conflicts_with = "prev")]
        next: bool,
    },
    /// Show configuration paths and values
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clinic = Clinic::load()?;
    tracing::debug!(data = %clinic.storage_path().display(), "using appointment store");

    match cli.command {
        Commands::New { fields } => commands::new::run(&clinic, fields),
        Commands::Edit { id, fields } => commands::edit::run(&clinic, &id, fields),
        Commands::Delete { id, yes } => commands::delete::run(&clinic, &id, yes),
        Commands::Show { id } => commands::show::run(&clinic, &id),
        Commands::List {
            patient,
            doctor,
            from,
            to,
            json,
        } => commands::list::run(&clinic, patient, doctor, from, to, json),
        Commands::Calendar { month, prev, next } => {
            commands::calendar::run(&clinic, month.as_deref(), prev, next)
        }
        Commands::Config => commands::config::run(&clinic),
    }
}
