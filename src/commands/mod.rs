pub mod calendar;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod show;

use clap::Args;
use clinic_core::validate::ValidationReport;
use clinic_core::{AppointmentDraft, AppointmentPatch};
use owo_colors::OwoColorize;

/// Appointment form fields, shared by `new` and `edit`.
///
/// Everything is optional at the CLI level so that a submission with
/// several blank fields reports all of them at once.
#[derive(Args, Debug, Default)]
pub struct AppointmentFields {
    /// Patient name
    #[arg(long)]
    pub patient: Option<String>,

    /// Doctor name
    #[arg(long)]
    pub doctor: Option<String>,

    /// Hospital name
    #[arg(long)]
    pub hospital: Option<String>,

    /// Medical specialty
    #[arg(long)]
    pub specialty: Option<String>,

    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Appointment time, 24-hour (HH:MM)
    #[arg(long)]
    pub time: Option<String>,

    /// Reason for the visit
    #[arg(long)]
    pub reason: Option<String>,
}

impl From<AppointmentFields> for AppointmentDraft {
    fn from(f: AppointmentFields) -> Self {
        AppointmentDraft {
            patient_name: f.patient,
            doctor_name: f.doctor,
            hospital_name: f.hospital,
            specialty: f.specialty,
            date: f.date,
            time: f.time,
            reason: f.reason,
        }
    }
}

impl From<AppointmentFields> for AppointmentPatch {
    fn from(f: AppointmentFields) -> Self {
        AppointmentPatch {
            patient_name: f.patient,
            doctor_name: f.doctor,
            hospital_name: f.hospital,
            specialty: f.specialty,
            date: f.date,
            time: f.time,
            reason: f.reason,
        }
    }
}

/// Print one line per missing field, keyed by the form field it belongs to.
pub fn print_validation_errors(report: &ValidationReport) {
    for field in report.missing() {
        eprintln!("  {} {}", format!("{}:", field.field_name()).dimmed(), field.message().red());
    }
}
