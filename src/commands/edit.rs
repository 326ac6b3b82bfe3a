use anyhow::Result;
use clinic_core::config::Clinic;
use clinic_core::{AppointmentPatch, ClinicError};
use owo_colors::OwoColorize;

use super::{AppointmentFields, print_validation_errors};
use crate::render::Render;

pub fn run(clinic: &Clinic, id: &str, fields: AppointmentFields) -> Result<()> {
    let patch = AppointmentPatch::from(fields);
    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one field, e.g. --time 14:30");
    }

    let mut repo = clinic.open_repository();

    match repo.update(id, patch) {
        Ok(appointment) => {
            println!("{}", "Appointment updated successfully".green());
            println!("{}", appointment.render());
            Ok(())
        }
        Err(ClinicError::NotFound(id)) => anyhow::bail!("Appointment '{}' not found", id),
        Err(ClinicError::Validation(report)) => {
            print_validation_errors(&report);
            anyhow::bail!("Appointment not updated");
        }
        Err(e) => Err(e.into()),
    }
}
