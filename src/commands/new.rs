use anyhow::Result;
use clinic_core::ClinicError;
use clinic_core::config::Clinic;
use owo_colors::OwoColorize;

use super::{AppointmentFields, print_validation_errors};
use crate::render::Render;

pub fn run(clinic: &Clinic, fields: AppointmentFields) -> Result<()> {
    let mut repo = clinic.open_repository();

    match repo.insert(fields.into()) {
        Ok(appointment) => {
            println!("{}", "Appointment scheduled successfully".green());
            println!("{}", appointment.render());
            Ok(())
        }
        Err(ClinicError::Validation(report)) => {
            print_validation_errors(&report);
            anyhow::bail!("Appointment not saved");
        }
        Err(e) => Err(e.into()),
    }
}
