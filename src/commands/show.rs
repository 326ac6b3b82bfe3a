use anyhow::Result;
use clinic_core::config::Clinic;

use crate::render::Render;

pub fn run(clinic: &Clinic, id: &str) -> Result<()> {
    let repo = clinic.open_repository();

    match repo.find_by_id(id) {
        Some(appointment) => {
            println!("{}", appointment.render());
            Ok(())
        }
        None => anyhow::bail!("Appointment '{}' not found", id),
    }
}
