use anyhow::{Context, Result};
use clinic_core::config::Clinic;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(clinic: &Clinic, id: &str, yes: bool) -> Result<()> {
    let mut repo = clinic.open_repository();

    let Some(appointment) = repo.find_by_id(id) else {
        anyhow::bail!("Appointment '{}' not found", id);
    };

    if !yes {
        println!("{}", appointment.render());
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this appointment?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    if repo.delete(id)? {
        println!("{}", "Appointment deleted successfully".green());
        Ok(())
    } else {
        anyhow::bail!("Appointment '{}' not found", id)
    }
}
