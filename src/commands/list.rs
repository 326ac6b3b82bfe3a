use anyhow::Result;
use clinic_core::config::Clinic;
use clinic_core::filter::{DashboardFilter, DashboardRow};
use owo_colors::OwoColorize;

use crate::render::render_table;

pub fn run(
    clinic: &Clinic,
    patient: Option<String>,
    doctor: Option<String>,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let repo = clinic.open_repository();
    let filter = DashboardFilter::new(patient, doctor, from, to);

    let rows: Vec<DashboardRow> = filter
        .apply(&repo)
        .into_iter()
        .map(DashboardRow::from)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No appointments found".dimmed());
        return Ok(());
    }

    println!("{}", render_table(&rows));
    Ok(())
}
