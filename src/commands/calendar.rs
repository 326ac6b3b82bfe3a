use anyhow::Result;
use chrono::Local;
use clinic_core::calendar::{self, MonthGrid};
use clinic_core::config::Clinic;

use crate::render::render_month;

pub fn run(clinic: &Clinic, month: Option<&str>, prev: bool, next: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let mut reference = match month {
        Some(m) => calendar::parse_month(m)?,
        None => today,
    };

    if prev {
        reference = calendar::previous_month(reference);
    } else if next {
        reference = calendar::next_month(reference);
    }

    let repo = clinic.open_repository();
    let grid = MonthGrid::project(reference, today, repo.all());
    let doctor = repo.doctors().first().copied();

    println!("{}", render_month(&grid, reference, doctor));
    Ok(())
}
