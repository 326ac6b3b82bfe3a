use anyhow::Result;
use clinic_core::config::{Clinic, ClinicConfig};
use owo_colors::OwoColorize;

pub fn run(clinic: &Clinic) -> Result<()> {
    let config_path = ClinicConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:        {}", config_path.display());
    println!("  Data:          {}", clinic.data_path().display());
    println!("  Appointments:  {}", clinic.storage_path().display());
    println!();
    println!("{}", "Effective config".bold());
    for line in clinic.config().to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
