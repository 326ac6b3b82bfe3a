//! Terminal rendering for clinic-core types.
//!
//! Padding is applied before coloring so ANSI codes don't skew column widths.

use chrono::NaiveDate;
use clinic_core::Appointment;
use clinic_core::calendar::{self, DayCell, MonthGrid, WEEKDAY_LABELS};
use clinic_core::filter::DashboardRow;
use clinic_core::format::{format_table_date, format_time_12h};
use owo_colors::OwoColorize;

const CELL_WIDTH: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{} {}", self.patient_name.bold(), format!("[{}]", self.id).dimmed()),
            format!("  {}  {}", "Doctor:".dimmed(), self.doctor_name),
            format!("  {}  {}", "Hospital:".dimmed(), self.hospital_name),
            format!("  {}  {}", "Specialty:".dimmed(), self.specialty),
            format!(
                "  {}  {} at {}",
                "When:".dimmed(),
                format_table_date(&self.date),
                format_time_12h(&self.time)
            ),
        ];
        if let Some(reason) = &self.reason {
            lines.push(format!("  {}  {}", "Reason:".dimmed(), reason));
        }
        lines.join("\n")
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        let marker = if self.appointments.is_empty() { ' ' } else { '•' };
        let text = format!("{:<width$}", format!("{}{}", self.label, marker), width = CELL_WIDTH);

        if self.is_today {
            text.reversed().to_string()
        } else if !self.in_month {
            text.dimmed().to_string()
        } else if self.is_friday {
            text.yellow().to_string()
        } else {
            text
        }
    }
}

/// Render the calendar view: header, weekday row, and six weeks with the
/// appointments of each week listed beneath it.
pub fn render_month(grid: &MonthGrid, reference: NaiveDate, doctor: Option<&str>) -> String {
    let mut lines = Vec::new();

    lines.push(calendar::title(reference).bold().to_string());
    match doctor {
        Some(name) => lines.push(format!("{} {}", "Doctor:".dimmed(), name)),
        None => lines.push("No appointments booked yet".dimmed().to_string()),
    }
    lines.push(String::new());

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
        .collect();
    lines.push(header.trim_end().dimmed().to_string());

    for week in grid.weeks() {
        let row: String = week.iter().map(|cell| cell.render()).collect();
        lines.push(row);

        for cell in week.iter().filter(|c| !c.appointments.is_empty()) {
            let day = cell.date.format("%b %-d").to_string();
            for appointment in &cell.appointments {
                lines.push(format!(
                    "    {} {}",
                    format!("{:<7}", day).dimmed(),
                    appointment.card_text()
                ));
            }
        }
    }

    lines.join("\n")
}

/// Render the dashboard table. The id column comes last, dimmed.
pub fn render_table(rows: &[DashboardRow]) -> String {
    const HEADERS: [&str; 6] = ["Patient", "Doctor", "Hospital", "Specialty", "Date", "Time"];

    let cells: Vec<[&str; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.patient_name.as_str(),
                r.doctor_name.as_str(),
                r.hospital_name.as_str(),
                r.specialty.as_str(),
                r.date.as_str(),
                r.time.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let pad_row = |values: &[&str; 6]| -> String {
        values
            .iter()
            .zip(widths.iter())
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = vec![format!("{}  {}", pad_row(&HEADERS), "Id").bold().to_string()];
    for (row, values) in rows.iter().zip(&cells) {
        lines.push(format!("{}  {}", pad_row(values), row.id.dimmed()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn appointment(id: &str, date: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_name: "Jane Doe".to_string(),
            doctor_name: "Dr. Grey".to_string(),
            hospital_name: "City Hospital".to_string(),
            specialty: "Cardiology".to_string(),
            date: date.to_string(),
            time: "09:30".to_string(),
            reason: Some("Checkup".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let rows = vec![
            DashboardRow::from(&appointment("a1", "2023-01-10")),
            DashboardRow::from(&appointment("b2", "2023-01-18")),
        ];
        let table = render_table(&rows);

        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("10/01/2023"));
        assert!(table.contains("9:30 AM - 9:30 AM"));
        assert!(table.contains("b2"));
    }

    #[test]
    fn table_keeps_id_intact() {
        let rows = vec![DashboardRow::from(&appointment("é1 ", "2023-01-10"))];
        let table = render_table(&rows);

        let line = table.lines().nth(1).unwrap();
        assert!(line.ends_with(&"é1 ".dimmed().to_string()));
        assert!(line.contains("9:30 AM - 9:30 AM  "));
    }

    #[test]
    fn month_lists_appointments_under_their_week() {
        let reference = NaiveDate::from_ymd_opt(2023, 1, 18).unwrap();
        let appointments = vec![appointment("a1", "2023-01-18")];
        let grid = MonthGrid::project(reference, reference, &appointments);

        let out = render_month(&grid, reference, Some("Dr. Grey"));

        assert!(out.contains("January 18, 2023"));
        assert!(out.contains("Jane Doe (Dr. Grey) 9:30 AM"));
        assert!(out.contains("Jan 18"));
    }

    #[test]
    fn appointment_detail_includes_reason() {
        let out = appointment("a1", "2023-01-18").render();
        assert!(out.contains("Checkup"));
        assert!(out.contains("18/01/2023"));
    }
}
