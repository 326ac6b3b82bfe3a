//! Dashboard search: patient/doctor substring and date range.

use serde::Serialize;

use crate::appointment::Appointment;
use crate::format::{format_table_date, format_time_12h};
use crate::repository::AppointmentRepository;
use crate::storage::KeyValueStore;

/// Dashboard search criteria. Empty strings count as "not set".
///
/// Date bounds are inclusive and compared as ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    pub patient: Option<String>,
    pub doctor: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DashboardFilter {
    pub fn new(
        patient: Option<String>,
        doctor: Option<String>,
        start: Option<String>,
        end: Option<String>,
    ) -> Self {
        DashboardFilter {
            patient: non_empty(patient),
            doctor: non_empty(doctor),
            start: non_empty(start),
            end: non_empty(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patient.is_none() && self.doctor.is_none() && self.start.is_none() && self.end.is_none()
    }

    pub fn matches(&self, apt: &Appointment) -> bool {
        contains_ci(&apt.patient_name, self.patient.as_deref())
            && contains_ci(&apt.doctor_name, self.doctor.as_deref())
            && self.in_range(&apt.date)
    }

    /// Matching appointments, in insertion order.
    pub fn apply<'a, S: KeyValueStore>(
        &self,
        repo: &'a AppointmentRepository<S>,
    ) -> Vec<&'a Appointment> {
        repo.filter(|a| self.matches(a))
    }

    fn in_range(&self, date: &str) -> bool {
        let start = self.start.as_deref().filter(|s| !s.is_empty());
        let end = self.end.as_deref().filter(|s| !s.is_empty());

        match (start, end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            (Some(start), None) => date >= start,
            (None, Some(end)) => date <= end,
            (None, None) => true,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// One row of the dashboard table, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRow {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub specialty: String,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `h:mm AM - h:mm AM`
    pub time: String,
}

impl From<&Appointment> for DashboardRow {
    fn from(apt: &Appointment) -> Self {
        let time = format_time_12h(&apt.time);
        DashboardRow {
            id: apt.id.clone(),
            patient_name: apt.patient_name.clone(),
            doctor_name: apt.doctor_name.clone(),
            hospital_name: apt.hospital_name.clone(),
            specialty: apt.specialty.clone(),
            date: format_table_date(&apt.date),
            time: format!("{} - {}", time, time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::tests::make_appointment;
    use crate::storage::{AppointmentStore, MemoryStore};

    fn sample() -> AppointmentRepository<MemoryStore> {
        let mut store = AppointmentStore::new(MemoryStore::new());
        store
            .save(&[
                make_appointment("a", "Alice Smith", "Dr. Grey", "2023-01-10"),
                make_appointment("b", "Bob Stone", "Dr. House", "2023-01-18"),
                make_appointment("c", "Carol Smithers", "Dr. Grey", "2023-01-25"),
            ])
            .unwrap();
        AppointmentRepository::open(store)
    }

    fn ids(found: Vec<&Appointment>) -> Vec<&str> {
        found.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn no_criteria_returns_everything_in_order() {
        let all = sample();
        let filter = DashboardFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(filter.apply(&all)), vec!["a", "b", "c"]);
    }

    #[test]
    fn date_range_is_inclusive_window() {
        let all = sample();
        let filter = DashboardFilter::new(
            None,
            None,
            Some("2023-01-15".into()),
            Some("2023-01-20".into()),
        );
        assert_eq!(ids(filter.apply(&all)), vec!["b"]);

        let filter = DashboardFilter::new(
            None,
            None,
            Some("2023-01-10".into()),
            Some("2023-01-18".into()),
        );
        assert_eq!(ids(filter.apply(&all)), vec!["a", "b"]);
    }

    #[test]
    fn open_ended_ranges() {
        let all = sample();

        let from = DashboardFilter::new(None, None, Some("2023-01-18".into()), None);
        assert_eq!(ids(from.apply(&all)), vec!["b", "c"]);

        let until = DashboardFilter::new(None, None, None, Some("2023-01-18".into()));
        assert_eq!(ids(until.apply(&all)), vec!["a", "b"]);
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let all = sample();

        let filter = DashboardFilter::new(Some("SMITH".into()), None, None, None);
        assert_eq!(ids(filter.apply(&all)), vec!["a", "c"]);

        let filter = DashboardFilter::new(None, Some("house".into()), None, None);
        assert_eq!(ids(filter.apply(&all)), vec!["b"]);
    }

    #[test]
    fn criteria_are_anded() {
        let all = sample();
        let filter = DashboardFilter::new(
            Some("smith".into()),
            Some("grey".into()),
            Some("2023-01-20".into()),
            None,
        );
        assert_eq!(ids(filter.apply(&all)), vec!["c"]);
    }

    #[test]
    fn empty_strings_are_ignored() {
        let all = sample();
        let filter = DashboardFilter::new(
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
            Some(String::new()),
        );
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&all).len(), 3);
    }

    #[test]
    fn dashboard_row_formats_date_and_time() {
        let apt = make_appointment("a", "Alice", "Dr. Grey", "2023-01-10");
        let row = DashboardRow::from(&apt);
        assert_eq!(row.date, "10/01/2023");
        assert_eq!(row.time, "2:30 PM - 2:30 PM");
        assert_eq!(row.id, "a");
    }
}
