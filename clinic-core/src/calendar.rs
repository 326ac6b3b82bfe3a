//! Month grid projection for the calendar view.
//!
//! A grid is always 6 weeks of 7 days starting on a Sunday, so it covers
//! the whole displayed month plus leading and trailing days from the
//! neighbouring months.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::appointment::Appointment;
use crate::error::{ClinicError, ClinicResult};
use crate::format::{date_key, format_display_date, month_abbrev};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Column headings, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day in the grid with the appointments booked on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for filler days from the previous or next month.
    pub in_month: bool,
    pub is_today: bool,
    /// Fridays get a display highlight.
    pub is_friday: bool,
    /// `Jan 1` on the first of a month, the bare day number otherwise.
    pub label: String,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out the month containing `reference`. Only its year and month
    /// matter. `today` marks the current-day cell.
    pub fn project(reference: NaiveDate, today: NaiveDate, appointments: &[Appointment]) -> Self {
        let first = first_of_month(reference);
        let offset = first.weekday().num_days_from_sunday() as i64;
        let grid_start = first - Duration::days(offset);

        let cells = (0..CELLS_PER_GRID as i64)
            .map(|i| {
                let date = grid_start + Duration::days(i);
                let key = date_key(date);

                DayCell {
                    date,
                    in_month: date.month() == first.month() && date.year() == first.year(),
                    is_today: date == today,
                    is_friday: date.weekday() == Weekday::Fri,
                    label: day_label(date),
                    appointments: appointments
                        .iter()
                        .filter(|a| a.date == key)
                        .cloned()
                        .collect(),
                }
            })
            .collect();

        MonthGrid {
            year: first.year(),
            month: first.month(),
            cells,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Last day of the displayed month.
    pub fn last_day(&self) -> NaiveDate {
        next_month(self.first_day()) - Duration::days(1)
    }

    /// The grid as rows of seven cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    pub fn appointment_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.in_month)
            .map(|c| c.appointments.len())
            .sum()
    }
}

/// Header text for the calendar, e.g. `January 18, 2023`.
pub fn title(reference: NaiveDate) -> String {
    format_display_date(reference)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month before `date`'s month.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(date) - Duration::days(1))
}

/// First day of the month after `date`'s month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(first)
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> ClinicResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| ClinicError::InvalidMonth(s.to_string()))
}

fn day_label(date: NaiveDate) -> String {
    if date.day() == 1 {
        format!("{} {}", month_abbrev(date.month()), date.day())
    } else {
        date.day().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::tests::make_appointment;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_always_has_42_cells_with_first_in_month() {
        let today = ymd(2023, 1, 18);
        for year in [2023, 2024] {
            for month in 1..=12 {
                let grid = MonthGrid::project(ymd(year, month, 15), today, &[]);
                assert_eq!(grid.cells.len(), CELLS_PER_GRID);

                let first = grid.cell_for(ymd(year, month, 1)).unwrap();
                assert!(first.in_month);
                assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn january_2023_starts_on_its_own_sunday() {
        // 2023-01-01 is a Sunday: no leading days.
        let grid = MonthGrid::project(ymd(2023, 1, 18), ymd(2023, 1, 18), &[]);
        assert_eq!(grid.cells[0].date, ymd(2023, 1, 1));
        assert_eq!(grid.cells[0].label, "Jan 1");
        assert!(grid.cells[0].in_month);
        assert_eq!(grid.cells[41].date, ymd(2023, 2, 11));
    }

    #[test]
    fn leading_days_come_from_previous_month() {
        // 2023-02-01 is a Wednesday.
        let grid = MonthGrid::project(ymd(2023, 2, 10), ymd(2023, 1, 18), &[]);
        assert_eq!(grid.cells[0].date, ymd(2023, 1, 29));
        assert!(!grid.cells[0].in_month);
        assert_eq!(grid.cells[0].label, "29");
        assert_eq!(grid.cells[3].label, "Feb 1");
        assert_eq!(grid.cells.iter().filter(|c| c.in_month).count(), 28);
    }

    #[test]
    fn trailing_first_of_next_month_is_labelled() {
        let grid = MonthGrid::project(ymd(2023, 2, 10), ymd(2023, 1, 18), &[]);
        let march_first = grid.cell_for(ymd(2023, 3, 1)).unwrap();
        assert!(!march_first.in_month);
        assert_eq!(march_first.label, "Mar 1");
    }

    #[test]
    fn marks_today_and_fridays() {
        let grid = MonthGrid::project(ymd(2023, 1, 1), ymd(2023, 1, 18), &[]);

        let today: Vec<_> = grid.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, ymd(2023, 1, 18));

        assert_eq!(grid.cells.iter().filter(|c| c.is_friday).count(), 6);
        assert!(grid.cell_for(ymd(2023, 1, 6)).unwrap().is_friday);
    }

    #[test]
    fn today_outside_grid_marks_nothing() {
        let grid = MonthGrid::project(ymd(2023, 6, 1), ymd(2023, 1, 18), &[]);
        assert!(grid.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn buckets_appointments_by_exact_date_including_filler_days() {
        let appointments = vec![
            make_appointment("a", "Ann", "Bob", "2023-02-14"),
            make_appointment("b", "Cat", "Dan", "2023-01-30"),
            make_appointment("c", "Eve", "Bob", "2023-02-14"),
            make_appointment("d", "Fay", "Bob", "2023-05-01"),
        ];

        let grid = MonthGrid::project(ymd(2023, 2, 1), ymd(2023, 1, 18), &appointments);

        let valentines = grid.cell_for(ymd(2023, 2, 14)).unwrap();
        let ids: Vec<&str> = valentines.appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let filler = grid.cell_for(ymd(2023, 1, 30)).unwrap();
        assert!(!filler.in_month);
        assert_eq!(filler.appointments.len(), 1);

        let total: usize = grid.cells.iter().map(|c| c.appointments.len()).sum();
        assert_eq!(total, 3);
        assert_eq!(grid.appointment_count(), 2);
    }

    #[test]
    fn weeks_are_six_rows_of_seven() {
        let grid = MonthGrid::project(ymd(2024, 2, 29), ymd(2024, 2, 29), &[]);
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), WEEKS_PER_GRID);
        assert!(weeks.iter().all(|w| w.len() == DAYS_PER_WEEK));
        assert_eq!(grid.last_day(), ymd(2024, 2, 29));
    }

    #[test]
    fn month_navigation() {
        assert_eq!(previous_month(ymd(2023, 1, 18)), ymd(2022, 12, 1));
        assert_eq!(next_month(ymd(2023, 12, 31)), ymd(2024, 1, 1));
        assert_eq!(next_month(ymd(2023, 1, 31)), ymd(2023, 2, 1));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2023-01").unwrap(), ymd(2023, 1, 1));
        assert!(matches!(
            parse_month("2023-13"),
            Err(ClinicError::InvalidMonth(_))
        ));
        assert!(parse_month("january").is_err());
    }

    #[test]
    fn test_title() {
        assert_eq!(title(ymd(2023, 1, 18)), "January 18, 2023");
    }
}
