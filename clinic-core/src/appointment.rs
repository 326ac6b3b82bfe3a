//! Appointment records and the draft/patch shapes used to create and edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::format_time_12h;

/// A booked appointment, as persisted.
///
/// `date` stays an ISO `YYYY-MM-DD` string: calendar bucketing compares it
/// by equality and the dashboard compares it lexicographically, which only
/// matches chronological order for that exact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub specialty: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// 24-hour `HH:MM`
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Build a stored record from a draft that already passed validation.
    pub(crate) fn from_draft(id: String, draft: AppointmentDraft, created_at: DateTime<Utc>) -> Self {
        Appointment {
            id,
            patient_name: draft.patient_name.unwrap_or_default(),
            doctor_name: draft.doctor_name.unwrap_or_default(),
            hospital_name: draft.hospital_name.unwrap_or_default(),
            specialty: draft.specialty.unwrap_or_default(),
            date: draft.date.unwrap_or_default(),
            time: draft.time.unwrap_or_default(),
            reason: normalize_reason(draft.reason),
            created_at,
        }
    }

    /// Overwrite every field the patch carries. `id` and `created_at` are untouched.
    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(v) = patch.patient_name {
            self.patient_name = v;
        }
        if let Some(v) = patch.doctor_name {
            self.doctor_name = v;
        }
        if let Some(v) = patch.hospital_name {
            self.hospital_name = v;
        }
        if let Some(v) = patch.specialty {
            self.specialty = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.time {
            self.time = v;
        }
        if patch.reason.is_some() {
            self.reason = normalize_reason(patch.reason);
        }
    }

    /// Short line shown on a calendar cell, e.g. `Jane Doe (Dr. Smith) 2:30 PM`.
    pub fn card_text(&self) -> String {
        format!(
            "{} ({}) {}",
            self.patient_name,
            self.doctor_name,
            format_time_12h(&self.time)
        )
    }
}

/// Form values before validation. Any field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub hospital_name: Option<String>,
    pub specialty: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

/// Partial edit of a stored appointment. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub hospital_name: Option<String>,
    pub specialty: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        *self == AppointmentPatch::default()
    }
}

// An empty reason field in the form means "no reason".
fn normalize_reason(reason: Option<String>) -> Option<String> {
    reason.filter(|r| !r.trim().is_empty())
}
