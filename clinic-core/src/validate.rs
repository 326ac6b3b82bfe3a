//! Presence checks for appointment form submissions.
//!
//! Only emptiness is checked. Date and time formats are not inspected.

use std::fmt;

use crate::appointment::{AppointmentDraft, AppointmentPatch};

/// A form field that must be filled in before an appointment is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    PatientName,
    DoctorName,
    HospitalName,
    Specialty,
    Date,
    Time,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::PatientName,
        RequiredField::DoctorName,
        RequiredField::HospitalName,
        RequiredField::Specialty,
        RequiredField::Date,
        RequiredField::Time,
    ];

    /// Name of the form input this field is bound to.
    pub fn field_name(&self) -> &'static str {
        match self {
            RequiredField::PatientName => "patientName",
            RequiredField::DoctorName => "doctorName",
            RequiredField::HospitalName => "hospitalName",
            RequiredField::Specialty => "specialty",
            RequiredField::Date => "appointmentDate",
            RequiredField::Time => "appointmentTime",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::PatientName => "Patient name is required",
            RequiredField::DoctorName => "Doctor name is required",
            RequiredField::HospitalName => "Hospital is required",
            RequiredField::Specialty => "Specialty is required",
            RequiredField::Date => "Date is required",
            RequiredField::Time => "Time is required",
        }
    }
}

/// Outcome of validating a draft: one entry per missing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    missing: Vec<RequiredField>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing(&self) -> &[RequiredField] {
        &self.missing
    }

    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.missing.contains(&field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let messages: Vec<&str> = self.missing.iter().map(|m| m.message()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|v| v.is_empty())
}

fn draft_value(draft: &AppointmentDraft, field: RequiredField) -> Option<&String> {
    match field {
        RequiredField::PatientName => draft.patient_name.as_ref(),
        RequiredField::DoctorName => draft.doctor_name.as_ref(),
        RequiredField::HospitalName => draft.hospital_name.as_ref(),
        RequiredField::Specialty => draft.specialty.as_ref(),
        RequiredField::Date => draft.date.as_ref(),
        RequiredField::Time => draft.time.as_ref(),
    }
}

fn patch_value(patch: &AppointmentPatch, field: RequiredField) -> Option<&String> {
    match field {
        RequiredField::PatientName => patch.patient_name.as_ref(),
        RequiredField::DoctorName => patch.doctor_name.as_ref(),
        RequiredField::HospitalName => patch.hospital_name.as_ref(),
        RequiredField::Specialty => patch.specialty.as_ref(),
        RequiredField::Date => patch.date.as_ref(),
        RequiredField::Time => patch.time.as_ref(),
    }
}

/// Check every required field of a new appointment independently.
pub fn validate(draft: &AppointmentDraft) -> ValidationReport {
    let missing = RequiredField::ALL
        .into_iter()
        .filter(|f| is_blank(draft_value(draft, *f)))
        .collect();

    ValidationReport { missing }
}

/// Check an edit. Fields the patch leaves out keep their stored value and
/// are not checked; fields it sets to an empty string are reported.
pub fn validate_patch(patch: &AppointmentPatch) -> ValidationReport {
    let missing = RequiredField::ALL
        .into_iter()
        .filter(|f| patch_value(patch, *f).is_some_and(|v| v.is_empty()))
        .collect();

    ValidationReport { missing }
}
