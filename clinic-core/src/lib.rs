//! Core types for the clinic appointment book.
//!
//! - `appointment`: the stored record plus draft/patch shapes
//! - `storage`: key-value slot persistence of the appointment list
//! - `repository`: create/update/delete/find over the in-memory list
//! - `calendar`: 6-week month grid projection
//! - `filter`: dashboard search
//! - `validate`: required-field checks for form submissions

pub mod appointment;
pub mod calendar;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod repository;
pub mod storage;
pub mod validate;

pub use appointment::{Appointment, AppointmentDraft, AppointmentPatch};
pub use error::{ClinicError, ClinicResult};
