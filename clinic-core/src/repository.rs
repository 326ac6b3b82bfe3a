//! The in-memory appointment list and its CRUD operations.

use chrono::Utc;
use uuid::Uuid;

use crate::appointment::{Appointment, AppointmentDraft, AppointmentPatch};
use crate::error::{ClinicError, ClinicResult};
use crate::storage::{AppointmentStore, KeyValueStore};
use crate::validate::{validate, validate_patch};

/// Owns the appointment list and writes it back after every mutation.
///
/// Order is insertion order; nothing here sorts by date or name.
pub struct AppointmentRepository<S> {
    appointments: Vec<Appointment>,
    store: AppointmentStore<S>,
}

impl<S: KeyValueStore> AppointmentRepository<S> {
    /// Load the persisted list once and keep it in memory.
    pub fn open(store: AppointmentStore<S>) -> Self {
        let appointments = store.load();
        AppointmentRepository { appointments, store }
    }

    pub fn store(&self) -> &AppointmentStore<S> {
        &self.store
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Appointments satisfying `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&Appointment>
    where
        P: Fn(&Appointment) -> bool,
    {
        self.appointments.iter().filter(|&a| predicate(a)).collect()
    }

    /// Distinct doctor names, in the order they were first booked.
    pub fn doctors(&self) -> Vec<&str> {
        let mut doctors: Vec<&str> = Vec::new();
        for apt in &self.appointments {
            if !doctors.contains(&apt.doctor_name.as_str()) {
                doctors.push(&apt.doctor_name);
            }
        }
        doctors
    }

    /// Validate the draft, assign an id and creation time, append and persist.
    ///
    /// Nothing changes in memory unless the write succeeds.
    pub fn insert(&mut self, draft: AppointmentDraft) -> ClinicResult<Appointment> {
        let report = validate(&draft);
        if !report.is_valid() {
            return Err(ClinicError::Validation(report));
        }

        let id = self.fresh_id();
        let appointment = Appointment::from_draft(id, draft, Utc::now());

        let mut next = self.appointments.clone();
        next.push(appointment.clone());
        self.commit(next)?;

        tracing::debug!(id = %appointment.id, date = %appointment.date, "inserted appointment");
        Ok(appointment)
    }

    /// Merge the patch over the stored record. `id` and `created_at` never change.
    pub fn update(&mut self, id: &str, patch: AppointmentPatch) -> ClinicResult<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ClinicError::NotFound(id.to_string()))?;

        let report = validate_patch(&patch);
        if !report.is_valid() {
            return Err(ClinicError::Validation(report));
        }

        let mut next = self.appointments.clone();
        next[index].apply(patch);
        let updated = next[index].clone();
        self.commit(next)?;

        tracing::debug!(id = %id, "updated appointment");
        Ok(updated)
    }

    /// Remove the appointment if present. The list is persisted either way.
    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> ClinicResult<bool> {
        let next: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.appointments.len();
        self.commit(next)?;

        tracing::debug!(id = %id, removed, "deleted appointment");
        Ok(removed)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }

    /// Persist `next`, then make it the in-memory list.
    fn commit(&mut self, next: Vec<Appointment>) -> ClinicResult<()> {
        self.store.save(&next)?;
        self.appointments = next;
        Ok(())
    }
}
