//! Card view models for pets and appointments.
//!
//! Each builder is a pure function of one record. Leptos components only
//! lay the resulting strings out, so everything a card shows is decided
//! (and tested) here.

use crate::net::types::{Appointment, AppointmentStatus, Pet, RecordId};
use crate::util::dates::appointment_date_parts;

pub const BREED_FALLBACK: &str = "Not specified";
pub const AGE_FALLBACK: &str = "Not specified";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetCardView {
    pub id: RecordId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub owner_name: String,
    pub owner_phone: String,
}

impl PetCardView {
    #[must_use]
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed_label().unwrap_or(BREED_FALLBACK).to_owned(),
            age: pet.age.map_or_else(|| AGE_FALLBACK.to_owned(), |age| format!("{age} years old")),
            owner_name: pet.owner_name.clone(),
            owner_phone: pet.owner_phone.clone(),
        }
    }
}

/// Visual category of an appointment status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCategory {
    Default,
    Completed,
    Cancelled,
}

impl StatusCategory {
    /// Unknown statuses fall through to `Default` rather than failing.
    #[must_use]
    pub fn for_status(status: &AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Completed => Self::Completed,
            AppointmentStatus::Cancelled => Self::Cancelled,
            AppointmentStatus::Scheduled | AppointmentStatus::Other(_) => Self::Default,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentCardView {
    pub id: RecordId,
    pub pet_name: String,
    pub status_label: String,
    pub status_category: StatusCategory,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub notes: Option<String>,
}

impl AppointmentCardView {
    #[must_use]
    pub fn from_appointment(appointment: &Appointment) -> Self {
        let parts = appointment_date_parts(appointment.appointment_date.as_deref());
        Self {
            id: appointment.id.clone(),
            pet_name: appointment.pet_name.clone(),
            status_label: appointment.status.as_str().to_owned(),
            status_category: StatusCategory::for_status(&appointment.status),
            date: parts.date,
            time: parts.time,
            reason: appointment.reason.clone(),
            notes: appointment.notes_label().map(str::to_owned),
        }
    }
}
