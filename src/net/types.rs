//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! Records mirror the server serializers but stay lenient on input: unknown
//! fields are ignored, ids may arrive as numbers or strings, and appointment
//! statuses outside the known set are kept verbatim, and odd pet fields
//! (null text, negative or missing ages) decode to blanks instead of failing
//! the whole collection decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned record identifier, kept opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => Ok(Self(number.to_string())),
            serde_json::Value::String(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(D::Error::custom("expected number or non-empty string id")),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A registered pet as returned by `GET /api/pets/`.
///
/// Only `id` is required. Missing or null text fields decode as blank, and
/// an age that is not an integral number decodes as `None`, so one odd
/// record never fails the whole list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pet {
    pub id: RecordId,
    #[serde(default, deserialize_with = "deserialize_string_or_blank")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_blank")]
    pub species: String,
    /// Blank breeds come back as `""` or `null`; both mean "not specified".
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_age")]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_string_or_blank")]
    pub owner_name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_blank")]
    pub owner_phone: String,
}

impl Pet {
    /// Breed text when the server sent a non-blank value.
    #[must_use]
    pub fn breed_label(&self) -> Option<&str> {
        self.breed.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }
}

/// Create payload for `POST /api/pets/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    /// `None` serializes as `null`, which the server rejects.
    pub age: Option<u32>,
    pub owner_name: String,
    pub owner_phone: String,
}

/// Appointment lifecycle status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    /// Any value the client does not know about, kept as sent.
    Other(String),
}

impl AppointmentStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "scheduled" => Self::Scheduled,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map_or_else(|| Self::Other(String::new()), |raw| Self::parse(&raw)))
    }
}

/// A scheduled visit as returned by `GET /api/appointments/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    #[serde(default)]
    pub pet_name: String,
    /// Raw timestamp; parsed at render time so a bad value only affects
    /// its own card.
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    #[must_use]
    pub fn notes_label(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

fn deserialize_string_or_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any integral JSON number, negative included. Everything else is `None`.
fn deserialize_lenient_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Number(number) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(int) = number.as_i64() {
        return Ok(Some(int));
    }
    #[allow(clippy::cast_possible_truncation)]
    let age = number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= 1e15)
        .map(|f| f as i64);
    Ok(age)
}
