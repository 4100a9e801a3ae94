//! Add-pet modal visibility and form fields.
//!
//! Two states, `Closed` and `Open`. Every transition into `Closed` clears the
//! form; a failed submit leaves the modal open so the user can retry with
//! the same values.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::NewPet;

/// Raw text of the add-pet form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub owner_name: String,
    pub owner_phone: String,
}

impl PetForm {
    /// Build the create payload. Only `age` is coerced; every other field is
    /// sent as typed and left to the server to validate.
    #[must_use]
    pub fn to_new_pet(&self) -> NewPet {
        NewPet {
            name: self.name.clone(),
            species: self.species.clone(),
            breed: self.breed.clone(),
            age: coerce_age(&self.age),
            owner_name: self.owner_name.clone(),
            owner_phone: self.owner_phone.clone(),
        }
    }
}

/// One input of the add-pet form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetField {
    Name,
    Species,
    Breed,
    Age,
    OwnerName,
    OwnerPhone,
}

impl PetField {
    pub const ALL: [Self; 6] = [Self::Name, Self::Species, Self::Breed, Self::Age, Self::OwnerName, Self::OwnerPhone];

    /// Form control name, matching the JSON key it feeds.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Species => "species",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::OwnerName => "owner_name",
            Self::OwnerPhone => "owner_phone",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Pet Name",
            Self::Species => "Species",
            Self::Breed => "Breed",
            Self::Age => "Age",
            Self::OwnerName => "Owner Name",
            Self::OwnerPhone => "Owner Phone",
        }
    }

    /// Breed is the only optional input.
    #[must_use]
    pub fn required(self) -> bool {
        self != Self::Breed
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Age => "number",
            Self::OwnerPhone => "tel",
            _ => "text",
        }
    }
}

impl PetForm {
    #[must_use]
    pub fn get(&self, field: PetField) -> &str {
        match field {
            PetField::Name => &self.name,
            PetField::Species => &self.species,
            PetField::Breed => &self.breed,
            PetField::Age => &self.age,
            PetField::OwnerName => &self.owner_name,
            PetField::OwnerPhone => &self.owner_phone,
        }
    }

    pub fn set(&mut self, field: PetField, value: String) {
        let slot = match field {
            PetField::Name => &mut self.name,
            PetField::Species => &mut self.species,
            PetField::Breed => &mut self.breed,
            PetField::Age => &mut self.age,
            PetField::OwnerName => &mut self.owner_name,
            PetField::OwnerPhone => &mut self.owner_phone,
        };
        *slot = value;
    }
}

/// Integer prefix of `raw`, the way a browser `parseInt` reads form input:
/// leading whitespace skipped, an optional `+`, then digits up to the first
/// non-digit. Returns `None` when there are no digits or the value does not
/// fit.
#[must_use]
pub fn coerce_age(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
}

/// Modal lifecycle plus the form it hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub form: PetForm,
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Closed -> Open. Returns `true` when the phase changed.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Open -> Closed, clearing every field. Returns `true` when the phase
    /// changed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.form = PetForm::default();
        true
    }
}
