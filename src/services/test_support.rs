//! In-memory [`ClinicApi`] fake shared by loader and dispatcher tests.

use std::cell::RefCell;

use crate::net::api::{ApiError, ClinicApi};
use crate::net::types::{Appointment, AppointmentStatus, NewPet, Pet, RecordId};

#[derive(Default)]
pub struct FakeApi {
    pub pets: RefCell<Vec<Pet>>,
    pub appointments: RefCell<Vec<Appointment>>,
    /// Returned by both list calls when set.
    pub list_error: RefCell<Option<ApiError>>,
    /// Returned by every create when set.
    pub create_error: RefCell<Option<ApiError>>,
    /// Pet names whose create is rejected with a 400.
    pub reject_names: RefCell<Vec<String>>,
    pub delete_error: RefCell<Option<ApiError>>,
    /// Request log, e.g. `"GET pets"`, `"POST pets Buddy"`, `"DELETE pets 1"`.
    pub calls: RefCell<Vec<String>>,
    next_id: RefCell<u32>,
}

impl FakeApi {
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        let fake = Self::default();
        *fake.pets.borrow_mut() = pets;
        fake
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

pub fn pet(id: &str, name: &str) -> Pet {
    Pet {
        id: RecordId::new(id),
        name: name.to_owned(),
        species: "Dog".to_owned(),
        breed: None,
        age: Some(3),
        owner_name: "John".to_owned(),
        owner_phone: "555-0123".to_owned(),
    }
}

pub fn appointment(id: &str, status: &str) -> Appointment {
    Appointment {
        id: RecordId::new(id),
        pet_name: "Buddy".to_owned(),
        appointment_date: Some("2024-05-01T10:30:00Z".to_owned()),
        reason: "Checkup".to_owned(),
        status: AppointmentStatus::parse(status),
        notes: None,
    }
}

#[async_trait::async_trait(?Send)]
impl ClinicApi for FakeApi {
    async fn list_pets(&self) -> Result<Vec<Pet>, ApiError> {
        self.calls.borrow_mut().push("GET pets".to_owned());
        if let Some(err) = self.list_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.pets.borrow().clone())
    }

    async fn create_pet(&self, new: &NewPet) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("POST pets {}", new.name));
        if let Some(err) = self.create_error.borrow().clone() {
            return Err(err);
        }
        if self.reject_names.borrow().contains(&new.name) {
            return Err(ApiError::Status(400));
        }
        let Some(age) = new.age else {
            return Err(ApiError::Status(400));
        };
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            format!("new-{next}")
        };
        self.pets.borrow_mut().push(Pet {
            id: RecordId::new(id),
            name: new.name.clone(),
            species: new.species.clone(),
            breed: Some(new.breed.clone()),
            age: Some(i64::from(age)),
            owner_name: new.owner_name.clone(),
            owner_phone: new.owner_phone.clone(),
        });
        Ok(())
    }

    async fn delete_pet(&self, id: &RecordId) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("DELETE pets {id}"));
        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }
        let mut pets = self.pets.borrow_mut();
        let before = pets.len();
        pets.retain(|p| &p.id != id);
        if pets.len() == before { Err(ApiError::Status(404)) } else { Ok(()) }
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.calls.borrow_mut().push("GET appointments".to_owned());
        if let Some(err) = self.list_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.appointments.borrow().clone())
    }
}
