//! Collection loader: one full fetch per call, classified into a
//! [`CollectionState`].
//!
//! Failures of any kind (transport, status, decode) become
//! [`CollectionState::Error`]; the cause is logged and never shown.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::net::api::{ApiError, ClinicApi};
use crate::net::types::{Appointment, Pet};
use crate::state::collection::{CollectionKind, CollectionState};

pub async fn load_pets(api: &dyn ClinicApi) -> CollectionState<Pet> {
    settle(CollectionKind::Pets, api.list_pets().await)
}

pub async fn load_appointments(api: &dyn ClinicApi) -> CollectionState<Appointment> {
    settle(CollectionKind::Appointments, api.list_appointments().await)
}

fn settle<T>(kind: CollectionKind, result: Result<Vec<T>, ApiError>) -> CollectionState<T> {
    match &result {
        Ok(items) => log::debug!("loaded {} {}", items.len(), kind.noun()),
        Err(e) => log::error!("error loading {}: {e}", kind.noun()),
    }
    CollectionState::from_result(result)
}
