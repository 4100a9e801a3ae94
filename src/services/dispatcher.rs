//! Mutation dispatcher for pet create/delete, the stub actions, and sample
//! seeding.
//!
//! DESIGN
//! ======
//! Dispatch is split in two. The async half talks to the API and returns an
//! [`ActionOutcome`]; the pure `apply_*` half folds that outcome into modal
//! and notice state and reports which collection to reload. Neither half
//! retries, deduplicates, or cancels anything.

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

use futures::future::join_all;

use crate::net::api::{ApiError, ClinicApi};
use crate::net::types::{NewPet, RecordId};
use crate::state::collection::CollectionKind;
use crate::state::modal::{ModalState, PetForm};
use crate::state::notices::{NoticeLevel, NoticeQueue};

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this pet?";

/// Actions a user can trigger from the clinic page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CreatePet,
    DeletePet,
    EditPet,
    BookAppointment,
}

impl Action {
    fn success_message(self) -> Option<&'static str> {
        match self {
            Self::CreatePet => Some("Pet added successfully!"),
            Self::DeletePet => Some("Pet deleted successfully!"),
            Self::EditPet | Self::BookAppointment => None,
        }
    }

    fn failure_message(self) -> Option<&'static str> {
        match self {
            Self::CreatePet => Some("Error adding pet. Please try again."),
            Self::DeletePet => Some("Error deleting pet. Please try again."),
            Self::EditPet | Self::BookAppointment => None,
        }
    }

    /// Collection whose contents change when this action succeeds.
    fn affects(self) -> Option<CollectionKind> {
        match self {
            Self::CreatePet | Self::DeletePet => Some(CollectionKind::Pets),
            Self::EditPet | Self::BookAppointment => None,
        }
    }
}

/// Capabilities that exist in the UI but have no backend path yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    EditPet,
    BookAppointment,
}

impl Feature {
    #[must_use]
    pub fn coming_soon_message(self) -> &'static str {
        match self {
            Self::EditPet => "Edit functionality coming soon!",
            Self::BookAppointment => "Appointment booking feature coming soon!",
        }
    }
}

/// Result of one dispatched action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    Failed(ApiError),
    /// The user refused the confirmation prompt; nothing was sent.
    Declined,
    NotImplemented(Feature),
}

pub async fn create_pet(api: &dyn ClinicApi, form: &PetForm) -> ActionOutcome {
    let pet = form.to_new_pet();
    match api.create_pet(&pet).await {
        Ok(()) => {
            log::info!("created pet {:?}", pet.name);
            ActionOutcome::Done
        }
        Err(e) => {
            log::error!("error adding pet: {e}");
            ActionOutcome::Failed(e)
        }
    }
}

/// Delete a pet after `confirm` approves [`DELETE_CONFIRM_PROMPT`]. A
/// declined prompt issues no request.
pub async fn delete_pet(api: &dyn ClinicApi, id: &RecordId, confirm: impl FnOnce(&str) -> bool) -> ActionOutcome {
    if !confirm(DELETE_CONFIRM_PROMPT) {
        return ActionOutcome::Declined;
    }
    match api.delete_pet(id).await {
        Ok(()) => {
            log::info!("deleted pet {id}");
            ActionOutcome::Done
        }
        Err(e) => {
            log::error!("error deleting pet {id}: {e}");
            ActionOutcome::Failed(e)
        }
    }
}

#[must_use]
pub fn edit_pet(id: &RecordId) -> ActionOutcome {
    log::debug!("edit requested for pet {id}");
    ActionOutcome::NotImplemented(Feature::EditPet)
}

#[must_use]
pub fn book_appointment() -> ActionOutcome {
    ActionOutcome::NotImplemented(Feature::BookAppointment)
}

/// Fold an outcome into UI state. Returns the collection to reload, if any.
pub fn apply_outcome(
    action: Action,
    outcome: &ActionOutcome,
    modal: &mut ModalState,
    notices: &mut NoticeQueue,
    now_ms: f64,
) -> Option<CollectionKind> {
    match outcome {
        ActionOutcome::Done => {
            if action == Action::CreatePet {
                modal.close();
            }
            if let Some(text) = action.success_message() {
                notices.push(NoticeLevel::Success, text, now_ms);
            }
            action.affects()
        }
        ActionOutcome::Failed(_) => {
            if let Some(text) = action.failure_message() {
                notices.push(NoticeLevel::Error, text, now_ms);
            }
            None
        }
        ActionOutcome::Declined => None,
        ActionOutcome::NotImplemented(feature) => {
            notices.push(NoticeLevel::Info, feature.coming_soon_message(), now_ms);
            None
        }
    }
}

/// Tally of a sample-data seeding run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub failed: usize,
}

/// Demo pets posted by [`seed_sample_pets`].
#[must_use]
pub fn sample_pets() -> Vec<NewPet> {
    vec![
        NewPet {
            name: "Buddy".to_owned(),
            species: "Dog".to_owned(),
            breed: "Golden Retriever".to_owned(),
            age: Some(3),
            owner_name: "John Doe".to_owned(),
            owner_phone: "555-0123".to_owned(),
        },
        NewPet {
            name: "Whiskers".to_owned(),
            species: "Cat".to_owned(),
            breed: "Persian".to_owned(),
            age: Some(2),
            owner_name: "Jane Smith".to_owned(),
            owner_phone: "555-0456".to_owned(),
        },
    ]
}

/// Post every sample pet concurrently. A failed item is logged and counted
/// but never stops the others.
pub async fn seed_sample_pets(api: &dyn ClinicApi) -> SeedReport {
    let samples = sample_pets();
    let results = join_all(samples.iter().map(|pet| api.create_pet(pet))).await;

    let mut report = SeedReport::default();
    for (pet, result) in samples.iter().zip(results) {
        match result {
            Ok(()) => report.created += 1,
            Err(e) => {
                log::error!("error adding sample pet {:?}: {e}", pet.name);
                report.failed += 1;
            }
        }
    }
    report
}

/// Fold a seeding report into notices. Pets always reload afterwards since
/// some items may have landed.
pub fn apply_seed_report(report: SeedReport, notices: &mut NoticeQueue, now_ms: f64) -> CollectionKind {
    let total = report.created + report.failed;
    if report.created == 0 {
        notices.push(NoticeLevel::Error, "Error adding sample data. Please try again.", now_ms);
    } else {
        notices.push(
            NoticeLevel::Success,
            format!("Sample data added! ({} of {total} created)", report.created),
            now_ms,
        );
    }
    CollectionKind::Pets
}
