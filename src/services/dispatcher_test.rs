use futures::executor::block_on;

use super::*;
use crate::services::loader::load_pets;
use crate::services::test_support::{FakeApi, pet};
use crate::state::notices::NoticeLevel;

fn filled_form(name: &str) -> PetForm {
    PetForm {
        name: name.to_owned(),
        species: "Dog".to_owned(),
        breed: String::new(),
        age: "3".to_owned(),
        owner_name: "John".to_owned(),
        owner_phone: "555-0123".to_owned(),
    }
}

fn open_modal_with(form: PetForm) -> ModalState {
    let mut modal = ModalState::default();
    modal.open();
    modal.form = form;
    modal
}

fn last_notice(notices: &NoticeQueue) -> (NoticeLevel, String) {
    let n = notices.items().last().expect("a notice");
    (n.level, n.text.clone())
}

// =============================================================
// Create
// =============================================================

#[test]
fn successful_create_closes_modal_notifies_and_reloads_pets() {
    let api = FakeApi::default();
    let mut modal = open_modal_with(filled_form("Rex"));
    let mut notices = NoticeQueue::default();

    let outcome = block_on(create_pet(&api, &modal.form));
    assert_eq!(outcome, ActionOutcome::Done);

    let reload = apply_outcome(Action::CreatePet, &outcome, &mut modal, &mut notices, 0.0);
    assert_eq!(reload, Some(CollectionKind::Pets));
    assert!(!modal.is_open());
    assert_eq!(modal.form, PetForm::default());
    assert_eq!(last_notice(&notices), (NoticeLevel::Success, "Pet added successfully!".to_owned()));

    let reloaded = block_on(load_pets(&api));
    assert!(reloaded.items().iter().any(|p| p.name == "Rex"));
}

#[test]
fn failed_create_keeps_modal_open_with_values() {
    let api = FakeApi::default();
    *api.create_error.borrow_mut() = Some(ApiError::Status(400));
    let mut modal = open_modal_with(filled_form("Rex"));
    let mut notices = NoticeQueue::default();

    let outcome = block_on(create_pet(&api, &modal.form));
    assert_eq!(outcome, ActionOutcome::Failed(ApiError::Status(400)));

    let reload = apply_outcome(Action::CreatePet, &outcome, &mut modal, &mut notices, 0.0);
    assert_eq!(reload, None);
    assert!(modal.is_open());
    assert_eq!(modal.form, filled_form("Rex"));
    assert_eq!(
        last_notice(&notices),
        (NoticeLevel::Error, "Error adding pet. Please try again.".to_owned())
    );
}

#[test]
fn transport_failure_on_create_is_same_outcome_for_user() {
    let api = FakeApi::default();
    *api.create_error.borrow_mut() = Some(ApiError::Transport("offline".to_owned()));
    let mut modal = open_modal_with(filled_form("Rex"));
    let mut notices = NoticeQueue::default();

    let outcome = block_on(create_pet(&api, &modal.form));
    apply_outcome(Action::CreatePet, &outcome, &mut modal, &mut notices, 0.0);
    assert!(modal.is_open());
    assert_eq!(last_notice(&notices).0, NoticeLevel::Error);
}

#[test]
fn unparseable_age_is_sent_and_rejected_by_server() {
    let api = FakeApi::default();
    let form = PetForm { age: "old".to_owned(), ..filled_form("Rex") };
    let outcome = block_on(create_pet(&api, &form));
    assert!(matches!(outcome, ActionOutcome::Failed(ApiError::Status(400))));
    assert_eq!(api.calls(), vec!["POST pets Rex"]);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn declined_delete_issues_no_request() {
    let api = FakeApi::with_pets(vec![pet("1", "Buddy")]);
    let mut prompted = None;
    let outcome = block_on(delete_pet(&api, &RecordId::new("1"), |msg| {
        prompted = Some(msg.to_owned());
        false
    }));
    assert_eq!(outcome, ActionOutcome::Declined);
    assert_eq!(prompted.as_deref(), Some(DELETE_CONFIRM_PROMPT));
    assert!(api.calls().is_empty());
    assert_eq!(api.pets.borrow().len(), 1);
}

#[test]
fn declined_delete_shows_no_notice_and_no_reload() {
    let mut modal = ModalState::default();
    let mut notices = NoticeQueue::default();
    let reload = apply_outcome(Action::DeletePet, &ActionOutcome::Declined, &mut modal, &mut notices, 0.0);
    assert_eq!(reload, None);
    assert!(notices.is_empty());
}

#[test]
fn confirmed_delete_removes_pet_and_reloads() {
    let api = FakeApi::with_pets(vec![pet("1", "Buddy"), pet("2", "Whiskers")]);
    let mut modal = ModalState::default();
    let mut notices = NoticeQueue::default();

    let outcome = block_on(delete_pet(&api, &RecordId::new("1"), |_| true));
    assert_eq!(outcome, ActionOutcome::Done);
    assert_eq!(api.calls(), vec!["DELETE pets 1"]);

    let reload = apply_outcome(Action::DeletePet, &outcome, &mut modal, &mut notices, 0.0);
    assert_eq!(reload, Some(CollectionKind::Pets));
    assert_eq!(last_notice(&notices), (NoticeLevel::Success, "Pet deleted successfully!".to_owned()));

    let reloaded = block_on(load_pets(&api));
    let names: Vec<&str> = reloaded.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Whiskers"]);
}

#[test]
fn failed_delete_notifies_error_without_reload() {
    let api = FakeApi::with_pets(vec![pet("1", "Buddy")]);
    *api.delete_error.borrow_mut() = Some(ApiError::Status(500));
    let mut modal = ModalState::default();
    let mut notices = NoticeQueue::default();

    let outcome = block_on(delete_pet(&api, &RecordId::new("1"), |_| true));
    let reload = apply_outcome(Action::DeletePet, &outcome, &mut modal, &mut notices, 0.0);
    assert_eq!(reload, None);
    assert_eq!(
        last_notice(&notices),
        (NoticeLevel::Error, "Error deleting pet. Please try again.".to_owned())
    );
}

// =============================================================
// Stub actions
// =============================================================

#[test]
fn edit_and_book_are_not_implemented_rather_than_failed() {
    assert_eq!(edit_pet(&RecordId::new("1")), ActionOutcome::NotImplemented(Feature::EditPet));
    assert_eq!(book_appointment(), ActionOutcome::NotImplemented(Feature::BookAppointment));
    assert!(!matches!(edit_pet(&RecordId::new("1")), ActionOutcome::Failed(_)));
}

#[test]
fn not_implemented_shows_info_notice_only() {
    let mut modal = ModalState::default();
    let mut notices = NoticeQueue::default();
    let reload = apply_outcome(Action::EditPet, &edit_pet(&RecordId::new("1")), &mut modal, &mut notices, 0.0);
    assert_eq!(reload, None);
    assert_eq!(last_notice(&notices), (NoticeLevel::Info, "Edit functionality coming soon!".to_owned()));

    apply_outcome(Action::BookAppointment, &book_appointment(), &mut modal, &mut notices, 0.0);
    assert_eq!(
        last_notice(&notices),
        (NoticeLevel::Info, "Appointment booking feature coming soon!".to_owned())
    );
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeding_creates_every_sample() {
    let api = FakeApi::default();
    let report = block_on(seed_sample_pets(&api));
    assert_eq!(report, SeedReport { created: 2, failed: 0 });
    assert_eq!(api.count_calls("POST pets"), 2);
}

#[test]
fn seeding_failure_is_per_item() {
    let api = FakeApi::default();
    api.reject_names.borrow_mut().push("Buddy".to_owned());
    let report = block_on(seed_sample_pets(&api));
    assert_eq!(report, SeedReport { created: 1, failed: 1 });
    let names: Vec<String> = api.pets.borrow().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Whiskers".to_owned()]);
}

#[test]
fn seed_report_notices() {
    let mut notices = NoticeQueue::default();
    let reload = apply_seed_report(SeedReport { created: 1, failed: 1 }, &mut notices, 0.0);
    assert_eq!(reload, CollectionKind::Pets);
    assert_eq!(
        last_notice(&notices),
        (NoticeLevel::Success, "Sample data added! (1 of 2 created)".to_owned())
    );

    apply_seed_report(SeedReport { created: 0, failed: 2 }, &mut notices, 0.0);
    assert_eq!(last_notice(&notices).0, NoticeLevel::Error);
}
