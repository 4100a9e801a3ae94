//! Clinic page: pets and appointments lists, the add-pet modal, and the
//! notice stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads both collections on mount, dispatches
//! mutations through `services::dispatcher`, and reloads the affected
//! collection after each success. Loads are never sequenced or cancelled, so
//! the last load to finish decides what a section shows.

#[cfg(test)]
#[path = "clinic_test.rs"]
mod clinic_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::components::appointment_card::AppointmentCard;
use crate::components::notice_stack::NoticeStack;
use crate::components::pet_card::PetCard;
use crate::components::pet_modal::PetModal;
use crate::components::placeholder::CollectionPlaceholder;
use crate::components::site_header::SiteHeader;
use crate::config::ClinicConfig;
use crate::net::api::HttpClinicApi;
use crate::net::types::{Appointment, Pet, RecordId};
use crate::services::dispatcher::{self, Action, ActionOutcome};
use crate::services::loader;
use crate::state::collection::{CollectionKind, CollectionState};
use crate::state::modal::ModalState;
use crate::state::notices::NoticeQueue;
use crate::util::browser;
use crate::view::{ListView, appointment_list_view, pet_list_view};

/// Section a route path asks to scroll to, if any.
fn scroll_target_for_path(path: &str) -> Option<CollectionKind> {
    match path.trim_end_matches('/') {
        "/pets" => Some(CollectionKind::Pets),
        "/appointments" => Some(CollectionKind::Appointments),
        _ => None,
    }
}

/// Reactive handles shared by every action on the page.
#[derive(Clone)]
struct PageHandles {
    api: HttpClinicApi,
    pets: RwSignal<CollectionState<Pet>>,
    appointments: RwSignal<CollectionState<Appointment>>,
    modal: RwSignal<ModalState>,
    notices: RwSignal<NoticeQueue>,
}

impl PageHandles {
    fn reload(&self, kind: CollectionKind) {
        let api = self.api.clone();
        match kind {
            CollectionKind::Pets => {
                let pets = self.pets;
                spawn_local(async move {
                    let state = loader::load_pets(&api).await;
                    pets.set(state);
                });
            }
            CollectionKind::Appointments => {
                let appointments = self.appointments;
                spawn_local(async move {
                    let state = loader::load_appointments(&api).await;
                    appointments.set(state);
                });
            }
        }
    }

    fn settle(&self, action: Action, outcome: &ActionOutcome) {
        let mut modal = self.modal.get_untracked();
        let mut notices = self.notices.get_untracked();
        let reload = dispatcher::apply_outcome(action, outcome, &mut modal, &mut notices, browser::now_ms());
        self.modal.set(modal);
        self.notices.set(notices);
        if let Some(kind) = reload {
            self.reload(kind);
        }
    }

    fn submit_pet(&self) {
        let handles = self.clone();
        let form = self.modal.with_untracked(|m| m.form.clone());
        spawn_local(async move {
            let outcome = dispatcher::create_pet(&handles.api, &form).await;
            handles.settle(Action::CreatePet, &outcome);
        });
    }

    fn delete_pet(&self, id: RecordId) {
        let handles = self.clone();
        spawn_local(async move {
            let outcome = dispatcher::delete_pet(&handles.api, &id, browser::confirm).await;
            handles.settle(Action::DeletePet, &outcome);
        });
    }

    fn seed_samples(&self) {
        let handles = self.clone();
        spawn_local(async move {
            let report = dispatcher::seed_sample_pets(&handles.api).await;
            let mut notices = handles.notices.get_untracked();
            let kind = dispatcher::apply_seed_report(report, &mut notices, browser::now_ms());
            handles.notices.set(notices);
            handles.reload(kind);
        });
    }
}

#[component]
pub fn ClinicPage() -> impl IntoView {
    let config = use_context::<ClinicConfig>().unwrap_or_default();
    let handles = PageHandles {
        api: HttpClinicApi::new(config.api_base.clone()),
        pets: RwSignal::new(CollectionState::Loading),
        appointments: RwSignal::new(CollectionState::Loading),
        modal: RwSignal::new(ModalState::default()),
        notices: RwSignal::new(NoticeQueue::new(config.notice_ttl_ms)),
    };

    handles.reload(CollectionKind::Pets);
    handles.reload(CollectionKind::Appointments);

    let modal = handles.modal;
    let notices = handles.notices;
    let pets = handles.pets;
    let appointments = handles.appointments;

    // Page scroll is locked exactly while the modal is open.
    Effect::new(move || browser::set_scroll_locked(modal.with(ModalState::is_open)));

    let location = use_location();
    let scroll_target = scroll_target_for_path(&location.pathname.get_untracked());
    #[cfg(feature = "csr")]
    {
        if let Some(kind) = scroll_target {
            let delay = std::time::Duration::from_millis(u64::from(config.route_scroll_delay_ms));
            spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                browser::scroll_to_section(kind.section_id());
            });
        }

        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        let tick = std::time::Duration::from_millis(u64::from(config.notice_tick_ms));
        spawn_local(async move {
            loop {
                gloo_timers::future::sleep(tick).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if notices.with_untracked(NoticeQueue::is_empty) {
                    continue;
                }
                let now = browser::now_ms();
                if notices.with_untracked(|q| q.items().iter().any(|n| n.is_expired(now))) {
                    notices.update(|q| {
                        q.tick(now);
                    });
                }
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = scroll_target;
    }

    let on_add_pet = Callback::new(move |()| {
        modal.update(|m| {
            m.open();
        });
    });
    let on_close = Callback::new(move |()| {
        modal.update(|m| {
            m.close();
        });
    });
    let on_submit = Callback::new({
        let handles = handles.clone();
        move |()| handles.submit_pet()
    });
    let on_delete = Callback::new({
        let handles = handles.clone();
        move |id: RecordId| handles.delete_pet(id)
    });
    let on_edit = Callback::new({
        let handles = handles.clone();
        move |id: RecordId| handles.settle(Action::EditPet, &dispatcher::edit_pet(&id))
    });
    let on_book = Callback::new({
        let handles = handles.clone();
        move |()| handles.settle(Action::BookAppointment, &dispatcher::book_appointment())
    });
    let on_seed = Callback::new({
        let handles = handles.clone();
        move |()| handles.seed_samples()
    });

    view! {
        <NoticeStack notices=notices/>
        <SiteHeader on_add_pet=on_add_pet on_book=on_book on_seed=on_seed/>
        <main class="container">
            <section id="pets" class="section">
                <div class="section-header pets-header">
                    <h2>"Registered Pets"</h2>
                </div>
                <div id="pets-list" class="cards-grid">
                    {move || match pet_list_view(&pets.get()) {
                        ListView::Cards(cards) => {
                            cards
                                .into_iter()
                                .map(|card| view! { <PetCard card=card on_edit=on_edit on_delete=on_delete/> })
                                .collect_view()
                                .into_any()
                        }
                        ListView::Placeholder(placeholder) => {
                            view! { <CollectionPlaceholder placeholder=placeholder/> }.into_any()
                        }
                    }}
                </div>
            </section>
            <section id="appointments" class="section">
                <div class="section-header">
                    <h2>"Appointments"</h2>
                </div>
                <div id="appointments-list" class="cards-grid">
                    {move || match appointment_list_view(&appointments.get()) {
                        ListView::Cards(cards) => {
                            cards
                                .into_iter()
                                .map(|card| view! { <AppointmentCard card=card/> })
                                .collect_view()
                                .into_any()
                        }
                        ListView::Placeholder(placeholder) => {
                            view! { <CollectionPlaceholder placeholder=placeholder/> }.into_any()
                        }
                    }}
                </div>
            </section>
        </main>
        <PetModal modal=modal on_close=on_close on_submit=on_submit/>
    }
}
