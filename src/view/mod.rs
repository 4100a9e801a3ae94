//! Pure view models: collection state in, renderable data out.
//!
//! ARCHITECTURE
//! ============
//! `list_view` is the single decision point for what a collection section
//! shows. Components in `crate::components` render its output verbatim, so
//! the three-way populated/empty/error split is tested here without a DOM.


pub mod cards;
pub mod placeholder;

use crate::net::types::{Appointment, Pet};
use crate::state::collection::{CollectionKind, CollectionState};
use cards::{AppointmentCardView, PetCardView};
use placeholder::PlaceholderView;

/// What one collection section renders: cards, or a single placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView<C> {
    Cards(Vec<C>),
    Placeholder(PlaceholderView),
}

/// Map a collection state onto its rendered form.
pub fn list_view<T, C>(kind: CollectionKind, state: &CollectionState<T>, to_card: impl Fn(&T) -> C) -> ListView<C> {
    match state {
        CollectionState::Loading => ListView::Placeholder(PlaceholderView::loading(kind)),
        CollectionState::Empty => ListView::Placeholder(PlaceholderView::empty(kind)),
        CollectionState::Error => ListView::Placeholder(PlaceholderView::error(kind)),
        CollectionState::Populated(items) if items.is_empty() => ListView::Placeholder(PlaceholderView::empty(kind)),
        CollectionState::Populated(items) => ListView::Cards(items.iter().map(to_card).collect()),
    }
}

#[must_use]
pub fn pet_list_view(state: &CollectionState<Pet>) -> ListView<PetCardView> {
    list_view(CollectionKind::Pets, state, PetCardView::from_pet)
}

#[must_use]
pub fn appointment_list_view(state: &CollectionState<Appointment>) -> ListView<AppointmentCardView> {
    list_view(CollectionKind::Appointments, state, AppointmentCardView::from_appointment)
}
