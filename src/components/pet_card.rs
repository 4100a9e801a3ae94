//! Card for one registered pet, with edit and delete actions.

use leptos::prelude::*;

use crate::net::types::RecordId;
use crate::view::cards::PetCardView;

#[component]
pub fn PetCard(card: PetCardView, on_edit: Callback<RecordId>, on_delete: Callback<RecordId>) -> impl IntoView {
    let edit_id = card.id.clone();
    let delete_id = card.id.clone();

    view! {
        <div class="pet-card">
            <div class="pet-header">
                <h3>{card.name}</h3>
                <span class="pet-species">{card.species}</span>
            </div>
            <div class="pet-details">
                <p><strong>"Breed: "</strong>{card.breed}</p>
                <p><strong>"Age: "</strong>{card.age}</p>
                <p><strong>"Owner: "</strong>{card.owner_name}</p>
                <p><strong>"Phone: "</strong>{card.owner_phone}</p>
            </div>
            <div class="pet-actions">
                <button class="btn btn-primary" on:click=move |_| on_edit.run(edit_id.clone())>
                    <i class="fas fa-edit"></i>
                    " Edit"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_delete.run(delete_id.clone())>
                    <i class="fas fa-trash"></i>
                    " Delete"
                </button>
            </div>
        </div>
    }
}
