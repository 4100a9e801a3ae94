//! Read-only card for one appointment.

use leptos::prelude::*;

use crate::view::cards::AppointmentCardView;

#[component]
pub fn AppointmentCard(card: AppointmentCardView) -> impl IntoView {
    let status_class = format!("appointment-status {}", card.status_category.css_class());
    let notes = card.notes.map(|notes| {
        view! { <p><strong>"Notes: "</strong>{notes}</p> }
    });

    view! {
        <div class="appointment-card">
            <div class="appointment-header">
                <h3>{card.pet_name}</h3>
                <span class=status_class>{card.status_label}</span>
            </div>
            <div class="appointment-details">
                <p><strong>"Date: "</strong>{card.date}</p>
                <p><strong>"Time: "</strong>{card.time}</p>
                <p><strong>"Reason: "</strong>{card.reason}</p>
                {notes}
            </div>
        </div>
    }
}
