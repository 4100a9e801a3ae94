//! Page header with section navigation and the primary actions.

use leptos::prelude::*;

use crate::state::collection::CollectionKind;
use crate::util::browser;

#[component]
pub fn SiteHeader(on_add_pet: Callback<()>, on_book: Callback<()>, on_seed: Callback<()>) -> impl IntoView {
    let nav_link = move |kind: CollectionKind, label: &'static str| {
        let href = format!("#{}", kind.section_id());
        view! {
            <a
                class="nav-link"
                href=href
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    browser::scroll_to_section(kind.section_id());
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="header">
            <nav class="nav">
                <span class="logo">
                    <i class="fas fa-paw"></i>
                    " PetClinic"
                </span>
                <div class="nav-links">
                    {nav_link(CollectionKind::Pets, "Pets")}
                    {nav_link(CollectionKind::Appointments, "Appointments")}
                </div>
            </nav>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| on_add_pet.run(())>
                    <i class="fas fa-plus"></i>
                    " Add Pet"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_book.run(())>
                    <i class="fas fa-calendar-plus"></i>
                    " Book Appointment"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_seed.run(())>
                    <i class="fas fa-plus"></i>
                    " Add Sample Data"
                </button>
            </div>
        </header>
    }
}
