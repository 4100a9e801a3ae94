//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClinicConfig;
use crate::pages::clinic::ClinicPage;

/// Root application component.
///
/// Every path renders the clinic page; `/pets/` and `/appointments/` only
/// change which section it scrolls to.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClinicConfig::from_document());

    view! {
        <Title text="PetClinic - Pet Management System"/>

        <Router>
            <Routes fallback=ClinicPage>
                <Route path=StaticSegment("") view=ClinicPage/>
            </Routes>
        </Router>
    }
}
