//! # petclinic-ui
//!
//! Leptos + WASM front end for the PetClinic management site. Lists pets and
//! appointments from the clinic REST API and lets users add or delete pets
//! through a modal form.
//!
//! Everything outside `app`, `components`, and `pages` is plain Rust with
//! no DOM dependency, so loading, dispatch, and view-model logic is tested
//! natively. Browser-only code sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;
pub mod view;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("petclinic-ui starting");
    leptos::mount::mount_to_body(app::App);
}
