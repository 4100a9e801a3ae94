//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render view models from `crate::view` and report user intent
//! through callbacks; none of them talk to the API directly.

pub mod appointment_card;
pub mod notice_stack;
pub mod pet_card;
pub mod pet_modal;
pub mod placeholder;
pub mod site_header;
