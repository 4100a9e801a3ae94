//! Data-sync services: collection loading and mutation dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both services take the API as `&dyn ClinicApi`, so pages pass the HTTP
//! client and tests pass an in-memory fake.

pub mod dispatcher;
pub mod loader;

#[cfg(test)]
pub(crate) mod test_support;
