//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Each container is plain data with pure transition methods. Pages wrap
//! them in `RwSignal`s and hand them to components through context, so the
//! transitions are testable without a reactive runtime or a DOM.

pub mod collection;
pub mod modal;
pub mod notices;
