//! Session entity model.

pub mod model;

pub use model::Session;
