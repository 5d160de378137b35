//! Request handlers

mod health;
mod submit_entry;

pub use health::health_check;
pub use submit_entry::{submit_entry, SubmitResponse};
