//! Shared contracts for the Academic Copilot frontend.
//!
//! Pure data types only: the conversation aggregate and the wire DTOs for
//! the backend endpoints. No UI and no I/O live here.

pub mod api;
pub mod chat;
