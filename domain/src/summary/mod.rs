//! Summary subdomain
//!
//! What the clarifier and conflict resolver recorded for a session, and the
//! state of the view that shows it.

pub mod clarifier;
pub mod conflict;
mod lenient;
pub mod state;
