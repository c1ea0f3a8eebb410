//! Core domain concepts shared across all subdomains.
//!
//! - [`error::FetchError`]: the single user-facing failure of a fetch cycle

pub mod error;
