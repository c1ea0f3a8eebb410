//! Session subdomain
//!
//! The upstream session context and the key a summary is fetched for.

pub mod entities;
