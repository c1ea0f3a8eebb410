//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_summary;
pub mod summary_controller;

#[cfg(test)]
pub(crate) mod test_support;
