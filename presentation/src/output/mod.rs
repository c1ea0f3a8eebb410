//! Output formatting for summary views

pub mod console;
pub mod formatter;
