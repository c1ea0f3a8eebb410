//! Progress reporting while a summary loads

pub mod reporter;
