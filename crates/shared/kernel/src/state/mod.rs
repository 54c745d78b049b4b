//! Mutable client state driven by user interaction and query outcomes.

pub mod results;
pub mod selection;
