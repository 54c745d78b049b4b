//! # Domain Models
//!
//! Pure data for the bed-availability client: the region table, the hospital record shape
//! dictated by the upstream API, the bed status classification, display labels, and
//! configuration structs.
//! Keep it lean: no I/O, networking, or state here.

pub mod config;
pub mod constants;
pub mod hospital;
pub mod labels;
pub mod region;
pub mod status;
