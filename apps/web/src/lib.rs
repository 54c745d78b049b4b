//! Dioxus front end for real-time ER bed availability.
//!
//! The same components run in the browser (`web`, default) and in a desktop window
//! (`desktop`). State transitions live in `erbeds-kernel`; this crate only renders them and
//! forwards user input.

mod components;
mod config;
mod launcher;
pub mod view;

pub use crate::components::{App, HospitalRow, ResultsPanel, SearchPanel};
pub use crate::config::build_config;
pub use crate::launcher::ClientApp;
