//! Kernel logic shared by every front end.
//! Keep this crate lightweight: region lookups, the selection and results state machines, and
//! layered config loading for native builds.
//!
//! ## Selecting a region
//! ```rust
//! use erbeds_kernel::prelude::*;
//!
//! let mut state = SelectionState::default();
//! state.set_top_level_region("서울특별시")?;
//! assert_eq!(state.selection().district(), "종로구");
//! # Ok::<(), CatalogError>(())
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod catalog;
pub mod prelude;
pub mod state;

pub use erbeds_domain as domain;
