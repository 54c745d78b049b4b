//! Bed availability feature slice.
//!
//! [`BedQueryClient`] sends one GET per search to the public ER bed-availability API and
//! flattens the `response.body.items.item` envelope into a list of
//! [`HospitalRecord`](erbeds_domain::hospital::HospitalRecord)s. Front ends drive it through
//! the [`BedSource`] seam and feed the outcome into
//! [`ResultsState::finish`](erbeds_kernel::state::results::ResultsState::finish).

mod client;
mod envelope;
mod error;
mod source;

pub use crate::client::BedQueryClient;
pub use crate::envelope::decode_items;
pub use crate::error::{AvailabilityError, AvailabilityErrorExt, FailureKind};
pub use crate::source::BedSource;
