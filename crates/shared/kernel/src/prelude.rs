pub use crate::catalog::{CatalogError, CatalogErrorExt, RegionCatalog};
pub use crate::state::results::{ResultsState, sort_by_beds_descending};
pub use crate::state::selection::{Selection, SelectionState};
pub use erbeds_domain::hospital::HospitalRecord;
pub use erbeds_domain::status::BedStatus;
