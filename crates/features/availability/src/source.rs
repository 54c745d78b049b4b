use crate::error::AvailabilityError;
use erbeds_domain::hospital::HospitalRecord;
use erbeds_kernel::state::selection::Selection;
use std::future::Future;

/// Anything that can answer a bed availability search.
///
/// The futures are not required to be `Send`: in the browser the HTTP stack lives on the
/// single JS thread.
pub trait BedSource {
    /// Fetches the first page of hospitals for `selection`, in upstream order.
    fn fetch(
        &self,
        selection: Selection,
    ) -> impl Future<Output = Result<Vec<HospitalRecord>, AvailabilityError>>;
}
