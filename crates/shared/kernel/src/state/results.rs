use erbeds_domain::hospital::HospitalRecord;
use std::cmp::Reverse;
use tracing::debug;

/// Latest query results plus the loading flag.
///
/// A failed query keeps the previous records visible; only a successful one replaces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    records: Vec<HospitalRecord>,
    loading: bool,
}

impl ResultsState {
    #[must_use]
    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn begin_query(&mut self) {
        self.loading = true;
    }

    pub fn complete_query(&mut self, records: Vec<HospitalRecord>) {
        debug!(count = records.len(), "Query completed");
        self.records = records;
        self.loading = false;
    }

    pub fn fail_query(&mut self) {
        debug!(kept = self.records.len(), "Query failed, keeping previous results");
        self.loading = false;
    }

    /// Applies a query outcome and returns the record count.
    ///
    /// # Errors
    /// Hands the query error back after clearing the loading flag.
    pub fn finish<E>(&mut self, outcome: Result<Vec<HospitalRecord>, E>) -> Result<usize, E> {
        match outcome {
            Ok(records) => {
                let count = records.len();
                self.complete_query(records);
                Ok(count)
            },
            Err(err) => {
                self.fail_query();
                Err(err)
            },
        }
    }

    pub fn sort_by_beds_descending(&mut self) {
        sort_by_beds_descending(&mut self.records);
    }
}

/// Stable sort by available beds, most first; hospitals without a report go last.
pub fn sort_by_beds_descending(records: &mut [HospitalRecord]) {
    // `None < Some(_)`, so reversing puts the unreported entries at the end.
    records.sort_by_key(|record| Reverse(record.available_beds));
}
