//! Display models derived from kernel state, kept free of Dioxus types.

use erbeds::domain::labels::{NOT_REPORTED, beds_text};
use erbeds::kernel::prelude::{HospitalRecord, ResultsState};

/// One rendered hospital line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub beds: String,
    pub phone: String,
    pub class: &'static str,
}

impl From<&HospitalRecord> for RowView {
    fn from(record: &HospitalRecord) -> Self {
        Self {
            name: record.name.clone(),
            beds: beds_text(record.available_beds),
            phone: record.phone.clone().unwrap_or_else(|| NOT_REPORTED.to_owned()),
            class: record.status().css_class(),
        }
    }
}

/// What the results section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Empty,
    Rows(Vec<RowView>),
}

impl ResultsView {
    #[must_use]
    pub fn from_state(state: &ResultsState) -> Self {
        if state.is_loading() {
            Self::Loading
        } else if state.is_empty() {
            Self::Empty
        } else {
            Self::Rows(state.records().iter().map(RowView::from).collect())
        }
    }
}
