use crate::view::RowView;
use dioxus::prelude::*;
use erbeds::domain::labels::{BEDS_LABEL, PHONE_LABEL};

#[component]
pub fn HospitalRow(row: RowView) -> Element {
    let RowView { name, beds, phone, class } = row;

    rsx! {
        li { class,
            h3 { "{name}" }
            p { "{BEDS_LABEL} {beds}" }
            p { "{PHONE_LABEL} {phone}" }
        }
    }
}
