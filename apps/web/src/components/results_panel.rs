use super::HospitalRow;
use crate::view::ResultsView;
use dioxus::prelude::*;
use erbeds::domain::labels::{LOADING, NO_RESULTS, SORT_BY_BEDS};
use erbeds::kernel::prelude::ResultsState;

/// Sort trigger plus the loading text, the empty message or the hospital list.
#[component]
pub fn ResultsPanel(results: Signal<ResultsState>, on_sort: EventHandler<()>) -> Element {
    let body = match ResultsView::from_state(&results.read()) {
        ResultsView::Loading => rsx! { p { "{LOADING}" } },
        ResultsView::Empty => rsx! { p { "{NO_RESULTS}" } },
        ResultsView::Rows(rows) => rsx! {
            ul {
                for (index, row) in rows.into_iter().enumerate() {
                    HospitalRow { key: "{index}", row }
                }
            }
        },
    };

    rsx! {
        section { id: "results",
            button { onclick: move |_| on_sort.call(()), "{SORT_BY_BEDS}" }
            {body}
        }
    }
}
