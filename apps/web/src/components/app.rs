//! Root component: wires the query client, selection and results together.

use super::{ResultsPanel, SearchPanel};
use crate::config::build_config;
use dioxus::prelude::*;
use erbeds::availability::{AvailabilityError, BedQueryClient, BedSource};
use erbeds::domain::labels::{LOAD_FAILED, NOT_CONFIGURED, TITLE};
use erbeds::kernel::prelude::{ResultsState, SelectionState};
use std::rc::Rc;
use tracing::{error, info, warn};

const MAIN_CSS: &str = include_str!("../../assets/main.css");

/// Newtype so the client satisfies the `PartialEq` bound on component props.
/// Equality is by pointer identity.
#[derive(Debug, Clone)]
struct SharedClient(Rc<BedQueryClient>);

impl PartialEq for SharedClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn App() -> Element {
    let client = use_hook(|| match erbeds::connect(&build_config()) {
        Ok(client) => {
            info!(endpoint = client.endpoint(), "Bed availability client ready");
            Ok(SharedClient(Rc::new(client)))
        },
        Err(err) => {
            error!(error = %err, "Bed availability client is not configured");
            Err(err.to_string())
        },
    });

    let body = match client {
        Ok(client) => rsx! { BedSearch { client } },
        Err(message) => rsx! { ConfigError { message } },
    };

    rsx! {
        document::Title { "{TITLE}" }
        style { "{MAIN_CSS}" }
        div { class: "app",
            header {
                h1 { "{TITLE}" }
            }
            main { {body} }
        }
    }
}

#[component]
fn BedSearch(client: SharedClient) -> Element {
    let selection = use_signal(SelectionState::default);
    let mut results = use_signal(ResultsState::default);

    // Overlapping searches are not cancelled; whichever answer arrives last is shown.
    let search = move |()| {
        let client = client.clone();
        let current = selection.read().selection();
        results.write().begin_query();
        spawn(async move {
            let outcome = client.0.fetch(current).await;
            let failure = results.write().finish(outcome).err();
            if let Some(err) = failure {
                report_failure(&err).await;
            }
        });
    };

    rsx! {
        SearchPanel { selection, on_search: search }
        ResultsPanel { results, on_sort: move |()| results.write().sort_by_beds_descending() }
    }
}

#[component]
fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "config-error", role: "alert",
            p { "{NOT_CONFIGURED}" }
            p {
                small { "{message}" }
            }
        }
    }
}

async fn report_failure(err: &AvailabilityError) {
    warn!(kind = ?err.kind(), label = err.label(), error = %err, "Bed availability query failed");
    if let Err(e) = document::eval(&format!("alert({LOAD_FAILED:?})")).await {
        warn!(error = ?e, "Failed to show failure alert");
    }
}
