use dioxus::prelude::*;
use erbeds::domain::labels::{DISTRICT_LABEL, REGION_LABEL, SEARCH};
use erbeds::kernel::prelude::SelectionState;
use tracing::warn;

/// The two cascading selectors and the search trigger.
#[component]
pub fn SearchPanel(selection: Signal<SelectionState>, on_search: EventHandler<()>) -> Element {
    let mut selection = selection;
    let (current, regions, districts) = {
        let state = selection.read();
        (state.selection(), state.catalog().top_level_regions(), state.sub_regions())
    };
    let region = current.region();
    let district = current.district();

    rsx! {
        section { id: "search",
            div {
                label { r#for: "region", "{REGION_LABEL}" }
                select {
                    id: "region",
                    value: "{region}",
                    onchange: move |evt| {
                        if let Err(err) = selection.write().set_top_level_region(&evt.value()) {
                            warn!(error = %err, "Region selection rejected");
                        }
                    },
                    for name in regions {
                        option { key: "{name}", value: "{name}", selected: name == region, "{name}" }
                    }
                }
            }
            div {
                label { r#for: "district", "{DISTRICT_LABEL}" }
                select {
                    id: "district",
                    value: "{district}",
                    onchange: move |evt| {
                        if let Err(err) = selection.write().set_sub_region(&evt.value()) {
                            warn!(error = %err, "District selection rejected");
                        }
                    },
                    for name in districts.iter().copied() {
                        option { key: "{name}", value: "{name}", selected: name == district, "{name}" }
                    }
                }
            }
            button { onclick: move |_| on_search.call(()), "{SEARCH}" }
        }
    }
}
