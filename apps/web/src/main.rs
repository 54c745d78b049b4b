use dioxus::logger::tracing::{Level, debug};
use erbeds_web::{App, ClientApp};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        debug!(error = %err, "Logger already installed, keeping the existing subscriber");
    }

    ClientApp::new().launch(App);
}
