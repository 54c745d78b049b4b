use dioxus::prelude::*;
use erbeds::domain::labels::TITLE;
use tracing::debug;

/// Launches the root component on the platform selected by Cargo features.
///
/// `desktop` opens a native window; otherwise the app mounts into the browser page.
#[derive(Debug)]
pub struct ClientApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for ClientApp {
    fn default() -> Self {
        Self { title: TITLE.to_owned(), width: 760.0, height: 900.0 }
    }
}

impl ClientApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Window size; ignored in the browser.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
    pub fn launch(self, root: fn() -> Element) {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        debug!(title = %self.title, width = self.width, height = self.height, "Launching desktop window");
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::new().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }

    #[cfg(not(all(feature = "desktop", not(target_arch = "wasm32"))))]
    pub fn launch(self, root: fn() -> Element) {
        debug!(title = %self.title, width = self.width, height = self.height, "Launching in browser");
        dioxus::launch(root);
    }
}
