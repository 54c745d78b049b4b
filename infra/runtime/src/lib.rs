//! # Runtime
//!
//! Tokio runtime bootstrap for the native binaries of the workspace. The browser build never
//! links this crate; Dioxus drives its own executor there.
//!
//! ## Profiles
//! * **Current thread**: a single-threaded scheduler for one-shot commands such as a single
//!   bed-availability query from the shell.
//! * **Default**: a multi-threaded scheduler sized to the available parallelism.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[erbeds_runtime::main(current_thread)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use erbeds_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// The number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 4;
/// Stack size for runtime threads (3 `MiB`).
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_THREAD_NAME: &str = "erbeds-worker";

/// Scheduler flavor backing a [`RuntimeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    CurrentThread,
    MultiThread,
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub flavor: Flavor,
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::MultiThread,
            worker_threads: available_parallelism()
                .map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
        }
    }
}

impl RuntimeConfig {
    /// Preset for a command that awaits one request and exits.
    #[must_use = "Use this configuration for one-shot commands"]
    pub fn current_thread() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            worker_threads: 1,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "erbeds-main".to_owned(),
        }
    }

    fn normalized(&self) -> Self {
        let thread_name = if self.thread_name.trim().is_empty() {
            DEFAULT_THREAD_NAME.to_owned()
        } else {
            self.thread_name.clone()
        };
        Self {
            flavor: self.flavor,
            worker_threads: self.worker_threads.clamp(1, MAX_WORKER_THREADS),
            stack_size: self.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE),
            thread_name,
        }
    }
}

/// Creates a new Tokio runtime from a [`RuntimeConfig`].
///
/// Values are clamped to safe bounds first (1..=1024 workers, 1-16 `MiB` stacks, a non-blank
/// thread name). A [`Flavor::CurrentThread`] config ignores the worker count.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the OS refuses to create the runtime threads.
///
/// # Examples
///
/// ```rust
/// use erbeds_runtime::{build_runtime_with_config, RuntimeConfig};
///
/// let runtime = build_runtime_with_config(&RuntimeConfig::current_thread())?;
/// let answer = runtime.block_on(async { 42 });
/// assert_eq!(answer, 42);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(config.worker_threads);
            builder
        },
    };

    builder.thread_name(&config.thread_name).thread_stack_size(config.stack_size).enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = RuntimeConfig {
            worker_threads: 0,
            stack_size: 100,
            thread_name: "   ".to_owned(),
            ..RuntimeConfig::default()
        }
        .normalized();

        assert_eq!(config.worker_threads, 1);
        assert_eq!(config.stack_size, MIN_STACK_SIZE);
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);

        let config =
            RuntimeConfig { worker_threads: 2000, stack_size: usize::MAX, ..RuntimeConfig::default() }
                .normalized();
        assert_eq!(config.worker_threads, MAX_WORKER_THREADS);
        assert_eq!(config.stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn test_current_thread_runtime_runs_futures() {
        let config = RuntimeConfig::current_thread();
        assert_eq!(config.flavor, Flavor::CurrentThread);

        let runtime = build_runtime_with_config(&config).expect("current-thread runtime should build");
        assert_eq!(runtime.block_on(async { 7 * 6 }), 42);
    }

    #[test]
    fn test_default_runtime_is_multi_threaded() {
        let config = RuntimeConfig::default();
        assert_eq!(config.flavor, Flavor::MultiThread);
        assert!(config.worker_threads >= 1);
        assert!(build_runtime_with_config(&config).is_ok());
    }
}
