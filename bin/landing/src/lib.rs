//! Landing CLI Library
//!
//! Command implementations and the preview server behind the `landing`
//! binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, serve, check)
//! - [`server`] - Preview server rendering the home page per request
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use landing::cmd;
//!
//! cmd::build::run(Path::new("site.toml"), None, None, false).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use landing_core::{ApplicationRecord, Config, SiteConfig};
pub use landing_generator::{BuildStats, Builder, HomePage};

/// Initialize tracing with the specified verbosity level.
///
/// * `verbose` - 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
