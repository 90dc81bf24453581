//! Landing Core Library
//!
//! Site configuration, showcase records and error handling for the Landing
//! home page generator.

pub mod app;
pub mod config;
pub mod error;

pub use crate::app::{ApplicationRecord, SHOWCASE_ASSET_PATH, pinned_apps};
pub use crate::config::{BuildConfig, Config, SiteConfig};
pub use crate::error::{CoreError, Result};
