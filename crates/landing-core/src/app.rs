//! Showcase application records.
//!
//! Each record describes an app built with the framework. Records are read
//! straight from the site configuration and never modified; the helpers here
//! only borrow them.

use serde::{Deserialize, Serialize};

/// Path segment, relative to the base URL, that holds showcase icons.
pub const SHOWCASE_ASSET_PATH: &str = "img/showcase/";

/// An application listed in the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Display name, also used as the icon alt text.
    pub name: String,

    /// Icon URL, or a file name under [`SHOWCASE_ASSET_PATH`].
    pub icon: String,

    /// Where the icon links to.
    pub info_link: String,

    /// Whether the app appears in the home page showcase.
    #[serde(default)]
    pub pinned: bool,
}

impl ApplicationRecord {
    /// Create an unpinned record.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        info_link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            info_link: info_link.into(),
            pinned: false,
        }
    }

    /// Mark the record as pinned.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Whether the icon already points at a remote location.
    #[must_use]
    pub fn has_remote_icon(&self) -> bool {
        self.icon.starts_with("http")
    }

    /// Resolve the image source for this record's icon.
    ///
    /// Remote icons are returned as-is. Anything else is treated as a file in
    /// the showcase asset folder and prefixed with `base_url` by plain
    /// concatenation, so `base_url` is expected to end with `/`.
    #[must_use]
    pub fn icon_src(&self, base_url: &str) -> String {
        if self.has_remote_icon() {
            self.icon.clone()
        } else {
            format!("{base_url}{SHOWCASE_ASSET_PATH}{}", self.icon)
        }
    }
}

/// Select the pinned records, in their original order.
pub fn pinned_apps(users: &[ApplicationRecord]) -> Vec<&ApplicationRecord> {
    users.iter().filter(|app| app.pinned).collect()
}
