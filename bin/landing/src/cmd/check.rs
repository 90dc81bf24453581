//! Check command - validate configuration and showcase assets

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use landing_core::{Config, SHOWCASE_ASSET_PATH};
use landing_generator::StaticAssets;
use landing_parser::SyntaxHighlighter;

use super::site_path;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    match Config::load_with_env(config_path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            println!(
                "  ✓ {} apps, {} pinned",
                config.site.users.len(),
                config.site.pinned_apps().len()
            );

            println!("\nChecking syntax theme...");
            match SyntaxHighlighter::new(&config.build.syntax_theme) {
                Ok(_) => println!("  ✓ {}", config.build.syntax_theme),
                Err(e) => result.add_error(e.to_string()),
            }

            println!("\nChecking showcase...");
            let assets = StaticAssets::new(site_path(config_path, &config.build.static_dir));
            result.warnings = config_warnings(&config, &assets);
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            result.add_error(format!("Configuration error: {e}"));
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Non-fatal problems with a loaded configuration.
///
/// Rendering never rejects these; they are surfaced here so a site author
/// can fix them before publishing.
pub fn config_warnings(config: &Config, assets: &StaticAssets) -> Vec<String> {
    let mut warnings = Vec::new();
    let site = &config.site;

    if !site.base_url.ends_with('/') {
        warnings.push(format!(
            "site.base_url \"{}\" should end with '/'; links are built by concatenation",
            site.base_url
        ));
    }

    if !assets.root().is_dir() {
        warnings.push(format!(
            "Static directory missing: {}",
            assets.root().display()
        ));
    }

    let pinned = site.pinned_apps();
    if site.users.is_empty() {
        warnings.push("site.users is empty; the showcase will be blank".to_string());
    } else if pinned.is_empty() {
        warnings.push("No pinned apps; the showcase will be blank".to_string());
    }

    for app in pinned {
        let label = if app.name.is_empty() {
            warnings.push("A pinned app has no name (used as icon alt text)".to_string());
            "(unnamed)"
        } else {
            app.name.as_str()
        };

        if app.icon.is_empty() {
            warnings.push(format!("{label}: icon is empty"));
        } else if !app.has_remote_icon() && assets.root().is_dir() {
            let relative = format!("{SHOWCASE_ASSET_PATH}{}", app.icon);
            if !assets.contains(&relative) {
                warnings.push(format!(
                    "{label}: icon not found at {}",
                    assets.root().join(&relative).display()
                ));
            }
        }

        if !(app.info_link.starts_with("http://") || app.info_link.starts_with("https://")) {
            warnings.push(format!(
                "{label}: info_link \"{}\" is not an http(s) URL",
                app.info_link
            ));
        }
    }

    warnings
}
