//! Build command - writes the home page and static files

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use landing_core::Config;
use landing_generator::{Builder, StaticAssets};

use super::{TEMPLATES_DIR, check::config_warnings, site_path};

/// Run the build command.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    base_url: Option<&str>,
    layout: bool,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, layout, "Starting build");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
    }
    if layout {
        config.build.emit_layout = true;
    }

    let static_dir = site_path(config_path, &config.build.static_dir);
    let warnings = config_warnings(&config, &StaticAssets::new(&static_dir));
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let output = output.map_or_else(
        || site_path(config_path, &config.build.output_dir),
        Path::to_path_buf,
    );

    tracing::debug!(?config, "Loaded configuration");

    let mut builder =
        Builder::new(config, &output).with_template_dir(site_path(config_path, TEMPLATES_DIR));
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Found static directory, will copy to output");
        builder = builder.with_static_dir(&static_dir);
    }

    let stats = builder.build().wrap_err("Build failed")?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Showcase:   {} apps", stats.showcase_apps);
    println!("  Assets:     {}", stats.assets);
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
