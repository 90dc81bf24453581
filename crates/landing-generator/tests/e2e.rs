//! End-to-end tests for Landing.
//!
//! These tests build the demo site and check the generated output.

use std::{fs, path::Path};

use landing_core::Config;
use landing_generator::{Builder, SectionKind, StaticAssets};

const DEMO_CONFIG: &str = "../../demo/site.toml";
const DEMO_STATIC: &str = "../../demo/static";

fn demo_config() -> Option<Config> {
    let path = Path::new(DEMO_CONFIG);
    if !path.exists() {
        // Skip if running from different working directory
        return None;
    }
    Some(Config::load(path).expect("demo config should load"))
}

#[test]
fn test_demo_config_loads() {
    let Some(config) = demo_config() else {
        return;
    };

    assert_eq!(config.site.base_url, "/react-native/");
    assert_eq!(config.site.users.len(), 5);
    assert_eq!(config.site.pinned_apps().len(), 4);
    assert!(config.build.emit_layout);
}

#[test]
fn test_demo_site_builds() {
    let Some(config) = demo_config() else {
        return;
    };
    let output = tempfile::tempdir().expect("temp dir");

    let stats = Builder::new(config, output.path())
        .with_static_dir(DEMO_STATIC)
        .build()
        .expect("build should succeed");

    assert_eq!(stats.pages, 1);
    assert_eq!(stats.showcase_apps, 4);
    assert_eq!(stats.assets, 4);

    let html = fs::read_to_string(output.path().join("index.html")).expect("index.html");
    assert!(html.contains(r#"href="/react-native/docs/getting-started.html""#));
    assert!(html.contains(r#"href="/react-native/showcase.html""#));
    assert!(html.contains(
        r#"<img src="/react-native/img/showcase/facebook.png" alt="Facebook" />"#
    ));
    assert!(html.contains(r#"src="https://lh3.googleusercontent.com/skype-icon.png""#));
    assert!(!html.contains("Local Tide Tables"));
    assert!(output.path().join("css/main.css").exists());
    assert!(output.path().join("index.json").exists());
}

#[test]
fn test_demo_showcase_order() {
    let Some(config) = demo_config() else {
        return;
    };

    let page = Builder::new(config, "unused").render().expect("render");
    let showcase = page
        .section(SectionKind::Showcase)
        .and_then(|s| s.node.as_element())
        .expect("showcase section");

    let names: Vec<_> = showcase
        .find_all(&|e| e.tag == "img")
        .iter()
        .filter_map(|img| img.get_attr("alt"))
        .collect();
    assert_eq!(
        names,
        vec!["Facebook", "Facebook Ads Manager", "Instagram", "Skype"]
    );
}

#[test]
fn test_demo_local_icons_exist() {
    let Some(config) = demo_config() else {
        return;
    };
    let assets = StaticAssets::new(DEMO_STATIC);

    for app in config.site.pinned_apps() {
        if app.has_remote_icon() {
            continue;
        }
        let relative = format!("{}{}", landing_core::SHOWCASE_ASSET_PATH, app.icon);
        assert!(assets.contains(&relative), "missing icon for {}", app.name);
    }
}
