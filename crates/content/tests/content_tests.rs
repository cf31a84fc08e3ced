use navetta_content::{AppConfig, SiteContent, SiteMeta, default_config_path};

#[test]
fn default_site_has_five_anchored_sections() {
    let site = SiteContent::default();
    assert_eq!(site.links.len(), 5);
    assert_eq!(site.sections.len(), 5);
    assert!(!site.footer.is_empty());

    let mut anchors: Vec<&str> = site.sections.iter().map(|s| s.anchor.as_str()).collect();
    assert_eq!(anchors, vec!["home", "about", "services", "works", "contact"]);
    anchors.sort_unstable();
    anchors.dedup();
    assert_eq!(anchors.len(), 5, "anchors must be unique");
}

#[test]
fn meta_carries_the_tel_affordance() {
    let meta = SiteMeta::default();
    assert!(meta.phone.starts_with('+'));
    assert!(!meta.phone_display.is_empty());
    assert!(meta.canonical.starts_with("https://"));
}

// Single test for everything touching NAVETTA_CONFIG_PATH: the test harness
// runs tests in parallel and the variable is process-global.
#[test]
fn config_path_override_save_and_fallback() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    unsafe {
        std::env::set_var("NAVETTA_CONFIG_PATH", &path);
    }
    assert_eq!(default_config_path(), path);

    let config = AppConfig {
        theme: Some("ansi".into()),
        phone: None,
    };
    config.save().expect("save config");
    assert_eq!(AppConfig::load(), config);

    unsafe {
        std::env::remove_var("NAVETTA_CONFIG_PATH");
    }
    let fallback = default_config_path();
    assert!(fallback.ends_with("navetta/config.json"));
}
