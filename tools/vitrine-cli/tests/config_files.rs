//! Config and catalog files on disk.

use std::fs;

use vitrine_cli::config::{self, find_config_file, generate_default_config};
use vitrine_cli::context::load_catalog;
use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::config::StoreConfig;

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.toml");

    let mut store_config = StoreConfig::default();
    store_config.store.name = "Loja Teste".into();
    store_config.display.mascot_url = "https://img.test/mascot.gif".into();
    config::save(&store_config, &path).unwrap();

    assert_eq!(config::load(&path).unwrap(), store_config);
}

#[test]
fn test_json_chosen_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(&path, r#"{"messaging": {"contact_id": "5511000000000"}}"#).unwrap();

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.messaging.contact_id, "5511000000000");
    assert_eq!(loaded.messaging.base_url, "https://wa.me");
    assert_eq!(loaded.store, StoreConfig::default().store);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.toml");
    fs::write(&path, "[display]\nprices_updated = \"2025-02-03\"\n").unwrap();

    let loaded = config::load(&path).unwrap();
    assert_eq!(loaded.display.prices_updated_label(), "03/02/2025");
    assert_eq!(loaded.display.sidebar_breakpoint_px, 768);
}

#[test]
fn test_invalid_toml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, "[store\nname = ").unwrap();

    let err = config::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("vitrine.toml"));
}

#[test]
fn test_generated_config_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, generate_default_config()).unwrap();

    assert_eq!(find_config_file(dir.path()), Some(path.clone()));
    assert_eq!(config::load(&path).unwrap(), StoreConfig::default());
}

#[test]
fn test_no_config_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(find_config_file(dir.path()), None);
}

#[test]
fn test_catalog_export_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let builtin = Catalog::builtin();
    fs::write(&path, builtin.to_json_pretty().unwrap()).unwrap();

    assert_eq!(load_catalog(&path).unwrap(), builtin);
}

#[test]
fn test_catalog_with_duplicate_ids_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"name": "iPhone 16 128GB", "category": "iphone", "finalPrice": 4700},
            {"name": "iphone 16  128gb", "category": "iphone", "finalPrice": 4800}
        ]"#,
    )
    .unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate product id"));
}
