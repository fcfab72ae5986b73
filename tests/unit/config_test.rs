//! Tests for configuration validation

use std::path::PathBuf;

use parking_lot::{const_mutex, Mutex};
use triage_dispatch::config::{
    DirectoryConfig, ResourceConfig, SchedulerConfig, CONFIG_PATH_ENV, MAX_FIRST_ARRIVAL_INDEX,
};

/// Serialises tests that touch `CONFIG_PATH_ENV`.
static ENV_LOCK: Mutex<()> = const_mutex(());

const NURSE_JSON: &str = r#"{
    "first_arrival_index": 7,
    "audit_capacity": 4,
    "directory": {
        "resources": [ { "id": "nurse", "label": "Triage Nurse", "categories": ["cough"] } ],
        "fallback_id": "general",
        "fallback_label": "General Doctor"
    }
}"#;

fn write_temp_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("triage-dispatch-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn single_resource() -> DirectoryConfig {
    DirectoryConfig {
        resources: vec![ResourceConfig::new("nurse", "Triage Nurse", ["cough"])],
        fallback_id: "general".to_string(),
        fallback_label: "General Doctor".to_string(),
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = SchedulerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.directory.resources.len(), 6);
    assert_eq!(config.first_arrival_index, 0);
}

#[test]
fn test_directory_requires_resources() {
    let config = DirectoryConfig {
        resources: Vec::new(),
        ..single_resource()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_directory_rejects_duplicate_ids() {
    let mut config = single_resource();
    config
        .resources
        .push(ResourceConfig::new("nurse", "Second Nurse", ["rash"]));
    let err = config.validate().unwrap_err();
    assert!(err.contains("duplicate resource id"));
}

#[test]
fn test_directory_rejects_fallback_collision() {
    let mut config = single_resource();
    config.fallback_id = "nurse".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_directory_rejects_empty_label() {
    let mut config = single_resource();
    config.resources[0].label = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_scheduler_config_from_json() {
    let json = r#"{
        "first_arrival_index": 10,
        "directory": {
            "resources": [
                { "id": "nurse", "label": "Triage Nurse", "categories": ["cough"] },
                { "id": "surgeon", "label": "On-call Surgeon", "categories": ["cut"], "available": false }
            ],
            "fallback_id": "general",
            "fallback_label": "General Doctor"
        }
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(config.first_arrival_index, 10);
    assert_eq!(config.audit_capacity, 256);
    assert!(config.directory.resources[0].available);
    assert!(!config.directory.resources[1].available);
}

#[test]
fn test_scheduler_config_defaults_directory() {
    let config = SchedulerConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_scheduler_config_rejects_bad_json() {
    let err = SchedulerConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_scheduler_config_from_missing_file() {
    assert!(SchedulerConfig::from_file("/definitely/not/here.json").is_err());
}

#[test]
fn test_scheduler_config_from_file() {
    let path = write_temp_config(NURSE_JSON);
    let config = SchedulerConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.first_arrival_index, 7);
    assert_eq!(config.audit_capacity, 4);
    assert_eq!(config.directory, single_resource());
}

#[test]
fn test_scheduler_config_from_file_reports_invalid_contents() {
    let path = write_temp_config(
        r#"{ "directory": { "resources": [], "fallback_id": "general", "fallback_label": "General Doctor" } }"#,
    );
    let err = SchedulerConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    let message = format!("{err:#}");
    assert!(message.contains("loading config file"));
    assert!(message.contains("at least one resource"));
}

#[test]
fn test_load_reads_file_named_by_env() {
    let _guard = ENV_LOCK.lock();
    let path = write_temp_config(NURSE_JSON);
    std::env::set_var(CONFIG_PATH_ENV, &path);
    let loaded = SchedulerConfig::load();
    std::env::remove_var(CONFIG_PATH_ENV);
    std::fs::remove_file(&path).unwrap();

    let config = loaded.unwrap();
    assert_eq!(config.first_arrival_index, 7);
    assert_eq!(config.directory.resources[0].id, "nurse");
}

#[test]
fn test_load_surfaces_invalid_file() {
    let _guard = ENV_LOCK.lock();
    let path = write_temp_config("{ not json");
    std::env::set_var(CONFIG_PATH_ENV, &path);
    let loaded = SchedulerConfig::load();
    std::env::remove_var(CONFIG_PATH_ENV);
    std::fs::remove_file(&path).unwrap();

    let message = format!("{:#}", loaded.unwrap_err());
    assert!(message.contains("parse error"));
}

#[test]
fn test_load_surfaces_missing_file() {
    let _guard = ENV_LOCK.lock();
    std::env::set_var(CONFIG_PATH_ENV, "/definitely/not/here.json");
    let loaded = SchedulerConfig::load();
    std::env::remove_var(CONFIG_PATH_ENV);

    assert!(loaded.is_err());
}

#[test]
fn test_load_without_env_uses_builtin_table() {
    let _guard = ENV_LOCK.lock();
    std::env::remove_var(CONFIG_PATH_ENV);
    assert_eq!(SchedulerConfig::load().unwrap(), SchedulerConfig::default());
}

#[test]
fn test_scheduler_config_rejects_offset_without_headroom() {
    let json = format!(r#"{{ "first_arrival_index": {} }}"#, u64::MAX);
    let err = SchedulerConfig::from_json_str(&json).unwrap_err();
    assert!(err.contains("headroom"));

    let at_limit = SchedulerConfig {
        first_arrival_index: MAX_FIRST_ARRIVAL_INDEX,
        ..SchedulerConfig::default()
    };
    assert!(at_limit.validate().is_ok());
}

#[test]
fn test_directory_rejects_duplicate_labels() {
    let mut config = single_resource();
    config
        .resources
        .push(ResourceConfig::new("nurse2", "Triage Nurse", ["rash"]));
    let err = config.validate().unwrap_err();
    assert!(err.contains("duplicate resource label"));
}

#[test]
fn test_directory_rejects_label_matching_another_id() {
    let mut config = single_resource();
    config
        .resources
        .push(ResourceConfig::new("surgeon", "nurse", ["cut"]));
    let err = config.validate().unwrap_err();
    assert!(err.contains("another resource's id"));
}

#[test]
fn test_directory_rejects_label_matching_fallback() {
    let mut config = single_resource();
    config.resources[0].label = "General Doctor".to_string();
    assert!(config.validate().unwrap_err().contains("fallback"));

    let mut config = single_resource();
    config.fallback_label = "nurse".to_string();
    assert!(config.validate().unwrap_err().contains("fallback label"));
}

#[test]
fn test_directory_allows_label_equal_to_own_id() {
    let mut config = single_resource();
    config.resources[0].label = "nurse".to_string();
    assert!(config.validate().is_ok());
}
