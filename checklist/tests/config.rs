use std::io::Write;

use checklist::{
    ChecklistConfig, ChecklistController, ChecklistError, ConfigError, ConfigIssue,
    DEFAULT_WINDOW_SIZE, ItemRole, NullRenderer, SelectionPolicy,
};

const MEDIA_FILTER: &str = r#"{
    "title": "sort",
    "labelIcon": "theme-icon-filter",
    "list": {
        "size": 2,
        "focusIndex": 1,
        "data": [
            {"state": true, "title": "All content", "value": 1, "role": "allSentinel"},
            {"state": false, "title": "Music", "value": 2, "id": "music"},
            {"title": "Video", "value": 3}
        ]
    }
}"#;

#[test]
fn test_parse_full_config() {
    let config = ChecklistConfig::from_json_str(MEDIA_FILTER).unwrap();
    assert_eq!(config.title.as_deref(), Some("sort"));
    assert_eq!(config.label_icon.as_deref(), Some("theme-icon-filter"));
    assert_eq!(config.list.size, 2);
    assert_eq!(config.list.focus_index, Some(1));

    let items = config.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].role, ItemRole::AllSentinel);
    assert_eq!(items[0].id.as_str(), "0");
    assert_eq!(items[1].id.as_str(), "music");
    assert!(!items[2].state);
    assert_eq!(items[2].value, serde_json::json!(3));
}

#[test]
fn test_defaults() {
    let config =
        ChecklistConfig::from_json_str(r#"{"list": {"data": [{"title": "Only"}]}}"#).unwrap();
    assert_eq!(config.list.size, DEFAULT_WINDOW_SIZE);
    assert_eq!(config.list.focus_index, None);
    assert_eq!(config.title, None);

    let items = config.items();
    assert_eq!(items[0].role, ItemRole::Regular);
    assert_eq!(items[0].value, serde_json::Value::Null);
}

#[test]
fn test_parse_error() {
    let err = ChecklistConfig::from_json_str(r#"{"list": {"data": [{}]}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_controller_from_config() {
    let config = ChecklistConfig::from_json_str(MEDIA_FILTER).unwrap();
    let mut checklist = ChecklistController::from_config(&config, NullRenderer).unwrap();

    assert_eq!(checklist.policy(), SelectionPolicy::AllSentinel { sentinel: 0 });
    assert_eq!(checklist.viewport().window_size(), 2);
    assert_eq!(checklist.focus_index(), Some(1));
    assert_eq!(checklist.summary().text, "All content");

    let event = checklist.toggle(2).unwrap();
    assert_eq!(event.text, "Video");
}

#[test]
fn test_config_without_roles_is_plain() {
    let config = ChecklistConfig::from_json_str(
        r#"{"list": {"data": [
            {"state": true, "title": "All content", "value": 1},
            {"state": false, "title": "Music", "value": 2},
            {"state": false, "title": "Video", "value": 3}
        ]}}"#,
    )
    .unwrap();
    let mut checklist = ChecklistController::from_config(&config, NullRenderer).unwrap();
    assert_eq!(checklist.policy(), SelectionPolicy::Plain);

    // The first item is an ordinary checkbox, so it stays selected.
    let event = checklist.toggle(1).unwrap();
    assert_eq!(event.text, "All content, Music");
    assert_eq!(checklist.header_count(), 3);
}

#[test]
fn test_controller_from_invalid_config() {
    let config = ChecklistConfig::from_json_str(r#"{"list": {"data": []}}"#).unwrap();
    let err = ChecklistController::from_config(&config, NullRenderer).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(ChecklistError::InvalidConfig(ConfigIssue::Empty))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("checklist-config-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(MEDIA_FILTER.as_bytes()).unwrap();
    drop(file);

    let config = ChecklistConfig::load(&path).unwrap();
    assert_eq!(config.list.data.len(), 3);
    std::fs::remove_file(&path).unwrap();

    let err = ChecklistConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
