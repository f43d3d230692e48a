#![forbid(unsafe_code)]

//! Loading [`ListConfig`] from TOML and JSON (feature `config-file`).

use std::io::Write;

use undolist::{ConfigError, ListConfig, StringList};

#[test]
fn toml_overrides_only_given_fields() {
    let config = ListConfig::from_toml_str("initial_capacity = 32\n").unwrap();
    assert_eq!(config.initial_capacity, 32);
    assert_eq!(config.log_initial_capacity, 4);
    assert_eq!(config.max_undo_depth, None);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(ListConfig::from_toml_str("").unwrap(), ListConfig::default());
}

#[test]
fn json_round_trip_through_list() {
    let config = ListConfig::from_json_str(
        r#"{ "initial_capacity": 2, "log_initial_capacity": 1, "max_undo_depth": 1 }"#,
    )
    .unwrap();
    let mut list = StringList::with_config(config);
    list.insert_back("a");
    list.insert_back("b");
    list.insert_back("c");
    assert_eq!(list.capacity(), 4);
    assert_eq!(list.undo_depth(), 1);
}

#[test]
fn default_config_writes_and_reads_back_as_toml() {
    let written = toml::to_string(&ListConfig::default()).unwrap();
    assert!(!written.contains("max_undo_depth"));
    assert_eq!(
        ListConfig::from_toml_str(&written).unwrap(),
        ListConfig::default()
    );

    let bounded = ListConfig::default().with_max_undo_depth(25);
    let written = toml::to_string(&bounded).unwrap();
    assert!(written.contains("max_undo_depth = 25"));
    assert_eq!(ListConfig::from_toml_str(&written).unwrap(), bounded);
}

#[test]
fn json_null_depth_means_unlimited() {
    let config = ListConfig::from_json_str(r#"{ "max_undo_depth": null }"#).unwrap();
    assert_eq!(config.max_undo_depth, None);

    let written = serde_json::to_string(&ListConfig::default()).unwrap();
    assert_eq!(ListConfig::from_json_str(&written).unwrap(), ListConfig::default());
}

#[test]
fn zero_capacity_is_rejected() {
    let err = ListConfig::from_toml_str("initial_capacity = 0").unwrap_err();
    match err {
        ConfigError::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("initial_capacity"));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn malformed_inputs_report_parse_errors() {
    assert!(matches!(
        ListConfig::from_toml_str("initial_capacity = \"ten\""),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        ListConfig::from_json_str("{"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn loads_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("undolist.toml");
    let mut file = std::fs::File::create(&toml_path).unwrap();
    writeln!(file, "max_undo_depth = 50").unwrap();
    let config = ListConfig::from_toml_file(&toml_path).unwrap();
    assert_eq!(config.max_undo_depth, Some(50));

    let json_path = dir.path().join("undolist.json");
    std::fs::write(&json_path, r#"{ "log_initial_capacity": 16 }"#).unwrap();
    let config = ListConfig::from_json_file(&json_path).unwrap();
    assert_eq!(config.log_initial_capacity, 16);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ListConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
