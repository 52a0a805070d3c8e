use notification_center::{ExpiryPolicy, NotificationError, NotificationSettings};
use std::io::Write;
use std::time::Duration;

#[test]
fn defaults_match_three_second_toasts() {
    let settings = NotificationSettings::default();
    assert_eq!(settings.timeout_ms, 3000);
    assert_eq!(settings.timeout(), Duration::from_secs(3));
    assert_eq!(settings.policy, ExpiryPolicy::RearmOnRender);
    assert_eq!(settings.max_visible, None);
}

#[test]
fn empty_document_uses_defaults() {
    let settings = NotificationSettings::from_toml_str("").unwrap();
    assert_eq!(settings, NotificationSettings::default());
}

#[test]
fn parses_all_fields() {
    let settings = NotificationSettings::from_toml_str(
        r#"
timeout_ms = 1500
policy = "from-creation"
max_visible = 4
"#,
    )
    .unwrap();
    assert_eq!(settings.timeout_ms, 1500);
    assert_eq!(settings.policy, ExpiryPolicy::FromCreation);
    assert_eq!(settings.max_visible, Some(4));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = NotificationSettings::from_toml_str("timeout_ms = 0").unwrap_err();
    assert!(matches!(err, NotificationError::InvalidTimeout));
}

#[test]
fn zero_max_visible_means_unlimited() {
    let settings = NotificationSettings::from_toml_str("max_visible = 0").unwrap();
    assert_eq!(settings.max_visible, None);
}

#[test]
fn unknown_policy_is_a_parse_error() {
    let err = NotificationSettings::from_toml_str("policy = \"sometimes\"").unwrap_err();
    assert!(matches!(err, NotificationError::Toml(_)));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = 250").unwrap();
    let settings = NotificationSettings::load_from_file(file.path()).unwrap();
    assert_eq!(settings.timeout(), Duration::from_millis(250));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = NotificationSettings::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, NotificationError::Io(_)));
}
