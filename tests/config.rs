use estatelist::config::Config;
use estatelist::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:5000/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.ui.date_format, datetime::FORM_DATE_FORMAT);
    assert_eq!(config.notifications.dismiss_secs, 6);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty base URL should fail
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());

    // Non-HTTP URL should fail
    config.api.base_url = "ftp://crm.example.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.api.base_url = "http://localhost:5000/api".to_string();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.api.timeout_secs = 301;
    assert!(config.validate().is_err());

    // Reset and test invalid dismiss interval
    config.api.timeout_secs = 30;
    config.notifications.dismiss_secs = 0;
    assert!(config.validate().is_err());

    // Reset and test broken date format
    config.notifications.dismiss_secs = 6;
    config.ui.date_format = "%Q".to_string();
    assert!(config.validate().is_err());

    // An unusual but well-formed format is fine
    config.ui.date_format = "%d/%m/%Y".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:5000/api\""));
    assert!(toml_str.contains("timeout_secs = 30"));
    assert!(toml_str.contains("dismiss_secs = 6"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
base_url = "https://crm.example.com/api"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.base_url, "https://crm.example.com/api");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.api.timeout_secs, 30); // default value
    assert_eq!(config.ui.date_format, datetime::FORM_DATE_FORMAT); // default value
    assert_eq!(config.notifications.dismiss_secs, 6); // default value
    assert_eq!(config.logging.file, "estatelist.log"); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.api.timeout_secs, default_config.api.timeout_secs);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.ui.date_format, default_config.ui.date_format);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("estatelist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Estatelist Configuration File"));
    assert!(content.contains("base_url = \"http://localhost:5000/api\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
