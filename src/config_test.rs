use super::*;

#[test]
fn default_config_targets_sepolia() {
    let config = UiConfig::default();
    assert_eq!(config.explorer_base_url, "https://sepolia.etherscan.io");
    assert_eq!(config.address_prefix_len, 4);
    assert_eq!(config.address_suffix_len, 4);
    assert!(config.explorer().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let config = UiConfig::from_json(
        r#"{"explorer_base_url": "https://etherscan.io", "address_prefix_len": 6, "logo_src": "/assets/logo.svg"}"#,
    )
    .unwrap();
    assert_eq!(config.explorer_base_url, "https://etherscan.io");
    assert_eq!(config.address_prefix_len, 6);
    assert_eq!(config.address_suffix_len, 4);
    assert_eq!(config.logo_src.as_deref(), Some("/assets/logo.svg"));
}

#[test]
fn from_json_rejects_bad_explorer() {
    let err = UiConfig::from_json(r#"{"explorer_base_url": "not a url"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Explorer(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = UiConfig::from_json("{").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}
