use vimdrill::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(config.show_key_hints);
    assert!(config.persist_progress);
}

#[test]
fn test_custom_config() {
    let config = Config {
        theme: "default-light".to_string(),
        show_key_hints: false,
        persist_progress: false,
    };

    assert_eq!(config.theme, "default-light");
    assert!(!config.show_key_hints);
    assert!(!config.persist_progress);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("theme = \"default-dark\""));
    assert!(toml_str.contains("show_key_hints = true"));
    assert!(toml_str.contains("persist_progress = true"));
}

#[test]
fn test_deserialize_partial_config_fills_defaults() {
    let config: Config = toml::from_str("persist_progress = false").unwrap();
    assert!(!config.persist_progress);
    assert_eq!(config.theme, "default-dark");
    assert!(config.show_key_hints);
}

#[test]
fn test_roundtrip() {
    let config = Config {
        theme: "default-light".to_string(),
        show_key_hints: false,
        persist_progress: true,
    };
    let toml_str = toml::to_string(&config).unwrap();
    let back: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(back.theme, config.theme);
    assert_eq!(back.show_key_hints, config.show_key_hints);
    assert_eq!(back.persist_progress, config.persist_progress);
}
