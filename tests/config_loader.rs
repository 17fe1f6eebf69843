use moviesearch::config::{build_auth_header, Config, ConfigError, CredentialStatus};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.search_url, "https://api.themoviedb.org/3/search/movie");
    assert_eq!(config.api.image_base_url, "https://image.tmdb.org/t/p/w500");
    assert_eq!(config.api.token_env, "TMDB_TOKEN");
    assert!(config.api.token.is_none());
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.timeout_seconds, 0);
    assert_eq!(config.cache.stale_seconds, 0);
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.ui.toast_seconds, 3);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviesearch/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config(
        r#"
[api]
search_url = "http://127.0.0.1:9999/3/search/movie"
token = "from-file"

[cache]
stale_seconds = 60
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.api.search_url, "http://127.0.0.1:9999/3/search/movie");
    assert_eq!(config.api.token.as_deref(), Some("from-file"));
    assert_eq!(config.api.token_env, "TMDB_TOKEN");
    assert_eq!(config.cache.stale_seconds, 60);
    assert_eq!(config.ui.toast_seconds, 3);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[api\nsearch_url = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let file = write_config("[ui]\ntick_ms = \"fast\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_url_fails_validation() {
    let file = write_config("[api]\nsearch_url = \"not a url\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("Invalid search_url"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_zero_tick_fails_validation() {
    let file = write_config("[ui]\ntick_ms = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_file_token_builds_bearer_header() {
    let file = write_config(
        r#"
[api]
token_env = "MOVIESEARCH_TEST_CONFIG_LOADER_UNSET"
token = "abc123"
"#,
    );
    let config = Config::load_from(file.path()).unwrap();

    let token = match config.api.resolve_credential() {
        CredentialStatus::Configured(token) => token,
        other => panic!("expected configured token, got {:?}", other),
    };
    let (name, value) = build_auth_header(Some(&token)).unwrap();
    assert_eq!(name, "Authorization");
    assert_eq!(value, "Bearer abc123");
}
