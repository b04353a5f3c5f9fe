use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.log_level, Level::Info);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://evals.example.test/api//"), Some("debug"));
    assert_eq!(cfg.api_base_url, "https://evals.example.test/api");
    assert_eq!(cfg.log_level, Level::Debug);
}

#[test]
fn from_values_falls_back_on_invalid_input() {
    let cfg = ClientConfig::from_values(Some("localhost:8000"), Some("loud"));
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn parse_base_url_rejects_missing_scheme() {
    assert_eq!(
        parse_base_url(Some("ftp://host")),
        Err(ConfigError::InvalidBaseUrl("ftp://host".to_owned()))
    );
}

#[test]
fn parse_base_url_treats_blank_as_default() {
    assert_eq!(parse_base_url(Some("   ")), Ok(DEFAULT_API_BASE_URL.to_owned()));
}

#[test]
fn parse_log_level_is_case_insensitive() {
    assert_eq!(parse_log_level(Some("WARN")), Ok(Level::Warn));
    assert_eq!(parse_log_level(Some("nope")), Err(ConfigError::InvalidLogLevel("nope".to_owned())));
}

#[test]
fn endpoint_joins_path() {
    let cfg = ClientConfig::from_values(Some("http://api.test"), None);
    assert_eq!(cfg.endpoint("/users/me"), "http://api.test/users/me");
}
