use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_yields_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.session_ttl, Duration::from_secs(168 * 3600));
    assert_eq!(config.access_code_ttl, Duration::from_secs(600));
}

#[test]
fn overrides_are_applied() {
    let config = Config::from_lookup(lookup_from(&[
        ("BIND_ADDR", "127.0.0.1"),
        ("PORT", "8080"),
        ("SESSION_TTL_HOURS", "1"),
        ("ACCESS_CODE_TTL_MINUTES", "2"),
        ("COOKIE_SECURE", "yes"),
        ("ECHO_ACCESS_CODES", "on"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, IpAddr::from([127, 0, 0, 1]));
    assert_eq!(config.port, 8080);
    assert_eq!(config.session_ttl, Duration::from_secs(3600));
    assert_eq!(config.access_code_ttl, Duration::from_secs(120));
    assert!(config.cookie_secure);
    assert!(config.echo_access_codes);
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });
}

#[test]
fn invalid_bool_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("COOKIE_SECURE", "sometimes")])).unwrap_err();
    assert!(err.to_string().contains("COOKIE_SECURE"));
}

#[test]
fn port_value_is_trimmed() {
    let config = Config::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(config.port, 4000);
}
