use super::*;

#[test]
fn ui_config_defaults_point_at_sign_in() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.sign_in_path, "/sign-in");
    assert_eq!(cfg.toast_ttl_ms, DEFAULT_TOAST_TTL_MS);
}

#[test]
fn parse_port_falls_back_to_default() {
    assert_eq!(parse_port(None, 3000), Ok(3000));
    assert_eq!(parse_port(Some("  "), 3000), Ok(3000));
}

#[test]
fn parse_port_accepts_override() {
    assert_eq!(parse_port(Some("8080"), 3000), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty"), 3000), Err(ConfigError::InvalidPort("eighty".to_owned())));
    assert_eq!(parse_port(Some("70000"), 3000), Err(ConfigError::InvalidPort("70000".to_owned())));
}
