use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000\n")).unwrap(), 4000);
}

#[test]
fn garbage_port_is_rejected() {
    for bad in ["http", "-1", "70000"] {
        let err = parse_port(Some(bad)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == bad), "{bad}");
    }
}
