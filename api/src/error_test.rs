use super::*;

#[test]
fn from_status_extracts_string_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::Status { status: 400, detail: Some("Email already registered".to_owned()) });
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn from_status_ignores_structured_detail() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
    let err = ApiError::from_status(422, body);
    assert_eq!(err.user_message("Registration failed"), "Registration failed");
}

#[test]
fn from_status_tolerates_non_json_body() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
}

#[test]
fn transport_errors_use_fallback_message() {
    let err = ApiError::from(TransportError::Timeout(Duration::from_secs(10)));
    assert_eq!(err.to_string(), "request timed out after 10s");
    assert_eq!(err.user_message("Login failed"), "Login failed");
    assert_eq!(err.status(), None);
}

#[test]
fn is_unauthorized_matches_only_401() {
    assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, detail: None }.is_unauthorized());
    assert!(!ApiError::Decode("eof".to_owned()).is_unauthorized());
}

#[test]
fn status_display_includes_detail() {
    let err = ApiError::Status { status: 401, detail: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.to_string(), "request failed with status 401: Invalid credentials");
}
