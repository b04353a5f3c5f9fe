use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"detail":"Could not validate credentials"}"#);
    assert_eq!(err, ApiError::Unauthorized { detail: Some("Could not validate credentials".to_owned()) });
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_maps_other_4xx_to_validation() {
    let err = ApiError::from_status(400, r#"{"detail":"Username already registered"}"#);
    assert_eq!(
        err,
        ApiError::Validation { status: 400, detail: Some("Username already registered".to_owned()) }
    );
    assert!(!err.is_unauthorized());
}

#[test]
fn from_status_maps_5xx_to_server() {
    let err = ApiError::from_status(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::Server { status: 502, detail: None });
}

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::from_status(403, r#"{"detail":"Not authorized to view tests"}"#);
    assert_eq!(err.user_message(), "Not authorized to view tests");
}

#[test]
fn user_message_falls_back_to_generic() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Server { status: 500, detail: None }.user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"value is not a valid integer"}]}"#;
    assert_eq!(
        extract_detail(body).as_deref(),
        Some("field required; value is not a valid integer")
    );
}

#[test]
fn extract_detail_ignores_blank_and_non_json() {
    assert_eq!(extract_detail(r#"{"detail":"   "}"#), None);
    assert_eq!(extract_detail(r#"{"detail":42}"#), None);
    assert_eq!(extract_detail("not json"), None);
    assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
}
