use super::*;
use crate::net::types::UserPreferences;

// =============================================================
// decode_response: 401 handling
// =============================================================

#[test]
fn status_401_is_unauthorized_regardless_of_body() {
    let err = decode_response::<LoginResponse>(401, r#"{"error":"token expired"}"#).unwrap_err();
    assert!(err.is_unauthorized());

    let err = decode_response::<LoginResponse>(401, "not even json").unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn unauthorized_displays_as_unauthorized() {
    assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
}

// =============================================================
// decode_response: error envelopes
// =============================================================

#[test]
fn server_error_message_comes_from_envelope() {
    let err = decode_response::<LoginResponse>(400, r#"{"error":"email required"}"#).unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 400,
            message: "email required".to_owned()
        }
    );
    assert_eq!(err.to_string(), "email required");
}

#[test]
fn malformed_error_body_falls_back_to_http_status() {
    let err = decode_response::<LoginResponse>(500, "<html>oops</html>").unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[test]
fn envelope_without_error_field_falls_back_to_http_status() {
    let err = decode_response::<LoginResponse>(502, r#"{"detail":"bad gateway"}"#).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 502");
}

// =============================================================
// decode_response: success
// =============================================================

#[test]
fn success_parses_typed_body() {
    let resp: LoginResponse = decode_response(200, r#"{"token":"tok-9"}"#).expect("login");
    assert_eq!(resp.token, "tok-9");
}

#[test]
fn malformed_success_body_is_a_transport_error() {
    let err = decode_response::<LoginResponse>(200, "{").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

// =============================================================
// decode_save_response
// =============================================================

#[test]
fn save_204_means_accepted_without_echo() {
    let outcome = decode_save_response(204, "").expect("outcome");
    assert_eq!(outcome, SaveOutcome::Accepted);
}

#[test]
fn save_200_carries_canonical_echo() {
    let outcome =
        decode_save_response(200, r#"{"email":true,"sms":false,"push":true}"#).expect("outcome");
    assert_eq!(
        outcome,
        SaveOutcome::Canonical(UserPreferences {
            email: true,
            sms: false,
            push: true
        })
    );
}

#[test]
fn save_401_is_unauthorized() {
    assert!(decode_save_response(401, "").unwrap_err().is_unauthorized());
}

// =============================================================
// Base URL
// =============================================================

#[test]
fn base_url_has_a_default() {
    assert!(base_url().starts_with("http"));
}
