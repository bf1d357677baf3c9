use crate::{CredentialToken, SignInError, SignInPayload};

use googletest::prelude::*;

#[test]
fn given_json_object_with_token_when_parsed_then_token_extracted() {
    // Given
    let payload = SignInPayload::from_json(r#"{"idToken":"tok123","email":"ann@example.com"}"#)
        .unwrap();

    // When
    let token = payload.credential_token().unwrap();

    // Then
    assert_that!(token.expose(), eq("tok123"));
    assert_that!(payload.id_token(), some(eq("tok123")));
}

#[test]
fn given_non_object_json_when_parsed_then_malformed_payload() {
    let result = SignInPayload::from_json(r#"["idToken"]"#);

    assert!(matches!(result, Err(SignInError::MalformedPayload { .. })));
}

#[test]
fn given_invalid_json_when_parsed_then_malformed_payload() {
    let result = SignInPayload::from_json("{idToken:");

    assert!(matches!(result, Err(SignInError::MalformedPayload { .. })));
}

#[test]
fn given_null_token_when_extracted_then_missing_credential() {
    let payload = SignInPayload::from_json(r#"{"idToken":null}"#).unwrap();

    let result = payload.credential_token();

    assert!(matches!(result, Err(SignInError::MissingCredential { .. })));
    assert_that!(payload.id_token(), none());
}

#[test]
fn given_empty_token_when_extracted_then_missing_credential() {
    let payload = SignInPayload::from_json(r#"{"idToken":""}"#).unwrap();

    assert!(matches!(
        payload.credential_token(),
        Err(SignInError::MissingCredential { .. })
    ));
}

#[test]
fn given_credential_token_when_debug_formatted_then_value_redacted() {
    let token = CredentialToken::new("super-secret-token");

    let rendered = format!("{token:?}");

    assert_that!(rendered, not(contains_substring("super-secret-token")));
}
