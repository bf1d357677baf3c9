use crate::{CredentialToken, ID_TOKEN_FIELD, Result as SignInResultAlias, SignInError};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result payload handed back by the credential provider's sign-in surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignInPayload(Map<String, Value>);

impl SignInPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse a payload delivered as JSON text. It must be a JSON object.
    #[track_caller]
    pub fn from_json(raw: &str) -> SignInResultAlias<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(other) => Err(SignInError::malformed_payload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(SignInError::malformed_payload(e.to_string())),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Identity token, if the payload carries a non-empty one.
    pub fn id_token(&self) -> Option<&str> {
        self.get(ID_TOKEN_FIELD)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Extract the identity token as a credential.
    #[track_caller]
    pub fn credential_token(&self) -> SignInResultAlias<CredentialToken> {
        match self.get(ID_TOKEN_FIELD) {
            None | Some(Value::Null) => Err(SignInError::missing_credential()),
            Some(Value::String(token)) if token.is_empty() => {
                Err(SignInError::missing_credential())
            }
            Some(Value::String(token)) => Ok(CredentialToken::new(token.as_str())),
            Some(other) => Err(SignInError::malformed_payload(format!(
                "'{ID_TOKEN_FIELD}' must be a string, got {}",
                json_kind(other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for SignInPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
