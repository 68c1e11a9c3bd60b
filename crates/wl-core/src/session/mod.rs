//! Session credentials returned by onboarding completion.

use serde_json::Value;

use crate::security::SecretString;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the JSON-serialized user object.
pub const USER_KEY: &str = "user";

/// Result of a successful onboarding completion.
///
/// Transient: handed from the completion port to session persistence and
/// then dropped.
#[derive(Debug)]
pub struct CompletionResult {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
    pub user: Option<Value>,
}

impl CompletionResult {
    pub fn new(
        access_token: impl Into<SecretString>,
        refresh_token: impl Into<SecretString>,
        user: Option<Value>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }
    }
}

/// Session as read back from client storage.
#[derive(Debug)]
pub struct SessionRecord {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
    pub user: Option<Value>,
}
