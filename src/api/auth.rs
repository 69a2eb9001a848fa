//! GoTrue sign-up/sign-out client.
//!
//! Holds the session token from the most recent sign-up so the driver's
//! unconditional session clear has something to revoke; with no session the
//! clear is a no-op, which keeps it idempotent.
//!
//! Duplicate detection: GoTrue's current error bodies carry the structured
//! `error_code: "user_already_exists"`, older deployments only the free-text
//! "User already registered" message. Both are recognized here and collapsed
//! into `SignUpError::AlreadyRegistered`; nothing outside this file matches
//! on message text.

use std::sync::Mutex;

use serde::Deserialize;
use serde_json::json;

use super::error::ApiError;
use crate::config::SeedConfig;
use crate::seed::error::{SeedError, SignUpError};
use crate::seed::traits::AuthGateway;

pub struct SupabaseAuth {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
    session: Mutex<Option<String>>,
}

impl SupabaseAuth {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
            client: reqwest::Client::new(),
            session: Mutex::new(None),
        }
    }

    fn store_session(&self, token: Option<String>) {
        if let Ok(mut session) = self.session.lock() {
            if token.is_some() {
                *session = token;
            }
        }
    }

    fn take_session(&self) -> Option<String> {
        self.session.lock().ok().and_then(|mut s| s.take())
    }
}

impl AuthGateway for SupabaseAuth {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<String>, SignUpError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        });

        let response = self
            .client
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SignUpError::Other(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error: GotrueErrorBody = response.json().await.unwrap_or_default();
            if error.is_already_registered() {
                return Err(SignUpError::AlreadyRegistered);
            }
            return Err(SignUpError::Other(format!(
                "signup returned {}: {}",
                status.as_u16(),
                error.message()
            )));
        }

        let payload: SignUpResponse = response
            .json()
            .await
            .map_err(|e| SignUpError::Other(format!("unreadable signup response: {e}")))?;

        self.store_session(payload.access_token.clone());
        Ok(payload.user_id())
    }

    async fn sign_out(&self) -> Result<(), SeedError> {
        let Some(token) = self.take_session() else {
            return Ok(());
        };

        let response = self
            .client
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        // An already-dead session is a successful clear.
        if status.is_success() || status.as_u16() == 401 || status.as_u16() == 404 {
            return Ok(());
        }
        Err(ApiError::Status {
            service: "gotrue",
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        }
        .into())
    }
}

/// GoTrue error body across API generations.
#[derive(Debug, Default, Deserialize)]
struct GotrueErrorBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl GotrueErrorBody {
    fn is_already_registered(&self) -> bool {
        if self.error_code.as_deref() == Some("user_already_exists") {
            return true;
        }
        self.message()
            .to_ascii_lowercase()
            .contains("already registered")
    }

    fn message(&self) -> &str {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .unwrap_or("unknown error")
    }
}

/// Successful sign-up payload. With auto-confirm on, GoTrue returns a
/// session with a nested user; with confirmation pending it returns the
/// bare user object instead.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    access_token: Option<String>,
    user: Option<GotrueUser>,
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GotrueUser {
    id: String,
}

impl SignUpResponse {
    fn user_id(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| u.id.clone())
            .or_else(|| self.id.clone())
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_code_wins() {
        let body: GotrueErrorBody = serde_json::from_str(
            r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#,
        )
        .unwrap();
        assert!(body.is_already_registered());
    }

    #[test]
    fn legacy_message_text_recognized() {
        let body: GotrueErrorBody =
            serde_json::from_str(r#"{"msg":"User already registered"}"#).unwrap();
        assert!(body.is_already_registered());
    }

    #[test]
    fn unrelated_error_not_classified_as_duplicate() {
        let body: GotrueErrorBody =
            serde_json::from_str(r#"{"msg":"Password should be at least 6 characters"}"#).unwrap();
        assert!(!body.is_already_registered());
        assert_eq!(body.message(), "Password should be at least 6 characters");
    }

    #[test]
    fn user_id_from_session_payload() {
        let payload: SignUpResponse = serde_json::from_str(
            r#"{"access_token":"tok","user":{"id":"u1","email":"mark@x"}}"#,
        )
        .unwrap();
        assert_eq!(payload.user_id().as_deref(), Some("u1"));
        assert_eq!(payload.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn user_id_from_bare_user_payload() {
        let payload: SignUpResponse =
            serde_json::from_str(r#"{"id":"u2","email":"lisa@x","aud":"authenticated"}"#).unwrap();
        assert_eq!(payload.user_id().as_deref(), Some("u2"));
    }

    #[test]
    fn missing_or_empty_id_yields_none() {
        let payload: SignUpResponse = serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();
        assert!(payload.user_id().is_none());

        let payload: SignUpResponse = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(payload.user_id().is_none());
    }
}
