//! User endpoints
//!
//! Login, logout and account management. Login and the password reset flow
//! work without a session and are sent without a nonce.

use super::client::Pr0grammClient;
use super::types::{Captcha, CaptchaAnswer, LoginResponse};
use crate::auth::NonceMode;
use crate::error::{Error, Result};
use crate::http::Params;
use crate::types::JsonValue;
use tracing::info;

/// User endpoint group
pub struct UserService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    /// Log in. On success the session cookie lands in the client's cookie jar.
    pub async fn login(
        &self,
        name: &str,
        password: &str,
        captcha: Option<&CaptchaAnswer>,
    ) -> Result<LoginResponse> {
        let form = Params::new()
            .set("name", name)
            .set("password", password)
            .opt("token", captcha.map(|c| c.token.as_str()))
            .opt("captcha", captcha.map(|c| c.answer.as_str()));

        let response: LoginResponse = self
            .client
            .post_as("user/login", form, NonceMode::Omit)
            .await?;

        info!("Login as {} (success={})", name, response.success);
        Ok(response)
    }

    /// End the current session
    pub async fn logout(&self) -> Result<JsonValue> {
        let session = self
            .client
            .session()
            .ok_or_else(|| Error::unauthenticated("no session cookie"))?;

        let form = Params::new().set("id", session.id);
        self.client
            .post("user/logout", form, NonceMode::Required)
            .await
    }

    /// Account details of the logged in user
    pub async fn info(&self) -> Result<JsonValue> {
        self.client.get("user/info", &Params::new()).await
    }

    /// Inbox counters and log updates since `offset`
    pub async fn sync(&self, offset: u64) -> Result<JsonValue> {
        let query = Params::new().set("offset", offset);
        self.client.get("user/sync", &query).await
    }

    /// Fetch a captcha challenge for [`UserService::login`]
    pub async fn captcha(&self) -> Result<Captcha> {
        self.client.get_as("user/captcha", &Params::new()).await
    }

    /// Send a password reset mail to `email`
    pub async fn request_password_reset(&self, email: &str) -> Result<JsonValue> {
        let form = Params::new().set("email", email);
        self.client
            .post("user/sendpasswordresetmail", form, NonceMode::Omit)
            .await
    }

    /// Set a new password using the token from the reset mail
    pub async fn reset_password(&self, name: &str, password: &str, token: &str) -> Result<JsonValue> {
        let form = Params::new()
            .set("name", name)
            .set("password", password)
            .set("token", token);
        self.client
            .post("user/resetpassword", form, NonceMode::Omit)
            .await
    }
}
