//! Contact form endpoint

use super::client::Pr0grammClient;
use crate::auth::NonceMode;
use crate::error::Result;
use crate::http::Params;
use crate::types::JsonValue;

/// Contact endpoint group
pub struct ContactService<'a> {
    client: &'a Pr0grammClient,
}

impl<'a> ContactService<'a> {
    pub(crate) fn new(client: &'a Pr0grammClient) -> Self {
        Self { client }
    }

    /// Send a message to the site staff. Works without a session.
    pub async fn send(&self, email: &str, subject: &str, message: &str) -> Result<JsonValue> {
        let form = Params::new()
            .set("email", email)
            .set("subject", subject)
            .set("message", message);
        self.client
            .post("contact/send", form, NonceMode::Omit)
            .await
    }
}
