use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound webhook envelope from the Yandex Dialogs platform.
///
/// Only the fields the skill acts on are typed; everything else the platform
/// sends is ignored on input. The `session` object is owned by the platform
/// and carried opaquely so it can be echoed back untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    pub version: String,
    #[serde(default)]
    pub session: Value,
    #[serde(default)]
    pub request: RequestPayload,
}

/// The `request` object of the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestPayload {
    /// The raw spoken phrase as transcribed by the platform. Absent on the
    /// first turn of a session.
    #[serde(default)]
    pub original_utterance: Option<String>,
}

/// Outbound webhook envelope returned to the platform.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub version: String,
    pub session: Value,
    pub response: ResponsePayload,
}

/// The `response` object of the reply envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsePayload {
    pub text: String,
    pub end_session: bool,
}

impl WebhookRequest {
    /// The spoken phrase, or `""` when the platform sent none.
    #[must_use]
    pub fn utterance(&self) -> &str {
        self.request.original_utterance.as_deref().unwrap_or("")
    }

    /// Build the reply envelope, echoing version and session metadata.
    #[must_use]
    pub fn into_reply(self, text: impl Into<String>, end_session: bool) -> WebhookResponse {
        WebhookResponse {
            version: self.version,
            session: self.session,
            response: ResponsePayload {
                text: text.into(),
                end_session,
            },
        }
    }
}
