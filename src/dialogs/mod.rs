//! Yandex Dialogs protocol surface: envelope types and spoken responses

pub mod envelope;
pub mod response;

// Re-export main types for convenience
pub use envelope::{RequestPayload, ResponsePayload, WebhookRequest, WebhookResponse};
