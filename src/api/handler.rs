//! Webhook Lambda handler - thin dispatcher over the classified intent.
//!
//! This module handles:
//! - Envelope extraction and validation
//! - Intent dispatch (greet, list, add)
//! - Reporting Notion failures back to the caller as a spoken sentence

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};
use uuid::Uuid;

use super::parsing;
use crate::core::config::AppConfig;
use crate::dialogs::envelope::{WebhookRequest, WebhookResponse};
use crate::dialogs::response;
use crate::intent::{self, Intent};
use crate::notion::{NotionStore, ShoppingStore};

pub use self::function_handler as handler;

/// Lambda handler for the webhook entrypoint.
///
/// The configuration is constructed once at startup and passed in
/// explicitly; the handler holds no process-wide credential state.
///
/// # Errors
///
/// Returns an error when no Dialogs envelope can be extracted from the
/// event payload; every later failure is reported inside the reply envelope.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<serde_json::Value>,
) -> Result<WebhookResponse, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    info!(correlation_id = %correlation_id, "Webhook received request");

    let envelope = match parsing::extract_envelope(&event.payload) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Envelope error: {}", e);
            return Err(Error::from(e.to_string()));
        }
    };

    let store = NotionStore::new(config);
    Ok(handle_envelope(&store, envelope).await)
}

/// Process one envelope against a shopping store.
///
/// Always produces a reply envelope: a failed external call turns into a
/// spoken failure sentence rather than a failed request.
pub async fn handle_envelope(
    store: &dyn ShoppingStore,
    envelope: WebhookRequest,
) -> WebhookResponse {
    let utterance = envelope.utterance().to_string();
    let intent = intent::classify(&utterance);
    info!("Classified utterance as {:?}", intent);

    match intent {
        Intent::Greet => envelope.into_reply(response::greeting(), false),

        Intent::ListItems => match store.unpurchased_items().await {
            Ok(names) => envelope.into_reply(response::listing(&names), true),
            Err(e) => {
                error!("Failed to list items: {}", e);
                envelope.into_reply(response::store_failure(), true)
            }
        },

        Intent::AddItems(names) => {
            // Sequential: a failure partway leaves the earlier names
            // committed and the whole command reported as failed.
            for name in &names {
                let stored = intent::capitalize_first(name);
                if let Err(e) = store.add_item(&stored).await {
                    error!("Failed to add item {}: {}", stored, e);
                    return envelope.into_reply(response::store_failure(), true);
                }
            }

            // Confirmation repeats the names as spoken, not as stored.
            envelope.into_reply(response::added(&names), true)
        }
    }
}
