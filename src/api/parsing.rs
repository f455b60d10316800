use serde_json::Value;

use crate::SkillError;
use crate::dialogs::envelope::WebhookRequest;

/// Extract the Dialogs envelope from a Lambda event payload.
///
/// The function can be invoked two ways: through a function URL, where the
/// envelope arrives JSON-encoded in a string `body` field, or directly with
/// the envelope as the event payload itself. A payload carrying a `version`
/// or `request` key is treated as the bare envelope.
///
/// # Errors
///
/// Returns [`SkillError::ParseError`] when neither form yields a valid
/// envelope.
pub fn extract_envelope(payload: &Value) -> Result<WebhookRequest, SkillError> {
    if payload.get("request").is_some() || payload.get("version").is_some() {
        return serde_json::from_value(payload.clone())
            .map_err(|e| SkillError::ParseError(format!("Invalid webhook envelope: {e}")));
    }

    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Err(SkillError::ParseError("Missing webhook body".to_string()));
    };

    serde_json::from_str(body)
        .map_err(|e| SkillError::ParseError(format!("Invalid webhook envelope: {e}")))
}
