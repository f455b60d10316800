/// Pokupki - a voice-assistant skill that keeps a family shopping list in a
/// Notion database.
///
/// This crate implements a single-Lambda webhook for the Yandex Dialogs
/// platform: the Lambda receives the spoken-request envelope, classifies the
/// utterance and reads or updates the shopping list through the Notion REST
/// API.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for Notion API interactions
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use pokupki::api::handler::handle_envelope;
/// use pokupki::core::config::AppConfig;
/// use pokupki::dialogs::envelope::WebhookRequest;
/// use pokupki::notion::NotionStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     pokupki::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         notion_token: "dummy_token".to_string(),
///         notion_db_id: "dummy_database_id".to_string(),
///     };
///
///     // Classify an utterance and sync the list
///     let store = NotionStore::new(&config);
///     let envelope: WebhookRequest = serde_json::from_str(
///         r#"{"version":"1.0","session":{},"request":{"original_utterance":"добавь молоко и хлеб"}}"#,
///     )?;
///
///     let reply = handle_envelope(&store, envelope).await;
///     println!("{}", reply.response.text);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod dialogs;
pub mod errors;
pub mod intent;
pub mod notion;

pub use errors::SkillError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// pokupki::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
