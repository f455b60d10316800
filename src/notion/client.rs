//! Notion API client module
//!
//! Encapsulates all Notion API interactions with retry logic and error handling.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::core::models::ShoppingItem;
use crate::errors::SkillError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// Pinned API revision sent with every request; property shapes in the
/// payload builders below match this revision.
const NOTION_VERSION: &str = "2022-06-28";

/// Response from the `databases.query` endpoint. Only the result pages are
/// read; pagination cursors are ignored because the skill never asks for
/// more than one page of results.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Request payload builders (extracted for testability)
// ─────────────────────────────────────────────────────────────────────────────

/// Build the JSON payload for `pages.create`: a new list row whose `Name`
/// title is `name`, with the `Куплено` checkbox left unchecked.
#[must_use]
pub fn build_create_item_payload(database_id: &str, name: &str) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": {
                "title": [{ "type": "text", "text": { "content": name } }]
            }
        }
    })
}

/// Build the JSON payload for `pages.update` setting the `Куплено` checkbox.
#[must_use]
pub fn build_set_purchased_payload(purchased: bool) -> Value {
    json!({
        "properties": { "Куплено": { "checkbox": purchased } }
    })
}

/// Build the `databases.query` filter matching one row by exact title.
#[must_use]
pub fn build_name_query_payload(name: &str) -> Value {
    json!({
        "filter": {
            "property": "Name",
            "title": { "equals": name }
        },
        "page_size": 1
    })
}

/// Build the `databases.query` filter for rows not yet bought.
#[must_use]
pub fn build_unpurchased_query_payload() -> Value {
    json!({
        "filter": {
            "property": "Куплено",
            "checkbox": { "equals": false }
        }
    })
}

/// Decode one page object into a [`ShoppingItem`].
///
/// # Errors
///
/// Returns [`SkillError::MalformedData`] when the page is missing its id,
/// title text or purchased checkbox.
pub fn parse_page(page: &Value) -> Result<ShoppingItem, SkillError> {
    let page_id = page
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| SkillError::MalformedData("page missing id".to_string()))?;

    let name = page
        .pointer("/properties/Name/title/0/plain_text")
        .and_then(Value::as_str)
        .ok_or_else(|| SkillError::MalformedData("page missing title text".to_string()))?;

    let purchased = page
        .pointer("/properties/Куплено/checkbox")
        .and_then(Value::as_bool)
        .ok_or_else(|| SkillError::MalformedData("page missing purchased checkbox".to_string()))?;

    Ok(ShoppingItem {
        page_id: page_id.to_string(),
        name: name.to_string(),
        purchased,
    })
}

/// Notion API client with retry logic and error handling
pub struct NotionClient {
    token: String,
    database_id: String,
}

impl NotionClient {
    #[must_use]
    pub fn new(token: String, database_id: String) -> Self {
        Self { token, database_id }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, SkillError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, SkillError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }

    /// Create a new list row titled `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Notion returns an error.
    pub async fn create_page(&self, name: &str) -> Result<(), SkillError> {
        let payload = build_create_item_payload(&self.database_id, name);

        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .post(format!("{NOTION_API_BASE}/pages"))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&payload)
                .send()
                .await
                .map_err(|e| SkillError::HttpError(format!("Failed to create page: {e}")))?;

            if !resp.status().is_success() {
                return Err(SkillError::ApiError(format!(
                    "pages.create HTTP {}",
                    resp.status()
                )));
            }

            Ok(())
        })
        .await
    }

    /// Set the `Куплено` checkbox of an existing row.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Notion returns an error.
    pub async fn set_purchased(&self, page_id: &str, purchased: bool) -> Result<(), SkillError> {
        let payload = build_set_purchased_payload(purchased);

        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .patch(format!("{NOTION_API_BASE}/pages/{page_id}"))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&payload)
                .send()
                .await
                .map_err(|e| SkillError::HttpError(format!("Failed to update page: {e}")))?;

            if !resp.status().is_success() {
                return Err(SkillError::ApiError(format!(
                    "pages.update HTTP {}",
                    resp.status()
                )));
            }

            Ok(())
        })
        .await
    }

    /// Look up a row by exact title.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a matching page cannot be decoded.
    pub async fn query_by_name(&self, name: &str) -> Result<Option<ShoppingItem>, SkillError> {
        let payload = build_name_query_payload(name);
        let response = self.query(&payload).await?;

        match response.results.first() {
            Some(page) => parse_page(page).map(Some),
            None => Ok(None),
        }
    }

    /// All rows whose `Куплено` checkbox is still clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a page cannot be decoded.
    pub async fn query_unpurchased(&self) -> Result<Vec<ShoppingItem>, SkillError> {
        let payload = build_unpurchased_query_payload();
        let response = self.query(&payload).await?;

        response.results.iter().map(parse_page).collect()
    }

    async fn query(&self, payload: &Value) -> Result<QueryResponse, SkillError> {
        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .post(format!(
                    "{NOTION_API_BASE}/databases/{}/query",
                    self.database_id
                ))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(payload)
                .send()
                .await
                .map_err(|e| SkillError::HttpError(format!("Failed to query database: {e}")))?;

            if !resp.status().is_success() {
                return Err(SkillError::ApiError(format!(
                    "databases.query HTTP {}",
                    resp.status()
                )));
            }

            resp.json::<QueryResponse>()
                .await
                .map_err(|e| SkillError::MalformedData(format!("query response: {e}")))
        })
        .await
    }
}
