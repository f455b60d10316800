//! Shopping-list operations on top of the raw Notion client.

use async_trait::async_trait;
use tracing::debug;

use super::client::NotionClient;
use crate::core::config::AppConfig;
use crate::core::models::ShoppingItem;
use crate::errors::SkillError;

/// Seam between the webhook handler and the external store.
///
/// Implemented by [`NotionStore`] in production and by in-memory doubles
/// in the handler tests.
#[async_trait]
pub trait ShoppingStore: Send + Sync {
    /// Put `name` on the list, deduplicating against existing rows.
    async fn add_item(&self, name: &str) -> Result<(), SkillError>;

    /// Names of the items not yet bought, in store order.
    async fn unpurchased_items(&self) -> Result<Vec<String>, SkillError>;
}

/// What an upsert has to do for a name, given the row the store already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertAction {
    /// No row with this name yet: create one.
    Create,
    /// Row exists and is still unpurchased: nothing to do.
    AlreadyListed,
    /// Row exists but was bought: clear its checkbox instead of duplicating.
    Restore { page_id: String },
}

/// Decide the upsert action for one name.
///
/// Re-adding never duplicates a row; a purchased row comes back by having
/// its checkbox cleared.
#[must_use]
pub fn plan_upsert(existing: Option<ShoppingItem>) -> UpsertAction {
    match existing {
        None => UpsertAction::Create,
        Some(item) if item.purchased => UpsertAction::Restore {
            page_id: item.page_id,
        },
        Some(_) => UpsertAction::AlreadyListed,
    }
}

/// Shopping list stored in a Notion database.
pub struct NotionStore {
    client: NotionClient,
}

impl NotionStore {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: NotionClient::new(config.notion_token.clone(), config.notion_db_id.clone()),
        }
    }
}

#[async_trait]
impl ShoppingStore for NotionStore {
    async fn add_item(&self, name: &str) -> Result<(), SkillError> {
        let existing = self.client.query_by_name(name).await?;

        match plan_upsert(existing) {
            UpsertAction::Create => self.client.create_page(name).await,
            UpsertAction::AlreadyListed => {
                debug!("Item {} already on the list, skipping", name);
                Ok(())
            }
            UpsertAction::Restore { page_id } => self.client.set_purchased(&page_id, false).await,
        }
    }

    async fn unpurchased_items(&self) -> Result<Vec<String>, SkillError> {
        let items = self.client.query_unpurchased().await?;
        Ok(items.into_iter().map(|item| item.name).collect())
    }
}
