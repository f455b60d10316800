//! All Notion-specific functionality

pub mod client;
pub mod store;

// Re-export main types for convenience
pub use client::{
    NotionClient, build_create_item_payload, build_name_query_payload,
    build_set_purchased_payload, build_unpurchased_query_payload, parse_page,
};
pub use store::{NotionStore, ShoppingStore, UpsertAction, plan_upsert};
