use serde::{Deserialize, Serialize};

/// The crate's view of one row in the Notion shopping-list database.
///
/// The store owns the schema; only the title (`Name`) and the purchased
/// checkbox (`Куплено`) are read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub page_id: String,
    pub name: String,
    pub purchased: bool,
}
