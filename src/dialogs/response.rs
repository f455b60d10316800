//! Spoken-response texts for the skill.
//!
//! This module provides standardized ways to build the sentences the
//! assistant speaks back to the user.

/// Greeting for the opening turn (empty utterance). The only reply that
/// keeps the session open.
#[must_use]
pub fn greeting() -> String {
    "Привет! Что добавить в список?".to_string()
}

/// Confirmation after adding items.
///
/// Lists the names as spoken, not as stored.
///
/// # Examples
///
/// ```
/// use pokupki::dialogs::response::added;
///
/// let text = added(&["молоко".to_string(), "хлеб".to_string()]);
/// assert_eq!(text, "Лады, добавила молоко, хлеб в список покупок.");
/// ```
#[must_use]
pub fn added(names: &[String]) -> String {
    format!("Лады, добавила {} в список покупок.", names.join(", "))
}

/// Sentence announcing the unpurchased items.
///
/// An empty list gets its own sentence rather than the degenerate
/// "В списке ." reading.
#[must_use]
pub fn listing(names: &[String]) -> String {
    if names.is_empty() {
        "Список покупок пуст.".to_string()
    } else {
        format!("В списке {}.", names.join(", "))
    }
}

/// Spoken report of a failed Notion call.
#[must_use]
pub fn store_failure() -> String {
    "Не получилось добраться до списка покупок, попробуйте ещё раз.".to_string()
}
