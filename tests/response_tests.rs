use pokupki::dialogs::response::{added, greeting, listing, store_failure};

#[test]
fn test_greeting_text() {
    assert_eq!(greeting(), "Привет! Что добавить в список?");
}

#[test]
fn test_added_lists_all_names() {
    let text = added(&["молоко".to_string(), "хлеб".to_string()]);
    assert_eq!(text, "Лады, добавила молоко, хлеб в список покупок.");
}

#[test]
fn test_added_single_name() {
    let text = added(&["сыр".to_string()]);
    assert_eq!(text, "Лады, добавила сыр в список покупок.");
}

#[test]
fn test_listing_joins_names() {
    let text = listing(&["Молоко".to_string(), "Хлеб".to_string()]);
    assert_eq!(text, "В списке Молоко, Хлеб.");
}

#[test]
fn test_listing_empty_gets_its_own_sentence() {
    // The degenerate "В списке ." reading is replaced, not hidden
    assert_eq!(listing(&[]), "Список покупок пуст.");
}

#[test]
fn test_store_failure_is_spoken() {
    // The failure sentence must be non-empty speakable text
    assert!(!store_failure().is_empty());
}
