use pokupki::SkillError;
use pokupki::core::models::ShoppingItem;
use pokupki::notion::{
    UpsertAction, build_create_item_payload, build_name_query_payload,
    build_set_purchased_payload, build_unpurchased_query_payload, parse_page, plan_upsert,
};
use serde_json::json;

// ────────────────────────────────────────────────────────────────────────────
// Payload builders
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_create_item_payload() {
    let payload = build_create_item_payload("db-123", "Молоко");

    assert_eq!(payload["parent"]["database_id"], json!("db-123"));
    assert_eq!(
        payload["properties"]["Name"]["title"][0]["text"]["content"],
        json!("Молоко")
    );
}

#[test]
fn test_set_purchased_payload() {
    let payload = build_set_purchased_payload(false);
    assert_eq!(payload["properties"]["Куплено"]["checkbox"], json!(false));

    let payload = build_set_purchased_payload(true);
    assert_eq!(payload["properties"]["Куплено"]["checkbox"], json!(true));
}

#[test]
fn test_name_query_payload() {
    // Exact-title lookup needs at most one result
    let payload = build_name_query_payload("Хлеб");

    assert_eq!(payload["filter"]["property"], json!("Name"));
    assert_eq!(payload["filter"]["title"]["equals"], json!("Хлеб"));
    assert_eq!(payload["page_size"], json!(1));
}

#[test]
fn test_unpurchased_query_payload() {
    let payload = build_unpurchased_query_payload();

    assert_eq!(payload["filter"]["property"], json!("Куплено"));
    assert_eq!(payload["filter"]["checkbox"]["equals"], json!(false));
}

// ────────────────────────────────────────────────────────────────────────────
// Page decoding
// ────────────────────────────────────────────────────────────────────────────

fn page(name: &str, purchased: bool) -> serde_json::Value {
    json!({
        "id": "page-1",
        "properties": {
            "Name": { "title": [{ "plain_text": name }] },
            "Куплено": { "checkbox": purchased }
        }
    })
}

#[test]
fn test_parse_page_success() {
    let item = parse_page(&page("Молоко", false)).unwrap();

    assert_eq!(
        item,
        ShoppingItem {
            page_id: "page-1".to_string(),
            name: "Молоко".to_string(),
            purchased: false,
        }
    );
}

#[test]
fn test_parse_page_missing_title_text() {
    // A row whose title was cleared in the Notion UI has an empty title array
    let broken = json!({
        "id": "page-2",
        "properties": {
            "Name": { "title": [] },
            "Куплено": { "checkbox": false }
        }
    });

    match parse_page(&broken) {
        Err(SkillError::MalformedData(msg)) => assert!(msg.contains("title")),
        other => panic!("Expected MalformedData, got {other:?}"),
    }
}

#[test]
fn test_parse_page_missing_checkbox() {
    let broken = json!({
        "id": "page-3",
        "properties": {
            "Name": { "title": [{ "plain_text": "Сыр" }] }
        }
    });

    assert!(matches!(
        parse_page(&broken),
        Err(SkillError::MalformedData(_))
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Upsert policy
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_plan_upsert_creates_unknown_name() {
    assert_eq!(plan_upsert(None), UpsertAction::Create);
}

#[test]
fn test_plan_upsert_skips_listed_item() {
    let existing = ShoppingItem {
        page_id: "page-1".to_string(),
        name: "Молоко".to_string(),
        purchased: false,
    };

    assert_eq!(plan_upsert(Some(existing)), UpsertAction::AlreadyListed);
}

#[test]
fn test_plan_upsert_restores_purchased_item() {
    // Re-adding a bought item clears its checkbox instead of duplicating
    let existing = ShoppingItem {
        page_id: "page-1".to_string(),
        name: "Молоко".to_string(),
        purchased: true,
    };

    assert_eq!(
        plan_upsert(Some(existing)),
        UpsertAction::Restore {
            page_id: "page-1".to_string()
        }
    );
}
