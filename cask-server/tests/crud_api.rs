//! The CRUD contract every collection shares, exercised over HTTP.

mod common;

use serde_json::{Value, json};

use common::{assert_generated_id, send, test_app};

#[tokio::test]
async fn fresh_store_serves_empty_collections() {
    let (app, _dir) = test_app().await;
    for path in [
        "/api/products",
        "/api/customers",
        "/api/orders",
        "/api/users",
        "/api/visits",
        "/api/customer-portals",
        "/api/system-logs",
    ] {
        let (status, body) = send(&app, "GET", path, None).await;
        assert_eq!(status, 200, "{path}");
        assert_eq!(body, json!([]), "{path}");
    }
}

#[tokio::test]
async fn product_crud_round_trip() {
    let (app, _dir) = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Single Malt 12y",
            "brand": "Glen Foyle",
            "category": "spirits",
            "wholesale_price": 31.5,
            "stock_quantity": 48
        })),
    )
    .await;
    assert_eq!(status, 200);
    let id = created["id"].as_str().unwrap().to_string();
    assert_generated_id(&id);
    assert_eq!(created["created_at"], created["updated_at"]);

    let (status, listed) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, 200);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({"stock_quantity": 40})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["stock_quantity"], json!(40));
    // untouched fields survive the merge
    assert_eq!(updated["brand"], json!("Glen Foyle"));
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);

    let (status, deleted) = send(&app, "DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, 200);
    assert_eq!(deleted, json!({"message": "Product deleted"}));

    let (status, missing) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(status, 404);
    assert_eq!(missing["message"], json!(format!("Product {id} not found")));
}

#[tokio::test]
async fn reads_are_idempotent() {
    let (app, _dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({"name": "Barrel & Vine"})),
    )
    .await;

    let (_, first) = send(&app, "GET", "/api/customers", None).await;
    let (_, second) = send(&app, "GET", "/api/customers", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_ids_return_message_404s() {
    let (app, _dir) = test_app().await;
    for (method, path) in [
        ("GET", "/api/customers/id-0-nope00"),
        ("PUT", "/api/customers/id-0-nope00"),
        ("DELETE", "/api/customers/id-0-nope00"),
    ] {
        let body = (method == "PUT").then(|| json!({"notes": "x"}));
        let (status, response) = send(&app, method, path, body).await;
        assert_eq!(status, 404, "{method}");
        assert_eq!(
            response["message"],
            json!("Customer id-0-nope00 not found"),
            "{method}"
        );
    }
}

#[tokio::test]
async fn update_pins_the_path_id() {
    let (app, _dir) = test_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({"name": "Cork Street Cellars"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/customers/{id}"),
        Some(json!({"id": "id-1-forged", "notes": "renumbered?"})),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"], json!(id));

    // still addressable under the original id, nothing under the forged one
    let (status, _) = send(&app, "GET", &format!("/api/customers/{id}"), None).await;
    assert_eq!(status, 200);
    let (status, _) = send(&app, "GET", "/api/customers/id-1-forged", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn client_supplied_ids_and_timestamps_are_kept() {
    let (app, _dir) = test_app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/api/visits",
        Some(json!({
            "id": "id-77-seeded",
            "created_at": "2024-01-05T09:30:00.000Z",
            "purpose": "delivery check"
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(created["id"], json!("id-77-seeded"));
    assert_eq!(created["created_at"], json!("2024-01-05T09:30:00.000Z"));
    // updated_at was blank, so it was stamped fresh
    assert_ne!(created["updated_at"], created["created_at"]);
}

#[tokio::test]
async fn unknown_fields_are_dropped_at_the_boundary() {
    let (app, _dir) = test_app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Overproof Rum", "proof": 151})),
    )
    .await;
    assert_eq!(status, 200);
    assert!(created.get("proof").is_none());

    let id = created["id"].as_str().unwrap();
    let (_, fetched) = send(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert!(fetched.get("proof").is_none());
}

#[tokio::test]
async fn mistyped_fields_are_rejected_with_400() {
    let (app, _dir) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Pils", "stock_quantity": "many"})),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("invalid Product payload"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({"name": "Bar None", "status": "sometimes"})),
    )
    .await;
    assert_eq!(status, 400);

    // a valid create followed by a type-breaking update is also rejected
    let (_, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Stout"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({"stock_quantity": "plenty"})),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn create_without_required_name_is_rejected() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "POST", "/api/products", Some(json!({"brand": "X"}))).await;
    assert_eq!(status, 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_object_bodies_are_rejected() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, "POST", "/api/customers", Some(json!([1, 2]))).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], json!("expected a JSON object, got an array"));
}

#[tokio::test]
async fn explicit_null_clears_a_field() {
    let (app, _dir) = test_app().await;
    let (_, created) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({"name": "Dockside Spirits", "notes": "call ahead"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/customers/{id}"),
        Some(json!({"notes": null})),
    )
    .await;
    assert_eq!(status, 200);
    assert!(updated.get("notes").is_none());
}

#[tokio::test]
async fn customer_defaults_and_nested_address() {
    let (app, _dir) = test_app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({
            "name": "The Gilded Cork",
            "address": {"street": "12 Wharf Rd", "city": "Astoria"}
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(created["status"], json!("active"));
    assert_eq!(created["address"]["city"], json!("Astoria"));

    // PUT replaces the nested object wholesale
    let id = created["id"].as_str().unwrap();
    let (_, updated) = send(
        &app,
        "PUT",
        &format!("/api/customers/{id}"),
        Some(json!({"address": {"city": "Salem"}})),
    )
    .await;
    assert_eq!(updated["address"], json!({"city": "Salem"}));
}

#[tokio::test]
async fn portal_slug_is_generated_when_absent() {
    let (app, _dir) = test_app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/api/customer-portals",
        Some(json!({"business_name": "Quayside Taproom"})),
    )
    .await;
    assert_eq!(status, 200);
    let slug = created["unique_url"].as_str().unwrap();
    assert_eq!(slug.len(), 8);
    assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    let (_, kept) = send(
        &app,
        "POST",
        "/api/customer-portals",
        Some(json!({"business_name": "Hop House", "unique_url": "hophouse"})),
    )
    .await;
    assert_eq!(kept["unique_url"], json!("hophouse"));
}

#[tokio::test]
async fn system_logs_answer_on_both_mounts() {
    let (app, _dir) = test_app().await;
    let (status, created) = send(
        &app,
        "POST",
        "/api/logs",
        Some(json!({
            "action": "login",
            "level": "info",
            "details": {"ip": "10.0.0.7"}
        })),
    )
    .await;
    assert_eq!(status, 200);
    let id = created["id"].as_str().unwrap();

    let (status, via_alias) = send(&app, "GET", &format!("/api/logs/{id}"), None).await;
    assert_eq!(status, 200);
    let (status, via_primary) = send(&app, "GET", &format!("/api/system-logs/{id}"), None).await;
    assert_eq!(status, 200);
    assert_eq!(via_alias, via_primary);
    assert_eq!(via_primary["details"]["ip"], json!("10.0.0.7"));
}

#[tokio::test]
async fn health_reports_collection_counts() {
    let (app, _dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Amber Ale"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["collections"]["products"], json!(1));
    assert_eq!(body["collections"]["orders"], json!(0));
}

#[tokio::test]
async fn corrupt_data_file_is_surfaced_not_reset() {
    let (app, dir) = test_app().await;
    let data_file = dir.path().join("data.json");
    std::fs::write(&data_file, b"{definitely not json").unwrap();

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, 500);
    assert!(body["message"].as_str().unwrap().starts_with("Storage error"));

    // writes fail the same way and the broken file survives for inspection
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Porter"})),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(std::fs::read(&data_file).unwrap(), b"{definitely not json");
}

#[tokio::test]
async fn stored_document_is_written_as_one_flat_file() {
    let (app, dir) = test_app().await;
    send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Cider"})),
    )
    .await;

    let raw = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    let map = doc.as_object().unwrap();
    assert_eq!(map.len(), 7);
    for key in [
        "products",
        "customers",
        "orders",
        "users",
        "visits",
        "customer_portals",
        "system_logs",
    ] {
        assert!(map.contains_key(key), "missing {key}");
    }
    assert_eq!(map["products"].as_array().unwrap().len(), 1);
}
