mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn seed_warehouse(app: &TestApp) -> i64 {
    let (status, body) = app
        .send_json(
            "POST",
            "/warehouses",
            Some(json!({
                "warehouse_name": "Main",
                "address": "1 St",
                "city": "Metropolis",
                "contact_name": "A",
                "contact_email": "a@b.com"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("warehouse id")
}

fn item_payload(warehouse_id: i64) -> Value {
    json!({
        "item_name": "Hammer",
        "description": "Claw hammer",
        "category": "Tools",
        "status": "In Stock",
        "quantity": 10,
        "warehouse_id": warehouse_id
    })
}

#[tokio::test]
async fn create_returns_enriched_record() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let (status, body) = app
        .send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["item_name"], "Hammer");
    assert_eq!(body["description"], "Claw hammer");
    assert_eq!(body["category"], "Tools");
    assert_eq!(body["status"], "In Stock");
    assert_eq!(body["quantity"], 10);
    assert_eq!(body["warehouse_id"], warehouse_id);
    assert_eq!(body["warehouse_name"], "Main");
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn create_requires_description() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let mut payload = item_payload(warehouse_id);
    payload.as_object_mut().expect("object").remove("description");

    let (status, body) = app.send_json("POST", "/inventories", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Required fields are missing");
}

#[tokio::test]
async fn create_rejects_unknown_status() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let mut payload = item_payload(warehouse_id);
    payload["status"] = json!("Backordered");

    let (status, body) = app.send_json("POST", "/inventories", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Status must be either 'In Stock' or 'Out of Stock'"
    );
}

#[tokio::test]
async fn create_rejects_out_of_stock_with_nonzero_quantity() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let mut payload = item_payload(warehouse_id);
    payload["status"] = json!("Out of Stock");
    payload["quantity"] = json!(5);

    let (status, body) = app.send_json("POST", "/inventories", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Quantity must be 0 when status is 'Out of Stock'"
    );
}

#[tokio::test]
async fn create_rejects_negative_quantity() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let mut payload = item_payload(warehouse_id);
    payload["quantity"] = json!(-2);

    let (status, body) = app.send_json("POST", "/inventories", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Quantity must be a non-negative integer");
}

#[tokio::test]
async fn get_round_trips_created_record() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let (_, created) = app
        .send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;
    let (status, fetched) = app.send_json("GET", "/inventories/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_id_is_404_with_id_in_message() {
    let app = TestApp::new().await;

    let (status, body) = app.send_json("GET", "/inventories/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Inventory with ID 999 not found");
}

#[tokio::test]
async fn list_includes_warehouse_name() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    app.send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;
    let mut second = item_payload(warehouse_id);
    second["item_name"] = json!("Wrench");
    app.send_json("POST", "/inventories", Some(second)).await;

    let (status, body) = app.send_json("GET", "/inventories", None).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["warehouse_name"], "Main");
    assert_eq!(rows[1]["item_name"], "Wrench");
}

#[tokio::test]
async fn update_replaces_the_record() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    app.send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;

    let mut payload = item_payload(warehouse_id);
    payload["status"] = json!("Out of Stock");
    payload["quantity"] = json!(0);

    let (status, body) = app.send_json("PUT", "/inventories/1", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Out of Stock");
    assert_eq!(body["quantity"], 0);
    assert_eq!(body["warehouse_name"], "Main");
}

#[tokio::test]
async fn update_enforces_stock_rule() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    app.send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;

    let mut payload = item_payload(warehouse_id);
    payload["status"] = json!("Out of Stock");
    payload["quantity"] = json!(7);

    let (status, body) = app.send_json("PUT", "/inventories/1", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Quantity must be 0 when status is 'Out of Stock'"
    );
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    let (status, body) = app
        .send_json("PUT", "/inventories/999", Some(item_payload(warehouse_id)))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Inventory with ID 999 not found");
}

#[tokio::test]
async fn delete_is_204_then_404() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    app.send_json("POST", "/inventories", Some(item_payload(warehouse_id)))
        .await;

    let (status, bytes) = app.send("DELETE", "/inventories/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (status, body) = app.send_json("DELETE", "/inventories/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Inventory with ID 1 not found");
}

#[tokio::test]
async fn categories_are_distinct_and_skip_null() {
    let app = TestApp::new().await;
    let warehouse_id = seed_warehouse(&app).await;

    for (name, category) in [
        ("Hammer", "Tools"),
        ("Wrench", "Tools"),
        ("Cable", "Electronics"),
    ] {
        let mut payload = item_payload(warehouse_id);
        payload["item_name"] = json!(name);
        payload["category"] = json!(category);
        app.send_json("POST", "/inventories", Some(payload)).await;
    }
    // A row with no category; only reachable by seeding the store directly.
    app.execute(
        "INSERT INTO inventories (item_name, description, category, status, quantity, warehouse_id) \
         VALUES ('Mystery', 'Uncategorized', NULL, 'In Stock', 1, 1)",
    )
    .await;

    let (status, body) = app.send_json("GET", "/inventories/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let mut categories: Vec<String> =
        serde_json::from_value(body).expect("string array body");
    categories.sort();
    assert_eq!(categories, vec!["Electronics", "Tools"]);
}
