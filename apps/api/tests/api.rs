//! End-to-end tests driving the router in-process against an in-memory
//! database.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use cashier_api::{router, AppState};
use cashier_core::{CheckoutPolicy, NewProduct};
use cashier_db::{Database, DbConfig};

async fn app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = router(AppState::new(db.clone(), CheckoutPolicy::default()));
    (app, db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_product(app: &Router, name: &str, price: i64, stock: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/products",
        Some(json!({"name": name, "price": price, "stock": stock})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_reports_running() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": true, "message": "API Running"}));
}

#[tokio::test]
async fn health_reports_unavailable_database() {
    let (app, db) = app().await;
    db.close().await;

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn category_lifecycle() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({"name": "Minuman", "description": "Drinks"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Create category");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Minuman");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/categories/{}", id),
        Some(json!({"name": "Beverages"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Beverages");
    assert_eq!(body["data"]["description"], Value::Null);

    let (status, body) = send(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) =
        send(&app, Method::DELETE, &format!("/api/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": true, "message": "Success delete category"}));

    let (status, body) = send(&app, Method::GET, &format!("/api/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn product_crud_and_filter() {
    let (app, _) = app().await;

    let kopi = create_product(&app, "Kopi Susu", 18_000, 10).await;
    create_product(&app, "Teh Manis", 8_000, 10).await;

    let (status, body) = send(&app, Method::GET, "/api/products?name=kopi", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Get All Product");
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Kopi Susu"]);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/products/{}", kopi),
        Some(json!({"name": "Kopi Susu Gula Aren", "price": 20_000, "stock": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stock"], 7);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/products/{}", kopi), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/products/{}", kopi), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Product not found: {}", kopi));
}

#[tokio::test]
async fn invalid_input_is_rejected() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": false, "message": "Invalid product ID"}));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({"name": "Roti"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({"name": "Roti", "price": -1, "stock": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({"name": "Emas", "price": i64::MAX / 2, "stock": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Validation error: price must be between 0 and 1000000000000"
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error: items is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!("not an object")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn checkout_decrements_stock() {
    let (app, _) = app().await;
    let kopi = create_product(&app, "Kopi", 10, 5).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [{"product_id": kopi, "quantity": 2}]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Checkout");
    assert_eq!(body["data"]["total_amount"], 20);
    assert_eq!(body["data"]["details"][0]["subtotal"], 20);
    assert_eq!(body["data"]["details"][0]["product_name"], "Kopi");

    let (_, body) = send(&app, Method::GET, &format!("/api/products/{}", kopi), None).await;
    assert_eq!(body["data"]["stock"], 3);
}

#[tokio::test]
async fn checkout_unknown_product_changes_nothing() {
    let (app, _) = app().await;
    let kopi = create_product(&app, "Kopi", 10, 5).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [
            {"product_id": kopi, "quantity": 2},
            {"product_id": 9999, "quantity": 1}
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found: 9999");

    let (_, body) = send(&app, Method::GET, &format!("/api/products/{}", kopi), None).await;
    assert_eq!(body["data"]["stock"], 5);

    let (status, _) = send(&app, Method::GET, "/api/transactions/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkout_insufficient_stock() {
    let (app, _) = app().await;
    let kopi = create_product(&app, "Kopi", 10, 1).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [{"product_id": kopi, "quantity": 2}]})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn checkout_amount_overflow_is_rejected() {
    let (app, db) = app().await;
    let emas = db
        .products()
        .insert(&NewProduct {
            name: "Emas".to_string(),
            price: i64::MAX / 2,
            stock: 10,
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [{"product_id": emas.id, "quantity": 3}]})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        format!("Amount overflow while pricing product {}", emas.id)
    );

    let (_, body) = send(&app, Method::GET, &format!("/api/products/{}", emas.id), None).await;
    assert_eq!(body["data"]["stock"], 10);
}

#[tokio::test]
async fn get_endpoints_are_repeatable() {
    let (app, _) = app().await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({"name": "Minuman", "description": "Drinks"})),
    )
    .await;
    let category = body["data"]["id"].as_i64().unwrap();
    let kopi = create_product(&app, "Kopi", 10, 5).await;
    create_product(&app, "Roti", 4, 5).await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [{"product_id": kopi, "quantity": 2}]})),
    )
    .await;
    let tx_id = body["data"]["id"].as_i64().unwrap();

    let uris = [
        "/api/products".to_string(),
        "/api/products?name=kopi".to_string(),
        format!("/api/products/{}", kopi),
        "/api/categories".to_string(),
        format!("/api/categories/{}", category),
        format!("/api/transactions/{}", tx_id),
        "/api/transactions/report".to_string(),
    ];

    for uri in &uris {
        let first = send(&app, Method::GET, uri, None).await;
        let second = send(&app, Method::GET, uri, None).await;

        assert_eq!(first.0, StatusCode::OK, "{}", uri);
        assert_eq!(first, second, "{}", uri);
    }
}

#[tokio::test]
async fn transaction_lookup_and_report() {
    let (app, _) = app().await;
    let kopi = create_product(&app, "Kopi", 10, 50).await;
    let roti = create_product(&app, "Roti", 4, 50).await;

    let (status, _) = send(&app, Method::GET, "/api/transactions/report", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [
            {"product_id": roti, "quantity": 3},
            {"product_id": kopi, "quantity": 1}
        ]})),
    )
    .await;
    let tx_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/transactions/{}", tx_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_amount"], 22);
    assert_eq!(body["data"]["details"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/api/transactions/report", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Get Report");
    assert_eq!(
        body["data"],
        json!({
            "total_revenue": 22,
            "total_transaction": 1,
            "top_sell_product": {"name": "Roti", "quantity_sell": 3}
        })
    );
}

#[tokio::test]
async fn sold_product_cannot_be_deleted() {
    let (app, _) = app().await;
    let kopi = create_product(&app, "Kopi", 10, 5).await;

    send(
        &app,
        Method::POST,
        "/api/transactions/checkout",
        Some(json!({"items": [{"product_id": kopi, "quantity": 1}]})),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, &format!("/api/products/{}", kopi), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let (app, _) = app().await;

    let (status, _) = send(&app, Method::GET, "/api/transactions/checkout", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
