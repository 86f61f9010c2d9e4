//! HTTP-level tests for the fake payment flow.
//!
//! Covers the full checkout scenario (create-order, verify, lookup) and the
//! documented gaps: the client-submitted total is trusted, verification has
//! no owner check, and double verification succeeds.

use luxe_core::catalog;
use luxe_integration_tests::{get_json, post_json, test_app};
use serde_json::json;

fn cart_items() -> serde_json::Value {
    // Two real catalog products, serialized the way the browser client
    // submits them.
    serde_json::to_value([&catalog()[0], &catalog()[2]]).expect("serialize catalog items")
}

#[tokio::test]
async fn create_order_requires_items() {
    let app = test_app();

    let (status, body) = post_json(&app, "/payment/create-order", &json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Cart items are required");

    let (status, body) = post_json(
        &app,
        "/payment/create-order",
        &json!({ "items": [], "total": 0 }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Cart items are required");
}

#[tokio::test]
async fn created_order_is_pending_and_looked_up_by_id() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/payment/create-order",
        &json!({ "items": cart_items(), "total": 458 }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order created successfully");
    let order_id = body["orderId"].as_str().expect("order id").to_owned();
    assert!(order_id.starts_with("ORD-"));

    let (status, body) = get_json(&app, &format!("/payment/order/{order_id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["userId"], "guest");
    assert_eq!(body["order"]["total"], 458.0);
    assert_eq!(body["order"]["items"].as_array().expect("items").len(), 2);
    assert!(body["order"].get("paymentId").is_none());
}

#[tokio::test]
async fn unknown_order_lookup_is_404() {
    let app = test_app();
    let (status, body) = get_json(&app, "/payment/order/ORD-0-0").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn verify_requires_order_id_and_rejects_unknown_orders() {
    let app = test_app();

    let (status, body) = post_json(&app, "/payment/verify", &json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Order ID is required");

    let (status, body) = post_json(
        &app,
        "/payment/verify",
        &json!({
            "orderId": "ORD-0-0",
            "paymentDetails": { "method": "card", "cardLast4": "4242" }
        }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn full_checkout_scenario() {
    let app = test_app();

    // Cart of two items priced 100 and 50; the client computes total 150 and
    // the server trusts it as submitted.
    let items = json!([
        { "id": 1, "name": "A", "description": "", "price": 100,
          "originalPrice": null, "category": "electronics",
          "gradient": "product-gradient-1", "icon": "x", "colors": [] },
        { "id": 2, "name": "B", "description": "", "price": 50,
          "originalPrice": null, "category": "lifestyle",
          "gradient": "product-gradient-2", "icon": "y", "colors": [] }
    ]);

    let (status, body) = post_json(
        &app,
        "/payment/create-order",
        &json!({ "items": items, "total": 150, "userId": "u-42" }),
    )
    .await;
    assert_eq!(status, 200);
    let order_id = body["orderId"].as_str().expect("order id").to_owned();

    let (status, body) = post_json(
        &app,
        "/payment/verify",
        &json!({
            "orderId": order_id,
            "paymentDetails": { "method": "card", "cardLast4": "4242" }
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Payment verified successfully");
    assert_eq!(body["order"]["status"], "completed");
    assert_eq!(body["order"]["total"], 150.0);
    assert_eq!(
        body["order"]["paymentDetails"],
        json!({ "method": "card", "cardLast4": "4242" })
    );
    let payment_id = body["order"]["paymentId"].as_str().expect("payment id");
    assert!(payment_id.starts_with("PAY-"));

    // Completion is observable via subsequent lookup
    let (status, body) = get_json(&app, &format!("/payment/order/{order_id}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["order"]["status"], "completed");
    assert!(body["order"]["completedAt"].is_string());
}

// Reproduced gap: no guard against double completion, and no check that the
// verifying caller owns the order.
#[tokio::test]
async fn double_verify_succeeds_again() {
    let app = test_app();

    let (_, body) = post_json(
        &app,
        "/payment/create-order",
        &json!({ "items": cart_items(), "total": 458 }),
    )
    .await;
    let order_id = body["orderId"].as_str().expect("order id").to_owned();

    for method in ["card", "wallet"] {
        let (status, body) = post_json(
            &app,
            "/payment/verify",
            &json!({
                "orderId": order_id,
                "paymentDetails": { "method": method, "cardLast4": null }
            }),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["order"]["status"], "completed");
    }
}

#[tokio::test]
async fn guest_orders_listed_in_creation_order() {
    let app = test_app();

    let mut created = Vec::new();
    for total in [35, 79] {
        let (status, body) = post_json(
            &app,
            "/payment/create-order",
            &json!({ "items": cart_items(), "total": total }),
        )
        .await;
        assert_eq!(status, 200);
        created.push(body["orderId"].as_str().expect("order id").to_owned());
    }

    // An order for another user must not show up in the guest list
    post_json(
        &app,
        "/payment/create-order",
        &json!({ "items": cart_items(), "total": 10, "userId": "u-7" }),
    )
    .await;

    let (status, body) = get_json(&app, "/payment/orders/guest").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let listed: Vec<&str> = body["orders"]
        .as_array()
        .expect("orders")
        .iter()
        .map(|o| o["orderId"].as_str().expect("order id"))
        .collect();
    assert_eq!(listed, created.iter().map(String::as_str).collect::<Vec<_>>());

    let (_, body) = get_json(&app, "/payment/orders/nobody").await;
    assert_eq!(body["orders"].as_array().expect("orders").len(), 0);
}
