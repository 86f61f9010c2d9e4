//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (identity backend probe)
//!
//! # Auth (delegated to the identity backend)
//! POST /auth/signup                - Register with email and password
//! POST /auth/login                 - Login with email and password
//! POST /auth/logout                - Revoke the bearer token (always 200)
//! GET  /auth/user                  - Current user (requires bearer token)
//! POST /auth/google                - Google OAuth redirect URL
//!
//! # Payment (fake gateway over the in-memory order store)
//! POST /payment/create-order       - Create a pending order from a cart snapshot
//! POST /payment/verify             - Mark an order's payment verified
//! GET  /payment/orders/{userId}    - All orders for a user
//! GET  /payment/order/{orderId}    - Single order lookup
//! ```

pub mod auth;
pub mod payment;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
        .route("/google", post(auth::google))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-order", post(payment::create_order))
        .route("/verify", post(payment::verify))
        .route("/orders/{user_id}", get(payment::orders_for_user))
        .route("/order/{order_id}", get(payment::order_by_id))
}

/// Create all routes for the API server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/payment", payment_routes())
}
