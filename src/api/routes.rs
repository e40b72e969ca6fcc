//! API Routes
//!
//! Configures the Axum router with all employee proxy endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, highest_salary_handler,
    list_handler, search_handler, stats_handler, top_ten_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments take priority over `:id`
    Router::new()
        .route("/client/employees", get(list_handler).post(create_handler))
        .route("/client/employees/search/:search", get(search_handler))
        .route("/client/employees/highestSalary", get(highest_salary_handler))
        .route(
            "/client/employees/topTenHighestEarningEmployeeNames",
            get(top_ten_handler),
        )
        .route("/client/employees/:id", get(get_handler).delete(delete_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
