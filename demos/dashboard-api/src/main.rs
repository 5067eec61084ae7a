mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    eprintln!("Initializing Pricebook SDK...");
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data".to_string());
    let sdk = pricebook_sdk::AsyncPricebookSdk::builder()
        .data_dir(&data_dir)
        .build()
        .await
        .expect("Failed to initialize Pricebook SDK");
    eprintln!("SDK ready.");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/detail", get(routes::detail::get_detail))
        .route(
            "/api/stats/dimensions",
            get(routes::stats::get_dimension_stats),
        )
        .route("/api/stats/products", get(routes::stats::get_product_stats))
        .route(
            "/api/products/{product_id}/profile",
            get(routes::stats::get_profile),
        )
        .route("/api/trend", get(routes::trend::get_trend))
        .route("/api/filters", get(routes::filters::get_filters))
        .route("/api/report", get(routes::filters::get_report))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
