pub mod error;
pub mod extract;
pub mod routes;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::services::school_service::SchoolService;
use routes::{home, schools};

/// Full application router; school routes live under `/api`.
pub fn build_router(service: SchoolService) -> Router {
    let api_routes = Router::new().route(
        "/schools",
        get(schools::list_schools_handler).post(schools::create_school_handler),
    );

    Router::new()
        .route("/", get(home::home_handler))
        .nest("/api", api_routes)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(service)
}
