//! Banana budget pricing service.
//!
//! Single-endpoint HTTP API that prices banana rentals per calendar day
//! under a tiered, weekday-only rule. Weekend days are free; weekdays are
//! charged by a rate keyed on the day of the month.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// The service is stateless, so there is no shared application state to
/// inject; every request is priced from its own query parameters.
pub fn app() -> Router {
    routes::budget::router().layer(TraceLayer::new_for_http())
}
