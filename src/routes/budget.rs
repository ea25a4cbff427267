//! Budget route handlers

use axum::{
    extract::Query,
    http::{Method, Uri},
    response::Json,
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::pricing::{format_money, total_cost, BudgetQuery};
use crate::pricing::responses::TotalCostResponse;

/// Build the router for the budget endpoint.
///
/// Only GET is routed. Other methods on `/` and requests to unknown paths
/// fall through to the Express-style `Cannot <METHOD> <path>` 404.
pub fn router() -> Router {
    Router::new()
        .route("/", get(total).fallback(unsupported))
        .fallback(unsupported)
}

/// GET / - price the requested window
async fn total(Query(query): Query<BudgetQuery>) -> Result<Json<TotalCostResponse>> {
    let request = query.validate()?;
    let cost = total_cost(&request);

    tracing::debug!(
        start = %request.start_date,
        days = request.number_of_days,
        total = %cost,
        "priced budget request"
    );

    Ok(Json(TotalCostResponse {
        total_cost: format_money(cost),
    }))
}

async fn unsupported(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
