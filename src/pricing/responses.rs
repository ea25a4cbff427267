//! Response DTOs for the budget endpoint.

use serde::Serialize;

/// Successful cost calculation, e.g. `{"totalCost": "$0.25"}`
#[derive(Debug, Serialize)]
pub struct TotalCostResponse {
    #[serde(rename = "totalCost")]
    pub total_cost: String,
}

/// Validation failure, e.g. `{"error": "Invalid startDate"}`
#[derive(Debug, Serialize)]
pub struct BudgetErrorResponse {
    pub error: String,
}
