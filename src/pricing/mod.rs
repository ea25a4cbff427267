//! Pricing engine module for the banana budget.
//!
//! Validates the raw `startDate`/`numberOfDays` inputs and computes the
//! tiered, weekday-only rental cost over the requested window.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::{format_money, total_cost};
pub use models::{BillingRequest, PricingTier};
pub use requests::{BudgetQuery, ValidationError};
