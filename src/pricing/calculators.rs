//! Core pricing calculation functions.
//!
//! Pure functions for the cost math - no I/O and no failure paths. A
//! validated [`BillingRequest`] always produces a total.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use super::models::{BillingRequest, PricingTier};

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Price for a single calendar day: zero on weekends, otherwise the rate
/// of the tier containing the day-of-month.
pub fn daily_rate(date: NaiveDate) -> Decimal {
    if is_weekend(date) {
        Decimal::ZERO
    } else {
        PricingTier::for_day_of_month(date.day()).weekday_rate()
    }
}

/// Total cost over the requested window.
///
/// Walks the range one civil day at a time. Crossing a month or year
/// boundary re-buckets automatically because the tier lookup only ever
/// sees the cursor's new day-of-month.
pub fn total_cost(request: &BillingRequest) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut cursor = request.start_date;

    for _ in 0..request.number_of_days {
        total += daily_rate(cursor);
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            // End of the representable calendar; nothing left to bill.
            None => break,
        }
    }

    total
}

/// Render an amount as `"$X.XX"` with exactly two decimal places.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
