//! Domain models for the pricing engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Longest window a single request may bill.
pub const MAX_NUMBER_OF_DAYS: u32 = 365;

/// Validated input driving one cost computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingRequest {
    pub start_date: NaiveDate,
    pub number_of_days: u32,
}

/// Day-of-month pricing tier.
///
/// The five buckets partition days 1-31 with no gaps or overlaps. Bucket
/// membership depends only on the day-of-month component of a date, never
/// on month length or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTier {
    Days1To7,
    Days8To14,
    Days15To21,
    Days22To28,
    Days29To31,
}

impl PricingTier {
    /// Tier containing the given day-of-month (1-31).
    pub fn for_day_of_month(day: u32) -> Self {
        match day {
            1..=7 => PricingTier::Days1To7,
            8..=14 => PricingTier::Days8To14,
            15..=21 => PricingTier::Days15To21,
            22..=28 => PricingTier::Days22To28,
            _ => PricingTier::Days29To31,
        }
    }

    /// Rate charged for one weekday in this tier.
    ///
    /// Weekend days always price at zero regardless of tier; that rule
    /// lives in the calculator, not here.
    pub fn weekday_rate(self) -> Decimal {
        match self {
            PricingTier::Days1To7 => dec!(0.05),
            PricingTier::Days8To14 => dec!(0.10),
            PricingTier::Days15To21 => dec!(0.15),
            PricingTier::Days22To28 => dec!(0.20),
            PricingTier::Days29To31 => dec!(0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_partition_days_1_to_31() {
        for day in 1..=7 {
            assert_eq!(PricingTier::for_day_of_month(day), PricingTier::Days1To7);
        }
        for day in 8..=14 {
            assert_eq!(PricingTier::for_day_of_month(day), PricingTier::Days8To14);
        }
        for day in 15..=21 {
            assert_eq!(PricingTier::for_day_of_month(day), PricingTier::Days15To21);
        }
        for day in 22..=28 {
            assert_eq!(PricingTier::for_day_of_month(day), PricingTier::Days22To28);
        }
        for day in 29..=31 {
            assert_eq!(PricingTier::for_day_of_month(day), PricingTier::Days29To31);
        }
    }

    #[test]
    fn test_weekday_rates() {
        assert_eq!(PricingTier::Days1To7.weekday_rate(), dec!(0.05));
        assert_eq!(PricingTier::Days8To14.weekday_rate(), dec!(0.10));
        assert_eq!(PricingTier::Days15To21.weekday_rate(), dec!(0.15));
        assert_eq!(PricingTier::Days22To28.weekday_rate(), dec!(0.20));
        assert_eq!(PricingTier::Days29To31.weekday_rate(), dec!(0.25));
    }
}
