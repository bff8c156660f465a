use rust_decimal::Decimal;
use tracing::trace;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{BillingInterval, PriceBreakdown};
use crate::modules::taxes::services::{VatCalculator, STANDARD_VAT_RATE_PERCENT};

/// Discount taken off the yearly period subtotal (0.20 = 20%)
pub const YEARLY_DISCOUNT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Largest daily rate a quote accepts (10^26).
///
/// A yearly subtotal of this rate stays below `Decimal::MAX`, so no
/// calculation on an accepted rate can overflow.
pub const MAX_DAILY_PRICE: Decimal = Decimal::from_parts(3825205248, 3704098002, 5421010, false, 0);

/// Calculator for subscription quotes derived from a VAT-inclusive daily rate.
///
/// Every function is pure; the billing interval is always passed in.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Validate a VAT-inclusive daily rate is within `0..=MAX_DAILY_PRICE`
    pub fn validate_daily_price(daily_price_with_vat: Decimal) -> Result<()> {
        VatCalculator::validate_price(daily_price_with_vat)?;

        if daily_price_with_vat > MAX_DAILY_PRICE {
            return Err(AppError::validation(format!(
                "Daily price cannot exceed {}",
                MAX_DAILY_PRICE
            )));
        }

        Ok(())
    }

    /// Tax-exclusive subtotal of `daily_price_with_vat` over one `interval`.
    ///
    /// `subtotal(daily, 15%) * days(interval)`, no proration.
    pub fn period_subtotal(daily_price_with_vat: Decimal, interval: BillingInterval) -> Decimal {
        let daily_subtotal = VatCalculator::subtotal(daily_price_with_vat, STANDARD_VAT_RATE_PERCENT);
        daily_subtotal * Decimal::from(interval.days())
    }

    /// Discount granted on a yearly period subtotal
    pub fn yearly_discount(yearly_subtotal: Decimal) -> Decimal {
        yearly_subtotal * YEARLY_DISCOUNT_RATE
    }

    /// Payable total for a plan billed over `interval`.
    ///
    /// Monthly: VAT is re-applied on top of the period subtotal.
    /// Yearly: the 20% discount is taken off the period subtotal and the
    /// result is returned as is. VAT is not re-applied on this path; quoted
    /// yearly prices depend on that, so it must stay asymmetric.
    ///
    /// Rates above [`MAX_DAILY_PRICE`] are outside the calculator's domain;
    /// the HTTP boundary rejects them with [`validate_daily_price`](Self::validate_daily_price).
    pub fn total_with_vat(daily_price_with_vat: Decimal, interval: BillingInterval) -> Decimal {
        let subtotal = Self::period_subtotal(daily_price_with_vat, interval);

        let total = match interval {
            BillingInterval::Year => subtotal - Self::yearly_discount(subtotal),
            BillingInterval::Month => {
                subtotal + VatCalculator::vat_amount(subtotal, STANDARD_VAT_RATE_PERCENT)
            }
        };

        trace!(
            daily_price = %daily_price_with_vat,
            interval = %interval,
            subtotal = %subtotal,
            total = %total,
            "Computed subscription total"
        );

        total
    }

    /// Full pricing breakdown for a daily rate with `interval` selected
    pub fn breakdown(daily_price_with_vat: Decimal, interval: BillingInterval) -> PriceBreakdown {
        let monthly_subtotal = Self::period_subtotal(daily_price_with_vat, BillingInterval::Month);
        let yearly_subtotal = Self::period_subtotal(daily_price_with_vat, BillingInterval::Year);

        PriceBreakdown {
            interval,
            daily_price: daily_price_with_vat,
            monthly_subtotal,
            yearly_subtotal,
            yearly_discount_amount: Self::yearly_discount(yearly_subtotal),
            total_with_vat: Self::total_with_vat(daily_price_with_vat, interval),
        }
    }
}
