use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BillingInterval;

/// Derived pricing for one daily rate and one selected interval.
///
/// All amounts are kept at full precision; rounding happens only when a
/// response is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Interval `total_with_vat` was computed for
    pub interval: BillingInterval,
    /// VAT-inclusive daily rate the breakdown was derived from
    pub daily_price: Decimal,
    /// Tax-exclusive subtotal over 30 days
    pub monthly_subtotal: Decimal,
    /// Tax-exclusive subtotal over 365 days, before discount
    pub yearly_subtotal: Decimal,
    /// 20% of `yearly_subtotal`
    pub yearly_discount_amount: Decimal,
    /// Payable total for `interval`
    pub total_with_vat: Decimal,
}
