use rust_decimal::Decimal;

use crate::core::error::AppError;

/// VAT applied uniformly to every plan and interval, as a percentage (15 = 15%)
pub const STANDARD_VAT_RATE_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// VatCalculator splits VAT-inclusive prices into their tax-exclusive parts
pub struct VatCalculator;

impl VatCalculator {
    /// Extract the tax-exclusive subtotal from a VAT-inclusive price.
    ///
    /// `subtotal = price_with_vat / (1 + vat_rate_percent / 100)`
    ///
    /// Callers supply a non-negative price and a rate that is not -100; the
    /// HTTP boundary enforces this with [`validate_price`](Self::validate_price)
    /// and [`validate_rate_percent`](Self::validate_rate_percent).
    pub fn subtotal(price_with_vat: Decimal, vat_rate_percent: Decimal) -> Decimal {
        price_with_vat / (Decimal::ONE + Self::rate_fraction(vat_rate_percent))
    }

    /// VAT owed on a tax-exclusive subtotal
    pub fn vat_amount(subtotal: Decimal, vat_rate_percent: Decimal) -> Decimal {
        subtotal * Self::rate_fraction(vat_rate_percent)
    }

    /// Convert a percentage (15) into a multiplier (0.15)
    pub fn rate_fraction(vat_rate_percent: Decimal) -> Decimal {
        vat_rate_percent / Decimal::ONE_HUNDRED
    }

    /// Validate a rate percentage is within 0..=100 with at most 4 decimal places
    pub fn validate_rate_percent(vat_rate_percent: Decimal) -> Result<(), AppError> {
        if vat_rate_percent < Decimal::ZERO {
            return Err(AppError::validation("VAT rate cannot be negative"));
        }

        if vat_rate_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::validation("VAT rate cannot exceed 100%"));
        }

        if vat_rate_percent.normalize().scale() > 4 {
            return Err(AppError::validation(
                "VAT rate cannot have more than 4 decimal places",
            ));
        }

        Ok(())
    }

    /// Validate a VAT-inclusive price is non-negative
    pub fn validate_price(price_with_vat: Decimal) -> Result<(), AppError> {
        if price_with_vat < Decimal::ZERO {
            return Err(AppError::validation("Price cannot be negative"));
        }

        Ok(())
    }
}
