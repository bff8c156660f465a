use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::taxes::services::VatCalculator;

/// A VAT-inclusive price split into subtotal and tax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatDecomposition {
    pub price: Decimal,
    pub rate_percent: Decimal,
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
}

impl VatDecomposition {
    pub fn from_inclusive(price: Decimal, rate_percent: Decimal) -> Self {
        let subtotal = VatCalculator::subtotal(price, rate_percent);

        Self {
            price,
            rate_percent,
            subtotal,
            vat_amount: VatCalculator::vat_amount(subtotal, rate_percent),
        }
    }
}
