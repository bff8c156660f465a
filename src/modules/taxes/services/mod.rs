pub mod vat_calculator;

pub use vat_calculator::{VatCalculator, STANDARD_VAT_RATE_PERCENT};
