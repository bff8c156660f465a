pub mod controllers;
pub mod models;
pub mod services;

pub use models::VatDecomposition;
pub use services::{VatCalculator, STANDARD_VAT_RATE_PERCENT};
