pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BillingInterval, PriceBreakdown};
pub use services::{PriceCalculator, MAX_DAILY_PRICE, YEARLY_DISCOUNT_RATE};
