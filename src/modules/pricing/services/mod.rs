pub mod price_calculator;

pub use price_calculator::{PriceCalculator, MAX_DAILY_PRICE, YEARLY_DISCOUNT_RATE};
