pub mod billing_interval;
pub mod price_breakdown;

pub use billing_interval::BillingInterval;
pub use price_breakdown::PriceBreakdown;
