use super::{parse_var, var_or};
use crate::core::{AppError, Currency, Result};

pub const DEFAULT_CHECKOUT_PATH: &str = "/dashboard/billing";

/// Settings for the plan selection surface
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Currency quotes are rounded and formatted in
    pub currency: Currency,
    /// Dashboard route a selected plan navigates to
    pub checkout_path: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::ETB,
            checkout_path: DEFAULT_CHECKOUT_PATH.to_string(),
        }
    }
}

impl BillingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            currency: parse_var("PRICING_CURRENCY", "ETB")?,
            checkout_path: var_or("BILLING_CHECKOUT_PATH", DEFAULT_CHECKOUT_PATH)
                .trim()
                .to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.checkout_path.starts_with('/') {
            return Err(AppError::configuration(
                "BILLING_CHECKOUT_PATH must be an absolute path",
            ));
        }

        if self.checkout_path.contains('?') {
            return Err(AppError::configuration(
                "BILLING_CHECKOUT_PATH must not carry a query string",
            ));
        }

        Ok(())
    }
}
