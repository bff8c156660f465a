use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies for subscription quotes.
///
/// Amounts are carried at full precision through every calculation and only
/// rounded here, at the presentation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Ethiopian Birr (2 decimal places)
    #[default]
    ETB,
    /// US Dollar (2 decimal places)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::ETB | Currency::USD => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Rounds an amount and renders it with exactly `scale` decimal places
    pub fn amount_string(&self, amount: Decimal) -> String {
        format!(
            "{:.width$}",
            self.round(amount),
            width = self.scale() as usize
        )
    }

    /// Formats an amount for display with the currency code
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self, self.amount_string(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::ETB => write!(f, "ETB"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ETB" => Ok(Currency::ETB),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
