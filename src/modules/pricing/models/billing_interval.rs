use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::AppError;

/// Recurring period a subscription price is extrapolated over.
///
/// Day counts are fixed conventions (30 and 365), not calendar lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BillingInterval {
    #[default]
    Month,
    Year,
}

impl BillingInterval {
    pub const ALL: [BillingInterval; 2] = [BillingInterval::Month, BillingInterval::Year];

    /// Number of days a period of this interval is priced for
    pub const fn days(self) -> u32 {
        match self {
            BillingInterval::Month => 30,
            BillingInterval::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Month => "month",
            BillingInterval::Year => "year",
        }
    }
}

impl fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingInterval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(BillingInterval::Month),
            "year" => Ok(BillingInterval::Year),
            _ => Err(AppError::validation(format!(
                "Invalid billing interval '{}', expected 'month' or 'year'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for BillingInterval {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
