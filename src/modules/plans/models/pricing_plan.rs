// Subscription tiers offered to restaurant and cafe tenants.
//
// Daily prices are quoted VAT-inclusive in ETB. The table is fixed at
// compile time and never mutated; per-interval totals are derived from it
// by the pricing calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Call to action shown on a plan card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    /// Self-serve checkout through the billing dashboard
    Subscribe,
    /// Sales-assisted onboarding
    ContactSales,
}

impl PlanAction {
    pub fn label(&self) -> &'static str {
        match self {
            PlanAction::Subscribe => "Subscribe",
            PlanAction::ContactSales => "Contact Sales",
        }
    }
}

/// A named subscription tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// VAT-inclusive price per day, always > 0
    pub daily_price: Decimal,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub recommended: bool,
    pub action: PlanAction,
}

pub static PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: "basic",
        name: "Basic",
        description: "Everything a single cafe needs to take orders and get paid.",
        daily_price: Decimal::from_parts(100, 0, 0, false, 0),
        features: &[
            "1 branch",
            "Up to 5 staff accounts",
            "Digital menu with QR ordering",
            "Cashier point of sale",
            "Daily sales reports",
        ],
        limitations: &[
            "No inventory tracking",
            "Email support only",
        ],
        recommended: false,
        action: PlanAction::Subscribe,
    },
    PricingPlan {
        id: "professional",
        name: "Professional",
        description: "For busy restaurants running a full floor and kitchen.",
        daily_price: Decimal::from_parts(200, 0, 0, false, 0),
        features: &[
            "Up to 3 branches",
            "Unlimited staff accounts",
            "Waiter and manager dashboards",
            "Inventory tracking with unit conversions",
            "Table management",
            "Advanced sales analytics",
        ],
        limitations: &["No custom integrations"],
        recommended: true,
        action: PlanAction::Subscribe,
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        description: "Multi-branch groups with custom workflows and support.",
        daily_price: Decimal::from_parts(350, 0, 0, false, 0),
        features: &[
            "Unlimited branches",
            "Unlimited staff accounts",
            "Centralised menu and inventory",
            "Custom integrations",
            "Dedicated account manager",
            "Priority phone support",
        ],
        limitations: &[],
        recommended: false,
        action: PlanAction::ContactSales,
    },
];
