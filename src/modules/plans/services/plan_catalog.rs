use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::BillingConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::plans::models::{PricingPlan, PRICING_PLANS};
use crate::modules::pricing::models::{BillingInterval, PriceBreakdown};
use crate::modules::pricing::services::PriceCalculator;

/// A plan paired with its pricing for the selected interval
#[derive(Debug, Clone, PartialEq)]
pub struct RenderablePlan<'a> {
    pub plan: &'a PricingPlan,
    pub pricing: PriceBreakdown,
}

/// Result of choosing a plan: where the pricing page navigates next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSelection {
    pub plan_id: String,
    pub redirect: String,
}

/// Read-only view over the plan table, shared across workers.
///
/// The billing interval is never stored here; every pricing call takes it
/// as an argument.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: &'static [PricingPlan],
    currency: Currency,
    checkout_path: String,
}

impl PlanCatalog {
    /// Catalog over the standard plan table
    pub fn new(config: &BillingConfig) -> Self {
        Self::with_plans(&PRICING_PLANS, config)
    }

    pub fn with_plans(plans: &'static [PricingPlan], config: &BillingConfig) -> Self {
        Self {
            plans,
            currency: config.currency,
            checkout_path: config.checkout_path.clone(),
        }
    }

    pub fn plans(&self) -> &'static [PricingPlan] {
        self.plans
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Look up a plan by its identifier
    pub fn find(&self, plan_id: &str) -> Result<&'static PricingPlan> {
        self.plans
            .iter()
            .find(|plan| plan.id == plan_id)
            .ok_or_else(|| AppError::not_found(format!("Plan '{}'", plan_id)))
    }

    /// Pricing for a single plan under `interval`
    pub fn renderable_plan(
        &self,
        plan_id: &str,
        interval: BillingInterval,
    ) -> Result<RenderablePlan<'static>> {
        let plan = self.find(plan_id)?;
        Ok(Self::render(plan, interval))
    }

    /// Every plan, in table order, priced for `interval`
    pub fn renderable_plans(&self, interval: BillingInterval) -> Vec<RenderablePlan<'static>> {
        self.plans
            .iter()
            .map(|plan| Self::render(plan, interval))
            .collect()
    }

    /// Choose a plan and build the checkout redirect carrying its identifier
    pub fn select(&self, plan_id: &str) -> Result<PlanSelection> {
        let plan = match self.find(plan_id) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(plan_id = %plan_id, "Selection of unknown plan");
                return Err(err);
            }
        };

        let selection = PlanSelection {
            plan_id: plan.id.to_string(),
            redirect: format!("{}?plan={}", self.checkout_path, plan.id),
        };
        info!(plan_id = %selection.plan_id, redirect = %selection.redirect, "Plan selected");

        Ok(selection)
    }

    fn render(plan: &PricingPlan, interval: BillingInterval) -> RenderablePlan<'_> {
        RenderablePlan {
            plan,
            pricing: PriceCalculator::breakdown(plan.daily_price, interval),
        }
    }
}
