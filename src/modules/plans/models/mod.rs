pub mod pricing_plan;

pub use pricing_plan::{PlanAction, PricingPlan, PRICING_PLANS};
