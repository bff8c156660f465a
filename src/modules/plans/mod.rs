pub mod controllers;
pub mod models;
pub mod services;

pub use models::{PlanAction, PricingPlan, PRICING_PLANS};
pub use services::{PlanCatalog, PlanSelection, RenderablePlan};
