pub mod plan_catalog;

pub use plan_catalog::{PlanCatalog, PlanSelection, RenderablePlan};
