//! Plan selection surface over HTTP
//!
//! Serves the plan table with per-interval pricing and turns a plan choice
//! into a redirect to the billing dashboard.

use actix_web::{http::header, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, Result};
use crate::modules::plans::models::PlanAction;
use crate::modules::plans::services::{PlanCatalog, RenderablePlan};
use crate::modules::pricing::controllers::PriceBreakdownResponse;
use crate::modules::pricing::models::BillingInterval;
use crate::modules::pricing::services::YEARLY_DISCOUNT_RATE;
use crate::modules::taxes::services::STANDARD_VAT_RATE_PERCENT;

/// Query parameters shared by the plan endpoints
#[derive(Debug, Deserialize)]
pub struct IntervalQuery {
    #[serde(default)]
    pub interval: BillingInterval,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub daily_price: String, // Decimal as string for JSON precision
    pub features: Vec<String>,
    pub limitations: Vec<String>,
    pub recommended: bool,
    pub action: PlanAction,
    pub action_label: String,
    pub pricing: PriceBreakdownResponse,
}

impl PlanResponse {
    fn new(rendered: &RenderablePlan<'_>, currency: Currency) -> Self {
        let plan = rendered.plan;

        Self {
            id: plan.id.to_string(),
            name: plan.name.to_string(),
            description: plan.description.to_string(),
            daily_price: currency.amount_string(plan.daily_price),
            features: plan.features.iter().map(|f| f.to_string()).collect(),
            limitations: plan.limitations.iter().map(|l| l.to_string()).collect(),
            recommended: plan.recommended,
            action: plan.action,
            action_label: plan.action.label().to_string(),
            pricing: PriceBreakdownResponse::new(&rendered.pricing, currency),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlansResponse {
    pub interval: BillingInterval,
    pub currency: Currency,
    pub vat_rate_percent: String,
    pub yearly_discount_percent: String,
    pub plans: Vec<PlanResponse>,
}

/// GET /plans?interval=month|year
pub async fn list_plans(
    catalog: web::Data<PlanCatalog>,
    query: web::Query<IntervalQuery>,
) -> Result<HttpResponse> {
    let interval = query.interval;
    let currency = catalog.currency();

    let plans = catalog
        .renderable_plans(interval)
        .iter()
        .map(|rendered| PlanResponse::new(rendered, currency))
        .collect();

    Ok(HttpResponse::Ok().json(PlansResponse {
        interval,
        currency,
        vat_rate_percent: STANDARD_VAT_RATE_PERCENT.to_string(),
        yearly_discount_percent: (YEARLY_DISCOUNT_RATE * Decimal::ONE_HUNDRED)
            .normalize()
            .to_string(),
        plans,
    }))
}

/// GET /plans/{id}?interval=month|year
pub async fn get_plan(
    catalog: web::Data<PlanCatalog>,
    plan_id: web::Path<String>,
    query: web::Query<IntervalQuery>,
) -> Result<HttpResponse> {
    let rendered = catalog.renderable_plan(&plan_id, query.interval)?;
    Ok(HttpResponse::Ok().json(PlanResponse::new(&rendered, catalog.currency())))
}

/// POST /plans/{id}/select
///
/// Answers 303 See Other pointing at the billing dashboard.
pub async fn select_plan(
    catalog: web::Data<PlanCatalog>,
    plan_id: web::Path<String>,
) -> Result<HttpResponse> {
    let selection = catalog.select(&plan_id)?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, selection.redirect.clone()))
        .json(selection))
}

/// Configure plan routes
pub fn configure_plan_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/plans")
            .route("", web::get().to(list_plans))
            .route("/{id}", web::get().to(get_plan))
            .route("/{id}/select", web::post().to(select_plan)),
    );
}
