use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Currency, Result};
use crate::modules::pricing::models::{BillingInterval, PriceBreakdown};
use crate::modules::pricing::services::PriceCalculator;

/// Query parameters for the quote endpoint
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// VAT-inclusive daily rate
    pub daily_price: Decimal,
    #[serde(default)]
    pub interval: BillingInterval,
}

/// Rendered price breakdown, amounts rounded to the currency scale
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceBreakdownResponse {
    pub interval: BillingInterval,
    pub currency: Currency,
    pub daily_price: String, // Decimal as string for JSON precision
    pub monthly_subtotal: String,
    pub yearly_subtotal: String,
    pub yearly_discount_amount: String,
    pub total_with_vat: String,
    /// Total as shown on the pricing page, e.g. "ETB 3000.00"
    pub display_total: String,
}

impl PriceBreakdownResponse {
    pub fn new(breakdown: &PriceBreakdown, currency: Currency) -> Self {
        Self {
            interval: breakdown.interval,
            currency,
            daily_price: currency.amount_string(breakdown.daily_price),
            monthly_subtotal: currency.amount_string(breakdown.monthly_subtotal),
            yearly_subtotal: currency.amount_string(breakdown.yearly_subtotal),
            yearly_discount_amount: currency.amount_string(breakdown.yearly_discount_amount),
            total_with_vat: currency.amount_string(breakdown.total_with_vat),
            display_total: currency.format_amount(breakdown.total_with_vat),
        }
    }
}

/// GET /pricing/quote
///
/// Quotes an arbitrary VAT-inclusive daily rate for the requested interval.
pub async fn get_quote(
    currency: web::Data<Currency>,
    query: web::Query<QuoteQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    PriceCalculator::validate_daily_price(query.daily_price)?;

    let breakdown = PriceCalculator::breakdown(query.daily_price, query.interval);
    info!(
        daily_price = %breakdown.daily_price,
        interval = %breakdown.interval,
        total = %breakdown.total_with_vat,
        "Quoted subscription price"
    );

    Ok(HttpResponse::Ok().json(PriceBreakdownResponse::new(&breakdown, **currency)))
}

/// Configure pricing routes
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/pricing").route("/quote", web::get().to(get_quote)));
}
