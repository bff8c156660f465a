//! Tax controller for HTTP endpoints
//!
//! Exposes the VAT decomposer so the dashboard can show the tax-exclusive
//! part of any VAT-inclusive amount.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, Result};
use crate::modules::taxes::models::VatDecomposition;
use crate::modules::taxes::services::{VatCalculator, STANDARD_VAT_RATE_PERCENT};

/// Query parameters for the subtotal endpoint
#[derive(Debug, Deserialize)]
pub struct SubtotalQuery {
    /// VAT-inclusive price
    pub price: Decimal,
    /// VAT rate as a percentage, defaults to the standard 15%
    #[serde(default)]
    pub rate_percent: Option<Decimal>,
}

/// Response structure for the subtotal endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SubtotalResponse {
    pub price: String, // Decimal as string for JSON precision
    pub rate_percent: String,
    pub subtotal: String,
    pub vat_amount: String,
}

impl SubtotalResponse {
    fn new(decomposition: VatDecomposition, currency: Currency) -> Self {
        Self {
            price: currency.amount_string(decomposition.price),
            rate_percent: decomposition.rate_percent.normalize().to_string(),
            subtotal: currency.amount_string(decomposition.subtotal),
            vat_amount: currency.amount_string(decomposition.vat_amount),
        }
    }
}

/// Split a VAT-inclusive price into subtotal and VAT
///
/// GET /taxes/subtotal?price=115&rate_percent=15
pub async fn get_subtotal(
    currency: web::Data<Currency>,
    query: web::Query<SubtotalQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let rate_percent = query.rate_percent.unwrap_or(STANDARD_VAT_RATE_PERCENT);

    VatCalculator::validate_price(query.price)?;
    VatCalculator::validate_rate_percent(rate_percent)?;

    let decomposition = VatDecomposition::from_inclusive(query.price, rate_percent);
    tracing::debug!(
        price = %decomposition.price,
        rate_percent = %decomposition.rate_percent,
        subtotal = %decomposition.subtotal,
        "Decomposed VAT-inclusive price"
    );

    Ok(HttpResponse::Ok().json(SubtotalResponse::new(decomposition, **currency)))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/taxes").route("/subtotal", web::get().to(get_subtotal)));
}
