//! Subscription pricing for the restaurant POS platform
//!
//! Derives monthly and yearly subscription totals from VAT-inclusive daily
//! plan rates and serves the plan selection surface over HTTP.

use actix_web::web;

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::plans;
pub use modules::pricing;
pub use modules::taxes;

use config::BillingConfig;
use modules::plans::PlanCatalog;

/// Build the application configuration: shared state, extractor config and routes.
///
/// The returned closure is cheap to clone and is handed to every worker.
pub fn configure_app(
    billing: &BillingConfig,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let catalog = web::Data::new(PlanCatalog::new(billing));
    let currency = web::Data::new(billing.currency);

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(catalog.clone())
            .app_data(currency.clone())
            .app_data(middleware::query_config())
            .configure(modules::configure_routes);
    }
}
