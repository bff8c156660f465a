use actix_web::web;

pub mod health;
pub mod plans;
pub mod pricing;
pub mod taxes;

/// Register every HTTP route the service exposes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes)
        .configure(plans::controllers::configure_plan_routes)
        .configure(pricing::controllers::configure_pricing_routes)
        .configure(taxes::controllers::configure_tax_routes);
}
