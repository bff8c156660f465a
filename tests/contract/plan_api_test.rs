//! Contract tests for the plan selection endpoints
//!
//! Validates GET /plans, GET /plans/{id} and POST /plans/{id}/select: response
//! structure, per-interval totals and the checkout redirect.

use actix_web::{http::header, test, App};
use pos_pricing::config::BillingConfig;
use pos_pricing::configure_app;
use pos_pricing::core::Currency;
use pos_pricing::modules::plans::controllers::plan_controller::{PlanResponse, PlansResponse};
use pos_pricing::plans::{PlanAction, PlanSelection};
use pos_pricing::pricing::BillingInterval;

#[actix_web::test]
async fn test_list_plans_monthly() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans?interval=month").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: PlansResponse = test::read_body_json(resp).await;
    assert_eq!(body.interval, BillingInterval::Month);
    assert_eq!(body.currency, Currency::ETB);

    let ids: Vec<_> = body.plans.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["basic", "professional", "enterprise"]);

    let basic = &body.plans[0];
    assert_eq!(basic.daily_price, "100.00");
    assert_eq!(basic.pricing.total_with_vat, "3000.00");
    assert_eq!(basic.pricing.display_total, "ETB 3000.00");
    assert_eq!(basic.action, PlanAction::Subscribe);
}

#[actix_web::test]
async fn test_list_plans_yearly() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans?interval=year").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: PlansResponse = test::read_body_json(resp).await;
    assert_eq!(body.interval, BillingInterval::Year);

    let basic = &body.plans[0];
    assert_eq!(basic.pricing.interval, BillingInterval::Year);
    assert_eq!(basic.pricing.yearly_subtotal, "31739.13");
    assert_eq!(basic.pricing.yearly_discount_amount, "6347.83");
    assert_eq!(basic.pricing.total_with_vat, "25391.30");
}

#[actix_web::test]
async fn test_interval_query_ignores_case() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans?interval=Year").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: PlansResponse = test::read_body_json(resp).await;
    assert_eq!(body.interval, BillingInterval::Year);
    assert_eq!(body.plans[0].pricing.total_with_vat, "25391.30");

    let req = test::TestRequest::get()
        .uri("/plans/basic?interval=MONTH")
        .to_request();
    let body: PlanResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.pricing.interval, BillingInterval::Month);
}

#[actix_web::test]
async fn test_plan_action_serialized_snake_case() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans/enterprise").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["action"], "contact_sales");
}

#[actix_web::test]
async fn test_plan_records_identical_across_intervals() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let monthly: PlansResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/plans?interval=month").to_request(),
    )
    .await;
    let yearly: PlansResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/plans?interval=year").to_request(),
    )
    .await;

    for (m, y) in monthly.plans.iter().zip(yearly.plans.iter()) {
        assert_eq!(m.id, y.id);
        assert_eq!(m.daily_price, y.daily_price);
        assert_eq!(m.features, y.features);
        assert_eq!(m.limitations, y.limitations);
        assert_ne!(m.pricing.total_with_vat, y.pricing.total_with_vat);
    }
}

#[actix_web::test]
async fn test_invalid_interval_rejected() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans?interval=week").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn test_get_single_plan() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get()
        .uri("/plans/enterprise?interval=year")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: PlanResponse = test::read_body_json(resp).await;
    assert_eq!(body.id, "enterprise");
    assert_eq!(body.action, PlanAction::ContactSales);
    assert_eq!(body.action_label, "Contact Sales");
    assert!(body.limitations.is_empty());
}

#[actix_web::test]
async fn test_get_unknown_plan() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/plans/gold").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_select_plan_redirects_to_billing() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::post()
        .uri("/plans/professional/select")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/dashboard/billing?plan=professional"
    );

    let body: PlanSelection = test::read_body_json(resp).await;
    assert_eq!(body.plan_id, "professional");
    assert_eq!(body.redirect, "/dashboard/billing?plan=professional");
}

#[actix_web::test]
async fn test_select_unknown_plan() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::post().uri("/plans/gold/select").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_readiness_with_standard_catalog() {
    let app = test::init_service(App::new().configure(configure_app(&BillingConfig::default()))).await;

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
