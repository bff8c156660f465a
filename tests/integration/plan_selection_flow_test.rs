//! End-to-end plan selection flow against a real server
//!
//! Browse plans for one interval, toggle to the other, pick a plan and follow
//! the checkout redirect the service hands back.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::{header, StatusCode};
use helpers::*;
use pos_pricing::config::BillingConfig;
use pos_pricing::middleware::REQUEST_ID_HEADER;
use pos_pricing::modules::plans::controllers::plan_controller::PlansResponse;
use pos_pricing::plans::PlanSelection;
use pos_pricing::pricing::BillingInterval;

#[actix_web::test]
async fn test_browse_toggle_and_select() {
    let srv = spawn_test_server();

    // Monthly view
    let mut response = srv.get("/plans?interval=month").send().await.unwrap();
    assert_success(&response);
    let monthly: PlansResponse = response.json().await.unwrap();
    assert_eq!(monthly.interval, BillingInterval::Month);

    // Toggle to yearly
    let mut response = srv.get("/plans?interval=year").send().await.unwrap();
    assert_success(&response);
    let yearly: PlansResponse = response.json().await.unwrap();
    assert_eq!(yearly.interval, BillingInterval::Year);

    let recommended = yearly
        .plans
        .iter()
        .find(|plan| plan.recommended)
        .expect("one plan is recommended");
    assert_eq!(recommended.id, "professional");

    // 200/day: 6000.00 a month, 50782.61 a year after discount
    let monthly_pro = monthly.plans.iter().find(|p| p.id == "professional").unwrap();
    assert_eq!(monthly_pro.pricing.total_with_vat, "6000.00");
    assert_eq!(recommended.pricing.total_with_vat, "50782.61");

    // Select it
    let client = non_following_client();
    let mut response = client
        .post(srv.url(&format!("/plans/{}/select", recommended.id)))
        .send()
        .await
        .unwrap();
    assert_status(&response, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard/billing?plan=professional"
    );

    let selection: PlanSelection = response.json().await.unwrap();
    assert_eq!(selection.plan_id, "professional");
}

#[actix_web::test]
async fn test_custom_checkout_path() {
    let srv = spawn_test_server_with(BillingConfig {
        checkout_path: "/admin/subscription".to_string(),
        ..Default::default()
    });

    let response = non_following_client()
        .post(srv.url("/plans/basic/select"))
        .send()
        .await
        .unwrap();
    assert_status(&response, StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/subscription?plan=basic"
    );
}

#[actix_web::test]
async fn test_unknown_plan_returns_error_envelope() {
    let srv = spawn_test_server();

    let mut response = non_following_client()
        .post(srv.url("/plans/platinum/select"))
        .send()
        .await
        .unwrap();
    assert_status(&response, StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_error_envelope(&body, 404);
}

#[actix_web::test]
async fn test_malformed_query_returns_error_envelope() {
    let srv = spawn_test_server();

    let mut response = srv
        .get("/pricing/quote?daily_price=lots")
        .send()
        .await
        .unwrap();
    assert_status(&response, StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_error_envelope(&body, 400);
}

#[actix_web::test]
async fn test_request_id_round_trip() {
    let srv = spawn_test_server();

    let response = srv
        .get("/health")
        .insert_header((REQUEST_ID_HEADER, "flow-42"))
        .send()
        .await
        .unwrap();
    assert_success(&response);
    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "flow-42");
}
