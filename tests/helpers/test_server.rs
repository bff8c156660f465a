// Test Server Helpers
//
// Spawns a real HTTP test server using actix-test with the production
// route configuration and middleware stack.

use actix_web::App;
use pos_pricing::config::BillingConfig;
use pos_pricing::configure_app;
use pos_pricing::middleware::{ErrorLogger, RequestId};

pub use actix_test::TestServer;

/// Spawn a real HTTP test server with the default billing configuration
///
/// The server stops automatically when the returned `TestServer` drops.
pub fn spawn_test_server() -> TestServer {
    spawn_test_server_with(BillingConfig::default())
}

/// Spawn a real HTTP test server with a custom billing configuration
pub fn spawn_test_server_with(billing: BillingConfig) -> TestServer {
    let configure = configure_app(&billing);

    actix_test::start(move || {
        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .configure(configure.clone())
    })
}

/// Client that reports redirects instead of following them
pub fn non_following_client() -> awc::Client {
    awc::Client::builder().disable_redirects().finish()
}
