//! Test Actix service construction over an `AppState`.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use bridge::middleware::request_trace::RequestTrace;
use bridge::routes;
use bridge::state::app_state::AppState;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
}

/// Create a TestAppBuilder with the given AppState
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

impl TestAppBuilder {
    /// Build the test service with production routes and the request-trace
    /// middleware, so the error contract (x-trace-id parity) is exercised
    /// exactly as in the real server.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);

        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(data)
                .configure(routes::configure),
        )
        .await
    }
}
