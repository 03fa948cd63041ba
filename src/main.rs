//! Streams a batch of mock requests through an observable and handles each one.
//!
//! Log verbosity is controlled with `RUST_LOG`, e.g. `RUST_LOG=rxr_lite=trace`.

use rxr_lite::request::{Request, Response, StatusCode};
use rxr_lite::subscribe::Subscriber;
use rxr_lite::{Observable, SignalError, Subscribeable, Unsubscribeable};
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

fn mock_requests() -> Vec<Request> {
    let user = json!({
        "name": "User Name",
        "age": 26,
        "roles": ["user", "admin"],
        "createdAt": "2024-01-01T00:00:00Z",
        "isDeleted": false,
    });

    vec![
        Request::post("service.example", "user", user),
        Request::get("service.example", "user").with_param("id", "3f5h67s4s"),
    ]
}

fn handle_request(request: Request) -> Response {
    info!(
        method = %request.method,
        host = %request.host,
        path = %request.path,
        params = ?request.params,
        "handling request"
    );
    Response::new(StatusCode::Ok)
}

fn handle_error(observable_error: SignalError) -> Response {
    error!(error = %observable_error, "request stream failed");
    Response::new(StatusCode::InternalServerError)
}

fn handle_complete() {
    info!("complete");
}

fn main() {
    setup_logging();

    let mut requests = Observable::from(mock_requests());

    let subscription = requests.subscribe(Subscriber::new(
        |request| {
            let response = handle_request(request);
            info!(status = %response.status, "request handled");
        },
        |e| {
            let response = handle_error(e);
            info!(status = %response.status, "error handled");
        },
        handle_complete,
    ));

    subscription.unsubscribe();
}
