//! Shared test double for the HTTP transport.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ticktape_core::{ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, PolygonClient};

/// Returns a fixed response and records every request it receives.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn json(body: &str) -> Self {
        Self::respond(Ok(HttpResponse::ok_json(body)))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::respond(Ok(HttpResponse::new(status, body)))
    }

    pub fn failure(error: HttpError) -> Self {
        Self::respond(Err(error))
    }

    fn respond(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.recorded_requests()
            .pop()
            .expect("at least one request should have been sent")
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub const TEST_BASE_URL: &str = "https://polygon.test";

/// Client wired to `transport` with a fixed key and base URL.
pub fn client_with(transport: Arc<RecordingHttpClient>) -> PolygonClient {
    let config = ClientConfig::new("test-key").with_base_url(TEST_BASE_URL);
    PolygonClient::with_http_client(config, transport)
}
