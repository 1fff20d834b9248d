//! Blocking HTTP transport and response classification.
//!
//! # Design
//! `HttpConnector` performs exactly one synchronous round-trip per call: no
//! retries, no backoff, no state carried between calls beyond the transport's
//! connection pool. The round-trip itself sits behind the `Transport` trait so
//! classification (`interpret_response`) stays pure and the network can be
//! swapped out in tests.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP exchange.
///
/// `Ok(None)` means the exchange completed without yielding a response.
pub trait Transport {
    fn round_trip(&self, request: &HttpRequest) -> Result<Option<HttpResponse>>;
}

/// `Transport` backed by a `ureq` agent.
///
/// Status codes are never turned into errors here; 4xx/5xx responses come
/// back as data for `interpret_response`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ConnectorConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ConnectorConfig::default())
    }
}

impl Transport for UreqTransport {
    fn round_trip(&self, request: &HttpRequest) -> Result<Option<HttpResponse>> {
        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(request.uri.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let sent = match &request.body {
            Some(body) => {
                let req = builder.body(body.as_bytes()).map_err(invalid_request)?;
                self.agent.run(req)
            }
            None => {
                let req = builder.body(()).map_err(invalid_request)?;
                self.agent.run(req)
            }
        };
        let mut response =
            sent.map_err(|e| Error::connector(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::connector(format!("failed to read response body: {e}")))?;

        Ok(Some(HttpResponse {
            status,
            headers,
            body,
        }))
    }
}

fn invalid_request(e: ureq::http::Error) -> Error {
    Error::connector(format!("invalid request: {e}"))
}

/// Classify a round-trip outcome.
///
/// - no response: `Error::Connector`
/// - status outside 200..300: `Error::Api` with the status and raw body
/// - empty 2xx body: `Value::Null`
/// - 2xx body that is not JSON: `Error::Connector`
pub fn interpret_response(response: Option<HttpResponse>) -> Result<Value> {
    let Some(response) = response else {
        return Err(Error::connector("No response was received"));
    };

    if !response.is_success() {
        return Err(Error::Api {
            status: response.status,
            body: (!response.body.is_empty()).then_some(response.body),
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body)
        .map_err(|e| Error::connector(format!("malformed response body: {e}")))
}

/// Sends requests to the dispatch API and classifies the outcome.
#[derive(Debug, Clone, Default)]
pub struct HttpConnector<T = UreqTransport> {
    transport: T,
}

impl HttpConnector<UreqTransport> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &ConnectorConfig) -> Self {
        Self::with_transport(UreqTransport::new(config))
    }
}

impl<T: Transport> HttpConnector<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Send `payload` as JSON with `method`. Without a payload the request is
    /// a GET regardless of `method`.
    pub fn send<P: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        uri: &str,
        payload: Option<&P>,
    ) -> Result<Value> {
        let request = HttpRequest::json(method, uri, payload)?;
        self.send_request(&request)
    }

    pub fn get(&self, uri: &str) -> Result<Value> {
        self.send::<Value>(HttpMethod::Get, uri, None)
    }

    pub fn send_request(&self, request: &HttpRequest) -> Result<Value> {
        debug!(method = request.method.as_str(), uri = %request.uri, "sending request");
        let response = self.transport.round_trip(request)?;
        if let Some(response) = &response {
            debug!(status = response.status, uri = %request.uri, "received response");
        }
        interpret_response(response)
    }
}
