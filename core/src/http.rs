//! HTTP request and response values.
//!
//! # Design
//! Requests and responses are plain data. `JobsClient` builds `HttpRequest`
//! values and classifies `HttpResponse` values; the `Transport` behind
//! `HttpConnector` is the only code that touches the network. Keeping the
//! two apart lets every classification rule be tested without a socket.

use serde::Serialize;

use crate::error::{Error, Result};

pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Build a JSON request.
    ///
    /// With a payload the requested method is kept and the payload becomes
    /// the JSON body. Without one the request is always a GET, whatever
    /// method was asked for.
    pub fn json<T: Serialize + ?Sized>(
        method: HttpMethod,
        uri: &str,
        payload: Option<&T>,
    ) -> Result<Self> {
        let (method, body) = match payload {
            Some(payload) => {
                let body = serde_json::to_string(payload).map_err(Error::serialization)?;
                (method, Some(body))
            }
            None => (HttpMethod::Get, None),
        };
        Ok(HttpRequest {
            method,
            uri: uri.to_string(),
            headers: vec![
                ("Content-Type".to_string(), APPLICATION_JSON.to_string()),
                ("Accept".to_string(), APPLICATION_JSON.to_string()),
            ],
            body,
        })
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
