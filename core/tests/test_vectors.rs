//! Verify request building and response classification against the JSON
//! vectors stored in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON, not raw strings, so key order in the
//! vector files does not matter.

mod common;

use dispatch_core::{Error, HttpMethod, HttpResponse, JobsClient};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> JobsClient {
    JobsClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(sim: &Value) -> Option<HttpResponse> {
    if sim.is_null() {
        return None;
    }
    Some(HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Create job
// ---------------------------------------------------------------------------

#[test]
fn create_job_test_vectors() {
    let raw = include_str!("../../test-vectors/create_job.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    let job = common::full_job();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_create_job(&job).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.uri, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: uri");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_create_job(simulated(&case["simulated_response"])).unwrap();
        assert_eq!(result, case["expected_result"], "{name}: parsed result");
    }
}

#[test]
fn full_job_serializes_identically_twice() {
    let job = common::full_job();
    let first = job.to_json().unwrap();
    let second = job.to_json().unwrap();
    assert_eq!(first, second);
    assert!(first.contains(r#""ready_time":"2019-02-15T15:16:17-0500""#), "{first}");
}

// ---------------------------------------------------------------------------
// Response classification
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.parse_create_job(simulated(&case["response"]));

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error["kind"].as_str().unwrap() {
                "Api" => {
                    let status = expected_error["status"].as_u64().unwrap() as u16;
                    assert!(matches!(err, Error::Api { status: s, .. } if s == status), "{name}: expected Api {status}, got {err:?}");
                }
                "Connector" => assert!(matches!(err, Error::Connector { .. }), "{name}: expected Connector, got {err:?}"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}
