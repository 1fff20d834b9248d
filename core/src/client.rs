//! Jobs resource of the dispatch API.
//!
//! # Design
//! `JobsClient` holds only the endpoint it posts to. Creating a job is split
//! into `build_create_job`, which validates and serializes the `Job` into an
//! `HttpRequest`, and `parse_create_job`, which classifies the response.
//! `create_job` runs both around a single round-trip on an `HttpConnector`.

use serde_json::Value;

use crate::connector::{interpret_response, HttpConnector, Transport};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Job;

/// Stateless client for job submission.
#[derive(Debug, Clone)]
pub struct JobsClient {
    jobs_url: String,
}

impl JobsClient {
    /// Jobs are posted to `{base_url}/jobs`.
    pub fn new(base_url: &str) -> Self {
        Self {
            jobs_url: format!("{}/jobs", base_url.trim_end_matches('/')),
        }
    }

    /// Post jobs to `jobs_url` verbatim instead of the default path.
    pub fn with_jobs_url(jobs_url: &str) -> Self {
        Self {
            jobs_url: jobs_url.to_string(),
        }
    }

    pub fn jobs_url(&self) -> &str {
        &self.jobs_url
    }

    /// Validate `job` and build the POST that submits it.
    pub fn build_create_job(&self, job: &Job) -> Result<HttpRequest> {
        let wire = job.to_wire()?;
        HttpRequest::json(HttpMethod::Post, &self.jobs_url, Some(&wire))
    }

    pub fn parse_create_job(&self, response: Option<HttpResponse>) -> Result<Value> {
        interpret_response(response)
    }

    /// Submit `job` and return the decoded response.
    pub fn create_job<T: Transport>(&self, connector: &HttpConnector<T>, job: &Job) -> Result<Value> {
        let request = self.build_create_job(job)?;
        connector.send_request(&request)
    }
}
