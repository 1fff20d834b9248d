use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{any, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Fields a job submission must carry.
pub const REQUIRED_JOB_FIELDS: [&str; 7] = [
    "live",
    "api_token",
    "order_contact_phone",
    "ready_time",
    "deliver_from_time",
    "deliver_to_time",
    "order_total",
];

/// Token the mock accepts; anything else is a 401.
pub const VALID_API_TOKEN: &str = "APITOKEN1234567";

/// Response to an accepted job. `json` echoes the submitted payload.
#[derive(Clone, Debug, Serialize)]
pub struct CreatedJob {
    pub request_id: Uuid,
    pub live: bool,
    pub json: Value,
}

#[derive(Serialize)]
pub struct Rejection {
    pub detail: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, CreatedJob>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/jobs", post(create_job).get(list_jobs))
        .route("/jobs/{id}", get(get_job))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/not-json", get(not_json))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn reject(status: StatusCode, detail: impl Into<String>) -> (StatusCode, Json<Rejection>) {
    (
        status,
        Json(Rejection {
            detail: detail.into(),
        }),
    )
}

/// Accepts a job payload after checking the token and required fields.
async fn create_job(
    State(db): State<Db>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CreatedJob>), (StatusCode, Json<Rejection>)> {
    let missing: Vec<&str> = REQUIRED_JOB_FIELDS
        .iter()
        .copied()
        .filter(|field| payload.get(*field).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("missing fields: {}", missing.join(", ")),
        ));
    }
    if payload["api_token"] != VALID_API_TOKEN {
        return Err(reject(StatusCode::UNAUTHORIZED, "invalid api token"));
    }
    if payload["pick_address"].is_null() && payload["deliver_address"].is_null() {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "a pickup or delivery address is required",
        ));
    }

    let job = CreatedJob {
        request_id: Uuid::new_v4(),
        live: payload["live"].as_bool().unwrap_or(false),
        json: payload,
    };
    db.write().await.insert(job.request_id, job.clone());
    Ok((StatusCode::CREATED, Json(job)))
}

async fn list_jobs(State(db): State<Db>) -> Json<Vec<CreatedJob>> {
    let jobs = db.read().await;
    Json(jobs.values().cloned().collect())
}

async fn get_job(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<CreatedJob>, (StatusCode, Json<Rejection>)> {
    let jobs = db.read().await;
    jobs.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Not found."))
}

/// Reflects the method and body back, like a public echo service.
async fn echo(method: axum::http::Method, body: String) -> Json<Value> {
    let json = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
    Json(serde_json::json!({ "method": method.as_str(), "json": json }))
}

/// Answers with the status code in the path.
async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Rejection>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(reject(status, format!("status {code}")))
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_job_serializes_to_json() {
        let job = CreatedJob {
            request_id: Uuid::nil(),
            live: true,
            json: serde_json::json!({"tip": 1.5}),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["request_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["live"], true);
        assert_eq!(json["json"]["tip"], 1.5);
    }

    #[test]
    fn rejection_carries_detail() {
        let (status, Json(body)) = reject(StatusCode::UNAUTHORIZED, "invalid api token");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.detail, "invalid api token");
    }
}
