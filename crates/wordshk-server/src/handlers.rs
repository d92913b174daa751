use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use wordshk_db::{Dictionary, LoadStats};
use wordshk_parse::{align, align_segment, parse_entry};
use wordshk_types::{DictionaryEntry, TextReadingPair};

#[derive(Clone)]
pub struct AppState {
    pub dict: Arc<Dictionary>,
    pub disable_cache: bool,
}

#[derive(Deserialize)]
pub struct LookupQuery {
    pub headword: Option<String>,
}

#[derive(Deserialize)]
pub struct AlignQuery {
    pub text: String,
    pub reading: Option<String>,
}

/// Body of `POST /v1/parse`: the fields of one dump row.
#[derive(Deserialize)]
pub struct ParseRequest {
    pub id: String,
    pub headword: String,
    pub entry: String,
}

#[derive(Serialize)]
struct StatsResponse {
    entries: usize,
    #[serde(flatten)]
    stats: LoadStats,
}

#[derive(Serialize)]
struct LookupResponse<'a> {
    headword: String,
    total: usize,
    items: Vec<&'a DictionaryEntry>,
}

#[derive(Serialize)]
struct AlignResponse {
    text: String,
    reading: Option<String>,
    pairs: Vec<TextReadingPair>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/stats", get(stats))
        .route("/v1/entries/{id}", get(entry))
        .route("/v1/lookup", get(lookup))
        .route("/v1/align", get(align_text))
        .route("/v1/parse", post(parse))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn stats(State(state): State<AppState>) -> Response {
    Json(StatsResponse {
        entries: state.dict.len(),
        stats: state.dict.stats(),
    })
    .into_response()
}

async fn entry(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Response, ApiError> {
    let entry = state
        .dict
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("no entry with id {id}")))?;
    Ok(cached(state.disable_cache, Json(entry)))
}

async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> Result<Response, ApiError> {
    let headword = params.headword.unwrap_or_default().trim().to_string();
    if headword.is_empty() {
        return Err(ApiError::bad_request("headword is required"));
    }
    let items = state.dict.lookup(&headword);
    debug!("lookup {headword}: {} entries", items.len());
    let response = LookupResponse {
        total: items.len(),
        headword,
        items,
    };
    Ok(cached(state.disable_cache, Json(response)))
}

async fn align_text(
    State(state): State<AppState>,
    Query(params): Query<AlignQuery>,
) -> Result<Response, ApiError> {
    let pairs = match params.reading.as_deref() {
        Some(reading) => align(&params.text, reading),
        None => align_segment(&params.text).ok_or_else(|| {
            ApiError::bad_request("reading is required unless text ends with a (reading)")
        })?,
    }
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let response = AlignResponse {
        text: params.text,
        reading: params.reading,
        pairs,
    };
    Ok(cached(state.disable_cache, Json(response)))
}

async fn parse(Json(req): Json<ParseRequest>) -> Result<Response, ApiError> {
    let entry = parse_entry(&req.id, &req.headword, &req.entry)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(Json(entry).into_response())
}

fn cached(disable_cache: bool, body: impl IntoResponse) -> Response {
    if disable_cache {
        return body.into_response();
    }
    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        )],
        body,
    )
        .into_response()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_errors_map_to_statuses() {
        let resp = ApiError::bad_request("nope").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = ApiError::NotFound("gone".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cache_header_follows_flag() {
        let resp = cached(false, "x");
        assert!(resp.headers().contains_key(header::CACHE_CONTROL));
        let resp = cached(true, "x");
        assert!(!resp.headers().contains_key(header::CACHE_CONTROL));
    }

    #[test]
    fn error_body_carries_message() {
        let body = serde_json::to_value(ErrorResponse {
            error: ApiError::bad_request("bad row").to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "error": "bad row" }));
    }
}
