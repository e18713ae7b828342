use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use engine::{IndexManager, ScoredDoc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize {
    10
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<ScoredDoc>,
}

#[derive(Deserialize)]
pub struct PutDocBody {
    pub text: String,
}

pub type AppState = Arc<IndexManager>;

pub fn build_app() -> Result<Router> {
    let manager: AppState = Arc::new(IndexManager::new());

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/docs/:id", put(put_doc_handler))
        .route("/search", get(search_handler))
        .with_state(manager)
        .layer(cors);
    Ok(app)
}

pub async fn put_doc_handler(
    State(manager): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PutDocBody>,
) -> Result<StatusCode, (StatusCode, String)> {
    match manager.index_document(&id, &body.text) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err((StatusCode::BAD_REQUEST, err.to_string())),
    }
}

pub async fn search_handler(
    State(manager): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let k = params.k.clamp(1, 100);
    let results = manager.search(&params.q, k);
    tracing::debug!(query = %params.q, k, hits = results.len(), "search served");
    Json(SearchResponse {
        query: params.q,
        took_s: start.elapsed().as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}
