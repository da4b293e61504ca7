//! HTTP surface of the snippet store.
//!
//! Two operations, mirroring the identifier flow end to end:
//!
//! - save: current time → raw id → blob path → conditional write → public id
//! - fetch: public id → raw id → blob path → read
//!
//! The codec and addressing steps are pure and run inline in the handlers;
//! the only awaited work is the blob store call.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use bytes::Bytes;
use serde::Serialize;
use snipvault::{PublicSnippetId, RawSnippetId, TimeSource};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{config::ServerConfig, error::ServiceError, store::SnippetStore};

/// Shared state for the request handlers: the blob store and the clock that
/// timestamps new identifiers. Both are cloned per handler invocation, so
/// implementations should be cheap to clone.
#[derive(Clone)]
pub struct AppState<S, C> {
    store: S,
    clock: C,
}

/// Response body of a successful save.
#[derive(Debug, Serialize)]
pub struct SavedSnippet {
    /// Obfuscated identifier to hand back on fetch.
    pub id: PublicSnippetId,
}

/// Builds the service router.
///
/// Generic over the store and clock so tests can substitute a temp-dir store
/// and a fixed clock.
pub fn router<S, C>(store: S, clock: C, config: &ServerConfig) -> Router
where
    S: SnippetStore,
    C: TimeSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/snippets", post(save_snippet::<S, C>))
        .route("/snippets/{id}", get(fetch_snippet::<S, C>))
        .layer(DefaultBodyLimit::max(config.max_snippet_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { store, clock })
}

async fn health() -> &'static str {
    "ok"
}

/// `POST /snippets` — stores the request body and returns the public id.
async fn save_snippet<S, C>(
    State(state): State<AppState<S, C>>,
    body: Bytes,
) -> Result<impl IntoResponse, ServiceError>
where
    S: SnippetStore,
    C: TimeSource,
{
    let raw = RawSnippetId::from_datetime(state.clock.now());
    let path = raw.blob_path();
    state.store.put(&path, body).await?;

    let id = raw.encode();
    tracing::info!(%path, "snippet stored");
    Ok((StatusCode::OK, Json(SavedSnippet { id })))
}

/// `GET /snippets/{id}` — decodes the public id and streams the stored bytes.
async fn fetch_snippet<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError>
where
    S: SnippetStore,
    C: TimeSource,
{
    let raw = RawSnippetId::decode(&id)?;
    let path = raw.blob_path();
    match state.store.get(&path).await? {
        Some(bytes) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            bytes,
        )),
        None => {
            tracing::debug!(%path, "no blob at decoded path");
            Err(ServiceError::NotFound)
        }
    }
}
