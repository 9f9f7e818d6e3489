//! HTTP API
//!
//! - `GET /api/{collection}` list in stored order (public)
//! - `POST /api/{collection}` append a record (admin)
//! - `PATCH /api/{collection}/rearrange` replace the order (admin)
//! - `GET /health`

mod health;
mod records;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/{collection}", get(records::list).post(records::create))
        .route("/api/{collection}/rearrange", patch(records::rearrange))
}
