use crate::types::Context;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    let (code, status, database) = match ctx.repos.health.ping().await {
        Ok(_) => (StatusCode::OK, "healthy", String::from("healthy")),
        Err(err) => {
            tracing::warn!("Health check failed to reach the database: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "degraded",
                format!("unhealthy: {}", err),
            )
        }
    };

    (
        code,
        Json(json!({
            "status": status,
            "database": database,
            "timestamp": Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        })),
    )
}
