use axum::Json;

/// Handler for GET /
///
/// Static greeting payload.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello world!" }))
}
