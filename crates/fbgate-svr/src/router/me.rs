use axum::Json;
use fbgate_auth::FacebookUser;
use serde_json::{json, Value};

pub async fn handler(FacebookUser(user_id): FacebookUser) -> Json<Value> {
    Json(json!({ "user_id": user_id.as_str() }))
}
