use axum::{response::Html, Json};
use serde_json::{json, Value};

use super::templates::index_template::index_template;

pub async fn get_root() -> Html<String> {
    Html(index_template())
}

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "online" }))
}
