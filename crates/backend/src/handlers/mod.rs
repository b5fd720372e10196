pub mod a001_project;
pub mod a002_material;
pub mod a003_vendor;
pub mod a004_procurement;
pub mod a005_procurement_timeline;
pub mod a006_chat;
pub mod u501_predict_materials;

use axum::Json;
use serde_json::json;

/// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Smart Buy Dashboard API",
        "version": "1.0.0"
    }))
}
