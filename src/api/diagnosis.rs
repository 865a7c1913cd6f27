//! 诊断相关端点

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::error::AppResult;
use crate::models::{DiagnoseRequest, DiagnoseResponse, ExamplesResponse};
use crate::services::PromptService;
use crate::state::AppState;

/// 诊断处理器
async fn diagnose(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DiagnoseRequest>,
) -> AppResult<Json<DiagnoseResponse>> {
    info!("Received diagnosis request");

    let diagnosis = state.diagnosis.diagnose(&req.problem_description).await?;

    Ok(Json(DiagnoseResponse {
        success: true,
        diagnosis,
    }))
}

/// 获取示例故障描述
async fn examples() -> Json<ExamplesResponse> {
    let prompt_service = PromptService::new();
    Json(ExamplesResponse {
        examples: prompt_service.example_descriptions(),
    })
}

/// 创建诊断路由
pub fn diagnosis_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/diagnose", post(diagnose))
        .route("/api/diagnose/examples", get(examples))
}
