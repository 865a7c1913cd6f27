//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。
//! 诊断失败只向用户暴露稳定的通用消息，底层细节进日志。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::services::DiagnosisError;

/// 诊断失败时面向用户的稳定消息
const DIAGNOSIS_FAILED_MESSAGE: &str =
    "Failed to get a diagnosis from the AI. Please check the console for details.";

/// 空输入时面向用户的消息
const EMPTY_INPUT_MESSAGE: &str = "Lütfen bir arıza açıklaması girin.";

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// LLM 调用错误
    #[error("LLM 错误: {0}")]
    Llm(String),

    /// 请求参数错误
    #[error("请求错误: {0}")]
    BadRequest(String),
}

impl From<DiagnosisError> for AppError {
    fn from(err: DiagnosisError) -> Self {
        match err {
            DiagnosisError::EmptyInput => AppError::BadRequest(EMPTY_INPUT_MESSAGE.to_string()),
            DiagnosisError::NotConfigured => AppError::Config(
                "Gemini AI client is not initialized. Check API Key.".to_string(),
            ),
            // Provider 与 MalformedResponse 对用户一视同仁，日志中可区分
            DiagnosisError::Provider(e) => {
                error!("Error calling Gemini API: {}", e);
                AppError::Llm(DIAGNOSIS_FAILED_MESSAGE.to_string())
            }
            DiagnosisError::MalformedResponse(e) => {
                error!("Malformed diagnosis response: {}", e);
                AppError::Llm(DIAGNOSIS_FAILED_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let app_err = AppError::from(DiagnosisError::EmptyInput);
        match &app_err {
            AppError::BadRequest(msg) => assert_eq!(msg, EMPTY_INPUT_MESSAGE),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(app_err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_configured_maps_to_config_error() {
        let app_err = AppError::from(DiagnosisError::NotConfigured);
        assert!(matches!(app_err, AppError::Config(_)));
    }

    #[test]
    fn test_provider_error_surfaces_generic_message() {
        let provider = DiagnosisError::Provider(LlmError::ApiError {
            status: 500,
            message: "internal provider detail".to_string(),
        });
        let app_err = AppError::from(provider);
        match &app_err {
            AppError::Llm(msg) => {
                assert_eq!(msg, DIAGNOSIS_FAILED_MESSAGE);
                assert!(!msg.contains("internal provider detail"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(app_err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_response_surfaces_generic_message() {
        let parse_err = serde_json::from_str::<crate::models::Diagnosis>("not json").unwrap_err();
        let app_err = AppError::from(DiagnosisError::MalformedResponse(parse_err));
        match app_err {
            AppError::Llm(msg) => assert_eq!(msg, DIAGNOSIS_FAILED_MESSAGE),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
