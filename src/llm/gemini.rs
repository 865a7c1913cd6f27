//! Gemini generateContent API 实现
//!
//! 非流式调用：一次请求返回完整响应文本。

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use super::format::build_generate_endpoint;
use super::types::LlmError;

/// Gemini 请求载荷
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// 消息内容（请求和响应共用）
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// 文本片段
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// 生成配置
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// 响应 MIME 类型（如 "application/json"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// 结构化输出 schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// Gemini 响应
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini 错误响应
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// 构建请求载荷
pub fn build_request(
    system_instruction: &str,
    user_text: &str,
    config: GenerationConfig,
) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: user_text.to_string(),
            }],
        }],
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part {
                text: system_instruction.to_string(),
            }],
        }),
        generation_config: Some(config),
    }
}

/// 调用 Gemini generateContent API，返回首个候选的完整文本
pub async fn generate_content(
    client: &Client,
    api_key: &str,
    base_url: &str,
    model: &str,
    payload: &GeminiRequest,
) -> Result<String, LlmError> {
    let endpoint = build_generate_endpoint(base_url, model);

    debug!("Gemini API request: endpoint={}, model={}", endpoint, model);

    // 发送请求
    let response = client
        .post(&endpoint)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(payload)
        .send()
        .await?;

    // 检查状态码
    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        // 日志里只保留前 500 个字符，按字符截断避免多字节边界
        let preview: String = error_text.chars().take(500).collect();
        error!("Gemini API error: status={}, body={}", status_code, preview);

        // 尽量提取结构化错误信息
        let message = serde_json::from_str::<GeminiErrorResponse>(&error_text)
            .map(|e| e.error.message)
            .unwrap_or(error_text);

        return Err(LlmError::ApiError {
            status: status_code,
            message,
        });
    }

    // 解析响应，拼接首个候选的全部文本片段
    let body_text = response.text().await?;
    let body: GeminiResponse = serde_json::from_str(&body_text)?;
    let text: String = body
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(text)
}
