//! Gemini LLM 客户端

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::gemini::{build_request, generate_content, GenerationConfig};
use super::types::LlmError;

/// Gemini 客户端
///
/// 初始化后只读，持有凭证和 HTTP 连接池。
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 调用 generateContent，返回完整响应文本
    pub async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        user_text: &str,
        config: GenerationConfig,
    ) -> Result<String, LlmError> {
        info!("LLM request: model={}", model);

        let payload = build_request(system_instruction, user_text, config);
        generate_content(&self.client, &self.api_key, &self.base_url, model, &payload).await
    }
}
