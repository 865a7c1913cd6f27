//! 诊断服务
//!
//! 封装 GeminiClient：校验输入、构建 schema 约束的请求、严格解析响应。
//! 客户端在构造时注入，之后只读；每次调用都是一次完整的请求，不重试、不流式。

use std::time::Instant;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::llm::{diagnosis_schema, GeminiClient, GenerationConfig, LlmError};
use crate::models::Diagnosis;
use crate::utils::RequestLogger;

use super::prompt_service::PromptService;

/// 采样温度（低随机性，表述基本稳定）
const DIAGNOSIS_TEMPERATURE: f64 = 0.5;

/// 诊断错误类型
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    /// 输入为空，未发起任何网络请求
    #[error("故障描述不能为空")]
    EmptyInput,

    /// API 密钥未配置
    #[error("API Key 未配置")]
    NotConfigured,

    /// 传输或提供方错误
    #[error("LLM 调用失败: {0}")]
    Provider(#[from] LlmError),

    /// 响应不是合法 JSON 或不符合诊断 schema
    #[error("响应不符合诊断 schema: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// 诊断服务
pub struct DiagnosisService {
    client: Option<GeminiClient>,
    model: String,
    api_key: String,
    logger: RequestLogger,
}

impl DiagnosisService {
    /// 创建新的诊断服务
    ///
    /// 凭证缺失时服务仍可构造，但每次调用都会返回 NotConfigured。
    pub fn new(config: &AppConfig) -> Self {
        let client = if config.api_key.is_empty() {
            error!("GEMINI_API_KEY environment variable not set.");
            None
        } else {
            match GeminiClient::new(&config.api_key, &config.base_url) {
                Ok(client) => Some(client),
                Err(e) => {
                    error!("Failed to create Gemini client: {}", e);
                    None
                }
            }
        };

        Self {
            client,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            logger: RequestLogger::default(),
        }
    }

    /// 诊断故障描述
    ///
    /// 空输入和缺失凭证在本地短路，不触发网络请求。
    pub async fn diagnose(&self, problem: &str) -> Result<Diagnosis, DiagnosisError> {
        let problem = problem.trim();
        if problem.is_empty() {
            return Err(DiagnosisError::EmptyInput);
        }

        let client = self.client.as_ref().ok_or(DiagnosisError::NotConfigured)?;

        let request_id = RequestLogger::generate_request_id();
        let entry = self.logger.log_request(
            &request_id,
            &self.model,
            problem,
            DIAGNOSIS_TEMPERATURE,
            &self.api_key,
        );
        let start = Instant::now();

        info!(
            "Diagnosis request: id={}, problem_chars={}",
            request_id,
            problem.chars().count()
        );

        // 构建 schema 约束的请求
        let prompt_service = PromptService::new();
        let user_text = prompt_service.build_diagnosis_prompt(problem);
        let config = GenerationConfig {
            temperature: Some(DIAGNOSIS_TEMPERATURE),
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(diagnosis_schema().clone()),
        };

        let raw = match client
            .generate(&self.model, prompt_service.system_instruction(), &user_text, config)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                self.logger.log_error(entry, start, "provider", &e.to_string());
                return Err(DiagnosisError::Provider(e));
            }
        };

        // 严格解析：形状不匹配即失败，不做部分填充
        let diagnosis = match Self::parse_diagnosis(&raw) {
            Ok(diagnosis) => diagnosis,
            Err(e) => {
                self.logger
                    .log_error(entry, start, "malformed_response", &e.to_string());
                return Err(DiagnosisError::MalformedResponse(e));
            }
        };

        self.logger.log_success(entry, start, raw.len(), &raw);
        info!(
            "Diagnosis completed: id={}, causes={}, solutions={}, warnings={}",
            request_id,
            diagnosis.possible_causes.len(),
            diagnosis.recommended_solutions.len(),
            diagnosis.safety_warnings.len()
        );

        Ok(diagnosis)
    }

    /// 解析响应文本为诊断结果
    fn parse_diagnosis(raw: &str) -> Result<Diagnosis, serde_json::Error> {
        serde_json::from_str(raw.trim())
    }
}
