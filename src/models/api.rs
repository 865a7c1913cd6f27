//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use super::diagnosis::Diagnosis;

/// 诊断请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseRequest {
    pub problem_description: String,
}

/// 诊断响应
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    pub success: bool,
    pub diagnosis: Diagnosis,
}

/// 示例故障描述响应
#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<String>,
}
