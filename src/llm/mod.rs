//! LLM 模块
//!
//! 提供 Gemini generateContent 客户端和结构化输出 schema。

mod client;
mod format;
mod gemini;
mod schema;
mod types;

pub use client::GeminiClient;
pub use gemini::GenerationConfig;
pub use schema::diagnosis_schema;
pub use types::LlmError;
