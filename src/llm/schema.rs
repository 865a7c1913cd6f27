//! 诊断响应 schema 定义
//!
//! 约束 Gemini 结构化输出的形状，逐字段带描述，随每次请求原样发送。

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// 诊断结果的响应 schema
static DIAGNOSIS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "possibleCauses": {
                "type": "ARRAY",
                "description": "A list of potential causes for the described problem.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "cause": {
                            "type": "STRING",
                            "description": "The name of the potential cause (e.g., \"Faulty Thermocouple\")."
                        },
                        "likelihood": {
                            "type": "STRING",
                            "description": "Estimated likelihood (e.g., \"High\", \"Medium\", \"Low\")."
                        },
                        "details": {
                            "type": "STRING",
                            "description": "A brief explanation of why this might be the cause."
                        }
                    },
                    "propertyOrdering": ["cause", "likelihood", "details"]
                }
            },
            "recommendedSolutions": {
                "type": "ARRAY",
                "description": "Step-by-step solutions to address the potential causes.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "solution": {
                            "type": "STRING",
                            "description": "The name of the solution (e.g., \"Replace Thermocouple\")."
                        },
                        "requiredParts": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "A list of parts needed for this solution."
                        },
                        "steps": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "A numbered list of steps to perform the repair."
                        }
                    },
                    "propertyOrdering": ["solution", "requiredParts", "steps"]
                }
            },
            "safetyWarnings": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Critical safety warnings relevant to the diagnosis and repair process."
            }
        },
        "propertyOrdering": ["possibleCauses", "recommendedSolutions", "safetyWarnings"]
    })
});

/// 获取诊断响应 schema
pub fn diagnosis_schema() -> &'static Value {
    &DIAGNOSIS_SCHEMA
}
