//! 诊断结果数据模型
//!
//! 与响应 schema 一一对应。反序列化是严格的：缺失字段或未知字段
//! 都视为形状不匹配，不做部分填充。

use serde::{Deserialize, Serialize};

/// 结构化诊断结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Diagnosis {
    /// 可能原因列表（按模型给出的顺序）
    pub possible_causes: Vec<PossibleCause>,
    /// 推荐解决方案列表
    pub recommended_solutions: Vec<RecommendedSolution>,
    /// 安全警告列表
    pub safety_warnings: Vec<String>,
}

/// 可能原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PossibleCause {
    pub cause: String,
    /// 可能性（约定为 "High"/"Medium"/"Low"，不强制）
    pub likelihood: String,
    pub details: String,
}

/// 推荐解决方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendedSolution {
    pub solution: String,
    pub required_parts: Vec<String>,
    pub steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let raw = r#"{
            "possibleCauses": [
                {"cause": "Faulty Thermocouple", "likelihood": "High", "details": "Pilot flame does not stay lit."}
            ],
            "recommendedSolutions": [
                {"solution": "Replace Thermocouple", "requiredParts": ["thermocouple"], "steps": ["Turn off gas"]}
            ],
            "safetyWarnings": ["Turn off gas supply before servicing"]
        }"#;

        let diagnosis: Diagnosis = serde_json::from_str(raw).unwrap();
        assert_eq!(diagnosis.possible_causes[0].cause, "Faulty Thermocouple");
        assert_eq!(diagnosis.recommended_solutions[0].required_parts, vec!["thermocouple"]);
        assert_eq!(diagnosis.safety_warnings.len(), 1);
    }

    #[test]
    fn test_empty_sequences_are_valid() {
        let raw = r#"{"possibleCauses": [], "recommendedSolutions": [], "safetyWarnings": []}"#;
        let diagnosis: Diagnosis = serde_json::from_str(raw).unwrap();
        assert!(diagnosis.possible_causes.is_empty());
        assert!(diagnosis.recommended_solutions.is_empty());
        assert!(diagnosis.safety_warnings.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // 缺少 safetyWarnings
        let raw = r#"{"possibleCauses": [], "recommendedSolutions": []}"#;
        assert!(serde_json::from_str::<Diagnosis>(raw).is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let raw = r#"{
            "possibleCauses": [], "recommendedSolutions": [], "safetyWarnings": [],
            "extraField": true
        }"#;
        assert!(serde_json::from_str::<Diagnosis>(raw).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let diagnosis = Diagnosis {
            possible_causes: vec![PossibleCause {
                cause: "Low water pressure".to_string(),
                likelihood: "Medium".to_string(),
                details: "Pressure gauge reads below 1 bar.".to_string(),
            }],
            recommended_solutions: vec![RecommendedSolution {
                solution: "Repressurise the system".to_string(),
                required_parts: vec![],
                steps: vec!["Open the filling loop".to_string()],
            }],
            safety_warnings: vec!["Let the boiler cool down first".to_string()],
        };

        let json = serde_json::to_string(&diagnosis).unwrap();
        let parsed: Diagnosis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diagnosis);
    }
}
