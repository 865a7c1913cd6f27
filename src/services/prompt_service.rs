//! Prompt 构建服务
//!
//! 负责构建诊断的系统指令、用户提示词和示例故障描述

/// 系统提示词
const SYSTEM_PROMPT: &str = r#"You are an expert HVAC and boiler repair diagnostician.
Your task is to analyze a user-described problem and provide a structured JSON response.
The response must detail possible causes, recommended solutions with steps, and critical safety warnings.
Be thorough, accurate, and prioritize safety. The user is a trained technician."#;

/// 示例故障描述（土耳其语，与前端表单一致）
const EXAMPLE_DESCRIPTIONS: &[&str] = &[
    "Kombi çalışmıyor, pilot alevi yanmıyor ve ekranda F28 hata kodu görünüyor.",
    "Kombi sürekli devreye girip çıkıyor, radyatörler ısınmıyor.",
    "Kombiden su damlıyor ve basınç göstergesi 0.5 barın altında.",
    "Sıcak su geliyor ama kalorifer devresi çalışmıyor.",
];

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 系统指令
    pub fn system_instruction(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// 构建诊断用户提示词
    pub fn build_diagnosis_prompt(&self, problem: &str) -> String {
        format!("Diagnose the following boiler problem: \"{}\"", problem)
    }

    /// 示例故障描述列表
    pub fn example_descriptions(&self) -> Vec<String> {
        EXAMPLE_DESCRIPTIONS.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_diagnosis_prompt_embeds_problem_verbatim() {
        let service = PromptService::new();
        let prompt = service.build_diagnosis_prompt("Kombi çalışmıyor, pilot alevi yanmıyor");
        assert_eq!(
            prompt,
            "Diagnose the following boiler problem: \"Kombi çalışmıyor, pilot alevi yanmıyor\""
        );
    }

    #[test]
    fn test_system_instruction_mentions_safety_and_technician() {
        let service = PromptService::new();
        let system = service.system_instruction();
        assert!(system.contains("safety"));
        assert!(system.contains("trained technician"));
        assert!(system.contains("structured JSON"));
    }

    #[test]
    fn test_example_descriptions_non_empty() {
        let service = PromptService::new();
        let examples = service.example_descriptions();
        assert!(!examples.is_empty());
        assert!(examples[0].contains("F28"));
    }
}
