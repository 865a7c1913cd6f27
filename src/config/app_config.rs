//! 应用配置管理
//!
//! 配置在启动时从环境变量读取一次，之后按值传递，不使用全局状态。
//! 凭证缺失属于配置错误，在启动时检测并记录。

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥（来自 GEMINI_API_KEY，兼容 API_KEY）
    pub api_key: String,

    /// Gemini API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// HTTP 监听端口
    pub port: u16,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_port() -> u16 {
    8780
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从给定的查找函数加载配置
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .unwrap_or_default();

        let base_url = lookup("GEMINI_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_base_url);

        let model = lookup("GEMINI_MODEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_model);

        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);

        Self {
            api_key,
            base_url,
            model,
            port,
        }
    }

    /// 是否已配置 API 密钥
    pub fn api_key_set(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.port, 8780);
        assert!(!config.api_key_set());
    }

    #[test]
    fn test_from_lookup_empty_env() {
        let map = HashMap::new();
        let config = AppConfig::from_lookup(lookup_from(&map));
        assert!(!config.api_key_set());
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_from_lookup_gemini_key_preferred() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "gemini-key");
        map.insert("API_KEY", "legacy-key");
        let config = AppConfig::from_lookup(lookup_from(&map));
        assert_eq!(config.api_key, "gemini-key");
    }

    #[test]
    fn test_from_lookup_api_key_fallback() {
        let mut map = HashMap::new();
        map.insert("API_KEY", "legacy-key");
        let config = AppConfig::from_lookup(lookup_from(&map));
        assert_eq!(config.api_key, "legacy-key");
        assert!(config.api_key_set());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "k");
        map.insert("GEMINI_MODEL", "gemini-2.5-pro");
        map.insert("PORT", "9000");
        let config = AppConfig::from_lookup(lookup_from(&map));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_from_lookup_invalid_port_falls_back() {
        let mut map = HashMap::new();
        map.insert("PORT", "not-a-port");
        let config = AppConfig::from_lookup(lookup_from(&map));
        assert_eq!(config.port, 8780);
    }
}
