//! 客户端配置
//!
//! 提供配置结构、默认值以及文件与环境变量加载；
//! 配置在构建客户端时校验一次，之后不再变化

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DeeplError, DeeplResult};

/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// 候选配置文件名，按顺序叠加，后者覆盖前者
const CONFIG_PATHS: &[&str] = &["deepl-config", "config"];

/// JSON 编码钩子：类型化的请求体先转成 [`serde_json::Value`]，再交由钩子产出字节
pub type JsonEncode = Arc<dyn Fn(&Value) -> serde_json::Result<Vec<u8>> + Send + Sync>;

/// JSON 解码钩子：响应字节先经钩子解析为 [`serde_json::Value`]，再反序列化为目标类型
pub type JsonDecode = Arc<dyn Fn(&[u8]) -> serde_json::Result<Value> + Send + Sync>;

/// 账户类型，决定请求发往的服务地址
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// 免费账户
    #[default]
    Free,
    /// 专业账户
    Pro,
}

/// 客户端配置
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DeeplConfig {
    /// DeepL API AuthKey，格式为 UUID 后接 `:fx`
    pub auth_key: String,
    /// 请求超时（秒），0 表示使用默认值
    pub timeout_secs: u64,
    /// 账户类型
    pub account_type: AccountType,
    /// 自定义 JSON 编码钩子，缺省使用 serde_json
    #[serde(skip)]
    pub json_encode: Option<JsonEncode>,
    /// 自定义 JSON 解码钩子，缺省使用 serde_json
    #[serde(skip)]
    pub json_decode: Option<JsonDecode>,
}

impl Default for DeeplConfig {
    fn default() -> Self {
        Self {
            auth_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            account_type: AccountType::Free,
            json_encode: None,
            json_decode: None,
        }
    }
}

impl fmt::Debug for DeeplConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeeplConfig")
            .field("auth_key", &self.auth_key)
            .field("timeout_secs", &self.timeout_secs)
            .field("account_type", &self.account_type)
            .field("json_encode", &self.json_encode.is_some())
            .field("json_decode", &self.json_decode.is_some())
            .finish()
    }
}

impl DeeplConfig {
    /// 用 AuthKey 创建配置，其余字段取默认值
    pub fn with_auth_key(auth_key: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            ..Default::default()
        }
    }

    /// 请求超时，0 回退到默认的 10 秒
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// 从默认位置加载配置
    ///
    /// 依次叠加候选配置文件与 `DEEPL_` 前缀的环境变量，
    /// 环境变量优先；加载前会尝试读取 `.env` 文件
    pub fn load() -> DeeplResult<Self> {
        dotenv::dotenv().ok();

        let mut builder = config::Config::builder();
        for path in CONFIG_PATHS {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("DEEPL").try_parsing(true))
            .build()
            .map_err(|error| DeeplError::Config(error.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|error| DeeplError::Config(error.to_string()))
    }

    /// 从指定的 TOML 文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> DeeplResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|error| DeeplError::Config(format!("读取配置文件失败: {error}")))?;
        toml::from_str(&raw)
            .map_err(|error| DeeplError::Config(format!("解析配置文件失败: {error}")))
    }

    // 应用编码钩子，未设置时退回 serde_json
    pub(crate) fn encode_value(&self, value: &Value) -> serde_json::Result<Vec<u8>> {
        match &self.json_encode {
            Some(hook) => hook(value),
            None => serde_json::to_vec(value),
        }
    }

    // 应用解码钩子，未设置时退回 serde_json
    pub(crate) fn decode_value(&self, bytes: &[u8]) -> serde_json::Result<Value> {
        match &self.json_decode {
            Some(hook) => hook(bytes),
            None => serde_json::from_slice(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeeplConfig::default();
        assert!(config.auth_key.is_empty());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.account_type, AccountType::Free);
        assert!(config.json_encode.is_none());
        assert!(config.json_decode.is_none());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let mut config = DeeplConfig::default();
        config.timeout_secs = 0;
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        config.timeout_secs = 30;
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: DeeplConfig = toml::from_str(
            r#"
            auth_key = "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx"
            timeout_secs = 20
            account_type = "pro"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth_key, "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx");
        assert_eq!(config.timeout_secs, 20);
        assert_eq!(config.account_type, AccountType::Pro);
    }

    #[test]
    fn test_deserialize_missing_fields_take_defaults() {
        let config: DeeplConfig = toml::from_str(r#"auth_key = "key""#).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.account_type, AccountType::Free);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("deepl-client-test-from-file.toml");
        std::fs::write(
            &path,
            r#"
            auth_key = "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx"
            account_type = "free"
            "#,
        )
        .unwrap();

        let config = DeeplConfig::from_file(&path).unwrap();
        assert_eq!(config.auth_key, "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx");
        assert_eq!(config.account_type, AccountType::Free);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = DeeplConfig::from_file("/nonexistent/deepl-config.toml");
        assert!(matches!(result, Err(DeeplError::Config(_))));
    }

    #[test]
    fn test_custom_codec_hooks_are_used() {
        let mut config = DeeplConfig::default();
        config.json_encode = Some(Arc::new(|value| {
            let mut bytes = serde_json::to_vec(value)?;
            bytes.push(b'\n');
            Ok(bytes)
        }));

        let encoded = config
            .encode_value(&serde_json::json!({"text": "hi"}))
            .unwrap();
        assert!(encoded.ends_with(b"\n"));

        // 解码钩子未设置时退回 serde_json
        let decoded = config.decode_value(br#"{"ok":true}"#).unwrap();
        assert_eq!(decoded["ok"], true);
    }
}
