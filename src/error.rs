//! 统一错误处理
//!
//! 定义命令执行、参数校验以及 DeepL API 状态码对应的错误类型

use thiserror::Error;

/// 错误结果类型别名
pub type DeeplResult<T> = Result<T, DeeplError>;

/// DeepL 客户端错误
#[derive(Error, Debug)]
pub enum DeeplError {
    /// 命令已被执行过，不允许二次执行
    #[error("命令已关闭，不能重复执行")]
    CommandClosed,

    /// 请求被上下文取消
    #[error("请求已被取消")]
    Cancelled,

    /// AuthKey 格式错误
    #[error("AuthKey 不存在或格式不正确: {0}")]
    InvalidAuthKey(String),

    /// 文档 ID 格式错误
    #[error("文档 ID 格式不正确: {0}")]
    InvalidDocumentId(String),

    /// 文档密钥格式错误
    #[error("文档密钥格式不正确: {0}")]
    InvalidDocumentKey(String),

    /// 术语表 ID 格式错误
    #[error("术语表 ID 格式不正确: {0}")]
    InvalidGlossaryId(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 网络错误
    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 成功响应中没有任何结果条目
    #[error("响应中没有结果条目")]
    EmptyResult,

    /// 400 请求参数错误，消息取自响应体
    #[error("请求参数错误: {0}")]
    BadRequest(String),

    /// 401 鉴权失败
    #[error("鉴权失败，请通过 Authorization 头提供有效的 DeepL-Auth-Key")]
    Unauthorized,

    /// 403 权限不足
    #[error("权限不足，禁止访问请求的资源")]
    Forbidden,

    /// 404 资源不存在
    #[error("请求的资源不存在")]
    NotFound,

    /// 413 请求体过大
    #[error("请求体大小超出限制")]
    PayloadTooLarge,

    /// 414 请求 URL 过长
    #[error("请求 URL 过长，请改用 POST 并将参数放入请求体")]
    UrlTooLong,

    /// 415 Accept 头指定的格式不受支持
    #[error("Accept 头指定的词条格式不受支持")]
    UnsupportedFormat,

    /// 429 / 529 请求过于频繁
    #[error("请求过于频繁，请稍后重试")]
    TooManyRequests,

    /// 456 字符配额已用尽
    #[error("配额已用尽，字符数已达到上限")]
    QuotaExceeded,

    /// 500 服务内部错误
    #[error("DeepL 服务内部错误")]
    Internal,

    /// 503 / 504 服务暂时不可用
    #[error("服务暂时不可用，请稍后重试")]
    Unavailable,

    /// 未知状态码
    #[error("未知错误 (status: {0})")]
    Unknown(u16),
}

impl DeeplError {
    /// 按 DeepL API 状态码表把非成功响应翻译为对应错误
    ///
    /// 400 使用响应体作为错误消息，响应体为空时退回固定文案
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            400 => {
                if body.is_empty() {
                    DeeplError::BadRequest("请检查错误消息和请求参数".to_string())
                } else {
                    DeeplError::BadRequest(String::from_utf8_lossy(body).into_owned())
                }
            }
            401 => DeeplError::Unauthorized,
            403 => DeeplError::Forbidden,
            404 => DeeplError::NotFound,
            413 => DeeplError::PayloadTooLarge,
            414 => DeeplError::UrlTooLong,
            415 => DeeplError::UnsupportedFormat,
            429 | 529 => DeeplError::TooManyRequests,
            456 => DeeplError::QuotaExceeded,
            500 => DeeplError::Internal,
            503 | 504 => DeeplError::Unavailable,
            other => DeeplError::Unknown(other),
        }
    }

    /// 错误对应的 HTTP 状态码（仅 API 错误有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DeeplError::BadRequest(_) => Some(400),
            DeeplError::Unauthorized => Some(401),
            DeeplError::Forbidden => Some(403),
            DeeplError::NotFound => Some(404),
            DeeplError::PayloadTooLarge => Some(413),
            DeeplError::UrlTooLong => Some(414),
            DeeplError::UnsupportedFormat => Some(415),
            DeeplError::TooManyRequests => Some(429),
            DeeplError::QuotaExceeded => Some(456),
            DeeplError::Internal => Some(500),
            DeeplError::Unavailable => Some(503),
            DeeplError::Unknown(code) => Some(*code),
            _ => None,
        }
    }

    /// 检查错误是否可重试
    pub fn is_retryable(&self) -> bool {
        match self {
            DeeplError::Network(_) => true,
            DeeplError::TooManyRequests => true,
            DeeplError::Internal => true,
            DeeplError::Unavailable => true,
            DeeplError::CommandClosed => false,
            DeeplError::Cancelled => false,
            DeeplError::QuotaExceeded => false,
            _ => false,
        }
    }
}
