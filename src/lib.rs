//! # DeepL Client
//!
//! DeepL API 的 Rust 客户端库，覆盖文本翻译、文本润色、文档翻译、
//! 术语表管理和用量查询。
//!
//! ## 命令执行模型
//!
//! 每个端点方法都不直接发起请求，而是返回一条 [`Command`]：
//! 一个延迟执行、只能执行一次的工作单元。调用方自行选择执行方式：
//!
//! - [`Command::sync`] 在当前任务上等待结果；
//! - [`Command::spawn`] 把操作派发到独立任务，结果经回调送达。
//!
//! 无论并发多少调用竞争同一条命令，被包装的操作至多执行一次，
//! 竞争失败的调用立即得到 [`DeeplError::CommandClosed`]。
//!
//! 请求参数对象经 [`pool`] 模块池化复用，归还时强制清零，
//! 避免残留数据串入无关请求。
//!
//! ## 快速开始
//!
//! ```no_run
//! use deepl_client::{Deepl, DeeplConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeeplConfig::with_auth_key("279a2e9d-83b3-c416-7e65-90fb9f38de26:fx");
//!     let client = Deepl::new(config)?;
//!
//!     // 同步执行，阻塞当前任务直到拿到译文
//!     let result = client.text_translate("Hello, world!", "ZH").sync().await?;
//!     println!("译文: {}", result.text);
//!
//!     // 异步执行，结果经回调送达
//!     client.usage().spawn(|_ctx, result| {
//!         if let Ok(usage) = result {
//!             println!("已用字符: {}/{}", usage.character_count, usage.character_limit);
//!         }
//!     });
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! auth_key = "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx"
//! timeout_secs = 10
//! account_type = "free"
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod pool;
pub mod types;

pub use client::Deepl;
pub use command::Command;
pub use config::{AccountType, DeeplConfig, JsonDecode, JsonEncode};
pub use error::{DeeplError, DeeplResult};
pub use pool::{
    acquire_create_glossary_params, acquire_document_translate_params,
    acquire_text_improvement_params, acquire_text_translate_params, recycle_params,
};
pub use types::{
    BaseParams, CheckDocumentResult, CreateGlossaryParams, DocumentResult,
    DocumentTranslateParams, GlossaryResult, LanguageResult, PairResult, Recyclable,
    TextImprovementParams, TextResult, TextTranslateParams, UsageResult,
};

// 上下文类型来自 tokio-util，这里统一再导出
pub use tokio_util::sync::CancellationToken;
