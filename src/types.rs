//! 请求参数与响应结果类型定义
//!
//! 参数对象实现 [`Recyclable`]，供参数池在归还时清零复用；
//! 可选字段序列化时按 DeepL API 约定省略空值

use serde::{Deserialize, Serialize};

/// 可回收的请求参数对象
///
/// 归还参数池前必须把所有字段重置为零值，避免残留数据串入后续请求
pub trait Recyclable: Default + Send + 'static {
    /// 将所有字段重置为零值
    fn recycle(&mut self);
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// 各翻译请求共用的基础参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct BaseParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_lang: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_lang: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formality: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub glossary_id: String,
}

/// 文本翻译请求参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextTranslateParams {
    #[serde(flatten)]
    pub base: BaseParams,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub context: String,
    pub show_billed_characters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub split_sentences: String,
    pub preserve_formatting: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag_handling: String,
    #[serde(skip_serializing_if = "is_false")]
    pub outline_detection: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_splitting_tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub splitting_tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_tags: Vec<String>,
}

/// 文本润色请求参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextImprovementParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_lang: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub writing_style: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tone: String,
}

/// 文档翻译请求参数
///
/// 字段以 multipart 表单字段提交，空白字段不写入表单
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentTranslateParams {
    #[serde(flatten)]
    pub base: BaseParams,
    pub filename: String,
    pub output_format: String,
}

/// 创建术语表请求参数
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGlossaryParams {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_lang: String,
    pub target_lang: String,
    pub entries: String,
    pub entries_format: String,
}

impl Recyclable for TextTranslateParams {
    fn recycle(&mut self) {
        *self = Self::default();
    }
}

impl Recyclable for TextImprovementParams {
    fn recycle(&mut self) {
        *self = Self::default();
    }
}

impl Recyclable for DocumentTranslateParams {
    fn recycle(&mut self) {
        *self = Self::default();
    }
}

impl Recyclable for CreateGlossaryParams {
    fn recycle(&mut self) {
        *self = Self::default();
    }
}

/// 单条翻译 / 润色结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextResult {
    pub detected_source_language: String,
    pub text: String,
    pub billed_characters: i64,
    pub model_type_used: String,
}

/// 文档翻译任务凭据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentResult {
    pub document_id: String,
    pub document_key: String,
}

/// 文档翻译任务状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDocumentResult {
    pub document_id: String,
    pub status: String,
    pub seconds_remaining: i64,
}

/// 用量与配额
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageResult {
    pub character_count: i64,
    pub character_limit: i64,
}

/// 支持的语言
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageResult {
    pub language: String,
    pub name: String,
    pub supports_formality: bool,
}

/// 术语表支持的语言对
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairResult {
    pub source_lang: String,
    pub target_lang: String,
}

/// 术语表信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryResult {
    pub glossary_id: String,
    pub ready: bool,
    pub name: String,
    pub source_lang: String,
    pub target_lang: String,
    pub creation_time: String,
    pub entry_count: i64,
}

// 列表类响应的外层包装
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TextTranslateResponse {
    pub translations: Vec<TextResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TextImprovementResponse {
    pub improvements: Vec<TextResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GlossaryPairsResponse {
    pub supported_languages: Vec<PairResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GlossariesResponse {
    pub glossaries: Vec<GlossaryResult>,
}
