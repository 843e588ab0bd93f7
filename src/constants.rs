//! API 常量定义
//!
//! 包含服务地址、各端点路径以及 DeepL API 约定的参数取值

/// 免费账户 API 地址
pub(crate) const FREE_HOST: &str = "https://api-free.deepl.com/v2";
/// 专业账户 API 地址
pub(crate) const PRO_HOST: &str = "https://api.deepl.com/v2";

// 各端点路径，带 `{}` 的由调用处格式化填入资源 ID
pub(crate) const TEXT_TRANSLATE_URI: &str = "/translate";
pub(crate) const DOCUMENT_TRANSLATE_URI: &str = "/document";
pub(crate) const USAGE_URI: &str = "/usage";
pub(crate) const LANGUAGES_URI: &str = "/languages";
pub(crate) const TEXT_IMPROVEMENT_URI: &str = "/write/rephrase";
pub(crate) const LIST_GLOSSARY_PAIRS_URI: &str = "/glossary-language-pairs";
pub(crate) const GLOSSARIES_URI: &str = "/glossaries";

/// 标签处理方式
pub mod tag_handling {
    pub const XML: &str = "xml";
    pub const HTML: &str = "html";
}

/// 译文正式程度
pub mod formality {
    pub const DEFAULT: &str = "default";
    pub const MORE: &str = "more";
    pub const LESS: &str = "less";
    pub const PREFER_MORE: &str = "prefer_more";
    pub const PREFER_LESS: &str = "prefer_less";
}

/// 句子切分策略
pub mod split_sentences {
    pub const NO_SPLIT: &str = "0";
    pub const PUNCTUATION_AND_NEWLINES: &str = "1";
    pub const NO_NEWLINES: &str = "nonewlines";
}

/// 语言列表查询类型
pub mod languages_type {
    pub const SOURCE: &str = "source";
    pub const TARGET: &str = "target";
}

/// 润色写作风格
pub mod writing_style {
    pub const ACADEMIC: &str = "academic";
    pub const BUSINESS: &str = "business";
    pub const CASUAL: &str = "casual";
    pub const DEFAULT: &str = "default";
    pub const SIMPLE: &str = "simple";
    pub const PREFER_ACADEMIC: &str = "prefer_academic";
    pub const PREFER_BUSINESS: &str = "prefer_business";
    pub const PREFER_CASUAL: &str = "prefer_casual";
    pub const PREFER_SIMPLE: &str = "prefer_simple";
}

/// 润色语气
pub mod tone {
    pub const DEFAULT: &str = "default";
    pub const CONFIDENT: &str = "confident";
    pub const DIPLOMATIC: &str = "diplomatic";
    pub const ENTHUSIASTIC: &str = "enthusiastic";
    pub const FRIENDLY: &str = "friendly";
    pub const PREFER_CONFIDENT: &str = "prefer_confident";
    pub const PREFER_DIPLOMATIC: &str = "prefer_diplomatic";
    pub const PREFER_ENTHUSIASTIC: &str = "prefer_enthusiastic";
    pub const PREFER_FRIENDLY: &str = "prefer_friendly";
}

/// 文档翻译任务状态
pub mod document_status {
    pub const QUEUED: &str = "queued";
    pub const TRANSLATING: &str = "translating";
    pub const DONE: &str = "done";
    pub const ERROR: &str = "error";
}

/// 术语表词条格式
pub mod entries_format {
    pub const TSV: &str = "tsv";
    pub const CSV: &str = "csv";
}
