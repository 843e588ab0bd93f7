//! DeepL API 客户端
//!
//! 所有端点方法都只构建命令而不发起请求，由调用方通过
//! [`Command::sync`] 或 [`Command::spawn`] 决定执行方式。
//! 请求构建、响应解释与状态码到错误的映射都在本模块完成。

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::{AccountType, DeeplConfig};
use crate::constants::{
    languages_type, DOCUMENT_TRANSLATE_URI, FREE_HOST, GLOSSARIES_URI, LANGUAGES_URI,
    LIST_GLOSSARY_PAIRS_URI, PRO_HOST, TEXT_IMPROVEMENT_URI, TEXT_TRANSLATE_URI, USAGE_URI,
};
use crate::error::{DeeplError, DeeplResult};
use crate::pool;
use crate::types::{
    CheckDocumentResult, CreateGlossaryParams, DocumentResult, DocumentTranslateParams,
    GlossariesResponse, GlossaryPairsResponse, GlossaryResult, LanguageResult, PairResult,
    TextImprovementParams, TextImprovementResponse, TextResult, TextTranslateParams,
    TextTranslateResponse, UsageResult,
};

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid 正则")
});
static DOCUMENT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Z]{32}$").expect("文档 ID 正则"));
static DOCUMENT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Z]{64}$").expect("文档密钥正则"));

#[derive(Serialize)]
struct DocumentKeyBody<'a> {
    document_key: &'a str,
}

fn validate_document_id_and_key(id: &str, key: &str) -> DeeplResult<()> {
    if !DOCUMENT_ID_REGEX.is_match(id) {
        return Err(DeeplError::InvalidDocumentId(id.to_string()));
    }
    if !DOCUMENT_KEY_REGEX.is_match(key) {
        return Err(DeeplError::InvalidDocumentKey(key.to_string()));
    }
    Ok(())
}

fn validate_glossary_id(id: &str) -> DeeplResult<()> {
    if !UUID_REGEX.is_match(id) {
        return Err(DeeplError::InvalidGlossaryId(id.to_string()));
    }
    Ok(())
}

/// DeepL API 客户端
///
/// 内部是连接池化的 HTTP 客户端加一份只读配置，克隆成本很低，
/// 端点方法返回的命令各自持有一份克隆
#[derive(Clone)]
pub struct Deepl {
    http: reqwest::Client,
    config: Arc<DeeplConfig>,
    host: &'static str,
}

impl Deepl {
    /// 创建客户端并校验配置
    ///
    /// AuthKey 必须是 UUID 后接 `:fx`；超时为 0 时使用默认值
    pub fn new(config: DeeplConfig) -> DeeplResult<Self> {
        let valid = config
            .auth_key
            .strip_suffix(":fx")
            .map(|prefix| UUID_REGEX.is_match(prefix))
            .unwrap_or(false);
        if !valid {
            return Err(DeeplError::InvalidAuthKey(config.auth_key.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let host = match config.account_type {
            AccountType::Free => FREE_HOST,
            AccountType::Pro => PRO_HOST,
        };

        Ok(Self {
            http,
            config: Arc::new(config),
            host,
        })
    }

    // ---- 文本翻译 ----

    /// 单条文本翻译
    pub fn text_translate(&self, text: &str, target: &str) -> Command<TextResult> {
        self.text_translate_with_cancel(CancellationToken::new(), text, "", target)
    }

    /// 指定源语言的单条文本翻译
    pub fn text_translate_with_source(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Command<TextResult> {
        self.text_translate_with_cancel(CancellationToken::new(), text, source, target)
    }

    /// 多条文本翻译
    pub fn texts_translate(&self, texts: &[String], target: &str) -> Command<Vec<TextResult>> {
        self.texts_translate_with_cancel(CancellationToken::new(), texts, "", target)
    }

    /// 指定源语言的多条文本翻译
    pub fn texts_translate_with_source(
        &self,
        texts: &[String],
        source: &str,
        target: &str,
    ) -> Command<Vec<TextResult>> {
        self.texts_translate_with_cancel(CancellationToken::new(), texts, source, target)
    }

    /// 单条文本翻译，携带取消上下文
    ///
    /// 参数对象从参数池获取，请求结束后回收
    pub fn text_translate_with_cancel(
        &self,
        ctx: CancellationToken,
        text: &str,
        source: &str,
        target: &str,
    ) -> Command<TextResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let text = text.to_string();
        let source = source.to_string();
        let target = target.to_string();
        Command::new(ctx, async move {
            let mut body = pool::acquire_text_translate_params();
            body.text = vec![text];
            body.base.source_lang = source;
            body.base.target_lang = target;
            let result = client.do_text_translate(&op_ctx, &body).await;
            pool::recycle_params(body);
            result.and_then(|mut translations| {
                if translations.is_empty() {
                    Err(DeeplError::EmptyResult)
                } else {
                    Ok(translations.remove(0))
                }
            })
        })
    }

    /// 多条文本翻译，携带取消上下文
    pub fn texts_translate_with_cancel(
        &self,
        ctx: CancellationToken,
        texts: &[String],
        source: &str,
        target: &str,
    ) -> Command<Vec<TextResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let texts = texts.to_vec();
        let source = source.to_string();
        let target = target.to_string();
        Command::new(ctx, async move {
            let mut body = pool::acquire_text_translate_params();
            body.text = texts;
            body.base.source_lang = source;
            body.base.target_lang = target;
            let result = client.do_text_translate(&op_ctx, &body).await;
            pool::recycle_params(body);
            result
        })
    }

    /// 用调用方自行构建的参数做文本翻译，参数对象在请求结束后回收进池
    pub fn text_translate_with_params(
        &self,
        ctx: CancellationToken,
        body: TextTranslateParams,
    ) -> Command<Vec<TextResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            let result = client.do_text_translate(&op_ctx, &body).await;
            pool::recycle_params(body);
            result
        })
    }

    // 所有文本翻译最终都走这里
    async fn do_text_translate(
        &self,
        ctx: &CancellationToken,
        body: &TextTranslateParams,
    ) -> DeeplResult<Vec<TextResult>> {
        let response: TextTranslateResponse = self
            .do_json(ctx, Method::POST, TEXT_TRANSLATE_URI, Some(body))
            .await?;
        Ok(response.translations)
    }

    // ---- 用量与语言 ----

    /// 查询用量与配额
    pub fn usage(&self) -> Command<UsageResult> {
        self.usage_with_cancel(CancellationToken::new())
    }

    /// 查询用量与配额，携带取消上下文
    pub fn usage_with_cancel(&self, ctx: CancellationToken) -> Command<UsageResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            client
                .do_json(&op_ctx, Method::GET, USAGE_URI, None::<&()>)
                .await
        })
    }

    /// 查询支持的源语言列表
    pub fn languages(&self) -> Command<Vec<LanguageResult>> {
        self.languages_with_cancel(CancellationToken::new(), languages_type::SOURCE)
    }

    /// 按类型查询支持的语言列表
    pub fn languages_with_type(&self, kind: &str) -> Command<Vec<LanguageResult>> {
        self.languages_with_cancel(CancellationToken::new(), kind)
    }

    /// 按类型查询支持的语言列表，携带取消上下文
    pub fn languages_with_cancel(
        &self,
        ctx: CancellationToken,
        kind: &str,
    ) -> Command<Vec<LanguageResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let uri = format!("{LANGUAGES_URI}?type={kind}");
        Command::new(ctx, async move {
            client
                .do_json(&op_ctx, Method::GET, &uri, None::<&()>)
                .await
        })
    }

    // ---- 文本润色 ----

    /// 单条文本润色
    pub fn text_improvement(&self, text: &str) -> Command<TextResult> {
        self.text_improvement_with_cancel(CancellationToken::new(), text)
    }

    /// 多条文本润色
    pub fn texts_improvement(&self, texts: &[String]) -> Command<Vec<TextResult>> {
        self.texts_improvement_with_cancel(CancellationToken::new(), texts)
    }

    /// 单条文本润色，携带取消上下文
    pub fn text_improvement_with_cancel(
        &self,
        ctx: CancellationToken,
        text: &str,
    ) -> Command<TextResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let text = text.to_string();
        Command::new(ctx, async move {
            let mut body = pool::acquire_text_improvement_params();
            body.text = vec![text];
            let result = client.do_text_improvement(&op_ctx, &body).await;
            pool::recycle_params(body);
            result.and_then(|mut improvements| {
                if improvements.is_empty() {
                    Err(DeeplError::EmptyResult)
                } else {
                    Ok(improvements.remove(0))
                }
            })
        })
    }

    /// 多条文本润色，携带取消上下文
    pub fn texts_improvement_with_cancel(
        &self,
        ctx: CancellationToken,
        texts: &[String],
    ) -> Command<Vec<TextResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let texts = texts.to_vec();
        Command::new(ctx, async move {
            let mut body = pool::acquire_text_improvement_params();
            body.text = texts;
            let result = client.do_text_improvement(&op_ctx, &body).await;
            pool::recycle_params(body);
            result
        })
    }

    /// 用调用方自行构建的参数做文本润色，参数对象在请求结束后回收进池
    pub fn text_improvement_with_params(
        &self,
        ctx: CancellationToken,
        body: TextImprovementParams,
    ) -> Command<Vec<TextResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            let result = client.do_text_improvement(&op_ctx, &body).await;
            pool::recycle_params(body);
            result
        })
    }

    // 所有文本润色最终都走这里
    async fn do_text_improvement(
        &self,
        ctx: &CancellationToken,
        body: &TextImprovementParams,
    ) -> DeeplResult<Vec<TextResult>> {
        let response: TextImprovementResponse = self
            .do_json(ctx, Method::POST, TEXT_IMPROVEMENT_URI, Some(body))
            .await?;
        Ok(response.improvements)
    }

    // ---- 文档翻译 ----

    /// 上传文档翻译任务
    ///
    /// `filename` 同时作为表单文件字段的文件名
    pub fn document_translate(
        &self,
        document: Vec<u8>,
        filename: &str,
        target: &str,
    ) -> Command<DocumentResult> {
        self.document_translate_with_cancel(CancellationToken::new(), document, filename, "", target)
    }

    /// 指定源语言的文档翻译任务
    pub fn document_translate_with_source(
        &self,
        document: Vec<u8>,
        filename: &str,
        source: &str,
        target: &str,
    ) -> Command<DocumentResult> {
        self.document_translate_with_cancel(
            CancellationToken::new(),
            document,
            filename,
            source,
            target,
        )
    }

    /// 文档翻译任务，携带取消上下文
    pub fn document_translate_with_cancel(
        &self,
        ctx: CancellationToken,
        document: Vec<u8>,
        filename: &str,
        source: &str,
        target: &str,
    ) -> Command<DocumentResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let filename = filename.to_string();
        let source = source.to_string();
        let target = target.to_string();
        Command::new(ctx, async move {
            let mut body = pool::acquire_document_translate_params();
            body.base.source_lang = source;
            body.base.target_lang = target;
            let result = client
                .do_document_translate(&op_ctx, document, filename, &body)
                .await;
            pool::recycle_params(body);
            result
        })
    }

    /// 用调用方自行构建的参数上传文档翻译任务，参数对象在请求结束后回收进池
    pub fn document_translate_with_params(
        &self,
        ctx: CancellationToken,
        document: Vec<u8>,
        filename: &str,
        body: DocumentTranslateParams,
    ) -> Command<DocumentResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let filename = filename.to_string();
        Command::new(ctx, async move {
            let result = client
                .do_document_translate(&op_ctx, document, filename, &body)
                .await;
            pool::recycle_params(body);
            result
        })
    }

    // 所有文档翻译最终都走这里；body.filename 是表单里独立的
    // filename 字段，与文件部分的文件名相互独立
    async fn do_document_translate(
        &self,
        ctx: &CancellationToken,
        document: Vec<u8>,
        filename: String,
        body: &DocumentTranslateParams,
    ) -> DeeplResult<DocumentResult> {
        let mut form = Form::new().part("file", Part::bytes(document).file_name(filename));
        for (name, value) in [
            ("filename", body.filename.as_str()),
            ("source_lang", body.base.source_lang.as_str()),
            ("target_lang", body.base.target_lang.as_str()),
            ("output_format", body.output_format.as_str()),
            ("formality", body.base.formality.as_str()),
            ("glossary_id", body.base.glossary_id.as_str()),
        ] {
            if value.trim().is_empty() {
                continue;
            }
            form = form.text(name, value.to_string());
        }

        let url = format!("{}{}", self.host, DOCUMENT_TRANSLATE_URI);
        debug!(%url, "上传文档翻译请求");
        let request = self
            .http
            .post(&url)
            .header("Authorization", self.auth_header())
            .multipart(form);

        let (status, bytes) = self.send(ctx, request).await?;
        self.interpret(status, &bytes)?;
        self.decode_body(&bytes)
    }

    /// 查询文档翻译任务状态
    pub fn check_document_status(
        &self,
        document_id: &str,
        document_key: &str,
    ) -> Command<CheckDocumentResult> {
        self.check_document_status_with_cancel(CancellationToken::new(), document_id, document_key)
    }

    /// 查询文档翻译任务状态，携带取消上下文
    pub fn check_document_status_with_cancel(
        &self,
        ctx: CancellationToken,
        document_id: &str,
        document_key: &str,
    ) -> Command<CheckDocumentResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let id = document_id.to_string();
        let key = document_key.to_string();
        Command::new(ctx, async move {
            validate_document_id_and_key(&id, &key)?;
            let uri = format!("{DOCUMENT_TRANSLATE_URI}/{id}");
            client
                .do_json(
                    &op_ctx,
                    Method::POST,
                    &uri,
                    Some(&DocumentKeyBody {
                        document_key: &key,
                    }),
                )
                .await
        })
    }

    /// 下载翻译完成的文档，返回原始字节
    pub fn download_document(&self, document_id: &str, document_key: &str) -> Command<Vec<u8>> {
        self.download_document_with_cancel(CancellationToken::new(), document_id, document_key)
    }

    /// 下载翻译完成的文档，携带取消上下文
    pub fn download_document_with_cancel(
        &self,
        ctx: CancellationToken,
        document_id: &str,
        document_key: &str,
    ) -> Command<Vec<u8>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let id = document_id.to_string();
        let key = document_key.to_string();
        Command::new(ctx, async move {
            validate_document_id_and_key(&id, &key)?;
            let uri = format!("{DOCUMENT_TRANSLATE_URI}/{id}/result");
            client
                .do_bytes(
                    &op_ctx,
                    Method::POST,
                    &uri,
                    None,
                    Some(&DocumentKeyBody {
                        document_key: &key,
                    }),
                )
                .await
        })
    }

    // ---- 术语表 ----

    /// 查询术语表支持的语言对
    pub fn list_glossary_pairs(&self) -> Command<Vec<PairResult>> {
        self.list_glossary_pairs_with_cancel(CancellationToken::new())
    }

    /// 查询术语表支持的语言对，携带取消上下文
    pub fn list_glossary_pairs_with_cancel(
        &self,
        ctx: CancellationToken,
    ) -> Command<Vec<PairResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            let response: GlossaryPairsResponse = client
                .do_json(&op_ctx, Method::GET, LIST_GLOSSARY_PAIRS_URI, None::<&()>)
                .await?;
            Ok(response.supported_languages)
        })
    }

    /// 创建术语表，参数对象在请求结束后回收进池
    pub fn create_glossary(&self, body: CreateGlossaryParams) -> Command<GlossaryResult> {
        self.create_glossary_with_cancel(CancellationToken::new(), body)
    }

    /// 创建术语表，携带取消上下文
    pub fn create_glossary_with_cancel(
        &self,
        ctx: CancellationToken,
        body: CreateGlossaryParams,
    ) -> Command<GlossaryResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            let result = client
                .do_json(&op_ctx, Method::POST, GLOSSARIES_URI, Some(&body))
                .await;
            pool::recycle_params(body);
            result
        })
    }

    /// 列出所有术语表
    pub fn list_glossaries(&self) -> Command<Vec<GlossaryResult>> {
        self.list_glossaries_with_cancel(CancellationToken::new())
    }

    /// 列出所有术语表，携带取消上下文
    pub fn list_glossaries_with_cancel(
        &self,
        ctx: CancellationToken,
    ) -> Command<Vec<GlossaryResult>> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        Command::new(ctx, async move {
            let response: GlossariesResponse = client
                .do_json(&op_ctx, Method::GET, GLOSSARIES_URI, None::<&()>)
                .await?;
            Ok(response.glossaries)
        })
    }

    /// 查询术语表详情
    pub fn glossary_detail(&self, glossary_id: &str) -> Command<GlossaryResult> {
        self.glossary_detail_with_cancel(CancellationToken::new(), glossary_id)
    }

    /// 查询术语表详情，携带取消上下文
    pub fn glossary_detail_with_cancel(
        &self,
        ctx: CancellationToken,
        glossary_id: &str,
    ) -> Command<GlossaryResult> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let id = glossary_id.to_string();
        Command::new(ctx, async move {
            validate_glossary_id(&id)?;
            let uri = format!("{GLOSSARIES_URI}/{id}");
            client.do_json(&op_ctx, Method::GET, &uri, None::<&()>).await
        })
    }

    /// 导出术语表词条，`accept` 指定词条格式（如 `text/tab-separated-values`）
    pub fn glossary_entries(&self, glossary_id: &str, accept: &str) -> Command<String> {
        self.glossary_entries_with_cancel(CancellationToken::new(), glossary_id, accept)
    }

    /// 导出术语表词条，携带取消上下文
    pub fn glossary_entries_with_cancel(
        &self,
        ctx: CancellationToken,
        glossary_id: &str,
        accept: &str,
    ) -> Command<String> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let id = glossary_id.to_string();
        let accept = accept.to_string();
        Command::new(ctx, async move {
            validate_glossary_id(&id)?;
            let uri = format!("{GLOSSARIES_URI}/{id}/entries");
            let bytes = client
                .do_bytes(&op_ctx, Method::GET, &uri, Some(&accept), None::<&()>)
                .await?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
    }

    /// 删除术语表
    pub fn delete_glossary(&self, glossary_id: &str) -> Command<()> {
        self.delete_glossary_with_cancel(CancellationToken::new(), glossary_id)
    }

    /// 删除术语表，携带取消上下文
    pub fn delete_glossary_with_cancel(
        &self,
        ctx: CancellationToken,
        glossary_id: &str,
    ) -> Command<()> {
        let client = self.clone();
        let op_ctx = ctx.clone();
        let id = glossary_id.to_string();
        Command::new(ctx, async move {
            validate_glossary_id(&id)?;
            let uri = format!("{GLOSSARIES_URI}/{id}");
            client
                .do_bytes(&op_ctx, Method::DELETE, &uri, None, None::<&()>)
                .await?;
            Ok(())
        })
    }

    // ---- 请求与响应 ----

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.config.auth_key)
    }

    // 发送 JSON 请求并把响应体反序列化为目标类型
    async fn do_json<B, R>(
        &self,
        ctx: &CancellationToken,
        method: Method,
        uri: &str,
        body: Option<&B>,
    ) -> DeeplResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = self.do_bytes(ctx, method, uri, None, body).await?;
        self.decode_body(&bytes)
    }

    // 发送请求并返回原始响应字节
    async fn do_bytes<B>(
        &self,
        ctx: &CancellationToken,
        method: Method,
        uri: &str,
        accept: Option<&str>,
        body: Option<&B>,
    ) -> DeeplResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.host, uri);
        debug!(%method, %url, "发送 DeepL API 请求");

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json");
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }
        if let Some(body) = body {
            request = request.body(self.encode_body(body)?);
        }

        let (status, bytes) = self.send(ctx, request).await?;
        self.interpret(status, &bytes)?;
        Ok(bytes)
    }

    // 发出请求并读取完整响应体，期间竞争取消上下文；
    // 上下文是否被尊重由这里保证，命令本身不观察它
    async fn send(
        &self,
        ctx: &CancellationToken,
        request: reqwest::RequestBuilder,
    ) -> DeeplResult<(StatusCode, Vec<u8>)> {
        let response = tokio::select! {
            _ = ctx.cancelled() => return Err(DeeplError::Cancelled),
            result = request.send() => result?,
        };
        let status = response.status();
        let bytes = tokio::select! {
            _ = ctx.cancelled() => return Err(DeeplError::Cancelled),
            result = response.bytes() => result?,
        };
        Ok((status, bytes.to_vec()))
    }

    // 按状态码表把非成功响应翻译为错误
    fn interpret(&self, status: StatusCode, body: &[u8]) -> DeeplResult<()> {
        match status.as_u16() {
            200 | 201 | 204 => Ok(()),
            code => {
                let error = DeeplError::from_status(code, body);
                warn!(code, %error, "DeepL API 返回错误");
                Err(error)
            }
        }
    }

    // 请求体编码：类型化的值 -> Value -> 字节，经配置的编码钩子
    fn encode_body<B: Serialize + ?Sized>(&self, body: &B) -> DeeplResult<Vec<u8>> {
        let value = serde_json::to_value(body)?;
        Ok(self.config.encode_value(&value)?)
    }

    // 响应体解码：字节 -> Value -> 目标类型，经配置的解码钩子
    fn decode_body<R: DeserializeOwned>(&self, bytes: &[u8]) -> DeeplResult<R> {
        let value = self.config.decode_value(bytes)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_KEY: &str = "279a2e9d-83b3-c416-7e65-90fb9f38de26:fx";
    const DOCUMENT_ID: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
    const DOCUMENT_KEY: &str =
        "0123456789ABCDEFGHIJKLMNOPQRSTUV0123456789ABCDEFGHIJKLMNOPQRSTUV";

    fn new_client() -> Deepl {
        Deepl::new(DeeplConfig::with_auth_key(AUTH_KEY)).unwrap()
    }

    #[test]
    fn test_new_rejects_malformed_auth_key() {
        for key in [
            "",
            "not-a-key",
            "279a2e9d-83b3-c416-7e65-90fb9f38de26",      // 缺少 :fx 后缀
            "279a2e9d-83b3-c416-7e65-90fb9f38de2:fx",    // UUID 少一位
            "279A2E9D-83B3-C416-7E65-90FB9F38DE26:fx",   // 大写不被接受
            ":fx",
        ] {
            let result = Deepl::new(DeeplConfig::with_auth_key(key));
            assert!(
                matches!(result, Err(DeeplError::InvalidAuthKey(_))),
                "key {key:?} 应被拒绝"
            );
        }
    }

    #[test]
    fn test_new_accepts_valid_auth_key() {
        let client = new_client();
        assert_eq!(client.host, FREE_HOST);
    }

    #[test]
    fn test_pro_account_uses_pro_host() {
        let mut config = DeeplConfig::with_auth_key(AUTH_KEY);
        config.account_type = AccountType::Pro;
        let client = Deepl::new(config).unwrap();
        assert_eq!(client.host, PRO_HOST);
    }

    #[test]
    fn test_validate_document_id_and_key() {
        assert!(validate_document_id_and_key(DOCUMENT_ID, DOCUMENT_KEY).is_ok());
        assert!(matches!(
            validate_document_id_and_key("short", DOCUMENT_KEY),
            Err(DeeplError::InvalidDocumentId(_))
        ));
        assert!(matches!(
            validate_document_id_and_key(DOCUMENT_ID, "short"),
            Err(DeeplError::InvalidDocumentKey(_))
        ));
        // 小写字符不合法
        assert!(matches!(
            validate_document_id_and_key(&DOCUMENT_ID.to_lowercase(), DOCUMENT_KEY),
            Err(DeeplError::InvalidDocumentId(_))
        ));
    }

    #[test]
    fn test_validate_glossary_id() {
        assert!(validate_glossary_id("279a2e9d-83b3-c416-7e65-90fb9f38de26").is_ok());
        assert!(matches!(
            validate_glossary_id("not-a-uuid"),
            Err(DeeplError::InvalidGlossaryId(_))
        ));
    }

    #[test]
    fn test_client_methods_return_pending_commands() {
        let client = new_client();
        assert!(!client.text_translate("hello", "ZH").is_closed());
        assert!(!client.usage().is_closed());
        assert!(!client.list_glossaries().is_closed());
    }

    #[tokio::test]
    async fn test_glossary_detail_invalid_id_fails_before_any_request() {
        let client = new_client();
        let cmd = client.glossary_detail("not-a-uuid");
        assert!(matches!(
            cmd.sync().await,
            Err(DeeplError::InvalidGlossaryId(_))
        ));

        // 校验失败同样消耗掉这条命令
        assert!(cmd.is_closed());
        assert!(matches!(cmd.sync().await, Err(DeeplError::CommandClosed)));
    }

    #[tokio::test]
    async fn test_check_document_status_validates_id_and_key() {
        let client = new_client();
        assert!(matches!(
            client.check_document_status("bad", DOCUMENT_KEY).sync().await,
            Err(DeeplError::InvalidDocumentId(_))
        ));
        assert!(matches!(
            client.check_document_status(DOCUMENT_ID, "bad").sync().await,
            Err(DeeplError::InvalidDocumentKey(_))
        ));
    }

    #[tokio::test]
    async fn test_download_document_validates_before_network() {
        let client = new_client();
        let cmd = client.download_document("bad", "bad");
        assert!(matches!(
            cmd.sync().await,
            Err(DeeplError::InvalidDocumentId(_))
        ));
    }
}
