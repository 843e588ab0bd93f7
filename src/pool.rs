//! 请求参数对象池
//!
//! 参数对象创建频繁、生命周期短，通过池化避免重复分配；
//! 归还时强制清零，保证复用不会把数据带进无关请求

use std::sync::Mutex;

use crate::types::{
    CreateGlossaryParams, DocumentTranslateParams, Recyclable, TextImprovementParams,
    TextTranslateParams,
};

/// 每个池最多保留的空闲对象数，超出的归还对象清零后直接丢弃
const MAX_IDLE: usize = 64;

/// 单一参数类型的对象池
pub struct ParamPool<T> {
    idle: Mutex<Vec<T>>,
}

impl<T> ParamPool<T> {
    const fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Recyclable> ParamPool<T> {
    /// 取出一个空闲对象，池空时新建零值实例
    fn acquire(&self) -> T {
        let mut idle = match self.idle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        idle.pop().unwrap_or_default()
    }

    /// 清零后归还对象，池满时丢弃
    fn release(&self, mut item: T) {
        item.recycle();
        let mut idle = match self.idle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if idle.len() < MAX_IDLE {
            idle.push(item);
        }
    }
}

static TEXT_TRANSLATE_POOL: ParamPool<TextTranslateParams> = ParamPool::new();
static TEXT_IMPROVEMENT_POOL: ParamPool<TextImprovementParams> = ParamPool::new();
static DOCUMENT_TRANSLATE_POOL: ParamPool<DocumentTranslateParams> = ParamPool::new();
static CREATE_GLOSSARY_POOL: ParamPool<CreateGlossaryParams> = ParamPool::new();

/// 参数类型与其全局池的绑定
///
/// [`recycle_params`] 通过该绑定把对象送回其所属类型的池，
/// 归还目标由对象的具体类型决定，调用方无法指错池
pub trait Pooled: Recyclable {
    /// 该类型对应的全局池
    fn pool() -> &'static ParamPool<Self>
    where
        Self: Sized;
}

impl Pooled for TextTranslateParams {
    fn pool() -> &'static ParamPool<Self> {
        &TEXT_TRANSLATE_POOL
    }
}

impl Pooled for TextImprovementParams {
    fn pool() -> &'static ParamPool<Self> {
        &TEXT_IMPROVEMENT_POOL
    }
}

impl Pooled for DocumentTranslateParams {
    fn pool() -> &'static ParamPool<Self> {
        &DOCUMENT_TRANSLATE_POOL
    }
}

impl Pooled for CreateGlossaryParams {
    fn pool() -> &'static ParamPool<Self> {
        &CREATE_GLOSSARY_POOL
    }
}

/// 获取一个文本翻译参数对象
pub fn acquire_text_translate_params() -> TextTranslateParams {
    TextTranslateParams::pool().acquire()
}

/// 获取一个文本润色参数对象
pub fn acquire_text_improvement_params() -> TextImprovementParams {
    TextImprovementParams::pool().acquire()
}

/// 获取一个文档翻译参数对象
pub fn acquire_document_translate_params() -> DocumentTranslateParams {
    DocumentTranslateParams::pool().acquire()
}

/// 获取一个创建术语表参数对象
pub fn acquire_create_glossary_params() -> CreateGlossaryParams {
    CreateGlossaryParams::pool().acquire()
}

/// 清零并归还参数对象到其所属类型的池
pub fn recycle_params<T: Pooled>(params: T) {
    T::pool().release(params);
}
