use crate::record::PriceField;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// 加载、校验或保存价格序列时可能发生的所有错误。
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 某条记录未通过校验；整批数据被拒绝，避免统计结果被悄悄扭曲。
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord {
        index: usize,
        #[source]
        reason: RecordError,
    },

    #[error("duplicate record date: {0}")]
    DuplicateDate(NaiveDate),
}

/// 单条 [`PriceRecord`](crate::record::PriceRecord) 的校验错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("negative {field} price: {value}")]
    NegativePrice { field: PriceField, value: Decimal },

    #[error("invalid date: {0}")]
    InvalidDate(String),
}
