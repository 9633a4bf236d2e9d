#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! # Gold-Data
//! Gold-Data 包含每日金价记录、按日期排序的价格序列及其 JSON 文件读写工具。
//!
//! 被 `gold` 统计引擎使用，用于加载由外部采集任务生成的 `gold-prices.json`，
//! 并在写回前对记录进行校验。它的特点是：
//! * **强类型**: 价格使用 [`Decimal`](rust_decimal::Decimal) 表示，日期使用 [`NaiveDate`](chrono::NaiveDate)。
//! * **约定明确**: [`PriceSeries`](series::PriceSeries) 始终按"最新在前"排序，且日期唯一。
//! * **整批拒绝**: 任何一条记录缺少字段或价格为负，整个文件都会被拒绝。
//!
//! ## 核心抽象
//! - **PriceRecord**: 单日报价（纯金买入价/卖出价、18K、14K 卖出价）。
//! - **PriceSeries**: 最新在前、日期唯一的记录序列，支持合并与保留窗口。

/// Gold-Data 中生成的所有 [`Error`](std::error::Error)。
pub mod error;

/// 单日报价记录及价格字段。
///
/// 例如：`PriceRecord`、`PriceField`、`PriceQuote` 等。
pub mod record;

/// 最新在前的价格序列，以及 JSON 文件读写。
pub mod series;

/// 用于辅助序列化和反序列化的工具（日期、数值）。
pub mod de;

pub use error::{DataError, RecordError};
pub use record::{PriceField, PriceQuote, PriceRecord, RawPriceRecord};
pub use series::{MergeOutcome, PriceSeries};
