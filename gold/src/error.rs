use crate::{config::ConfigError, statistic::error::StatisticError};
use gold_data::DataError;
use thiserror::Error;

/// 表示 Gold 中所有可能的顶层错误。
///
/// 库中的各个模块各自定义错误类型，`GoldError` 将它们汇总，供 [`system`](crate::system)
/// 和 `gold-analyze` 使用。
#[derive(Debug, Error)]
pub enum GoldError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("statistic error: {0}")]
    Statistic(#[from] StatisticError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
