use chrono::NaiveDate;
use gold_data::RecordError;
use rust_decimal::Decimal;
use thiserror::Error;

/// [`StatisticsGenerator`](super::summary::StatisticsGenerator) 拒绝计算时返回的错误。
///
/// 除以下情况外，任何非空且格式正确的序列都能生成统计快照。
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StatisticError {
    /// 序列为空：没有当前价格，也无法计算任何统计量。
    #[error("price series is empty")]
    EmptySeries,

    /// 所有记录的参考价格均为 0（未报价），没有可用于统计的价格。
    #[error("no record has a positive reference price")]
    NoPricedRecords,

    /// 某条记录未通过校验，整批数据被拒绝。
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord {
        index: usize,
        #[source]
        reason: RecordError,
    },

    /// 序列不是严格的"最新在前"顺序。
    #[error("record at index {index} dated {next} does not precede {previous}")]
    OutOfOrder {
        index: usize,
        previous: NaiveDate,
        next: NaiveDate,
    },

    /// 参考价格超出可安全计算的范围。
    #[error("record at index {index} reference price {value} exceeds supported range")]
    OutOfRange { index: usize, value: Decimal },
}
