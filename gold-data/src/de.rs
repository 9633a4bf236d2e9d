//! 序列化辅助模块
//!
//! 采集任务写出的 JSON 使用整数表示韩元价格，日期格式在不同来源间也不完全一致
//! （`2025-01-15`、`2025.01.15`、`2025/01/15`）。本模块提供 serde `with` 模块，
//! 让领域类型可以直接与这些外部格式互相转换。

use chrono::NaiveDate;

/// 可接受的日期格式，按顺序尝试。
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

/// 序列化时使用的 ISO 日期格式。
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

/// 从字符串解析日历日期。
///
/// 只取前 10 个字符，因此 `2025-01-15T07:00:00` 这样的日期时间也能被接受。
///
/// # 使用示例
///
/// ```rust
/// use chrono::NaiveDate;
/// use gold_data::de::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 1, 15);
/// assert_eq!(parse_date("2025-01-15"), expected);
/// assert_eq!(parse_date("2025.01.15"), expected);
/// assert_eq!(parse_date("2025-01-15T07:00:00"), expected);
/// assert_eq!(parse_date("15/01/2025"), None);
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(day, format).ok())
}

/// [`NaiveDate`] 的 serde `with` 模块：输出 ISO 格式，输入接受 [`parse_date`] 支持的格式。
pub mod date {
    use super::{DATE_FORMAT_ISO, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT_ISO))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        parse_date(&input).ok_or_else(|| Error::custom(format!("invalid date: {input}")))
    }
}

/// [`Decimal`](rust_decimal::Decimal) 的 serde `with` 模块。
///
/// 整数值输出为 JSON 整数（例如 `650000`），其余值输出为 JSON 浮点数（例如 `1.25`），
/// 与仪表盘直接读取的数值格式保持一致。输入接受 JSON 数字或数字字符串。
pub mod number {
    use rust_decimal::{Decimal, prelude::ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, ser::Error};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let normalized = value.normalize();

        if normalized.scale() == 0 {
            if let Some(whole) = normalized.to_i64() {
                return serializer.serialize_i64(whole);
            }
        }

        let float = normalized
            .to_f64()
            .ok_or_else(|| Error::custom(format!("{value} cannot be represented as a number")))?;

        serializer.serialize_f64(float)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}
