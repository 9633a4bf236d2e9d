use crate::{de, error::RecordError};
use chrono::{NaiveDate, NaiveDateTime};
use derive_more::{Constructor, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 单条记录中的价格列。
///
/// 序列化名称与 `gold-prices.json` 中的字段名一致，例如 `sellPure`、`sell18K`。
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Display,
)]
pub enum PriceField {
    /// 纯金（24K）买入价。
    #[serde(rename = "buyPure")]
    #[display("buyPure")]
    BuyPure,
    /// 纯金（24K）卖出价，最常被引用的报价。
    #[default]
    #[serde(rename = "sellPure")]
    #[display("sellPure")]
    SellPure,
    /// 18K 卖出价。
    #[serde(rename = "sell18K")]
    #[display("sell18K")]
    Sell18K,
    /// 14K 卖出价。
    #[serde(rename = "sell14K")]
    #[display("sell14K")]
    Sell14K,
}

impl PriceField {
    /// 所有价格列，按 JSON 中的出现顺序。
    pub const ALL: [Self; 4] = [Self::BuyPure, Self::SellPure, Self::Sell18K, Self::Sell14K];

    /// 返回 JSON 字段名。
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::BuyPure => "buyPure",
            PriceField::SellPure => "sellPure",
            PriceField::Sell18K => "sell18K",
            PriceField::Sell14K => "sell14K",
        }
    }
}

/// 单日的四个报价。
///
/// 统计快照中的 `currentPrice` 即最新记录的 [`PriceQuote`]。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Constructor)]
pub struct PriceQuote {
    #[serde(rename = "buyPure", with = "de::number")]
    pub buy_pure: Decimal,
    #[serde(rename = "sellPure", with = "de::number")]
    pub sell_pure: Decimal,
    #[serde(rename = "sell18K", with = "de::number")]
    pub sell_18k: Decimal,
    #[serde(rename = "sell14K", with = "de::number")]
    pub sell_14k: Decimal,
}

impl PriceQuote {
    /// 返回指定 [`PriceField`] 的价格。
    pub fn get(&self, field: PriceField) -> Decimal {
        match field {
            PriceField::BuyPure => self.buy_pure,
            PriceField::SellPure => self.sell_pure,
            PriceField::Sell18K => self.sell_18k,
            PriceField::Sell14K => self.sell_14k,
        }
    }

    /// 校验所有价格均为非负数。
    pub fn validate(&self) -> Result<(), RecordError> {
        PriceField::ALL.into_iter().try_for_each(|field| {
            let value = self.get(field);
            match value.is_sign_negative() && !value.is_zero() {
                true => Err(RecordError::NegativePrice { field, value }),
                false => Ok(()),
            }
        })
    }
}

/// 单个日历日的金价报价。
///
/// 日期在序列中唯一。反序列化经由 [`RawPriceRecord`] 进行，因此缺失字段或负价格
/// 都会被拒绝，而不是被默认值悄悄替代。
///
/// ## 字段说明
///
/// - **date**: 报价日期
/// - **quote**: 四个报价
/// - **timestamp**: 采集任务写入的采集时间（可选）
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Constructor)]
#[serde(try_from = "RawPriceRecord")]
pub struct PriceRecord {
    #[serde(with = "de::date")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub quote: PriceQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

impl PriceRecord {
    /// 返回指定 [`PriceField`] 的价格。
    pub fn price(&self, field: PriceField) -> Decimal {
        self.quote.get(field)
    }

    /// 校验记录中的价格均为非负数。
    pub fn validate(&self) -> Result<(), RecordError> {
        self.quote.validate()
    }
}

/// 未经校验的 [`PriceRecord`]，所有字段均可缺失。
///
/// 用于在加载文件时定位具体出错的记录。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawPriceRecord {
    pub date: Option<String>,
    #[serde(rename = "buyPure")]
    pub buy_pure: Option<Decimal>,
    #[serde(rename = "sellPure")]
    pub sell_pure: Option<Decimal>,
    #[serde(rename = "sell18K")]
    pub sell_18k: Option<Decimal>,
    #[serde(rename = "sell14K")]
    pub sell_14k: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl TryFrom<RawPriceRecord> for PriceRecord {
    type Error = RecordError;

    fn try_from(raw: RawPriceRecord) -> Result<Self, Self::Error> {
        let date = raw.date.ok_or(RecordError::MissingField("date"))?;
        let date = de::parse_date(&date).ok_or(RecordError::InvalidDate(date))?;

        let quote = PriceQuote {
            buy_pure: required(raw.buy_pure, PriceField::BuyPure)?,
            sell_pure: required(raw.sell_pure, PriceField::SellPure)?,
            sell_18k: required(raw.sell_18k, PriceField::Sell18K)?,
            sell_14k: required(raw.sell_14k, PriceField::Sell14K)?,
        };
        quote.validate()?;

        Ok(Self {
            date,
            quote,
            timestamp: raw.timestamp,
        })
    }
}

fn required(value: Option<Decimal>, field: PriceField) -> Result<Decimal, RecordError> {
    value.ok_or(RecordError::MissingField(field.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(date: &str, buy: i64, sell: i64, sell_18k: i64, sell_14k: i64) -> RawPriceRecord {
        RawPriceRecord {
            date: Some(date.to_string()),
            buy_pure: Some(Decimal::from(buy)),
            sell_pure: Some(Decimal::from(sell)),
            sell_18k: Some(Decimal::from(sell_18k)),
            sell_14k: Some(Decimal::from(sell_14k)),
            timestamp: None,
        }
    }

    #[test]
    fn test_record_deserializes_scraper_output() {
        let json = r#"{
            "date": "2025.01.15",
            "buyPure": 560000,
            "sellPure": 475000,
            "sell18K": 349100,
            "sell14K": 270800,
            "timestamp": "2025-01-15T07:00:01.123456"
        }"#;

        let record: PriceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(record.price(PriceField::BuyPure), dec!(560000));
        assert_eq!(record.price(PriceField::SellPure), dec!(475000));
        assert_eq!(record.price(PriceField::Sell18K), dec!(349100));
        assert_eq!(record.price(PriceField::Sell14K), dec!(270800));
        assert!(record.timestamp.is_some());
    }

    #[test]
    fn test_record_serializes_with_dashboard_field_names() {
        let record = PriceRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            PriceQuote::new(dec!(560000), dec!(475000), dec!(349100), dec!(270800)),
            None,
        );

        let json = serde_json::to_value(record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "date": "2025-01-15",
                "buyPure": 560000,
                "sellPure": 475000,
                "sell18K": 349100,
                "sell14K": 270800,
            })
        );
    }

    #[test]
    fn test_record_try_from_raw() {
        struct TestCase {
            input: RawPriceRecord,
            expected: Result<Decimal, RecordError>,
        }

        let cases = vec![
            // TC0: 有效记录
            TestCase {
                input: raw("2025-01-15", 560000, 475000, 349100, 270800),
                expected: Ok(dec!(475000)),
            },
            // TC1: 零价格有效
            TestCase {
                input: raw("2025-01-15", 0, 0, 0, 0),
                expected: Ok(dec!(0)),
            },
            // TC2: 缺少日期
            TestCase {
                input: RawPriceRecord {
                    date: None,
                    ..raw("2025-01-15", 1, 1, 1, 1)
                },
                expected: Err(RecordError::MissingField("date")),
            },
            // TC3: 缺少 sell18K
            TestCase {
                input: RawPriceRecord {
                    sell_18k: None,
                    ..raw("2025-01-15", 1, 1, 1, 1)
                },
                expected: Err(RecordError::MissingField("sell18K")),
            },
            // TC4: 负价格
            TestCase {
                input: raw("2025-01-15", 560000, -1, 349100, 270800),
                expected: Err(RecordError::NegativePrice {
                    field: PriceField::SellPure,
                    value: dec!(-1),
                }),
            },
            // TC5: 非法日期
            TestCase {
                input: raw("not-a-date", 1, 1, 1, 1),
                expected: Err(RecordError::InvalidDate("not-a-date".to_string())),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = PriceRecord::try_from(test.input)
                .map(|record| record.price(PriceField::SellPure));
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_record_deserialize_rejects_negative_price() {
        let json = r#"{"date":"2025-01-15","buyPure":1,"sellPure":-5,"sell18K":1,"sell14K":1}"#;
        let error = serde_json::from_str::<PriceRecord>(json).unwrap_err();
        assert!(error.to_string().contains("negative sellPure price"));
    }

    #[test]
    fn test_price_field_serde_names() {
        for field in PriceField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{field}\""));

            let parsed: PriceField = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, field);
        }
    }
}
