//! Summary 统计快照模块
//!
//! 本模块提供了价格序列的统计快照 [`Statistics`] 及其生成器 [`StatisticsGenerator`]。
//! 快照的 JSON 形式即仪表盘读取的 `statistics.json`。
//!
//! # 核心概念
//!
//! - **Statistics**: 不可变快照，每次数据刷新时整体重新计算
//! - **PriceStatistics**: 参考价格列上的描述统计与移动平均
//! - **TrendSummary**: 回归斜率、趋势分类和 30 日预测
//! - **SignalSummary**: 区间位置与买卖信号
//!
//! # 舍入规则
//!
//! 内部计算保持完整精度，仅在写入快照时舍入（四舍五入，中点远离零）：价格取整，
//! `volatility`、`slope`、`change30d` 保留两位小数，`position` 保留一位小数。
//! 趋势分类与信号分段分别基于舍入后的 `slope` 和 `position`，与展示值保持一致。
//!
//! # 未报价记录
//!
//! 参考价格为 0 的记录表示当日未报价：计入 `dataCount`，但不参与任何价格统计。

use crate::{
    config::StatisticsConfig,
    statistic::{
        error::StatisticError,
        metric::{
            distribution::PriceDistribution,
            moving_average::MovingAverage,
            signal::{RangePosition, SignalBand, SignalCategory},
            trend::{PriceSlope, PricePrediction, TrendDirection},
            volatility::Volatility,
        },
        time::Daily,
    },
};
use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Constructor;
use gold_data::{PriceField, PriceQuote, PriceRecord, de};
use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 统计快照的控制台表格展示。
pub mod display;

/// 短期移动平均窗口（`ma7`）。
pub const MA_SHORT_WINDOW: usize = 7;

/// 长期移动平均窗口（`ma30`）。
pub const MA_LONG_WINDOW: usize = 30;

/// 价格预测的天数（`prediction30d`）。
pub const PREDICTION_HORIZON_DAYS: i64 = 30;

/// 参考价格的上限（원）。
pub const MAX_REFERENCE_PRICE: i64 = 1_000_000_000_000;

/// 每日金价序列的统计快照。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub last_updated: DateTime<Utc>,
    pub data_count: usize,
    pub reference_field: PriceField,
    pub current_price: PriceQuote,
    pub statistics: PriceStatistics,
    pub trend: TrendSummary,
    pub signal: SignalSummary,
}

/// 参考价格列上的描述统计。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStatistics {
    #[serde(with = "de::number")]
    pub min_price: Decimal,
    #[serde(with = "de::number")]
    pub max_price: Decimal,
    #[serde(with = "de::number")]
    pub avg_price: Decimal,
    #[serde(with = "de::number")]
    pub median_price: Decimal,
    #[serde(with = "de::number")]
    pub volatility: Decimal,
    #[serde(with = "de::number")]
    pub ma7: Decimal,
    #[serde(with = "de::number")]
    pub ma30: Decimal,
}

/// 趋势摘要。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrendSummary {
    pub direction: String,
    pub icon: String,
    #[serde(with = "de::number")]
    pub slope: Decimal,
    #[serde(rename = "prediction30d", with = "de::number")]
    pub prediction_30d: Decimal,
    #[serde(rename = "change30d", with = "de::number")]
    pub change_30d: Decimal,
}

/// 买卖信号摘要。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignalSummary {
    pub message: String,
    pub icon: String,
    #[serde(with = "de::number")]
    pub position: Decimal,
    pub category: SignalCategory,
}

/// 从价格序列生成 [`Statistics`] 快照的统计引擎。
///
/// 生成器本身无状态：每次调用都接收完整序列（最新在前），并返回完整快照。
///
/// # 使用示例
///
/// ```rust
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use gold::StatisticsGenerator;
/// use gold_data::{PriceQuote, PriceRecord};
/// use rust_decimal_macros::dec;
///
/// let record = |day, price| {
///     PriceRecord::new(
///         NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
///         PriceQuote::new(price, price, price, price),
///         None,
///     )
/// };
///
/// let records = [record(3, dec!(120)), record(2, dec!(110)), record(1, dec!(100))];
/// let now = Utc.with_ymd_and_hms(2025, 1, 3, 9, 0, 0).unwrap();
///
/// let statistics = StatisticsGenerator::default().compute_at(&records, now).unwrap();
///
/// assert_eq!(statistics.statistics.avg_price, dec!(110));
/// assert_eq!(statistics.signal.position, dec!(100));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Constructor)]
pub struct StatisticsGenerator {
    pub config: StatisticsConfig,
}

impl StatisticsGenerator {
    /// 以当前时间为 `lastUpdated` 计算统计快照。
    pub fn compute(&self, records: &[PriceRecord]) -> Result<Statistics, StatisticError> {
        self.compute_at(records, Utc::now())
    }

    /// 以提供的 `time_now` 为 `lastUpdated` 计算统计快照。
    ///
    /// 相同输入与相同 `time_now` 总是产生相同输出。
    ///
    /// # 错误
    ///
    /// - [`StatisticError::EmptySeries`]: 序列为空
    /// - [`StatisticError::NoPricedRecords`]: 所有参考价格均为 0
    /// - [`StatisticError::MalformedRecord`]: 某条记录含负价格
    /// - [`StatisticError::OutOfRange`]: 参考价格超过 [`MAX_REFERENCE_PRICE`]
    /// - [`StatisticError::OutOfOrder`]: 日期不是严格递减
    pub fn compute_at(
        &self,
        records: &[PriceRecord],
        time_now: DateTime<Utc>,
    ) -> Result<Statistics, StatisticError> {
        let reference = self.config.reference;
        self.validate(records)?;

        let current = records.first().ok_or(StatisticError::EmptySeries)?;
        let prices = records
            .iter()
            .map(|record| record.price(reference))
            .filter(|price| *price > Decimal::ZERO)
            .collect::<Vec<_>>();
        let current_reference = *prices.first().ok_or(StatisticError::NoPricedRecords)?;

        debug!(
            data_count = records.len(),
            priced = prices.len(),
            %reference,
            latest = %current.date,
            "computing Statistics"
        );

        let distribution =
            PriceDistribution::calculate(&prices).ok_or(StatisticError::EmptySeries)?;
        let ma7 = MovingAverage::calculate(&prices, MA_SHORT_WINDOW)
            .map_or(distribution.mean, |average| average.value);
        let ma30 = MovingAverage::calculate(&prices, MA_LONG_WINDOW)
            .map_or(distribution.mean, |average| average.value);
        let volatility = Volatility::calculate(distribution.std_dev, distribution.mean);

        // 回归以最旧的记录为第 0 天
        let chronological = prices.iter().rev().copied().collect::<Vec<_>>();
        let slope = PriceSlope::calculate(&chronological, Daily);
        let slope_shown = round_dp(slope.value, 2);
        let direction = TrendDirection::classify(slope_shown, &self.config.trend);
        let prediction = PricePrediction::calculate(
            current_reference,
            slope,
            TimeDelta::days(PREDICTION_HORIZON_DAYS),
        );

        let position = round_dp(
            RangePosition::calculate(current_reference, distribution.min, distribution.max).value,
            1,
        );
        let band = SignalBand::classify(position, &self.config.signal);

        let statistics = Statistics {
            last_updated: time_now,
            data_count: records.len(),
            reference_field: reference,
            current_price: current.quote,
            statistics: PriceStatistics {
                min_price: round_price(distribution.min),
                max_price: round_price(distribution.max),
                avg_price: round_price(distribution.mean),
                median_price: round_price(distribution.median),
                volatility: round_dp(volatility.value, 2),
                ma7: round_price(ma7),
                ma30: round_price(ma30),
            },
            trend: TrendSummary {
                direction: direction.label().to_string(),
                icon: direction.icon().to_string(),
                slope: slope_shown,
                prediction_30d: round_price(prediction.value),
                change_30d: round_dp(prediction.change_percent, 2),
            },
            signal: SignalSummary {
                message: band.message().to_string(),
                icon: band.icon().to_string(),
                position,
                category: band.category(),
            },
        };

        info!(
            data_count = statistics.data_count,
            current = %current_reference,
            trend = ?direction,
            signal = ?band,
            %position,
            "computed Statistics"
        );

        Ok(statistics)
    }

    fn validate(&self, records: &[PriceRecord]) -> Result<(), StatisticError> {
        if records.is_empty() {
            return Err(StatisticError::EmptySeries);
        }

        let max_reference = Decimal::from(MAX_REFERENCE_PRICE);
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| StatisticError::MalformedRecord { index, reason })?;

            let value = record.price(self.config.reference);
            if value > max_reference {
                return Err(StatisticError::OutOfRange { index, value });
            }
        }

        records
            .iter()
            .enumerate()
            .tuple_windows()
            .try_for_each(|((_, previous), (index, next))| {
                if next.date < previous.date {
                    Ok(())
                } else {
                    Err(StatisticError::OutOfOrder {
                        index,
                        previous: previous.date,
                        next: next.date,
                    })
                }
            })
    }
}

fn round_price(value: Decimal) -> Decimal {
    round_dp(value, 0)
}

fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
