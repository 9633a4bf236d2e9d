//! Trend 趋势模块
//!
//! 本模块提供了价格趋势相关的计算逻辑：
//!
//! - [`PriceSlope`]: 最小二乘回归斜率，即每个时间间隔的平均价格变化
//! - [`TrendDirection`]: 根据斜率和 [`TrendThresholds`] 得出的趋势分类
//! - [`PricePrediction`]: 将斜率线性外推到目标时间间隔得到的预测价格
//!
//! # 缩放特性
//!
//! 与 Rate Of Return 一样，斜率随时间线性缩放：每日 +10원 的斜率缩放到 30 天即 +300원。

use crate::{
    config::TrendThresholds,
    statistic::{algorithm::ordinary_least_squares_slope, time::TimeInterval},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 表示特定 [`TimeInterval`] 上的价格回归斜率。
///
/// ## 类型参数
///
/// - `Interval`: 时间间隔类型
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct PriceSlope<Interval> {
    /// 每个时间间隔的价格变化量。
    pub value: Decimal,
    /// 时间间隔。
    pub interval: Interval,
}

impl<Interval> PriceSlope<Interval>
where
    Interval: TimeInterval,
{
    /// 计算按时间正序（最旧在前）排列的 `prices` 的回归斜率。
    ///
    /// # 参数
    ///
    /// - `prices`: 每个 `interval` 一个值，最旧在前
    /// - `interval`: 相邻两个值之间的时间间隔
    pub fn calculate(prices: &[Decimal], interval: Interval) -> Self {
        Self {
            value: ordinary_least_squares_slope(prices),
            interval,
        }
    }

    /// 将 [`PriceSlope`] 从当前 [`TimeInterval`] 线性缩放到提供的 [`TimeInterval`]。
    ///
    /// ## 缩放公式
    ///
    /// `scaled_value = value * (target_interval / current_interval)`
    pub fn scale<TargetInterval>(self, target: TargetInterval) -> PriceSlope<TargetInterval>
    where
        TargetInterval: TimeInterval,
    {
        let target_secs = Decimal::from(target.interval().num_seconds());
        let current_secs = Decimal::from(self.interval.interval().num_seconds());

        let scale = target_secs
            .abs()
            .checked_div(current_secs.abs())
            .unwrap_or(Decimal::MAX);

        PriceSlope {
            value: self.value.checked_mul(scale).unwrap_or(Decimal::MAX),
            interval: target,
        }
    }
}

/// 根据斜率得出的趋势分类。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TrendDirection {
    StrongUp,
    ModerateUp,
    Flat,
    ModerateDown,
    StrongDown,
}

impl TrendDirection {
    /// 根据每日斜率分类。
    ///
    /// 边界值归入较弱的一侧：`slope == strong` 为 [`TrendDirection::ModerateUp`]，
    /// `|slope| == flat` 为 [`TrendDirection::Flat`]。
    pub fn classify(slope: Decimal, thresholds: &TrendThresholds) -> Self {
        match slope {
            slope if slope > thresholds.strong => Self::StrongUp,
            slope if slope > thresholds.flat => Self::ModerateUp,
            slope if slope >= -thresholds.flat => Self::Flat,
            slope if slope >= -thresholds.strong => Self::ModerateDown,
            _ => Self::StrongDown,
        }
    }

    /// 仪表盘展示的韩文标签。
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongUp => "강한 상승 추세",
            Self::ModerateUp => "완만한 상승 추세",
            Self::Flat => "보합",
            Self::ModerateDown => "완만한 하락 추세",
            Self::StrongDown => "강한 하락 추세",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::StrongUp | Self::ModerateUp => "📈",
            Self::Flat => "➡️",
            Self::ModerateDown | Self::StrongDown => "📉",
        }
    }
}

/// 将斜率外推到目标间隔得到的预测价格。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PricePrediction {
    /// 预测价格，不小于 0。
    pub value: Decimal,
    /// 相对当前价格的变化百分比；当前价格为 0 时为 0，溢出时为 `Decimal::MAX`。
    pub change_percent: Decimal,
}

impl PricePrediction {
    /// 以 `current` 为起点，按 `slope` 外推到 `horizon`。
    pub fn calculate<Interval, Horizon>(
        current: Decimal,
        slope: PriceSlope<Interval>,
        horizon: Horizon,
    ) -> Self
    where
        Interval: TimeInterval,
        Horizon: TimeInterval,
    {
        let delta = slope.scale(horizon).value;
        let value = current
            .checked_add(delta)
            .unwrap_or(Decimal::MAX)
            .max(Decimal::ZERO);

        // 当前价格极小时百分比可能溢出，此时饱和到 Decimal::MAX
        let change_percent = match (value - current).checked_div(current) {
            Some(ratio) => ratio
                .checked_mul(Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::MAX),
            None => Decimal::ZERO,
        };

        Self {
            value,
            change_percent,
        }
    }
}
