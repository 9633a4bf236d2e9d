//! Metric 价格指标模块
//!
//! 本模块提供了基于参考价格列计算的各项指标，它们共同组成统计快照。
//!
//! # 核心指标
//!
//! - **PriceDistribution**: 最低、最高、平均、中位数和标准差
//! - **MovingAverage**: 最近 N 条记录的简单移动平均
//! - **Volatility**: 以百分比表示的变异系数
//! - **PriceSlope / TrendDirection / PricePrediction**: 回归斜率、趋势分类和预测
//! - **RangePosition / SignalBand**: 当前价格在历史区间中的位置和买卖信号

/// PriceDistribution 描述统计计算逻辑。
pub mod distribution;

/// MovingAverage 简单移动平均计算逻辑。
pub mod moving_average;

/// Signal 区间位置与买卖信号计算逻辑。
pub mod signal;

/// Trend 回归斜率、趋势分类与价格预测计算逻辑。
pub mod trend;

/// Volatility 波动率计算逻辑。
pub mod volatility;
