//! Statistic 统计模块
//!
//! 本模块提供了用于分析每日金价序列的统计算法和指标，以及最终的统计快照。
//!
//! # 核心概念
//!
//! - **algorithm**: 用于分析数据集的统计算法（Welford、中位数、最小二乘）
//! - **metric**: 价格指标（分布、移动平均、波动率、趋势、信号）
//! - **summary**: 统计快照 `Statistics` 及其生成器
//! - **time**: 用于斜率缩放的时间间隔定义
//! - **error**: 统计引擎的错误类型

/// 用于分析数据集的统计算法。
pub mod algorithm;

/// 统计引擎的错误类型。
pub mod error;

/// 价格指标及其计算逻辑。
pub mod metric;

/// 价格序列的统计快照。
///
/// 例如，`Statistics`、`StatisticsGenerator`、`TrendSummary` 等。
pub mod summary;

/// 用于趋势斜率缩放的时间间隔定义。
///
/// 例如，`Daily`，或任意 `TimeDelta`。
pub mod time;
