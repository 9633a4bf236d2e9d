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
#![allow(clippy::type_complexity, clippy::too_many_arguments, type_alias_bounds)]

//! # Gold
//! Gold 是一个用于从每日金价序列生成统计快照的 Rust 库，其输出即金价仪表盘读取的
//! `statistics.json`。
//! * **纯计算**：引擎无状态、无 I/O，每次调用都接收完整序列并返回完整快照。
//! * **精确**：所有运算使用 [`Decimal`](rust_decimal::Decimal)，线性序列的回归斜率是精确值。
//! * **结构化信号**：买卖信号同时携带可读文本和枚举类别，展示层无需匹配字符串。
//!
//! ## 概述
//! 从高层次来看，它提供了几个主要组件：
//! * [`StatisticsGenerator`](statistic::summary::StatisticsGenerator)：统计引擎，生成 [`Statistics`](statistic::summary::Statistics) 快照。
//! * 描述统计（最低/最高/平均/中位数）、移动平均、波动率。
//! * 基于最小二乘回归的趋势斜率与 30 日价格预测。
//! * 基于当前价格在历史区间中位置的买卖信号。
//! * `gold-analyze` 命令行工具：分析价格文件、合并新采集的数据。
//!
//! ## 快速开始
//!
//! ```rust,ignore
//! let series = PriceSeries::load("data/gold-prices.json")?;
//! let statistics = StatisticsGenerator::default().compute(series.records())?;
//! println!("{}", statistics.table());
//! ```

/// 统计引擎配置，例如参考价格列、趋势阈值和信号阈值。
pub mod config;

/// 定义 Gold 中所有可能的顶层错误。
pub mod error;

/// 提供默认的 Tracing 日志初始化器。
pub mod logging;

/// 用于分析价格序列的统计算法、指标和统计快照。
///
/// 例如：`Statistics`、`StatisticsGenerator`、`PriceSlope` 等。
pub mod statistic;

/// 将文件加载、统计计算和结果写出组合在一起的工具，供 `gold-analyze` 使用。
pub mod system;

pub use error::GoldError;
pub use statistic::summary::{Statistics, StatisticsGenerator};

// 仅 `gold-analyze` 二进制使用
use clap as _;
