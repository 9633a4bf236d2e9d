//! TimeInterval 时间间隔模块
//!
//! 本模块定义了趋势斜率所使用的时间间隔类型。每日价格序列的回归斜率以 [`Daily`]
//! 为单位，预测时再线性缩放到目标间隔（例如 30 天）。

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::fmt::Debug;

/// 表示用于价格计算的时间间隔类型的 Trait。
///
/// # 使用示例
///
/// ```rust
/// use chrono::TimeDelta;
/// use gold::statistic::time::{Daily, TimeInterval};
///
/// assert_eq!(Daily.name().as_str(), "Daily");
/// assert_eq!(Daily.interval().num_days(), 1);
///
/// let horizon = TimeDelta::days(30);
/// assert_eq!(horizon.name().as_str(), "Duration 30 (days)");
/// ```
pub trait TimeInterval: Debug + Copy {
    /// 返回时间间隔的人类可读名称。
    fn name(&self) -> SmolStr;

    /// 返回时间间隔的持续时间。
    fn interval(&self) -> TimeDelta;
}

/// 日时间间隔。
///
/// 每条 `PriceRecord` 对应一个日历日，因此回归斜率的自然单位就是 [`Daily`]。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Daily;

impl TimeInterval for Daily {
    fn name(&self) -> SmolStr {
        SmolStr::new("Daily")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(1)
    }
}

impl TimeInterval for TimeDelta {
    /// 返回以天为单位的持续时间名称。
    fn name(&self) -> SmolStr {
        format_smolstr!("Duration {} (days)", self.num_days())
    }

    fn interval(&self) -> TimeDelta {
        *self
    }
}
