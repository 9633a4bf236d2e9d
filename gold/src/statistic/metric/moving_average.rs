use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 最近 `window` 条记录的简单移动平均。
///
/// 序列短于窗口时使用全部可用记录，`len` 记录实际参与平均的数量。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovingAverage {
    pub value: Decimal,
    pub window: usize,
    pub len: usize,
}

impl MovingAverage {
    /// 计算 `prices`（最新在前）最近 `window` 条的平均值。
    ///
    /// `prices` 为空或 `window` 为 0 时返回 `None`。
    pub fn calculate(prices: &[Decimal], window: usize) -> Option<Self> {
        let recent = &prices[..window.min(prices.len())];
        if recent.is_empty() {
            return None;
        }

        let value = recent.iter().sum::<Decimal>() / Decimal::from(recent.len());

        Some(Self {
            value,
            window,
            len: recent.len(),
        })
    }

    /// 序列是否足够长以填满窗口。
    pub fn is_full(&self) -> bool {
        self.len == self.window
    }
}
