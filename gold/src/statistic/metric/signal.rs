//! Signal 买卖信号模块
//!
//! 信号由当前价格在整个历史区间 `[min, max]` 中的相对位置（0-100）决定：
//! 价格越接近历史低点越倾向买入，越接近历史高点越倾向卖出。

use crate::config::SignalThresholds;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 当前价格在历史区间中的位置，`[0, 100]` 的百分比。
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RangePosition {
    pub value: Decimal,
}

impl RangePosition {
    /// 计算 `current` 在 `[min, max]` 中的位置，结果截断到 `[0, 100]`。
    ///
    /// 区间退化（`max == min`）时返回中点 50。
    pub fn calculate(current: Decimal, min: Decimal, max: Decimal) -> Self {
        let value = (current - min)
            .checked_div(max - min)
            .map(|ratio| (ratio * Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| Decimal::from(50));

        Self { value }
    }
}

/// 买卖信号的类别，供展示层按类别着色，无需匹配消息文本。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalCategory {
    #[display("BUY")]
    Buy,
    #[display("NEUTRAL")]
    Neutral,
    #[display("CAUTION")]
    Caution,
    #[display("SELL")]
    Sell,
}

/// 由区间位置划分的信号分段。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SignalBand {
    StrongBuy,
    Buy,
    Hold,
    Caution,
    Sell,
}

impl SignalBand {
    /// 按阈值（各分段的上界，含）对位置分段。
    pub fn classify(position: Decimal, thresholds: &SignalThresholds) -> Self {
        match position {
            position if position <= thresholds.strong_buy => Self::StrongBuy,
            position if position <= thresholds.buy => Self::Buy,
            position if position <= thresholds.hold => Self::Hold,
            position if position <= thresholds.caution => Self::Caution,
            _ => Self::Sell,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::StrongBuy => "적극 매수",
            Self::Buy => "매수 고려",
            Self::Hold => "중립/관망",
            Self::Caution => "주의",
            Self::Sell => "매도 고려",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::StrongBuy => "🟢",
            Self::Buy => "🟡",
            Self::Hold => "⚪",
            Self::Caution => "🟠",
            Self::Sell => "🔴",
        }
    }

    pub fn category(&self) -> SignalCategory {
        match self {
            Self::StrongBuy | Self::Buy => SignalCategory::Buy,
            Self::Hold => SignalCategory::Neutral,
            Self::Caution => SignalCategory::Caution,
            Self::Sell => SignalCategory::Sell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_range_position() {
        struct TestCase {
            current: Decimal,
            min: Decimal,
            max: Decimal,
            expected: Decimal,
        }

        let cases = vec![
            // TC0: 位于最高点
            TestCase {
                current: dec!(120),
                min: dec!(100),
                max: dec!(120),
                expected: dec!(100),
            },
            // TC1: 位于最低点
            TestCase {
                current: dec!(100),
                min: dec!(100),
                max: dec!(120),
                expected: dec!(0),
            },
            // TC2: 区间中部
            TestCase {
                current: dec!(105),
                min: dec!(100),
                max: dec!(120),
                expected: dec!(25),
            },
            // TC3: 区间退化
            TestCase {
                current: dec!(100),
                min: dec!(100),
                max: dec!(100),
                expected: dec!(50),
            },
            // TC4: 越界被截断
            TestCase {
                current: dec!(130),
                min: dec!(100),
                max: dec!(120),
                expected: dec!(100),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = RangePosition::calculate(test.current, test.min, test.max);
            assert_eq!(actual.value, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_signal_band_classify() {
        let thresholds = SignalThresholds::default();

        struct TestCase {
            position: Decimal,
            expected: SignalBand,
        }

        let cases = vec![
            // TC0
            TestCase {
                position: dec!(0),
                expected: SignalBand::StrongBuy,
            },
            // TC1: 边界值归入下方分段
            TestCase {
                position: dec!(20),
                expected: SignalBand::StrongBuy,
            },
            // TC2
            TestCase {
                position: dec!(20.1),
                expected: SignalBand::Buy,
            },
            // TC3
            TestCase {
                position: dec!(40),
                expected: SignalBand::Buy,
            },
            // TC4
            TestCase {
                position: dec!(50),
                expected: SignalBand::Hold,
            },
            // TC5
            TestCase {
                position: dec!(60.1),
                expected: SignalBand::Caution,
            },
            // TC6
            TestCase {
                position: dec!(80),
                expected: SignalBand::Caution,
            },
            // TC7
            TestCase {
                position: dec!(80.1),
                expected: SignalBand::Sell,
            },
            // TC8
            TestCase {
                position: dec!(100),
                expected: SignalBand::Sell,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = SignalBand::classify(test.position, &thresholds);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_signal_band_presentation() {
        assert_eq!(SignalBand::StrongBuy.message(), "적극 매수");
        assert_eq!(SignalBand::StrongBuy.icon(), "🟢");
        assert_eq!(SignalBand::Hold.message(), "중립/관망");
        assert_eq!(SignalBand::Sell.icon(), "🔴");

        assert_eq!(SignalBand::StrongBuy.category(), SignalCategory::Buy);
        assert_eq!(SignalBand::Buy.category(), SignalCategory::Buy);
        assert_eq!(SignalBand::Hold.category(), SignalCategory::Neutral);
        assert_eq!(SignalBand::Caution.category(), SignalCategory::Caution);
        assert_eq!(SignalBand::Sell.category(), SignalCategory::Sell);
    }

    #[test]
    fn test_signal_category_display_matches_serde() {
        assert_eq!(SignalCategory::Buy.to_string(), "BUY");
        assert_eq!(SignalCategory::Caution.to_string(), "CAUTION");
    }

    #[test]
    fn test_signal_category_serde() {
        assert_eq!(
            serde_json::to_string(&SignalCategory::Neutral).unwrap(),
            r#""NEUTRAL""#
        );
        assert_eq!(
            serde_json::from_str::<SignalCategory>(r#""CAUTION""#).unwrap(),
            SignalCategory::Caution
        );
    }
}
