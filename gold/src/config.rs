//! Config 配置模块
//!
//! 本模块定义了统计引擎的配置结构，通常从 JSON 文件加载。所有字段都有默认值，
//! 因此空对象 `{}` 即为合法配置。
//!
//! # 配置示例
//!
//! ```json
//! {
//!   "reference": "sellPure",
//!   "trend": { "strong": 100, "flat": 0 },
//!   "signal": { "strong_buy": 20, "buy": 40, "hold": 60, "caution": 80 }
//! }
//! ```

use gold_data::{PriceField, de};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// 加载或校验 [`StatisticsConfig`] 时可能发生的错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// 统计引擎的顶层配置。
///
/// ## 字段说明
///
/// - **reference**: 用于所有汇总统计的价格列，默认 `sellPure`
/// - **trend**: 趋势分类阈值（每日斜率，单位：원）
/// - **signal**: 区间位置的信号分段阈值（百分比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub reference: PriceField,
    pub trend: TrendThresholds,
    pub signal: SignalThresholds,
}

impl StatisticsConfig {
    /// 从 JSON 文件加载配置并校验。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;

        debug!(path = %path.display(), ?config, "loaded StatisticsConfig");
        Ok(config)
    }

    /// 校验阈值的一致性。
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trend.validate()?;
        self.signal.validate()
    }
}

/// 趋势分类阈值。
///
/// `|slope| <= flat` 为보합，`flat < |slope| <= strong` 为완만한 추세，
/// `|slope| > strong` 为강한 추세。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrendThresholds {
    #[serde(with = "de::number")]
    pub strong: Decimal,
    #[serde(with = "de::number")]
    pub flat: Decimal,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            strong: Decimal::ONE_HUNDRED,
            flat: Decimal::ZERO,
        }
    }
}

impl TrendThresholds {
    /// 要求 `0 <= flat <= strong`。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flat.is_sign_negative() || self.flat > self.strong {
            return Err(ConfigError::Invalid(format!(
                "trend thresholds must satisfy 0 <= flat <= strong, got flat={} strong={}",
                self.flat, self.strong
            )));
        }
        Ok(())
    }
}

/// 信号分段阈值，即各分段的上界（含）。
///
/// 位置 `> caution` 的部分属于 Sell 分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalThresholds {
    #[serde(with = "de::number")]
    pub strong_buy: Decimal,
    #[serde(with = "de::number")]
    pub buy: Decimal,
    #[serde(with = "de::number")]
    pub hold: Decimal,
    #[serde(with = "de::number")]
    pub caution: Decimal,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            strong_buy: Decimal::from(20),
            buy: Decimal::from(40),
            hold: Decimal::from(60),
            caution: Decimal::from(80),
        }
    }
}

impl SignalThresholds {
    /// 要求阈值严格递增，且都位于 `[0, 100]` 之内。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            Decimal::ZERO,
            self.strong_buy,
            self.buy,
            self.hold,
            self.caution,
            Decimal::ONE_HUNDRED,
        ];

        let ascending = bounds.windows(2).all(|pair| pair[0] < pair[1]);
        if !ascending {
            return Err(ConfigError::Invalid(format!(
                "signal thresholds must be strictly ascending within (0, 100), got {}/{}/{}/{}",
                self.strong_buy, self.buy, self.hold, self.caution
            )));
        }
        Ok(())
    }
}
