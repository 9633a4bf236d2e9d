//! Volatility 波动率模块
//!
//! 波动率以变异系数表示：总体标准差相对均值的百分比。与标准差不同，它与价格水平
//! 无关，可以直接比较不同纯度或不同时期的序列。
//!
//! # 计算公式
//!
//! `Volatility = 标准差 / 均值 * 100`
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/c/coefficientofvariation.asp>

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 以百分比表示的价格波动率（变异系数）。
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize, Serialize)]
pub struct Volatility {
    pub value: Decimal,
}

impl Volatility {
    /// 根据总体标准差和均值计算 [`Volatility`]。
    ///
    /// 均值为零或结果无法表示时返回 0。
    pub fn calculate(std_dev: Decimal, mean: Decimal) -> Self {
        let value = std_dev
            .checked_div(mean)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO);

        Self { value }
    }
}
