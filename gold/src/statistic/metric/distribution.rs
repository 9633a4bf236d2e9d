use crate::statistic::algorithm::{median, welford_online::Welford};
use itertools::{Itertools, MinMaxResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 价格序列的描述统计。
///
/// ## 字段说明
///
/// - **min** / **max**: 全序列最低价和最高价
/// - **mean**: 算术平均（Welford Online）
/// - **median**: 中位数
/// - **std_dev**: 总体标准差
///
/// 对任意非空序列均满足 `min <= median <= max` 与 `min <= mean <= max`。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceDistribution {
    pub min: Decimal,
    pub max: Decimal,
    pub mean: Decimal,
    pub median: Decimal,
    pub std_dev: Decimal,
}

impl PriceDistribution {
    /// 计算 `prices` 的描述统计。空输入返回 `None`。
    pub fn calculate(prices: &[Decimal]) -> Option<Self> {
        let (min, max) = match prices.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(price) => (price, price),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let welford = prices
            .iter()
            .copied()
            .fold(Welford::default(), Welford::update);

        Some(Self {
            min,
            max,
            // Decimal 舍入误差不能让均值越出 [min, max]
            mean: welford.mean.clamp(min, max),
            median: median(prices)?,
            std_dev: welford.population_std_dev(),
        })
    }
}
