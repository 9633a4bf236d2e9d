//! Algorithm 统计算法模块
//!
//! 本模块提供了用于分析价格数据集的统计算法。
//!
//! # 核心概念
//!
//! - **Welford Online 算法**: 单次遍历计算均值和总体方差
//! - **中位数**: 偶数个值时取中间两个值的平均
//! - **普通最小二乘**: 以日序号为自变量的线性回归斜率

use rust_decimal::Decimal;

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// 算法，用于单次遍历计算运行中的均值和方差。
///
/// # 使用示例
///
/// ```rust
/// use gold::statistic::algorithm::welford_online::Welford;
/// use rust_decimal_macros::dec;
///
/// let welford = [dec!(100), dec!(110), dec!(120)]
///     .into_iter()
///     .fold(Welford::default(), Welford::update);
///
/// assert_eq!(welford.mean, dec!(110));
/// ```
pub mod welford_online {
    use rust_decimal::{Decimal, MathematicalOps};

    /// Welford Online 算法的运行状态。
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct Welford {
        /// 已处理的值数量。
        pub count: Decimal,
        /// 运行中的均值。
        pub mean: Decimal,
        /// 递推关系 M（偏差平方和）。
        pub m: Decimal,
    }

    impl Welford {
        /// 使用下一个值更新运行状态。
        pub fn update(self, value: Decimal) -> Self {
            let count = self.count + Decimal::ONE;
            let mean = calculate_mean(self.mean, value, count);
            let m = calculate_recurrence_relation_m(self.m, self.mean, value, mean);
            Self { count, mean, m }
        }

        /// 有偏"总体"方差。
        pub fn population_variance(&self) -> Decimal {
            calculate_population_variance(self.m, self.count)
        }

        /// 总体标准差。
        pub fn population_std_dev(&self) -> Decimal {
            self.population_variance().sqrt().unwrap_or(Decimal::ZERO)
        }
    }

    /// 计算下一个均值。
    ///
    /// `new_mean = prev_mean + (next_value - prev_mean) / count`
    pub fn calculate_mean<T>(mut prev_mean: T, next_value: T, count: T) -> T
    where
        T: Copy + std::ops::Sub<Output = T> + std::ops::Div<Output = T> + std::ops::AddAssign,
    {
        prev_mean += (next_value - prev_mean) / count;
        prev_mean
    }

    /// 计算下一个 Welford Online 递推关系 M。
    ///
    /// `M = prev_m + (new_value - prev_mean) * (new_value - new_mean)`
    pub fn calculate_recurrence_relation_m(
        prev_m: Decimal,
        prev_mean: Decimal,
        new_value: Decimal,
        new_mean: Decimal,
    ) -> Decimal {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// 使用递推关系 M 计算有偏"总体"方差（分母为 `n`，与 numpy 的 `np.std` 默认一致）。
    ///
    /// 如果 count < 1，返回 0。
    pub fn calculate_population_variance(
        recurrence_relation_m: Decimal,
        count: Decimal,
    ) -> Decimal {
        match count < Decimal::ONE {
            true => Decimal::ZERO,
            false => recurrence_relation_m / count,
        }
    }
}

/// 计算中位数；偶数个值时取中间两个值的平均。空输入返回 `None`。
pub fn median(values: &[Decimal]) -> Option<Decimal> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let middle = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        len if len % 2 == 1 => Some(sorted[middle]),
        _ => Some((sorted[middle - 1] + sorted[middle]) / Decimal::TWO),
    }
}

/// 普通最小二乘线性回归斜率。
///
/// 自变量为值在切片中的序号 `0..n`，因此 `values` 必须按时间正序（最旧在前）传入，
/// 返回值为每一步的变化量。少于两个值时斜率未定义，返回 0。
pub fn ordinary_least_squares_slope(values: &[Decimal]) -> Decimal {
    if values.len() < 2 {
        return Decimal::ZERO;
    }

    let n = Decimal::from(values.len());
    let x_mean = (n - Decimal::ONE) / Decimal::TWO;
    let y_mean = values.iter().sum::<Decimal>() / n;

    let (numerator, denominator) = values.iter().enumerate().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(numerator, denominator), (index, y)| {
            let dx = Decimal::from(index) - x_mean;
            (numerator + dx * (*y - y_mean), denominator + dx * dx)
        },
    );

    numerator
        .checked_div(denominator)
        .unwrap_or(Decimal::ZERO)
}
