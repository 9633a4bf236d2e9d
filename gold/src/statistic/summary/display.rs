use crate::statistic::summary::Statistics;
use itertools::Itertools;
use prettytable::{Table, row};
use rust_decimal::{Decimal, RoundingStrategy};

impl Statistics {
    /// 生成统计快照的控制台表格。
    pub fn table(&self) -> Table {
        let stats = &self.statistics;
        let trend = &self.trend;
        let signal = &self.signal;

        let mut table = Table::new();
        table.set_titles(row!["항목", "값"]);

        table.add_row(row![
            format!("현재가 ({})", self.reference_field),
            format_won(self.current_price.get(self.reference_field))
        ]);
        table.add_row(row!["최저가", format_won(stats.min_price)]);
        table.add_row(row!["최고가", format_won(stats.max_price)]);
        table.add_row(row!["평균가", format_won(stats.avg_price)]);
        table.add_row(row!["중앙값", format_won(stats.median_price)]);
        table.add_row(row!["변동성", format!("{:.2}%", stats.volatility)]);
        table.add_row(row!["7일 이동평균", format_won(stats.ma7)]);
        table.add_row(row!["30일 이동평균", format_won(stats.ma30)]);
        table.add_row(row![
            "추세",
            format!("{} {} ({:+.2}원/일)", trend.icon, trend.direction, trend.slope)
        ]);
        table.add_row(row![
            "30일 후 예상",
            format!(
                "{} ({:+.2}%)",
                format_won(trend.prediction_30d),
                trend.change_30d
            )
        ]);
        table.add_row(row![
            "투자 신호",
            format!(
                "{} {} [{}] (위치 {:.1})",
                signal.icon, signal.message, signal.category, signal.position
            )
        ]);
        table.add_row(row!["데이터 수", self.data_count]);
        table.add_row(row!["갱신 시각", self.last_updated.to_rfc3339()]);

        table
    }

    /// 将统计快照表格打印到标准输出。
    pub fn print_table(&self) {
        self.table().printstd();
    }
}

/// 以千位分隔符格式化원金额，例如 `650,000원`。
pub fn format_won(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",");

    match rounded < Decimal::ZERO {
        true => format!("-{grouped}원"),
        false => format!("{grouped}원"),
    }
}
