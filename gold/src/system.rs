//! System 运行模块
//!
//! 本模块将文件加载、统计计算和结果写出组合为 `gold-analyze` 的两个子命令：
//!
//! - [`run_analysis`]: 读取价格文件，计算统计快照并写出 `statistics.json`
//! - [`run_merge`]: 将新采集的一批记录合并进价格文件

use crate::{
    GoldError, Statistics, StatisticsGenerator,
    config::StatisticsConfig,
};
use gold_data::{DataError, MergeOutcome, PriceSeries};
use std::{fs, io, path::Path};
use tracing::{info, warn};

/// 默认的价格文件路径。
pub const DEFAULT_PRICES_PATH: &str = "data/gold-prices.json";

/// 默认的统计快照输出路径。
pub const DEFAULT_STATISTICS_PATH: &str = "data/statistics.json";

/// 分析 `prices` 中的价格序列，并将统计快照以格式化 JSON 写入 `output`。
///
/// 未提供 `config` 时使用 [`StatisticsConfig::default`]。
pub fn run_analysis(
    prices: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: Option<&Path>,
) -> Result<Statistics, GoldError> {
    let config = match config {
        Some(path) => StatisticsConfig::load(path)?,
        None => StatisticsConfig::default(),
    };

    let series = PriceSeries::load(prices.as_ref())?;
    if let Some((oldest, newest)) = series.date_range() {
        info!(
            path = %prices.as_ref().display(),
            records = series.len(),
            %oldest,
            %newest,
            "loaded price series"
        );
    }

    let statistics = StatisticsGenerator::new(config).compute(series.records())?;
    write_json(output.as_ref(), &statistics)?;

    info!(path = %output.as_ref().display(), "saved Statistics");
    Ok(statistics)
}

/// 将 `incoming` 中的记录合并进 `prices`，并保留最近的 `retain` 条。
///
/// `prices` 不存在时视为空序列，首次采集即可直接创建文件。
pub fn run_merge(
    prices: impl AsRef<Path>,
    incoming: impl AsRef<Path>,
    retain: usize,
) -> Result<MergeOutcome, GoldError> {
    let prices = prices.as_ref();

    let mut series = match PriceSeries::load(prices) {
        Ok(series) => series,
        Err(DataError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
            warn!(path = %prices.display(), "price file not found, starting a new series");
            PriceSeries::default()
        }
        Err(error) => return Err(error.into()),
    };

    let incoming = PriceSeries::load(incoming.as_ref())?;
    let outcome = series.merge(incoming.into_inner(), retain);
    series.save(prices)?;

    Ok(outcome)
}

fn write_json(path: &Path, statistics: &Statistics) -> Result<(), GoldError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(statistics)?)?;
    Ok(())
}
