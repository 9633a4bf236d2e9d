//! PriceSeries 价格序列模块
//!
//! 本模块提供了按"最新在前"排序、日期唯一的价格序列，以及对应的 JSON 文件读写。
//!
//! # 核心概念
//!
//! - **PriceSeries**: 价格序列，索引 0 为最近一天
//! - **MergeOutcome**: 合并新采集数据后的结果统计
//!
//! # 顺序约定
//!
//! 采集任务生成的 `gold-prices.json` 是最新在前的，仪表盘绘图时再调用 `reverse()`
//! 得到时间正序。本模块在构造时统一排序，下游无需再推断方向。

use crate::{
    error::DataError,
    record::{PriceRecord, RawPriceRecord},
};
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use std::{collections::HashSet, fs, path::Path};
use tracing::{debug, info};

/// 默认保留的记录数量（约一年的日数据）。
pub const DEFAULT_RETENTION: usize = 365;

/// 仪表盘价格图表默认展示的记录数量。
pub const DEFAULT_CHART_WINDOW: usize = 60;

/// 最新在前、日期唯一的 [`PriceRecord`] 序列。
///
/// ## 不变量
///
/// - 日期严格递减（索引 0 为最近一天）
/// - 日期唯一
///
/// # 使用示例
///
/// ```rust,ignore
/// let mut series = PriceSeries::load("data/gold-prices.json")?;
/// let outcome = series.merge(collected, DEFAULT_RETENTION);
/// series.save("data/gold-prices.json")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<PriceRecord>);

/// [`PriceSeries::merge`] 的结果。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// 新增的记录数量（日期此前不存在）。
    pub added: usize,
    /// 因超出保留窗口而被移除的记录数量。
    pub evicted: usize,
    /// 合并后的记录总数。
    pub total: usize,
}

impl PriceSeries {
    /// 从任意顺序的记录构造 [`PriceSeries`]。
    ///
    /// 记录按日期降序排列；若存在重复日期，返回 [`DataError::DuplicateDate`]。
    pub fn new<Records>(records: Records) -> Result<Self, DataError>
    where
        Records: IntoIterator<Item = PriceRecord>,
    {
        let mut records = records.into_iter().collect::<Vec<_>>();
        sort_newest_first(&mut records);

        if let Some((duplicate, _)) = records
            .iter()
            .tuple_windows()
            .find(|(newer, older)| newer.date == older.date)
        {
            return Err(DataError::DuplicateDate(duplicate.date));
        }

        Ok(Self(records))
    }

    /// 从未经校验的记录构造 [`PriceSeries`]。
    ///
    /// 任何一条记录校验失败都会拒绝整批数据，错误中包含该记录在输入中的索引。
    pub fn from_raw<Records>(records: Records) -> Result<Self, DataError>
    where
        Records: IntoIterator<Item = RawPriceRecord>,
    {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                PriceRecord::try_from(raw)
                    .map_err(|reason| DataError::MalformedRecord { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(records)
    }

    /// 从 JSON 数组文件加载 [`PriceSeries`]。
    pub fn load<P>(path: P) -> Result<Self, DataError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let raw = serde_json::from_str::<Vec<RawPriceRecord>>(&contents)?;
        let series = Self::from_raw(raw)?;

        debug!(path = %path.display(), records = series.len(), "loaded PriceSeries");
        Ok(series)
    }

    /// 将 [`PriceSeries`] 以格式化 JSON 数组写入文件。
    ///
    /// 先写入临时文件再重命名，中断的写入不会留下损坏的文件。
    pub fn save<P>(&self, path: P) -> Result<(), DataError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("json.tmp");

        let result = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result?;

        debug!(path = %path.display(), records = self.len(), "saved PriceSeries");
        Ok(())
    }

    /// 合并新采集的记录。
    ///
    /// 日期已存在的记录保持原值（已有数据优先），新日期的记录被加入；合并后仅保留
    /// 最近的 `retain` 条记录。
    pub fn merge<Records>(&mut self, incoming: Records, retain: usize) -> MergeOutcome
    where
        Records: IntoIterator<Item = PriceRecord>,
    {
        let mut known = self.0.iter().map(|record| record.date).collect::<HashSet<_>>();

        let before = self.0.len();
        self.0
            .extend(incoming.into_iter().filter(|record| known.insert(record.date)));
        let added = self.0.len() - before;

        sort_newest_first(&mut self.0);

        let evicted = self.0.len().saturating_sub(retain);
        self.0.truncate(retain);

        let outcome = MergeOutcome {
            added,
            evicted,
            total: self.0.len(),
        };

        info!(
            added = outcome.added,
            evicted = outcome.evicted,
            total = outcome.total,
            "merged PriceSeries"
        );
        outcome
    }

    /// 所有记录，最新在前。
    pub fn records(&self) -> &[PriceRecord] {
        &self.0
    }

    /// 最近一天的记录。
    pub fn latest(&self) -> Option<&PriceRecord> {
        self.0.first()
    }

    /// 最近的 `n` 条记录（不足时返回全部），最新在前。
    pub fn recent(&self, n: usize) -> &[PriceRecord] {
        &self.0[..n.min(self.0.len())]
    }

    /// 最近的 `n` 条记录，按时间正序（最旧在前），用于图表展示。
    pub fn chronological(&self, n: usize) -> impl Iterator<Item = &PriceRecord> {
        self.recent(n).iter().rev()
    }

    /// 序列覆盖的日期范围 `(最早, 最新)`。
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.0.last()?.date, self.0.first()?.date))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<PriceRecord> {
        self.0
    }
}

impl AsRef<[PriceRecord]> for PriceSeries {
    fn as_ref(&self) -> &[PriceRecord] {
        &self.0
    }
}

fn sort_newest_first(records: &mut [PriceRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
