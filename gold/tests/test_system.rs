use gold::{
    GoldError,
    statistic::error::StatisticError,
    system::{run_analysis, run_merge},
};
use gold_data::{DataError, PriceSeries};
use rust_decimal_macros::dec;
use std::{fs, path::Path};

const PRICES: &str = r#"[
  {"date": "2025-03-05", "buyPure": 590000, "sellPure": 502000, "sell18K": 369000, "sell14K": 286100},
  {"date": "2025-03-04", "buyPure": 585000, "sellPure": 497000, "sell18K": 365300, "sell14K": 283300},
  {"date": "2025-03-03", "buyPure": 580000, "sellPure": 492000, "sell18K": 361600, "sell14K": 280400}
]"#;

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn test_run_analysis_writes_statistics_json() {
    let dir = tempfile::tempdir().unwrap();
    let prices = dir.path().join("gold-prices.json");
    let output = dir.path().join("out").join("statistics.json");
    write(&prices, PRICES);

    let statistics = run_analysis(&prices, &output, None).unwrap();

    assert_eq!(statistics.data_count, 3);
    assert_eq!(statistics.trend.slope, dec!(5000));
    assert_eq!(statistics.trend.direction, "강한 상승 추세");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(json["dataCount"], 3);
    assert_eq!(json["currentPrice"]["buyPure"], 590000);
    assert_eq!(json["currentPrice"]["sell14K"], 286100);
    assert_eq!(json["statistics"]["minPrice"], 492000);
    assert_eq!(json["statistics"]["maxPrice"], 502000);
    assert_eq!(json["statistics"]["avgPrice"], 497000);
    assert_eq!(json["statistics"]["medianPrice"], 497000);
    assert_eq!(json["statistics"]["ma7"], 497000);
    assert_eq!(json["statistics"]["ma30"], 497000);
    assert_eq!(json["trend"]["icon"], "📈");
    assert_eq!(json["trend"]["prediction30d"], 652000);
    assert_eq!(json["signal"]["message"], "매도 고려");
    assert_eq!(json["signal"]["category"], "SELL");
    assert!(json["lastUpdated"].is_string());
}

#[test]
fn test_run_analysis_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let prices = dir.path().join("gold-prices.json");
    let config = dir.path().join("config.json");
    let output = dir.path().join("statistics.json");
    write(&prices, PRICES);
    write(
        &config,
        r#"{ "reference": "sell14K", "trend": { "strong": 10000, "flat": 0 } }"#,
    );

    let statistics = run_analysis(&prices, &output, Some(config.as_path())).unwrap();

    assert_eq!(statistics.statistics.min_price, dec!(280400));
    assert_eq!(statistics.statistics.max_price, dec!(286100));
    assert_eq!(statistics.trend.direction, "완만한 상승 추세");
}

#[test]
fn test_run_analysis_rejects_empty_series() {
    let dir = tempfile::tempdir().unwrap();
    let prices = dir.path().join("gold-prices.json");
    let output = dir.path().join("statistics.json");
    write(&prices, "[]");

    let actual = run_analysis(&prices, &output, None);

    assert!(matches!(
        actual,
        Err(GoldError::Statistic(StatisticError::EmptySeries))
    ));
    assert!(!output.exists());
}

#[test]
fn test_run_analysis_rejects_malformed_record() {
    let dir = tempfile::tempdir().unwrap();
    let prices = dir.path().join("gold-prices.json");
    write(
        &prices,
        r#"[{"date": "2025-03-05", "buyPure": 590000, "sell18K": 369000, "sell14K": 286100}]"#,
    );

    let actual = run_analysis(&prices, dir.path().join("statistics.json"), None);

    assert!(matches!(
        actual,
        Err(GoldError::Data(DataError::MalformedRecord { index: 0, .. }))
    ));
}

#[test]
fn test_run_merge_creates_and_updates_price_file() {
    let dir = tempfile::tempdir().unwrap();
    let prices = dir.path().join("data").join("gold-prices.json");
    let incoming = dir.path().join("incoming.json");
    write(&incoming, PRICES);

    let first = run_merge(&prices, &incoming, 365).unwrap();
    assert_eq!((first.added, first.evicted, first.total), (3, 0, 3));

    write(
        &incoming,
        r#"[
          {"date": "2025-03-06", "buyPure": 600000, "sellPure": 510000, "sell18K": 374900, "sell14K": 290700},
          {"date": "2025-03-05", "buyPure": 1, "sellPure": 1, "sell18K": 1, "sell14K": 1}
        ]"#,
    );

    let second = run_merge(&prices, &incoming, 3).unwrap();
    assert_eq!((second.added, second.evicted, second.total), (1, 1, 3));

    let series = PriceSeries::load(&prices).unwrap();
    let dates = series
        .records()
        .iter()
        .map(|record| record.date.to_string())
        .collect::<Vec<_>>();
    assert_eq!(dates, ["2025-03-06", "2025-03-05", "2025-03-04"]);
    // 已有记录优先
    assert_eq!(series.records()[1].quote.sell_pure, dec!(502000));
}
