//! `gold-analyze`: 金价统计命令行工具。
//!
//! 子命令：
//!   analyze  读取价格文件，生成 `statistics.json` 并打印摘要表格
//!   merge    将新采集的记录合并进价格文件

use clap::{Args, Parser, Subcommand};
use gold::{
    logging::{init_json_logging, init_logging},
    system::{DEFAULT_PRICES_PATH, DEFAULT_STATISTICS_PATH, run_analysis, run_merge},
};
use gold_data::series::DEFAULT_RETENTION;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "gold-analyze",
    version,
    about = "Statistics, trend and buy/sell signal for daily gold prices",
    propagate_version = true
)]
struct Cli {
    /// Emit logs as JSON instead of human readable text
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics.json from the price file
    Analyze(AnalyzeArgs),
    /// Merge a freshly collected batch into the price file
    Merge(MergeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Price series JSON file (newest first)
    #[arg(long, default_value = DEFAULT_PRICES_PATH)]
    prices: PathBuf,

    /// Where to write the statistics snapshot
    #[arg(long, default_value = DEFAULT_STATISTICS_PATH)]
    output: PathBuf,

    /// Optional StatisticsConfig JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct MergeArgs {
    /// Price series JSON file to update (created if missing)
    #[arg(long, default_value = DEFAULT_PRICES_PATH)]
    prices: PathBuf,

    /// JSON file holding the newly collected records
    #[arg(long)]
    incoming: PathBuf,

    /// Number of most recent records to keep
    #[arg(long, default_value_t = DEFAULT_RETENTION)]
    retain: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.json_logs {
        true => init_json_logging(),
        false => init_logging(),
    }

    let result = match cli.command {
        Commands::Analyze(args) => {
            run_analysis(&args.prices, &args.output, args.config.as_deref()).map(|statistics| {
                statistics.print_table();
            })
        }
        Commands::Merge(args) => run_merge(&args.prices, &args.incoming, args.retain).map(|outcome| {
            println!(
                "added {} record(s), evicted {}, total {}",
                outcome.added, outcome.evicted, outcome.total
            );
        }),
    };

    if let Err(error) = &result {
        error!(%error, "gold-analyze failed");
    }

    result.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["gold-analyze", "merge", "--incoming", "new.json"]).unwrap();
        assert!(!cli.json_logs);
        let Commands::Merge(args) = cli.command else {
            panic!("expected merge command");
        };
        assert_eq!(args.prices, PathBuf::from(DEFAULT_PRICES_PATH));
        assert_eq!(args.incoming, PathBuf::from("new.json"));
        assert_eq!(args.retain, DEFAULT_RETENTION);

        let cli = Cli::try_parse_from(["gold-analyze", "analyze", "--json-logs"]).unwrap();
        assert!(cli.json_logs);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.output, PathBuf::from(DEFAULT_STATISTICS_PATH));
        assert_eq!(args.config, None);

        assert!(Cli::try_parse_from(["gold-analyze", "merge"]).is_err());
    }
}
