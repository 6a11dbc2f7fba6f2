// src/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "count_values",
    version = crate::VERSION,
    about = "CSV の列ごとに値の出現回数を集計するツール",
    after_help = "出力形式は環境変数 COUNT_VALUES_FORMAT (json|jsonl|table) で切り替えられます。"
)]
pub struct Args {
    /// 集計対象の CSV ファイル (.tsv/.tab はタブ区切り)
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,
}
