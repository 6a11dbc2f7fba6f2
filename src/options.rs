// src/options.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// レポートの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 整形済み JSON 配列
    #[default]
    Json,
    /// 1 行 1 オブジェクトの JSON
    Jsonl,
    /// 桁揃えのテキスト表
    Table,
}

impl OutputFormat {
    /// Environment variable that selects the format.
    pub const ENV: &'static str = "COUNT_VALUES_FORMAT";
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" => Ok(Self::Jsonl),
            "table" => Ok(Self::Table),
            other => Err(format!("Unknown output format: {other} (expected json, jsonl or table)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Table => "table",
        };
        f.write_str(name)
    }
}

/// Field delimiter implied by the input file extension.
pub fn delimiter_for(path: &Path) -> u8 {
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}
