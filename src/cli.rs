use crate::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fivecolor")]
#[command(about = "五色百人一首 札データの色分類・検証ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 札番号の範囲で色を割り当てて修正版を出力
    Assign {
        /// 札データJSONファイル
        #[arg(default_value = "cards.json")]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: <入力名>.fixed.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 変更ログの出力先（デフォルト: 入力と同じ場所のfivecolor_changes.txt）
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 五色一覧ページと照合して色を検証・修正
    Verify {
        /// 札データJSONファイル
        #[arg(default_value = "cards.json")]
        input: PathBuf,

        /// 参照ページURL
        #[arg(long, default_value = config::DEFAULT_PAGE_URL)]
        url: String,

        /// ページ取得タイムアウト（秒）
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// 出力JSONファイル（デフォルト: <入力名>.fixed）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートの出力先（デフォルト: 入力と同じ場所のfivecolor_report.txt）
        #[arg(long)]
        report: Option<PathBuf>,
    },
}
