//! パイプライン設定
//!
//! 固定パス・固定URLはここに集約し、各パイプラインへ設定構造体として
//! 渡す。テストではフィクスチャのパスに差し替えられる。

use std::path::{Path, PathBuf};
use std::time::Duration;

/// 五色一覧ページ（本多式五色百人一首）
pub const DEFAULT_PAGE_URL: &str = "https://honda-n2.com/gosyokuhyakuninisshu-ichiran";

/// ページ取得タイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// 範囲分類（assign）の設定
#[derive(Debug, Clone)]
pub struct AssignConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: PathBuf,
}

impl AssignConfig {
    pub fn new(input: PathBuf, output: Option<PathBuf>, report: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| input.with_extension("fixed.json"));
        let report = report.unwrap_or_else(|| sibling_path(&input, "fivecolor_changes.txt"));
        Self {
            input,
            output,
            report,
        }
    }
}

/// ウェブ照合（verify）の設定
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: PathBuf,
    pub url: String,
    pub timeout: Duration,
}

impl VerifyConfig {
    pub fn new(
        input: PathBuf,
        url: String,
        timeout_secs: u64,
        output: Option<PathBuf>,
        report: Option<PathBuf>,
    ) -> Self {
        let output = output.unwrap_or_else(|| appended_fixed_path(&input));
        let report = report.unwrap_or_else(|| sibling_path(&input, "fivecolor_report.txt"));
        Self {
            input,
            output,
            report,
            url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// `cards.json` → `cards.json.fixed`
fn appended_fixed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".fixed");
    PathBuf::from(name)
}

/// 入力ファイルと同じディレクトリのファイルパス
fn sibling_path(input: &Path, name: &str) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
