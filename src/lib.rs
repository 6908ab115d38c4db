//! 五色百人一首の札データ `cards.json` に対する色分類・検証ツール
//!
//! - `assign`: 札番号の範囲（幅20の5区分）から機械的に色を割り当てる
//! - `verify`: 五色一覧ページと照合して色を検証・修正する
//!
//! どちらも修正結果を別ファイルへ書き出すバッチ処理で、元のデータは
//! 変更しない。

pub mod cards;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod corrector;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod normalizer;
