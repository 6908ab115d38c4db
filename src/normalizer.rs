//! 照合用の文字列正規化
//!
//! スクレイピング結果と札データの双方に同一の正規化を適用する。
//! 片側だけ正規化すると照合が静かに失敗するため、比較前には必ず
//! この関数を通すこと。

/// 除去する句読点・括弧・ダッシュ類（全角・半角）
const STRIP_CHARS: &[char] = &[
    '。', '、', '・', '「', '」', '『', '』', '（', '）', '(', ')', '〈', '〉', '…', '─', '—',
    '〜', '~', '―',
];

/// 比較用にテキストを正規化する
///
/// - 前後の空白を除去
/// - 全空白文字（全角スペース含む）を除去
/// - 句読点・括弧・ダッシュ類を除去
pub fn normalize_text(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIP_CHARS.contains(c))
        .collect()
}
