//! ウェブ照合パイプラインの統合テスト
//!
//! ネットワークは使わず、取得済みのHTMLフィクスチャに対して
//! パイプライン本体（抽出→照合→出力）を検証する。

use fivecolor_rust::cards::{load_cards, save_cards, Card, CardColor};
use fivecolor_rust::config::VerifyConfig;
use fivecolor_rust::corrector;
use fivecolor_rust::error::FivecolorError;
use std::path::Path;
use tempfile::tempdir;

const PAGE_HTML: &str = r#"
<html><body>
<h2>青札の一覧</h2>
<p>1. 秋の田の かりほの庵の 苫をあらみ 2. 春すぎて 夏来にけらし 白妙の</p>
<h2>桃札の一覧</h2>
<p>21. 小倉山 峰のもみぢ葉 心あらば</p>
</body></html>
"#;

fn card(id: u32, kami_no_ku: &str, color: CardColor) -> Card {
    Card {
        id,
        kami_no_ku: kami_no_ku.to_string(),
        color,
        ..Default::default()
    }
}

fn write_dataset(dir: &Path, cards: &[Card]) -> VerifyConfig {
    let input = dir.join("cards.json");
    save_cards(&input, cards).expect("フィクスチャ保存失敗");
    // URLは使わない（run_on_htmlに直接HTMLを渡す）
    VerifyConfig::new(input, "http://localhost/".to_string(), 20, None, None)
}

#[test]
fn test_verify_applies_corrections_in_extraction_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_dataset(
        dir.path(),
        &[
            card(1, "秋の田のかりほの庵の苫をあらみ", CardColor::Pink),
            card(2, "春すぎて夏来にけらし白妙の", CardColor::Blue),
            card(21, "小倉山峰のもみぢ葉心あらば", CardColor::Blue),
        ],
    );
    let original = std::fs::read(&config.input).expect("入力読み込み失敗");

    let outcome = corrector::run_on_html(PAGE_HTML, &config, false).expect("照合失敗");

    assert_eq!(outcome.corrections.len(), 2);
    assert_eq!(
        outcome.report_lines,
        vec![
            "id 1: pink -> blue (matched by kamiNoKu)",
            "id 2: blue (OK)",
            "id 21: blue -> pink (matched by kamiNoKu)",
        ]
    );

    // 出力は<入力名>.fixed
    assert_eq!(config.output, dir.path().join("cards.json.fixed"));
    let fixed = load_cards(&config.output).expect("修正版読み込み失敗");
    assert_eq!(fixed[0].color, CardColor::Blue);
    assert_eq!(fixed[2].color, CardColor::Pink);

    let report = std::fs::read_to_string(&config.report).expect("レポート読み込み失敗");
    assert_eq!(report, outcome.report_lines.join("\n"));

    // 入力ファイルはバイト単位で不変
    assert_eq!(std::fs::read(&config.input).expect("再読み込み失敗"), original);
}

#[test]
fn test_verify_prefix_fallback() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_dataset(
        dir.path(),
        &[card(4, "田子の浦にうち出でてみれば白妙の", CardColor::Pink)],
    );

    // ページ側の句は末尾が欠けている
    let html = "<h2>青札の一覧</h2><p>4. 田子の浦に うち出でてみれば</p>";
    let outcome = corrector::run_on_html(html, &config, false).expect("照合失敗");

    assert_eq!(
        outcome.report_lines,
        vec!["id 4: pink -> blue (matched by prefix)"]
    );
    let fixed = load_cards(&config.output).expect("修正版読み込み失敗");
    assert_eq!(fixed[0].color, CardColor::Blue);
}

#[test]
fn test_verify_unmatched_item_keeps_dataset() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_dataset(
        dir.path(),
        &[card(1, "秋の田のかりほの庵の苫をあらみ", CardColor::Blue)],
    );

    let html = "<h2>橙札の一覧</h2><p>33. ひさかたの 光のどけき 春の日に</p>";
    let outcome = corrector::run_on_html(html, &config, false).expect("照合失敗");

    assert!(outcome.corrections.is_empty());
    assert_eq!(outcome.report_lines.len(), 1);
    assert!(outcome.report_lines[0].starts_with("No match found for poem snippet: "));

    // 照合失敗は非致命的で、出力ファイル自体は書かれる
    let fixed = load_cards(&config.output).expect("修正版読み込み失敗");
    assert_eq!(fixed[0].color, CardColor::Blue);
}

#[test]
fn test_verify_no_sections_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_dataset(
        dir.path(),
        &[card(1, "秋の田のかりほの庵の苫をあらみ", CardColor::Blue)],
    );

    let html = "<html><body><p>見出しのないページ</p></body></html>";
    let result = corrector::run_on_html(html, &config, false);

    assert!(matches!(result, Err(FivecolorError::NoColorSections)));
    assert!(!config.output.exists());
    assert!(!config.report.exists());
}

#[test]
fn test_verify_missing_dataset_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("missing.json");
    let config = VerifyConfig::new(input, "http://localhost/".to_string(), 20, None, None);

    let result = corrector::run_on_html(PAGE_HTML, &config, false);

    assert!(matches!(result, Err(FivecolorError::FileNotFound(_))));
    assert!(!config.output.exists());
    assert!(!config.report.exists());
}
