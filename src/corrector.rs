//! ウェブ照合パイプライン
//!
//! 参照ページから抽出した色札一覧を上の句で照合し、色の食い違いを
//! 修正してレポートを出力する。照合はヒューリスティックなので、
//! 修正版を信用する前にレポートの人手確認を前提とする。

use crate::cards::{self, Card, Correction};
use crate::config::VerifyConfig;
use crate::error::{FivecolorError, Result};
use crate::extractor::{self, ColorSection};
use crate::fetcher;
use crate::matcher::{CardIndex, MatchKind};

/// 「照合失敗」レポートに載せるスニペットの最大文字数
const SNIPPET_LEN: usize = 30;

/// 照合結果
#[derive(Debug)]
pub struct VerifyOutcome {
    pub corrections: Vec<Correction>,
    /// 抽出順（セクション順→項目順）のレポート行。1項目につき1行
    pub report_lines: Vec<String>,
}

/// 抽出済みセクションを札データへ適用する
///
/// 照合できなかった項目はデータを変更せず、レポート行のみ残す。
pub fn apply_sections(
    cards: &mut [Card],
    sections: &[ColorSection],
    verbose: bool,
) -> VerifyOutcome {
    let index = CardIndex::build(cards);
    let mut corrections = Vec::new();
    let mut report_lines = Vec::new();

    for section in sections {
        for item in &section.items {
            let line = match index.find(item) {
                Some((id, kind)) => {
                    match cards.iter_mut().find(|c| c.id == id) {
                        Some(card) if card.color != section.color => {
                            let old = card.color;
                            card.color = section.color;
                            corrections.push(Correction {
                                id,
                                old,
                                new: section.color,
                            });
                            match kind {
                                MatchKind::Exact => format!(
                                    "id {}: {} -> {} (matched by kamiNoKu)",
                                    id, old, section.color
                                ),
                                MatchKind::Prefix => format!(
                                    "id {}: {} -> {} (matched by prefix)",
                                    id, old, section.color
                                ),
                            }
                        }
                        Some(card) => match kind {
                            MatchKind::Exact => format!("id {}: {} (OK)", id, card.color),
                            MatchKind::Prefix => format!("id {}: {} (OK, prefix)", id, card.color),
                        },
                        // 索引は札データから作るためここには来ない
                        None => continue,
                    }
                }
                None => {
                    let snippet: String = item.chars().take(SNIPPET_LEN).collect();
                    format!("No match found for poem snippet: {}...", snippet)
                }
            };

            if verbose {
                println!("  {}", line);
            }
            report_lines.push(line);
        }
    }

    VerifyOutcome {
        corrections,
        report_lines,
    }
}

/// ウェブ照合パイプラインを実行する
pub async fn run(config: &VerifyConfig, verbose: bool) -> Result<VerifyOutcome> {
    println!("[1/3] 五色一覧ページを取得中...");
    let html = fetcher::fetch_page(&config.url, config.timeout).await?;
    println!("✔ 取得完了\n");

    run_on_html(&html, config, verbose)
}

/// 取得済みHTMLに対してパイプライン本体を実行する
///
/// セクションが1つも取れなければ何も書き出さずに中断する。
pub fn run_on_html(html: &str, config: &VerifyConfig, verbose: bool) -> Result<VerifyOutcome> {
    println!("[2/3] 色札セクションを抽出・照合中...");
    let sections = extractor::extract_color_sections(html);
    if sections.is_empty() {
        return Err(FivecolorError::NoColorSections);
    }

    let mut cards = cards::load_cards(&config.input)?;
    let outcome = apply_sections(&mut cards, &sections, verbose);
    println!("✔ {}項目を照合、{}件を修正\n", outcome.report_lines.len(), outcome.corrections.len());

    println!("[3/3] 結果を保存中...");
    std::fs::write(&config.report, outcome.report_lines.join("\n"))?;
    cards::save_cards(&config.output, &cards)?;
    println!("✔ レポート: {}", config.report.display());
    println!("✔ 修正版: {}", config.output.display());

    Ok(outcome)
}
