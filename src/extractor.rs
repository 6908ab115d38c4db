//! 五色一覧ページからの色札セクション抽出
//!
//! 見出し（h2/h3/h4）の文言から色を判定し、次の見出しが現れるまでの
//! 兄弟ノードのテキストをその色の札一覧として収集する。ページ構造は
//! 形式文法を持たないため、抽出はあくまでベストエフォート。

use crate::cards::CardColor;
use crate::normalizer::normalize_text;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// 1色分の抽出結果
#[derive(Debug, Clone)]
pub struct ColorSection {
    pub color: CardColor,
    /// 正規化済みの札テキスト（ページ内の出現順）
    pub items: Vec<String>,
}

/// 色札見出しとみなすキーワード
const HEADING_KEYWORDS: &[&str] = &["青札", "桃札", "黄札", "緑札", "橙札", "オレンジ"];

lazy_static! {
    static ref HEADING_SEL: Selector = Selector::parse("h2, h3, h4").unwrap();
    // 「1. 上の句」形式の箇条書き
    static ref NUMBERED_RE: Regex = Regex::new(r"\d+\.\s*([^\d]+)").unwrap();
    // 行頭に残った連番
    static ref LEADING_NUM_RE: Regex = Regex::new(r"^[0-9]+\.").unwrap();
    static ref LINE_SPLIT_RE: Regex = Regex::new(r"\n+").unwrap();
    static ref WS_SPLIT_RE: Regex = Regex::new(r"\s{2,}|\t").unwrap();
}

/// HTML全体から色札セクションを抽出する
///
/// 戻り値は見出しの出現順。同じ色の見出しが複数ある場合は位置を保った
/// まま後の内容で置き換える。
pub fn extract_color_sections(html: &str) -> Vec<ColorSection> {
    let document = Html::parse_document(html);
    let mut sections: Vec<ColorSection> = Vec::new();

    for heading in document.select(&HEADING_SEL) {
        let text: String = heading.text().collect();
        if !HEADING_KEYWORDS.iter().any(|k| text.contains(k)) {
            continue;
        }

        let color = match color_for_heading(&text) {
            Some(color) => color,
            None => continue,
        };

        let raw = collect_section_text(&heading);
        let items: Vec<String> = extract_items(&raw)
            .iter()
            .filter(|item| !item.is_empty())
            .map(|item| normalize_text(&LEADING_NUM_RE.replace(item, "")))
            .collect();

        match sections.iter_mut().find(|s| s.color == color) {
            Some(existing) => existing.items = items,
            None => sections.push(ColorSection { color, items }),
        }
    }

    sections
}

/// 見出し文言から色を判定する
fn color_for_heading(text: &str) -> Option<CardColor> {
    if text.contains('青') {
        Some(CardColor::Blue)
    } else if text.contains('桃') || text.contains('赤') || text.contains("ピンク") {
        Some(CardColor::Pink)
    } else if text.contains('黄') {
        Some(CardColor::Yellow)
    } else if text.contains('緑') {
        Some(CardColor::Green)
    } else if text.contains('橙') || text.contains("オレンジ") {
        Some(CardColor::Orange)
    } else {
        None
    }
}

/// 見出しの直後から次の見出し（h2/h3/h4）手前までのテキストを集める
fn collect_section_text(heading: &ElementRef) -> String {
    let mut lines = Vec::new();

    for sibling in heading.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            if matches!(element.value().name(), "h2" | "h3" | "h4") {
                break;
            }
            let text: String = element.text().collect();
            if !text.trim().is_empty() {
                lines.push(text.trim().to_string());
            }
        } else if let Some(text) = sibling.value().as_text() {
            if !text.trim().is_empty() {
                lines.push(text.trim().to_string());
            }
        }
    }

    lines.join("\n")
}

/// セクション本文から札テキストを切り出す
///
/// まず「<連番>. <本文>」形式を探し、1つも見つからないうちは
/// 連続空白・タブ区切りでの分割に落とす。
fn extract_items(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();

    for part in LINE_SPLIT_RE.split(raw) {
        for caps in NUMBERED_RE.captures_iter(part) {
            items.push(caps[1].trim().to_string());
        }

        if items.is_empty() && !part.is_empty() {
            items.extend(
                WS_SPLIT_RE
                    .split(part)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }
    }

    items
}
