//! 範囲分類パイプライン
//!
//! 札番号を幅20の5区分（1-20 / 21-40 / 41-60 / 61-80 / 81-100）に
//! 割り当て、保存されている色と食い違う札を修正する。

use crate::cards::{self, Card, CardColor, Correction};
use crate::config::AssignConfig;
use crate::error::Result;

/// 札番号に対応する色
///
/// 81以上（100超も含む）はすべて橙に落ちる。
pub fn color_for_id(id: u32) -> CardColor {
    match id {
        1..=20 => CardColor::Blue,
        21..=40 => CardColor::Pink,
        41..=60 => CardColor::Yellow,
        61..=80 => CardColor::Green,
        _ => CardColor::Orange,
    }
}

/// 全札の色を範囲表に合わせ、食い違った札の修正一覧を返す
pub fn classify_cards(cards: &mut [Card]) -> Vec<Correction> {
    let mut corrections = Vec::new();

    for card in cards.iter_mut() {
        let expected = color_for_id(card.id);
        if card.color != expected {
            corrections.push(Correction {
                id: card.id,
                old: card.color,
                new: expected,
            });
            card.color = expected;
        }
    }

    corrections
}

/// 範囲分類パイプラインを実行する
///
/// 修正の有無にかかわらず、修正版データセットと変更ログの両方を
/// 必ず書き出す。入力ファイルは変更しない。
pub fn run(config: &AssignConfig, verbose: bool) -> Result<Vec<Correction>> {
    println!("[1/2] 札データを分類中...");
    let mut cards = cards::load_cards(&config.input)?;
    let corrections = classify_cards(&mut cards);
    println!("✔ {}枚中{}件を修正\n", cards.len(), corrections.len());

    if verbose {
        for correction in &corrections {
            println!("  {}", correction);
        }
    }

    println!("[2/2] 結果を保存中...");
    cards::save_cards(&config.output, &cards)?;

    let log = corrections
        .iter()
        .map(Correction::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&config.report, log)?;

    println!("✔ 修正版: {}", config.output.display());
    println!("✔ 変更ログ: {}", config.report.display());

    Ok(corrections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_id_ranges() {
        assert_eq!(color_for_id(1), CardColor::Blue);
        assert_eq!(color_for_id(20), CardColor::Blue);
        assert_eq!(color_for_id(21), CardColor::Pink);
        assert_eq!(color_for_id(40), CardColor::Pink);
        assert_eq!(color_for_id(41), CardColor::Yellow);
        assert_eq!(color_for_id(60), CardColor::Yellow);
        assert_eq!(color_for_id(61), CardColor::Green);
        assert_eq!(color_for_id(80), CardColor::Green);
        assert_eq!(color_for_id(81), CardColor::Orange);
        assert_eq!(color_for_id(100), CardColor::Orange);
    }

    #[test]
    fn test_color_for_id_out_of_range() {
        // 100超も0も橙扱い
        assert_eq!(color_for_id(101), CardColor::Orange);
        assert_eq!(color_for_id(0), CardColor::Orange);
    }

    #[test]
    fn test_classify_corrects_mismatch() {
        let mut cards = vec![Card {
            id: 1,
            color: CardColor::Pink,
            ..Default::default()
        }];

        let corrections = classify_cards(&mut cards);

        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].to_string(), "id 1: pink -> blue");
        assert_eq!(cards[0].color, CardColor::Blue);
    }

    #[test]
    fn test_classify_keeps_correct_color() {
        let mut cards = vec![Card {
            id: 95,
            color: CardColor::Orange,
            ..Default::default()
        }];

        let corrections = classify_cards(&mut cards);

        assert!(corrections.is_empty());
        assert_eq!(cards[0].color, CardColor::Orange);
    }

    #[test]
    fn test_classify_idempotent() {
        let mut cards: Vec<Card> = (1..=100)
            .map(|id| Card {
                id,
                color: CardColor::Pink,
                ..Default::default()
            })
            .collect();

        let first = classify_cards(&mut cards);
        assert_eq!(first.len(), 80); // 21-40以外がすべて修正される

        let second = classify_cards(&mut cards);
        assert!(second.is_empty());
    }
}
