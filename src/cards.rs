//! 札データモデルと入出力
//!
//! `cards.json` は札オブジェクトのJSON配列。修正結果は常に別ファイルへ
//! 書き出し、元のファイルには手を付けない。

use crate::error::{FivecolorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 五色かるたの色区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    #[default]
    Blue,
    Pink,
    Yellow,
    Green,
    Orange,
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Blue => "blue",
            CardColor::Pink => "pink",
            CardColor::Yellow => "yellow",
            CardColor::Green => "green",
            CardColor::Orange => "orange",
        };
        write!(f, "{}", name)
    }
}

/// 百人一首の札1枚
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,

    #[serde(default)]
    pub kami_no_ku: String, // 上の句（照合キー）

    #[serde(default)]
    pub shimo_no_ku: String, // 下の句

    #[serde(default)]
    pub kami_no_ku_kana: String,

    #[serde(default)]
    pub shimo_no_ku_kana: String,

    pub color: CardColor,

    #[serde(default)]
    pub kimariji: u8, // 決まり字数
}

/// 適用した修正（札番号・修正前・修正後）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub id: u32,
    pub old: CardColor,
    pub new: CardColor,
}

impl std::fmt::Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id {}: {} -> {}", self.id, self.old, self.new)
    }
}

pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    if !path.exists() {
        return Err(FivecolorError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let cards: Vec<Card> = serde_json::from_str(&content)?;
    Ok(cards)
}

pub fn save_cards(path: &Path, cards: &[Card]) -> Result<()> {
    let json = serde_json::to_string_pretty(cards)?;
    std::fs::write(path, json)?;
    Ok(())
}
