//! 上の句による札の照合
//!
//! 完全一致を優先し、外れた場合のみ先頭10文字の前方一致に落とす。
//! 前方一致はデータセット順で最初に当たった札を採用する（同じ接頭辞を
//! 持つ札が複数ある場合も先勝ち）。

use crate::cards::Card;
use crate::normalizer::normalize_text;

/// 前方一致で比較する先頭文字数
const PREFIX_LEN: usize = 10;

/// 照合方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// 上の句の完全一致
    Exact,
    /// 先頭10文字の前方一致
    Prefix,
}

/// 正規化済み上の句 → 札番号の索引
///
/// データセットの並び順を保持する。重複キーは位置を保ったまま札番号を
/// 後勝ちで更新する。
#[derive(Debug, Clone)]
pub struct CardIndex {
    entries: Vec<(String, u32)>,
}

impl CardIndex {
    pub fn build(cards: &[Card]) -> Self {
        let mut entries: Vec<(String, u32)> = Vec::with_capacity(cards.len());

        for card in cards {
            let key = normalize_text(&card.kami_no_ku);
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = card.id,
                None => entries.push((key, card.id)),
            }
        }

        Self { entries }
    }

    /// 正規化済みの文字列に対応する札番号を探す
    pub fn find(&self, normalized: &str) -> Option<(u32, MatchKind)> {
        if let Some((_, id)) = self.entries.iter().find(|(k, _)| k == normalized) {
            return Some((*id, MatchKind::Exact));
        }

        let head: String = normalized.chars().take(PREFIX_LEN).collect();
        self.entries
            .iter()
            .find(|(k, _)| k.starts_with(&head))
            .map(|(_, id)| (*id, MatchKind::Prefix))
    }
}
