//! 指し手リスト

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Move, Square};

/// 指し手集合
///
/// `Move` の順序（from, to, promotion の辞書順）で整列し、重複を持たない。
/// 同じ局面に対する生成結果は常に同じ順序で列挙される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    moves: BTreeSet<Move>,
}

impl MoveList {
    /// 空のMoveListを作成
    #[inline]
    pub fn new() -> Self {
        Self {
            moves: BTreeSet::new(),
        }
    }

    /// 指し手の数
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// イテレータを取得（正準順）
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// 指定された指し手が含まれているか
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// 指し手を追加（既にあれば何もしない）
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.insert(mv);
    }

    /// from/to が一致する指し手（成りの違いは区別しない）
    pub fn find(&self, from: Square, to: Square) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(move |mv| mv.from == from && mv.to == to)
    }

    /// Vecに変換
    pub fn to_vec(&self) -> Vec<Move> {
        self.moves.iter().copied().collect()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::collections::btree_set::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::collections::btree_set::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceType};

    #[test]
    fn test_movelist_dedup_and_order() {
        let a = Move::new(PieceType::Pawn, Color::White, Square::new(6, 1), Square::new(5, 1));
        let b = Move::new(PieceType::Pawn, Color::White, Square::new(6, 0), Square::new(4, 0));
        let c = Move::new(PieceType::Pawn, Color::White, Square::new(6, 0), Square::new(5, 0));

        let mut list = MoveList::new();
        list.push(a);
        list.push(b);
        list.push(c);
        list.push(a);

        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![b, c, a]);
        assert!(list.contains(&c));
        assert_eq!(list.find(Square::new(6, 0), Square::new(5, 0)).count(), 1);
    }
}
