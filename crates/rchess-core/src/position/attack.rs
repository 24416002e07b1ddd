//! 利き判定・王手判定
//!
//! 専用の利きテーブルは持たず、疑似合法手生成（利きモード）を毎回やり直して判定する。
//! 盤が8×8固定なので計算量は問題にならず、盤面更新に追従するキャッシュも不要になる。

use log::error;

use crate::error::{PositionError, PositionResult};
use crate::movegen::{generate_pseudo_legal, GenType};
use crate::types::{Color, Square};

use super::Position;

impl Position {
    /// `by` の駒が `sq` に利いているか
    ///
    /// `by` の利きモードの疑似合法手のいずれかが `sq` を行き先にしていれば true。
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        generate_pseudo_legal(self, by, GenType::Attacks).iter().any(|mv| mv.to == sq)
    }

    /// `color` のキングに王手がかかっているか
    ///
    /// # Panics
    /// `color` のキングが盤上に無い場合（不正な局面）は panic する。
    /// 不正な局面を扱う可能性があるなら `checked_in_check` を使う。
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.checked_in_check(color) {
            Ok(in_check) => in_check,
            Err(e) => {
                error!("is_in_check on malformed position: {e}");
                panic!("{e}");
            }
        }
    }

    /// `is_in_check` のエラーを返す版
    pub fn checked_in_check(&self, color: Color) -> PositionResult<bool> {
        let king_sq = self.king_square(color).ok_or(PositionError::KingNotFound(color))?;
        Ok(self.is_square_attacked(king_sq, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, Piece, PieceType};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_startpos_attacks() {
        let pos = Position::startpos();
        assert!(!pos.is_in_check(Color::White));
        assert!(!pos.is_in_check(Color::Black));

        // 白ポーンの斜め前（row 5）は白の利き、ポーンの真正面は前進先でも利きではない
        assert!(pos.is_square_attacked(sq(5, 3), Color::White));
        assert!(pos.is_square_attacked(sq(5, 0), Color::White)); // b1ナイトと b2ポーン
        assert!(!pos.is_square_attacked(sq(4, 4), Color::White));
        assert!(!pos.is_square_attacked(sq(3, 4), Color::Black));
    }

    #[test]
    fn test_slider_blocked_by_piece() {
        let mut pos = Position::empty();
        pos.put_piece(sq(7, 0), Piece::new(PieceType::Rook, Color::White));
        pos.put_piece(sq(4, 0), Piece::new(PieceType::Pawn, Color::Black));

        assert!(pos.is_square_attacked(sq(5, 0), Color::White));
        assert!(pos.is_square_attacked(sq(4, 0), Color::White));
        assert!(!pos.is_square_attacked(sq(3, 0), Color::White));
        assert!(pos.is_square_attacked(sq(7, 7), Color::White));
    }

    #[test]
    fn test_pawn_attacks_diagonals_only() {
        let mut pos = Position::empty();
        pos.put_piece(sq(1, 4), Piece::new(PieceType::Pawn, Color::Black));

        assert!(pos.is_square_attacked(sq(2, 3), Color::Black));
        assert!(pos.is_square_attacked(sq(2, 5), Color::Black));
        assert!(!pos.is_square_attacked(sq(2, 4), Color::Black));
        assert!(!pos.is_square_attacked(sq(3, 4), Color::Black));
    }

    #[test]
    fn test_defended_own_piece_is_not_attacked() {
        // 自駒に守られている升はポーンでもナイトでも利きに数えない
        let mut pos = Position::empty();
        pos.put_piece(sq(5, 2), Piece::new(PieceType::Pawn, Color::White));
        pos.put_piece(sq(4, 3), Piece::new(PieceType::Knight, Color::White));
        pos.put_piece(sq(2, 2), Piece::new(PieceType::Knight, Color::White));
        pos.put_piece(sq(3, 4), Piece::new(PieceType::Knight, Color::White));

        assert!(!pos.is_square_attacked(sq(4, 3), Color::White));
        assert!(!pos.is_square_attacked(sq(3, 4), Color::White));
        assert!(pos.is_square_attacked(sq(4, 1), Color::White));

        // 敵駒なら取れるので利きになる
        pos.put_piece(sq(4, 3), Piece::new(PieceType::Knight, Color::Black));
        assert!(pos.is_square_attacked(sq(4, 3), Color::White));
    }

    #[test]
    fn test_fools_mate_is_check() {
        let mut pos = Position::startpos();
        for mv in [
            Move::new(PieceType::Pawn, Color::White, sq(6, 5), sq(5, 5)),
            Move::new(PieceType::Pawn, Color::Black, sq(1, 4), sq(3, 4)),
            Move::new(PieceType::Pawn, Color::White, sq(6, 6), sq(4, 6)),
            Move::new(PieceType::Queen, Color::Black, sq(0, 3), sq(4, 7)),
        ] {
            pos.do_move(mv);
        }
        assert!(pos.is_in_check(Color::White));
        assert!(!pos.is_in_check(Color::Black));
    }

    #[test]
    fn test_missing_king() {
        let mut pos = Position::empty();
        pos.put_piece(sq(0, 4), Piece::new(PieceType::King, Color::Black));
        assert_eq!(
            pos.checked_in_check(Color::White),
            Err(PositionError::KingNotFound(Color::White))
        );
        assert_eq!(pos.checked_in_check(Color::Black), Ok(false));
    }

    #[test]
    #[should_panic(expected = "King not found")]
    fn test_is_in_check_panics_without_king() {
        let pos = Position::empty();
        pos.is_in_check(Color::White);
    }
}
