//! 指し手の適用
//!
//! キャスリングのルーク移動、アンパッサンの駒取り、昇格、
//! キャスリングフラグとアンパッサン升の更新を行う。

use log::trace;

use crate::types::{CastlingSide, Color, Move, Piece, PieceType, Square};

use super::Position;

impl Position {
    /// 指し手を適用する
    ///
    /// 指し手は検証しない。呼び出し側は手番側の `legal_moves` に含まれる手だけを渡すこと。
    /// 任意の手を渡すと盤面は不整合になるが、`from`/`to` は常に盤内なので範囲外アクセスは起きない。
    ///
    /// - アンパッサン升はこの手だけから計算し直す
    /// - キャスリングフラグは「未移動」から「移動済み」にしか変わらない
    pub fn do_move(&mut self, mv: Move) {
        let is_castling = mv.is_castling();
        let is_en_passant = mv.piece_type == PieceType::Pawn
            && mv.from.col() != mv.to.col()
            && self.is_empty(mv.to);

        self.history.push(mv);

        if is_castling {
            self.do_castling(mv);
        } else {
            if is_en_passant {
                // 取られるポーンは出発升の横、行き先と同じ筋にいる
                let captured = Square::new(mv.from.row(), mv.to.col());
                trace!("do_move: en passant {mv} captures {captured}");
                self.remove_piece(captured);
            }

            let moved = self.remove_piece(mv.from).unwrap_or(Piece::new(mv.piece_type, mv.color));
            let placed = match mv.promotion {
                Some(promotion) => {
                    trace!("do_move: {mv} promotes to {promotion:?}");
                    Piece::new(promotion, moved.color)
                }
                None => moved,
            };
            self.put_piece(mv.to, placed);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col()))
        } else {
            None
        };

        self.update_castling_flags(mv);
    }

    /// キャスリングのキングとルークの移動
    fn do_castling(&mut self, mv: Move) {
        let row = mv.from.row();
        let Some(side) = CastlingSide::from_king_to_col(mv.to.col()) else {
            return;
        };
        trace!("do_move: {} castles {side:?}", mv.color);

        if let Some(king) = self.remove_piece(mv.from) {
            self.put_piece(mv.to, king);
        }
        let rook_from = Square::new(row, side.rook_from_col());
        let rook_to = Square::new(row, side.rook_to_col());
        if let Some(rook) = self.remove_piece(rook_from) {
            self.put_piece(rook_to, rook);
        }
        self.castling.side_mut(mv.color).mark_king_moved();
    }

    fn update_castling_flags(&mut self, mv: Move) {
        match mv.piece_type {
            PieceType::King => self.castling.side_mut(mv.color).mark_king_moved(),
            PieceType::Rook => {
                if let Some(side) = rook_home_side(mv.color, mv.from) {
                    self.castling.side_mut(mv.color).mark_rook_moved(side);
                }
            }
            _ => {}
        }
    }
}

/// `sq` が `color` のルークの初期位置ならその翼
fn rook_home_side(color: Color, sq: Square) -> Option<CastlingSide> {
    if sq.row() != color.home_row() {
        return None;
    }
    CastlingSide::ALL.into_iter().find(|side| side.rook_from_col() == sq.col())
}
