//! 任意局面の組み立て

use log::debug;

use crate::error::{PositionError, PositionResult};
use crate::types::{CastlingSide, Cell, Color, Piece, PieceType, Square};

use super::Position;

/// 検証前の局面
///
/// `Position` の盤面・キャスリング権・アンパッサン升は `do_move` でしか変わらないため、
/// 初期局面以外から始めたい場合（テスト、外部の局面表記の読み込みなど）はこれで組み立てる。
///
/// - 駒は置かれていない
/// - キャスリング権は両者とも無し（`castling` で明示的に与える）
/// - アンパッサン升は無し
///
/// ```
/// use rchess_core::{Color, PieceType, PositionBuilder, Square};
///
/// let pos = PositionBuilder::new()
///     .piece(Square::new(7, 4), PieceType::King, Color::White)
///     .piece(Square::new(0, 4), PieceType::King, Color::Black)
///     .build()
///     .unwrap();
/// assert_eq!(pos.pieces().count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PositionBuilder {
    cells: [[Cell; 8]; 8],
    castling: [[bool; 2]; Color::NUM],
    en_passant: Option<Square>,
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 升に駒を置く（既存の駒は上書き）
    pub fn piece(&mut self, sq: Square, piece_type: PieceType, color: Color) -> &mut Self {
        self.cells[sq.row() as usize][sq.col() as usize] = Cell::occupied(piece_type, color);
        self
    }

    /// キャスリング権を与える
    ///
    /// キングまたはルークが初期位置にいなければ `build` 時に権利は失われる。
    pub fn castling(&mut self, color: Color, side: CastlingSide) -> &mut Self {
        self.castling[color.index()][side_index(side)] = true;
        self
    }

    /// アンパッサン升（直前に2マス前進したポーンが通過した升）
    pub fn en_passant(&mut self, target: Option<Square>) -> &mut Self {
        self.en_passant = target;
        self
    }

    /// 検証して `Position` を作る
    ///
    /// - 各手番のキングがちょうど1枚
    /// - 1段目・8段目にポーンが無い
    /// - アンパッサン升が直前の2マス前進と整合している
    pub fn build(&self) -> PositionResult<Position> {
        let mut pos = Position::empty();
        for sq in Square::all() {
            if let Cell::Occupied(piece) = self.cells[sq.row() as usize][sq.col() as usize] {
                if piece.piece_type == PieceType::Pawn && (sq.row() == 0 || sq.row() == 7) {
                    return Err(PositionError::PawnOnBackRank(sq));
                }
                pos.put_piece(sq, piece);
            }
        }

        for color in Color::ALL {
            let count = pos
                .pieces_of(color)
                .filter(|(_, piece)| piece.piece_type == PieceType::King)
                .count();
            if count != 1 {
                return Err(PositionError::KingCount { color, count });
            }
        }

        for color in Color::ALL {
            let home = color.home_row();
            let king_home = pos.cell(Square::new(home, 4)) == Cell::occupied(PieceType::King, color);
            let rights = pos.castling.side_mut(color);
            let mut any_right = false;
            for side in CastlingSide::ALL {
                let requested = self.castling[color.index()][side_index(side)];
                let rook_sq = Square::new(home, side.rook_from_col());
                let rook_home = self.cells[home as usize][rook_sq.col() as usize]
                    == Cell::occupied(PieceType::Rook, color);
                if requested && !(king_home && rook_home) {
                    debug!("PositionBuilder: dropping {color} {side:?} castling right (pieces not at home)");
                }
                if requested && king_home && rook_home {
                    any_right = true;
                } else {
                    rights.mark_rook_moved(side);
                }
            }
            if !any_right {
                rights.mark_king_moved();
            }
        }

        if let Some(target) = self.en_passant {
            validate_en_passant(&pos, target)?;
            pos.en_passant = Some(target);
        }

        Ok(pos)
    }
}

impl From<&Position> for PositionBuilder {
    fn from(pos: &Position) -> Self {
        let mut builder = PositionBuilder::new();
        for (sq, piece) in pos.pieces() {
            builder.piece(sq, piece.piece_type, piece.color);
        }
        for color in Color::ALL {
            for side in CastlingSide::ALL {
                if pos.castling_rights().may_castle(color, side) {
                    builder.castling(color, side);
                }
            }
        }
        builder.en_passant(pos.en_passant());
        builder
    }
}

#[inline]
fn side_index(side: CastlingSide) -> usize {
    match side {
        CastlingSide::KingSide => 0,
        CastlingSide::QueenSide => 1,
    }
}

/// アンパッサン升の整合性
///
/// row 5 なら白が、row 2 なら黒が直前に2マス前進している。
/// 升自体と出発升が空で、1つ先に前進したポーンがいなければならない。
fn validate_en_passant(pos: &Position, target: Square) -> PositionResult<()> {
    let pusher = match target.row() {
        5 => Color::White,
        2 => Color::Black,
        _ => return Err(PositionError::InvalidEnPassant(target)),
    };
    let pawn_sq = target.offset(pusher.forward(), 0);
    let origin = target.offset(-pusher.forward(), 0);
    let consistent = match (pawn_sq, origin) {
        (Some(pawn_sq), Some(origin)) => {
            pos.is_empty(target)
                && pos.is_empty(origin)
                && pos.piece_on(pawn_sq) == Some(Piece::new(PieceType::Pawn, pusher))
        }
        _ => false,
    };
    if consistent {
        Ok(())
    } else {
        Err(PositionError::InvalidEnPassant(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn kings() -> PositionBuilder {
        let mut builder = PositionBuilder::new();
        builder
            .piece(sq(7, 4), PieceType::King, Color::White)
            .piece(sq(0, 4), PieceType::King, Color::Black);
        builder
    }

    #[test]
    fn test_king_count_validation() {
        let err = PositionBuilder::new()
            .piece(sq(7, 4), PieceType::King, Color::White)
            .build()
            .unwrap_err();
        assert_eq!(err, PositionError::KingCount { color: Color::Black, count: 0 });

        let err = kings().piece(sq(3, 3), PieceType::King, Color::White).build().unwrap_err();
        assert_eq!(err, PositionError::KingCount { color: Color::White, count: 2 });
    }

    #[test]
    fn test_pawn_on_back_rank_rejected() {
        let err = kings().piece(sq(0, 0), PieceType::Pawn, Color::White).build().unwrap_err();
        assert_eq!(err, PositionError::PawnOnBackRank(sq(0, 0)));
    }

    #[test]
    fn test_castling_rights_default_to_none() {
        let pos = kings()
            .piece(sq(7, 7), PieceType::Rook, Color::White)
            .build()
            .unwrap();
        for color in Color::ALL {
            for side in CastlingSide::ALL {
                assert!(!pos.castling_rights().may_castle(color, side));
            }
        }
    }

    #[test]
    fn test_castling_rights_require_pieces_at_home() {
        let pos = kings()
            .piece(sq(7, 7), PieceType::Rook, Color::White)
            .castling(Color::White, CastlingSide::KingSide)
            .castling(Color::White, CastlingSide::QueenSide) // a1 にルークが無い
            .build()
            .unwrap();
        let rights = pos.castling_rights();
        assert!(rights.may_castle(Color::White, CastlingSide::KingSide));
        assert!(!rights.may_castle(Color::White, CastlingSide::QueenSide));
    }

    #[test]
    fn test_en_passant_validation() {
        let ok = kings()
            .piece(sq(4, 4), PieceType::Pawn, Color::White)
            .en_passant(Some(sq(5, 4)))
            .build()
            .unwrap();
        assert_eq!(ok.en_passant(), Some(sq(5, 4)));

        let err = kings().en_passant(Some(sq(5, 4))).build().unwrap_err();
        assert_eq!(err, PositionError::InvalidEnPassant(sq(5, 4)));

        let err = kings().en_passant(Some(sq(4, 4))).build().unwrap_err();
        assert_eq!(err, PositionError::InvalidEnPassant(sq(4, 4)));
    }

    #[test]
    fn test_roundtrip_from_position() {
        let pos = Position::startpos();
        let rebuilt = PositionBuilder::from(&pos).build().unwrap();
        assert_eq!(rebuilt, pos);
    }
}
