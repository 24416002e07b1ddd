//! 疑似合法手生成器
//!
//! 駒の動きと盤上の占有だけを見て候補手を作る。自玉が取られるかどうかは見ない
//! （それは `legal` 側の責務）。

use crate::position::Position;
use crate::types::{CastlingSide, Cell, Color, Move, PieceType, Square};

use super::movelist::MoveList;

/// ナイトの移動量 (drow, dcol)
const KNIGHT_DELTAS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/// キングの移動量 (drow, dcol)
const KING_DELTAS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// ビショップの方向
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// ルークの方向
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 生成モード
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenType {
    /// 指せる手（キャスリング・アンパッサン・成りを含む）
    Moves,
    /// 利き判定用
    ///
    /// ポーンは斜め前の升を（自駒が無ければ）駒の有無に関係なく出し、前進とアンパッサンは出さない。
    /// キャスリングは駒を取れないので出さない（利き判定の再帰も避けられる）。
    Attacks,
}

/// `color` の疑似合法手を生成する
///
/// 盤上を行優先で走査し、`color` の駒ごとに駒種別の生成を呼び出す。
pub fn generate_pseudo_legal(pos: &Position, color: Color, gen_type: GenType) -> MoveList {
    let mut generator = MoveGenerator::new(pos, color, gen_type);
    generator.generate_all();
    generator.moves
}

/// 指し手生成器
struct MoveGenerator<'a> {
    pos: &'a Position,
    us: Color,
    gen_type: GenType,
    moves: MoveList,
}

impl<'a> MoveGenerator<'a> {
    fn new(pos: &'a Position, us: Color, gen_type: GenType) -> Self {
        MoveGenerator {
            pos,
            us,
            gen_type,
            moves: MoveList::new(),
        }
    }

    fn generate_all(&mut self) {
        let pos = self.pos;
        for (from, piece) in pos.pieces_of(self.us) {
            match piece.piece_type {
                PieceType::Pawn => self.generate_pawn_moves(from),
                PieceType::Knight => self.generate_step_moves(from, PieceType::Knight, &KNIGHT_DELTAS),
                PieceType::Bishop => self.generate_sliding_moves(from, PieceType::Bishop, &BISHOP_DIRS),
                PieceType::Rook => self.generate_sliding_moves(from, PieceType::Rook, &ROOK_DIRS),
                PieceType::Queen => {
                    self.generate_sliding_moves(from, PieceType::Queen, &ROOK_DIRS);
                    self.generate_sliding_moves(from, PieceType::Queen, &BISHOP_DIRS);
                }
                PieceType::King => {
                    self.generate_step_moves(from, PieceType::King, &KING_DELTAS);
                    if self.gen_type == GenType::Moves {
                        self.generate_castling_moves(from);
                    }
                }
            }
        }
    }

    /// 自駒が無ければ行ける
    #[inline]
    fn can_land(&self, to: Square) -> bool {
        !self.pos.cell(to).is_color(self.us)
    }

    #[inline]
    fn is_enemy(&self, to: Square) -> bool {
        self.pos.cell(to).is_color(self.us.opponent())
    }

    #[inline]
    fn add(&mut self, piece_type: PieceType, from: Square, to: Square) {
        self.moves.push(Move::new(piece_type, self.us, from, to));
    }

    /// ポーンの手を追加。最奥段に届く手は成り4種に置き換える。
    fn add_pawn(&mut self, from: Square, to: Square) {
        if to.row() == self.us.promotion_row() && self.gen_type == GenType::Moves {
            for promotion in PieceType::PROMOTIONS {
                self.moves.push(Move::promoting(self.us, from, to, promotion));
            }
        } else {
            self.add(PieceType::Pawn, from, to);
        }
    }

    fn generate_pawn_moves(&mut self, from: Square) {
        let forward = self.us.forward();

        if self.gen_type == GenType::Attacks {
            for dcol in [-1, 1] {
                if let Some(to) = from.offset(forward, dcol) {
                    if self.can_land(to) {
                        self.add(PieceType::Pawn, from, to);
                    }
                }
            }
            return;
        }

        // 前進
        if let Some(one) = from.offset(forward, 0) {
            if self.pos.is_empty(one) {
                self.add_pawn(from, one);

                if from.row() == self.us.pawn_row() {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.pos.is_empty(two) {
                            self.add(PieceType::Pawn, from, two);
                        }
                    }
                }
            }
        }

        // 駒取り・アンパッサン
        for dcol in [-1, 1] {
            let Some(to) = from.offset(forward, dcol) else {
                continue;
            };
            if self.is_enemy(to) {
                self.add_pawn(from, to);
            } else if self.pos.en_passant() == Some(to) && self.pos.is_empty(to) {
                // 取られるポーンは自ポーンの真横（行き先と同じ筋）にいる
                let beside = from.offset(0, dcol);
                let has_victim = beside.is_some_and(|sq| {
                    self.pos.cell(sq) == Cell::occupied(PieceType::Pawn, self.us.opponent())
                });
                if has_victim {
                    self.add(PieceType::Pawn, from, to);
                }
            }
        }
    }

    /// ナイト・キングのような1歩の駒
    fn generate_step_moves(&mut self, from: Square, piece_type: PieceType, deltas: &[(i8, i8)]) {
        for &(drow, dcol) in deltas {
            if let Some(to) = from.offset(drow, dcol) {
                if self.can_land(to) {
                    self.add(piece_type, from, to);
                }
            }
        }
    }

    /// 飛び駒。最初にぶつかった駒で止まる（敵駒なら取る手を含める）。
    fn generate_sliding_moves(&mut self, from: Square, piece_type: PieceType, dirs: &[(i8, i8)]) {
        for &(drow, dcol) in dirs {
            let mut cur = from;
            while let Some(to) = cur.offset(drow, dcol) {
                match self.pos.cell(to) {
                    Cell::Empty => self.add(piece_type, from, to),
                    Cell::Occupied(piece) => {
                        if piece.color != self.us {
                            self.add(piece_type, from, to);
                        }
                        break;
                    }
                }
                cur = to;
            }
        }
    }

    /// キャスリング
    ///
    /// 翼ごとに独立して判定する:
    /// - キングが初期位置にいて未移動、その翼のルークが初期位置にいて未移動
    /// - キングとルークの間が空いている
    /// - キングの現在地・通過升・到着升に相手の利きが無い
    fn generate_castling_moves(&mut self, from: Square) {
        let home = self.us.home_row();
        if from != Square::new(home, 4) {
            return;
        }
        let pos = self.pos;
        let them = self.us.opponent();
        let rights = pos.castling_rights();

        for side in CastlingSide::ALL {
            if !rights.may_castle(self.us, side) {
                continue;
            }
            let rook_sq = Square::new(home, side.rook_from_col());
            if pos.cell(rook_sq) != Cell::occupied(PieceType::Rook, self.us) {
                continue;
            }
            if !side.empty_cols().iter().all(|&col| pos.is_empty(Square::new(home, col))) {
                continue;
            }
            if side
                .safe_cols()
                .iter()
                .any(|&col| pos.is_square_attacked(Square::new(home, col), them))
            {
                continue;
            }
            self.add(PieceType::King, from, Square::new(home, side.king_to_col()));
        }
    }
}
