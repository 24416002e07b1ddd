//! 局面本体

use crate::types::{CastlingRights, Cell, Color, Move, Piece, PieceType, Square};

/// 初期配置の大駒の並び（a筋からh筋）
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 局面
///
/// 盤面は固定長配列、棋譜は所有する `Vec` なので `Clone` は常に深いコピーになる。
/// 合法手判定ではこのコピーに対して `do_move` を行い、元の局面には触れない。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// 盤面 [row][col]
    board: [[Cell; 8]; 8],
    /// キャスリング権（単調フラグ）
    pub(super) castling: CastlingRights,
    /// 直前の手がポーンの2マス前進だった場合に、取る側のポーンが着地する升
    pub(super) en_passant: Option<Square>,
    /// 適用済みの指し手（生成・合法性判定では参照しない）
    pub(super) history: Vec<Move>,
}

impl Position {
    /// 平手の初期局面
    pub fn startpos() -> Self {
        let mut pos = Position::empty();
        pos.initialize();
        pos
    }

    /// 駒のない局面（キャスリング権は全て残った状態）
    pub(crate) fn empty() -> Self {
        Position {
            board: [[Cell::Empty; 8]; 8],
            castling: CastlingRights::default(),
            en_passant: None,
            history: Vec::new(),
        }
    }

    /// 初期局面に戻す
    ///
    /// 盤面を32枚の初期配置にし、キャスリングフラグ・アンパッサン升・棋譜をクリアする。
    pub fn initialize(&mut self) {
        self.board = [[Cell::Empty; 8]; 8];
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                self.put_piece(Square::new(color.home_row(), col), Piece::new(piece_type, color));
                self.put_piece(
                    Square::new(color.pawn_row(), col),
                    Piece::new(PieceType::Pawn, color),
                );
            }
        }
        self.castling = CastlingRights::default();
        self.en_passant = None;
        self.history.clear();
    }

    /// 升の中身
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.board[sq.row() as usize][sq.col() as usize]
    }

    /// 升にある駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).piece()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_empty()
    }

    #[inline]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling
    }

    /// 現在のアンパッサン升（直前の手の効果のみを表す）
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// 適用済みの指し手（古い順）
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 盤上の駒を行優先で列挙
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// 指定手番の駒を行優先で列挙
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// キングの升
    ///
    /// 正常な局面では各手番に1枚だけ存在する。見つからなければ None。
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// 合法手判定用のスナップショット
    ///
    /// 盤面・キャスリング権・アンパッサン升をコピーする。棋譜は判定に使わないので空にする。
    pub(crate) fn scratch(&self) -> Position {
        Position {
            board: self.board,
            castling: self.castling,
            en_passant: self.en_passant,
            history: Vec::new(),
        }
    }

    /// 升に駒を置く（既存の駒は上書き）
    #[inline]
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.set_cell(sq, Cell::Occupied(piece));
    }

    /// 升から駒を取り除く
    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq);
        self.set_cell(sq, Cell::Empty);
        piece
    }

    #[inline]
    fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.board[sq.row() as usize][sq.col() as usize] = cell;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}
