//! # rchess-core
//!
//! チェスのルールエンジン。盤面の保持・合法手生成・指し手の適用を行う。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, PieceType, Piece, Cell, Square, Move, CastlingRights）
//! - `position`: 局面表現、do_move、利き判定（王手判定）
//! - `movegen`: 疑似合法手生成と合法手フィルタ
//! - `game`: 手番管理付きの薄いラッパー（合法性チェック付きの着手、終局判定）
//! - `error`: エラー型
//!
//! 盤面の描画や指し手文字列の入力は扱わない（`tools` クレート側の責務）。

pub mod error;
pub mod game;
pub mod movegen;
pub mod position;
pub mod types;

pub use error::{MoveError, PositionError};
pub use game::{Game, GameStatus};
pub use movegen::MoveList;
pub use position::{Position, PositionBuilder};
pub use types::{CastlingRights, CastlingSide, Cell, Color, Move, Piece, PieceType, SideCastling, Square};
