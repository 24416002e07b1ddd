//! 局面表現モジュール
//!
//! チェスの局面を表現し、指し手の適用と利き判定を行う。
//!
//! - `Position`: 局面本体（8×8の盤面配列・キャスリング権・アンパッサン升・棋譜）
//! - `PositionBuilder`: 任意局面の組み立て（テスト・外部の局面入力用）
//! - `do_move`: 指し手の適用（キャスリング・アンパッサン・成りを含む）
//! - `is_square_attacked` / `is_in_check`: 利き判定と王手判定
//!
//! キャスリング権とアンパッサン升は `do_move` を通じてのみ更新され、
//! 盤面と常に整合しているように保つ。

mod attack;
mod builder;
mod do_move;
mod pos;

pub use builder::PositionBuilder;
pub use pos::Position;
