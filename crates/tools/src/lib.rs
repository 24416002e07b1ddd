//! rchess-core のコマンドラインツール群の共通部分
//!
//! ルールエンジン本体は盤面の入出力を持たないため、外部表記との変換はここで行う。
//!
//! - `notation`: FEN 局面・座標表記の指し手（"e2e4", "a7a8q"）の読み込み
//! - `display`: 盤面のテキスト描画
//! - `perft`: 合法手生成の検証用ノード数計測

pub mod display;
pub mod notation;
pub mod perft;

pub use display::render_board;
pub use notation::{NotationError, parse_fen, parse_move, parse_square, STARTPOS_FEN};
pub use perft::{divide, perft};
