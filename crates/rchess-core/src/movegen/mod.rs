//! 指し手生成
//!
//! - `generator`: 駒種ごとの疑似合法手生成（自玉の安全は考慮しない）
//! - `legal`: 疑似合法手から自玉が取られる手を除いた合法手
//! - `movelist`: 重複なし・正準順の指し手集合

mod generator;
mod legal;
mod movelist;


pub use generator::{generate_pseudo_legal, GenType};
pub use movelist::MoveList;
