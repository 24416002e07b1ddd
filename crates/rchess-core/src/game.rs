//! 手番管理付きの対局
//!
//! `Position` は手番を持たず、`do_move` は渡された手を検証せずに適用する。
//! `Game` は手番を保持し、合法手集合に含まれる手だけを受け付ける。

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{MoveError, MoveResult, PositionError, PositionResult};
use crate::movegen::MoveList;
use crate::position::Position;
use crate::types::{Color, Move};

/// 局面の状態（手番側から見たもの）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 対局中（王手なし）
    Ongoing,
    /// 王手されているが合法手がある
    Check,
    /// 王手されていて合法手がない
    Checkmate,
    /// 王手されていないが合法手がない
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// 対局
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    side_to_move: Color,
}

impl Game {
    /// 初期局面・白番から開始
    pub fn new() -> Self {
        Game {
            position: Position::startpos(),
            side_to_move: Color::White,
        }
    }

    /// 任意局面から開始
    ///
    /// 両手番のキングが盤上にあることを確認する。
    pub fn from_position(position: Position, side_to_move: Color) -> PositionResult<Self> {
        for color in Color::ALL {
            if position.king_square(color).is_none() {
                return Err(PositionError::KingNotFound(color));
            }
        }
        Ok(Game {
            position,
            side_to_move,
        })
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 手番側の合法手
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves(self.side_to_move)
    }

    /// 手番側が王手されているか
    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check(self.side_to_move)
    }

    /// 手番側の状態
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check();
        let has_moves = !self.legal_moves().is_empty();
        match (in_check, has_moves) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// 指し手を検証して適用し、手番を交代する
    ///
    /// `mv` の from/to/promotion が合法手のいずれかと一致すれば、その合法手（駒種・手番は
    /// 生成側のもの）を適用する。一致しなければ局面は変わらない。
    pub fn play(&mut self, mv: Move) -> MoveResult<()> {
        let legal = self.legal_moves();
        if legal.is_empty() {
            warn!("play({mv}) after game end");
            return Err(MoveError::GameOver);
        }

        let Some(&canonical) = legal.iter().find(|m| **m == mv) else {
            warn!("Illegal move for {}: {mv}", self.side_to_move);
            return Err(MoveError::IllegalMove {
                mv,
                side: self.side_to_move,
            });
        };

        debug!("{} plays {canonical}", self.side_to_move);
        self.position.do_move(canonical);
        self.side_to_move = self.side_to_move.opponent();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
