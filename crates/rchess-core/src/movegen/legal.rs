//! 合法手フィルタ
//!
//! 疑似合法手のうち、指した後に自玉へ王手がかかっていないものだけを残す。

use log::trace;

use crate::position::Position;
use crate::types::{Color, Move};

use super::generator::{generate_pseudo_legal, GenType};
use super::movelist::MoveList;

impl Position {
    /// `color` の疑似合法手（自玉の安全は見ない）
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        generate_pseudo_legal(self, color, GenType::Moves)
    }

    /// `color` の合法手
    ///
    /// 候補手ごとに局面のスナップショットへ適用し、自玉に利きが無いものだけを残す。
    /// `self` は変更しないので、同じ局面に対する呼び出しは常に同じ結果になる。
    ///
    /// # Panics
    /// `color` のキングが盤上に無い場合（`Position::is_in_check` を参照）。
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let pseudo = self.pseudo_legal_moves(color);
        let pseudo_count = pseudo.len();

        let legal: MoveList = pseudo.into_iter().filter(|&mv| self.leaves_king_safe(mv)).collect();

        trace!("legal_moves({color}): pseudo={pseudo_count} legal={}", legal.len());
        legal
    }

    /// `mv.color` 側の合法手に含まれるか
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves(mv.color).contains(&mv)
    }

    /// スナップショットに `mv` を適用して自玉の安全を確認
    fn leaves_king_safe(&self, mv: Move) -> bool {
        let mut scratch = self.scratch();
        scratch.do_move(mv);
        !scratch.is_in_check(mv.color)
    }
}
