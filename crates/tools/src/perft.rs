//! perft（合法手の木のノード数）
//!
//! 既知のノード数と比較することで、生成・合法性判定・着手適用をまとめて検証する。

use rchess_core::{Color, Move, Position};

/// `color` 手番から `depth` 手先までの末端ノード数
pub fn perft(pos: &Position, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.legal_moves(color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        let mut child = pos.clone();
        child.do_move(*mv);
        nodes += perft(&child, color.opponent(), depth - 1);
    }
    nodes
}

/// ルートの各合法手ごとの perft（正準順）
pub fn divide(pos: &Position, color: Color, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    pos.legal_moves(color)
        .into_iter()
        .map(|mv| {
            let mut child = pos.clone();
            child.do_move(mv);
            (mv, perft(&child, color.opponent(), depth - 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_startpos_shallow() {
        let pos = Position::startpos();
        assert_eq!(perft(&pos, Color::White, 0), 1);
        assert_eq!(perft(&pos, Color::White, 1), 20);
        assert_eq!(perft(&pos, Color::White, 2), 400);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let pos = Position::startpos();
        let split = divide(&pos, Color::White, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, n)| *n == 20));
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&pos, Color::White, 2));
    }
}
