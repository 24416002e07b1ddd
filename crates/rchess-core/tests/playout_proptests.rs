//! ランダム対局での不変条件

use proptest::prelude::*;
use rand::RngCore;
use rand_xoshiro::rand_core::SeedableRng;
use rchess_core::{CastlingSide, Color, Move, PieceType, Position};

/// (king_moved, rook_a_moved, rook_h_moved) を両手番分
fn castling_flags(pos: &Position) -> [(bool, bool, bool); 2] {
    Color::ALL.map(|color| {
        let side = pos.castling_rights().side(color);
        (
            side.king_moved(),
            side.rook_moved(CastlingSide::QueenSide),
            side.rook_moved(CastlingSide::KingSide),
        )
    })
}

fn flags_monotonic(before: (bool, bool, bool), after: (bool, bool, bool)) -> bool {
    (!before.0 || after.0) && (!before.1 || after.1) && (!before.2 || after.2)
}

fn king_count(pos: &Position, color: Color) -> usize {
    pos.pieces_of(color).filter(|(_, p)| p.piece_type == PieceType::King).count()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]

    #[test]
    fn prop_random_playout_invariants(seed in any::<u64>()) {
        let mut rng = rand_xoshiro::Xoshiro128Plus::seed_from_u64(seed);
        let mut pos = Position::startpos();
        let mut color = Color::White;

        for ply in 0..40 {
            let snapshot = pos.clone();
            let legal = pos.legal_moves(color);
            let pseudo = pos.pseudo_legal_moves(color);

            // 生成は局面を変えない
            prop_assert_eq!(&pos, &snapshot);
            prop_assert_eq!(pos.legal_moves(color), legal.clone());

            for mv in &legal {
                prop_assert!(pseudo.contains(mv));
                let piece = pos.piece_on(mv.from);
                prop_assert!(piece.is_some_and(|p| p.is(mv.piece_type, color)), "{} from empty/foreign square", mv);

                let mut after = pos.clone();
                after.do_move(*mv);
                prop_assert!(!after.is_in_check(color), "{} leaves king in check", mv);
                prop_assert!(after.pieces().count() <= pos.pieces().count());
            }

            if legal.is_empty() {
                break;
            }
            let moves: Vec<Move> = legal.to_vec();
            let mv = moves[(rng.next_u32() as usize) % moves.len()];

            let flags_before = castling_flags(&pos);
            pos.do_move(mv);
            let flags_after = castling_flags(&pos);

            for (before, after) in flags_before.into_iter().zip(flags_after) {
                prop_assert!(flags_monotonic(before, after), "castling flags regressed at ply {}", ply);
            }
            prop_assert_eq!(pos.en_passant().is_some(), mv.is_double_pawn_push());
            prop_assert_eq!(pos.history().last(), Some(&mv));
            prop_assert_eq!(pos.history().len(), ply + 1);
            for side in Color::ALL {
                prop_assert_eq!(king_count(&pos, side), 1);
            }

            color = color.opponent();
        }
    }
}
