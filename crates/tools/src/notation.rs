//! FEN と座標表記の読み込み
//!
//! 盤の行0が8段目、列0がa筋。

use rchess_core::{
    CastlingSide, Color, Game, Move, Piece, PieceType, Position, PositionBuilder, PositionError, Square,
};

/// 平手初期局面の FEN
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// 表記の読み込みエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Invalid rank count: {0} (expected 8)")]
    InvalidRankCount(usize),

    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Unknown piece character: {0}")]
    UnknownPieceChar(char),

    #[error("Invalid side to move: {0} (expected 'w' or 'b')")]
    InvalidSideToMove(String),

    #[error("Invalid castling field: {0}")]
    InvalidCastling(String),

    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("Invalid move format: {0}")]
    InvalidMoveFormat(String),

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// 升の表記（"e4" など）を読む
pub fn parse_square(s: &str) -> Result<Square, NotationError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(s.to_string()));
    }
    let col = match bytes[0] {
        b @ b'a'..=b'h' => b - b'a',
        _ => return Err(NotationError::InvalidSquare(s.to_string())),
    };
    let row = match bytes[1] {
        b @ b'1'..=b'8' => 7 - (b - b'1'),
        _ => return Err(NotationError::InvalidSquare(s.to_string())),
    };
    Ok(Square::new(row, col))
}

/// FEN を読んで対局を作る
///
/// 手数フィールド（halfmove / fullmove）は省略可能で、あれば数値であることだけ確認する。
/// キャスリング権は該当するキングとルークが初期位置にいる場合のみ有効になる。
pub fn parse_fen(fen: &str) -> Result<Game, NotationError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 || fields.len() > 6 {
        return Err(NotationError::InvalidFen(fen.to_string()));
    }
    for counter in &fields[4..] {
        if counter.parse::<u32>().is_err() {
            return Err(NotationError::InvalidFen(fen.to_string()));
        }
    }

    let mut builder = PositionBuilder::new();
    parse_placement(&mut builder, fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(NotationError::InvalidSideToMove(other.to_string())),
    };

    if fields[2] != "-" {
        for c in fields[2].chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastlingSide::KingSide),
                'Q' => (Color::White, CastlingSide::QueenSide),
                'k' => (Color::Black, CastlingSide::KingSide),
                'q' => (Color::Black, CastlingSide::QueenSide),
                _ => return Err(NotationError::InvalidCastling(fields[2].to_string())),
            };
            builder.castling(color, side);
        }
    }

    if fields[3] != "-" {
        builder.en_passant(Some(parse_square(fields[3])?));
    }

    let position = builder.build()?;
    Ok(Game::from_position(position, side_to_move)?)
}

fn parse_placement(builder: &mut PositionBuilder, placement: &str) -> Result<(), NotationError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::InvalidRankCount(ranks.len()));
    }

    for (row, rank) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(NotationError::InvalidRank(rank.to_string()));
                }
                col += skip as u8;
            } else {
                let piece = Piece::from_char(c).ok_or(NotationError::UnknownPieceChar(c))?;
                if col >= 8 {
                    return Err(NotationError::InvalidRank(rank.to_string()));
                }
                builder.piece(Square::new(row as u8, col), piece.piece_type, piece.color);
                col += 1;
            }
            if col > 8 {
                return Err(NotationError::InvalidRank(rank.to_string()));
            }
        }
        if col != 8 {
            return Err(NotationError::InvalidRank(rank.to_string()));
        }
    }
    Ok(())
}

/// 座標表記の指し手（"e2e4", "a7a8q"）を `color` の合法手と照合する
///
/// 返すのは生成された合法手そのもの（駒種・手番が埋まっている）。
pub fn parse_move(pos: &Position, color: Color, s: &str) -> Result<Move, NotationError> {
    if !s.is_ascii() || (s.len() != 4 && s.len() != 5) {
        return Err(NotationError::InvalidMoveFormat(s.to_string()));
    }
    let from = parse_square(&s[0..2])?;
    let to = parse_square(&s[2..4])?;
    let promotion = match s[4..].chars().next() {
        None => None,
        Some(c) => match PieceType::from_char(c) {
            Some(piece_type) if PieceType::PROMOTIONS.contains(&piece_type) => Some(piece_type),
            _ => return Err(NotationError::InvalidMoveFormat(s.to_string())),
        },
    };

    pos.legal_moves(color)
        .find(from, to)
        .find(|mv| mv.promotion == promotion)
        .copied()
        .ok_or_else(|| NotationError::IllegalMove(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("a8").unwrap(), Square::new(0, 0));
        assert_eq!(parse_square("e2").unwrap(), Square::new(6, 4));
        assert_eq!(parse_square("h1").unwrap(), Square::new(7, 7));
        assert!(parse_square("i1").is_err());
        assert!(parse_square("a9").is_err());
        assert!(parse_square("e").is_err());
    }

    #[test]
    fn test_startpos_fen_matches_startpos() {
        let game = parse_fen(STARTPOS_FEN).unwrap();
        assert_eq!(game.position(), &Position::startpos());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_fen_en_passant_and_side() {
        let game =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.position().en_passant(), Some(Square::new(5, 4)));
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8 w - -").unwrap_err(),
            NotationError::InvalidRankCount(7)
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K2X w - -").unwrap_err(),
            NotationError::UnknownPieceChar('X')
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - -").unwrap_err(),
            NotationError::InvalidSideToMove(_)
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w - -").unwrap_err(),
            NotationError::InvalidRank(_)
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - -").unwrap_err(),
            NotationError::Position(PositionError::KingCount { .. })
        ));
    }

    #[test]
    fn test_parse_move() {
        let pos = Position::startpos();
        let mv = parse_move(&pos, Color::White, "g1f3").unwrap();
        assert_eq!(mv.piece_type, PieceType::Knight);
        assert!(matches!(
            parse_move(&pos, Color::White, "e2e5").unwrap_err(),
            NotationError::IllegalMove(_)
        ));
        assert!(matches!(
            parse_move(&pos, Color::White, "e2e4x").unwrap_err(),
            NotationError::InvalidMoveFormat(_)
        ));
    }

    #[test]
    fn test_parse_promotion_move() {
        let game = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let pos = game.position();
        let mv = parse_move(pos, Color::White, "a7a8n").unwrap();
        assert_eq!(mv.promotion, Some(PieceType::Knight));
        // 昇格先を省略した手は合法手に無い
        assert!(parse_move(pos, Color::White, "a7a8").is_err());
    }
}
