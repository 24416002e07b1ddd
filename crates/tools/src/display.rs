//! 盤面のテキスト描画

use std::fmt::Write;

use rchess_core::{Position, Square};

/// 盤面を8行のテキストにする
///
/// 行0（8段目）から順に、白は大文字・黒は小文字・空き升は `.` で、升ごとに空白で区切る。
/// `with_coords` なら段番号と筋の文字を添える。
pub fn render_board(pos: &Position, with_coords: bool) -> String {
    let mut out = String::with_capacity(256);
    for row in 0..8u8 {
        if with_coords {
            let _ = write!(out, "{} ", 8 - row);
        }
        let cells: Vec<String> = (0..8u8)
            .map(|col| match pos.piece_on(Square::new(row, col)) {
                Some(piece) => piece.to_char().to_string(),
                None => ".".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    if with_coords {
        out.push_str("  a b c d e f g h\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_startpos() {
        let text = render_board(&Position::startpos(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[1], "p p p p p p p p");
        assert_eq!(lines[4], ". . . . . . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }

    #[test]
    fn test_render_with_coords() {
        let text = render_board(&Position::startpos(), true);
        assert!(text.starts_with("8 r n b"));
        assert!(text.ends_with("  a b c d e f g h\n"));
    }
}
