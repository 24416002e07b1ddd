//! 基本型

mod castling;
mod color;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide, SideCastling};
pub use color::Color;
pub use moves::Move;
pub use piece::{Cell, Piece, PieceType};
pub use square::Square;
