//! 西洋跳棋核心库
//!
//! 包含:
//! - 棋子、棋盘、格子等核心数据结构
//! - 走法生成（单步和连跳吃子）
//! - 局面记法 (FEN) 和走法记法 (1-32 数字记谱)
//! - 棋谱格式 (JSON)

mod board;
mod constants;
mod error;
mod fen;
mod moves;
mod notation;
mod piece;
mod record;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{CheckersError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Color, Piece, Rank, Square};
pub use record::{GameMetadata, GameRecord, GameResult, MoveRecord};
