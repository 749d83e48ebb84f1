//! FEN 格式解析和生成
//!
//! 跳棋 FEN 格式：
//! `<棋盘> <走子方>`
//!
//! 棋盘从上（第 0 行）到下（第 7 行），每行用数字表示连续空格；
//! `r`/`w` 为普通棋子，`R`/`W` 为王。
//!
//! 示例：
//! `1w1w1w1w/w1w1w1w1/1w1w1w1w/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 r`

use crate::board::{Board, BoardState};
use crate::constants::BOARD_SIZE;
use crate::error::CheckersError;
use crate::piece::{Color, Piece, Square};

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "1w1w1w1w/w1w1w1w1/1w1w1w1w/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 r";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为棋局状态
    pub fn parse(fen: &str) -> Result<BoardState, CheckersError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(CheckersError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 解析走子方（默认红方先手）
        let current_turn = if parts.len() > 1 {
            Color::from_fen_char(parts[1].chars().next().unwrap_or('r')).unwrap_or(Color::Red)
        } else {
            Color::Red
        };

        Ok(BoardState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, CheckersError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(CheckersError::InvalidFen {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0u8;

            for c in row.chars() {
                if col as usize >= BOARD_SIZE {
                    return Err(CheckersError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if c.is_ascii_digit() {
                    // 连续空格数量
                    let empty_count = c.to_digit(10).unwrap_or(0) as u8;
                    col += empty_count;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    let sq = Square::new_unchecked(row_idx as u8, col);
                    if !sq.is_dark() {
                        return Err(CheckersError::InvalidFen {
                            reason: format!("Piece on light square ({}, {})", row_idx, col),
                        });
                    }
                    board.set(sq, Some(piece));
                    col += 1;
                } else {
                    return Err(CheckersError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                }
            }

            if col as usize != BOARD_SIZE {
                return Err(CheckersError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    /// 将棋局状态转换为 FEN 字符串
    pub fn to_string(state: &BoardState) -> String {
        format!(
            "{} {}",
            Self::board_to_string(&state.board),
            state.current_turn.to_fen_char()
        )
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE as u8 {
            let mut row_str = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE as u8 {
                if let Some(piece) = board.get(Square::new_unchecked(row, col)) {
                    if empty_count > 0 {
                        row_str.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row_str.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row_str.push_str(&empty_count.to_string());
            }

            rows.push(row_str);
        }

        rows.join("/")
    }

    /// 解析初始局面
    pub fn initial() -> BoardState {
        Self::parse(INITIAL_FEN).expect("Initial FEN should be valid")
    }
}
