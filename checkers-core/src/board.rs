//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{CheckersError, Result};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Color, Piece, Rank, Square};
use crate::record::GameResult;

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// 创建初始棋盘
    ///
    /// 白方占上方三行，红方占下方三行，棋子只放在深色格上
    pub fn initial() -> Self {
        let mut board = Self::empty();

        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let sq = Square::new_unchecked(row, col);
                if !sq.is_dark() {
                    continue;
                }
                if row < 3 {
                    board.set(sq, Some(Piece::man(Color::White)));
                } else if row > 4 {
                    board.set(sq, Some(Piece::man(Color::Red)));
                }
            }
        }

        board
    }

    /// 获取指定格子的棋子
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.squares[sq.to_index()]
        } else {
            None
        }
    }

    /// 设置指定格子的棋子
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.is_valid() {
            self.squares[sq.to_index()] = piece;
        }
    }

    /// 获取指定阵营的所有棋子位置（按行、列顺序，保证确定性）
    pub fn pieces(&self, color: Color) -> Vec<(Square, Piece)> {
        let mut result = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let sq = Square::new_unchecked(row, col);
                if let Some(piece) = self.get(sq) {
                    if piece.color == color {
                        result.push((sq, piece));
                    }
                }
            }
        }
        result
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Square, Piece)> {
        let mut result = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let sq = Square::new_unchecked(row, col);
                if let Some(piece) = self.get(sq) {
                    result.push((sq, piece));
                }
            }
        }
        result
    }

    /// 应用走法：移动棋子，移除被跳吃的棋子，到达底线升王
    pub fn apply_move(&mut self, mv: &Move) {
        if let Some(mut piece) = self.get(mv.from) {
            self.set(mv.from, None);
            for &captured in &mv.captures {
                self.set(captured, None);
            }
            if piece.rank == Rank::Man && mv.to.row == piece.color.crowning_row() {
                piece.rank = Rank::King;
            }
            self.set(mv.to, Some(piece));
        }
    }

    /// 判断胜负：一方棋子被吃光则对方获胜
    pub fn winner(&self) -> Option<Color> {
        let red_left = self.pieces(Color::Red).len();
        let white_left = self.pieces(Color::White).len();

        if red_left == 0 {
            Some(Color::White)
        } else if white_left == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 完整的棋局状态（包含走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Color,
}

impl BoardState {
    /// 创建初始状态（红方先手）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Color::Red,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Color) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// 走一步棋（校验合法性），成功后切换走子方
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move> {
        if self.result().is_some() {
            return Err(CheckersError::GameOver);
        }

        let piece = self.board.get(from).ok_or(CheckersError::NoPiece {
            row: from.row,
            col: from.col,
        })?;

        if piece.color != self.current_turn {
            return Err(CheckersError::NotYourTurn);
        }

        let mv = MoveGenerator::generate_for_square(&self.board, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(CheckersError::InvalidMove {
                from_row: from.row,
                from_col: from.col,
                to_row: to.row,
                to_col: to.col,
            })?;

        self.board.apply_move(&mv);
        self.switch_turn();
        Ok(mv)
    }

    /// 判断对局结果：棋子被吃光或当前走子方无棋可走则判负
    pub fn result(&self) -> Option<GameResult> {
        if let Some(winner) = self.board.winner() {
            return Some(GameResult::from_winner(winner));
        }

        if MoveGenerator::generate_all(&self.board, self.current_turn).is_empty() {
            return Some(GameResult::from_winner(self.current_turn.opponent()));
        }

        None
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}
