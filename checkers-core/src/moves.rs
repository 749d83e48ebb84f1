//! 走法生成
//!
//! 单步斜走和连跳吃子。吃子不是强制的，与单步走法并列生成。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Color, Piece, Square};

/// 走法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始格子
    pub from: Square,
    /// 目标格子
    pub to: Square,
    /// 被跳吃的格子（连跳时按跳的顺序排列）
    pub captures: Vec<Square>,
}

impl Move {
    /// 创建单步走法
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captures: Vec::new(),
        }
    }

    /// 创建带吃子的走法
    pub fn with_captures(from: Square, to: Square, captures: Vec<Square>) -> Self {
        Self { from, to, captures }
    }

    /// 是否为吃子走法
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的所有走法
    ///
    /// 棋子按行、列顺序枚举，每个棋子的走法按生成顺序排列，
    /// 整体顺序完全确定，保证搜索结果可复现。
    pub fn generate_all(board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (sq, piece) in board.pieces(color) {
            Self::generate_piece_moves(board, sq, piece, &mut moves);
        }
        moves
    }

    /// 生成指定格子上棋子的所有走法（格子为空则返回空列表）
    pub fn generate_for_square(board: &Board, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(piece) = board.get(from) {
            Self::generate_piece_moves(board, from, piece, &mut moves);
        }
        moves
    }

    /// 生成所有后继局面：每个走法应用到一份独立的棋盘副本上
    ///
    /// 输入棋盘不会被修改。
    pub fn successors(board: &Board, color: Color) -> Vec<Board> {
        let mut boards = Vec::new();
        for mv in Self::generate_all(board, color) {
            let mut next = board.clone();
            next.apply_move(&mv);
            boards.push(next);
        }
        boards
    }

    /// 生成单个棋子的走法：先单步，再连跳
    fn generate_piece_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        for &(dr, dc) in piece.directions() {
            if let Some(to) = from.offset(dr, dc) {
                if board.get(to).is_none() {
                    moves.push(Move::new(from, to));
                }
            }
        }

        let mut captured = Vec::new();
        Self::find_jumps(board, from, from, piece, &mut captured, moves);
    }

    /// 深度优先枚举连跳：跳过相邻敌子落在其后的空格，
    /// 落点本身是合法的停止点，同时继续尝试延伸跳吃链
    fn find_jumps(
        board: &Board,
        origin: Square,
        from: Square,
        piece: Piece,
        captured: &mut Vec<Square>,
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in piece.directions() {
            let mid = match from.offset(dr, dc) {
                Some(sq) => sq,
                None => continue,
            };
            let to = match mid.offset(dr, dc) {
                Some(sq) => sq,
                None => continue,
            };

            // 被跳的必须是未吃过的敌子，落点必须为空
            match board.get(mid) {
                Some(target) if target.color != piece.color => {
                    if captured.contains(&mid) || board.get(to).is_some() {
                        continue;
                    }
                }
                _ => continue,
            }

            captured.push(mid);
            Self::push_move(moves, Move::with_captures(origin, to, captured.clone()));
            Self::find_jumps(board, origin, to, piece, captured, moves);
            captured.pop();
        }
    }

    /// 添加走法，同一棋子到同一目标格子只保留先生成的一条
    ///
    /// 去重按 (起点, 终点) 进行：不同棋子跳到同一格子是不同的走法，
    /// 都要保留。
    fn push_move(moves: &mut Vec<Move>, mv: Move) {
        if !moves.iter().any(|m| m.from == mv.from && m.to == mv.to) {
            moves.push(mv);
        }
    }
}
