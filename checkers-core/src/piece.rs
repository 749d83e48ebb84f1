//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 白方普通棋子向下走，红方向上走
const WHITE_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const RED_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 红方（先手，在下方，向上走）
    Red,
    /// 白方（后手，在上方，向下走）
    White,
}

impl Color {
    /// 获取对方阵营
    pub fn opponent(&self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// 前进方向（行坐标的增量）
    pub fn forward(&self) -> i8 {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// 升王行（普通棋子到达该行升为王）
    pub fn crowning_row(&self) -> u8 {
        match self {
            Color::Red => 0,
            Color::White => (BOARD_SIZE - 1) as u8,
        }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::White => 'w',
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'r' | 'R' => Some(Color::Red),
            'w' | 'W' => Some(Color::White),
            _ => None,
        }
    }
}

/// 棋子等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// 普通棋子
    Man,
    /// 王
    King,
}

impl Rank {
    /// 获取棋子的基础分值（用于 AI 评估）
    pub fn value(&self) -> i32 {
        match self {
            Rank::Man => 100,
            Rank::King => 150,
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    /// 创建普通棋子
    pub fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    /// 创建王
    pub fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    /// 是否为王
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// 该棋子可走的对角方向
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.rank, self.color) {
            (Rank::King, _) => &KING_DIRECTIONS,
            (Rank::Man, Color::White) => &WHITE_MAN_DIRECTIONS,
            (Rank::Man, Color::Red) => &RED_MAN_DIRECTIONS,
        }
    }

    /// 获取棋子显示字符
    pub fn display_char(&self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => '⛀',
            (Color::White, Rank::King) => '⛁',
            (Color::Red, Rank::Man) => '⛂',
            (Color::Red, Rank::King) => '⛃',
        }
    }

    /// 获取 FEN 字符（普通棋子小写，王大写）
    pub fn to_fen_char(&self) -> char {
        let c = self.color.to_fen_char();
        match self.rank {
            Rank::Man => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let color = Color::from_fen_char(c)?;
        let rank = if c.is_ascii_uppercase() {
            Rank::King
        } else {
            Rank::Man
        };
        Some(Piece { color, rank })
    }

    /// 获取棋子分值
    pub fn value(&self) -> i32 {
        self.rank.value()
    }
}

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    /// 行 (0-7，0 在上方)
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Square {
    /// 创建新格子
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查格子是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 检查是否为深色格子（棋子只能落在深色格）
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// 获取偏移后的格子
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let new_row = self.row as i8 + dr;
        let new_col = self.col as i8 + dc;
        if new_row >= 0
            && (new_row as usize) < BOARD_SIZE
            && new_col >= 0
            && (new_col as usize) < BOARD_SIZE
        {
            Some(Square {
                row: new_row as u8,
                col: new_col as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Square {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
