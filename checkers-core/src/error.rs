//! 错误类型定义

use thiserror::Error;

/// 跳棋规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckersError {
    /// 无效的走法
    #[error("Invalid move: from ({from_row}, {from_col}) to ({to_row}, {to_col})")]
    InvalidMove {
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    },

    /// 没有棋子
    #[error("No piece at square ({row}, {col})")]
    NoPiece { row: u8, col: u8 },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },

    /// 无效的记谱
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 核心库操作结果类型
pub type Result<T> = std::result::Result<T, CheckersError>;
