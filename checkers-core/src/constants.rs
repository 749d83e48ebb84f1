//! 常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 8;

/// 可用的深色格子数量
pub const DARK_SQUARES: usize = 32;

/// 每方初始棋子数
pub const PIECES_PER_SIDE: usize = 12;
