//! 数字记谱法
//!
//! 标准跳棋记谱：深色格从上到下、从左到右编号 1-32，
//! 单步写作 `9-14`，跳吃写作 `9x18`，连跳列出每个落点 `9x18x27`。

use crate::error::{CheckersError, Result};
use crate::moves::Move;
use crate::piece::Square;

/// 数字记谱法
pub struct Notation;

impl Notation {
    /// 获取格子的编号（1-32，仅深色格有意义）
    pub fn square_number(sq: Square) -> u8 {
        sq.row * 4 + sq.col / 2 + 1
    }

    /// 从编号还原格子
    pub fn square_from_number(number: u8) -> Result<Square> {
        if !(1..=32).contains(&number) {
            return Err(CheckersError::InvalidNotation {
                reason: format!("Square number out of range: {}", number),
            });
        }
        let row = (number - 1) / 4;
        let ordinal = (number - 1) % 4;
        // 偶数行的深色格在奇数列
        let col = if row % 2 == 0 {
            ordinal * 2 + 1
        } else {
            ordinal * 2
        };
        Ok(Square::new_unchecked(row, col))
    }

    /// 将走法转换为记谱字符串
    ///
    /// 连跳的中间落点由吃子列表推算（每次落在被跳棋子的对侧）。
    pub fn format(mv: &Move) -> String {
        if mv.captures.is_empty() {
            return format!(
                "{}-{}",
                Self::square_number(mv.from),
                Self::square_number(mv.to)
            );
        }

        let mut parts = vec![Self::square_number(mv.from).to_string()];
        let mut current = mv.from;
        for &captured in &mv.captures {
            let row = 2 * captured.row as i8 - current.row as i8;
            let col = 2 * captured.col as i8 - current.col as i8;
            current = Square::new_unchecked(row as u8, col as u8);
            parts.push(Self::square_number(current).to_string());
        }
        parts.join("x")
    }

    /// 解析记谱字符串为格子序列（起点、各落点）
    pub fn parse(notation: &str) -> Result<Vec<Square>> {
        let separator = if notation.contains('x') { 'x' } else { '-' };
        let parts: Vec<&str> = notation.split(separator).collect();

        if parts.len() < 2 {
            return Err(CheckersError::InvalidNotation {
                reason: format!("Expected at least two squares: {}", notation),
            });
        }

        parts
            .iter()
            .map(|part| {
                let number = part.trim().parse::<u8>().map_err(|_| {
                    CheckersError::InvalidNotation {
                        reason: format!("Not a square number: {}", part),
                    }
                })?;
                Self::square_from_number(number)
            })
            .collect()
    }
}
