//! 棋局评估函数

use checkers_core::{Board, Color, Piece, Rank, Square};

/// 评估器
pub struct Evaluator;

/// 位置分值表（白方视角，红方需要镜像）
mod position_tables {
    /// 普通棋子按行的推进加成（越接近升王行分值越高，
    /// 最后一行不会有普通棋子——到达即升王）
    pub const MAN_ADVANCE: [i32; 8] = [0, 2, 4, 8, 12, 16, 20, 0];
}

impl Evaluator {
    /// 评估棋局（白方视角，正值对白方有利）
    pub fn evaluate(board: &Board) -> i32 {
        let mut score = 0;

        for (sq, piece) in board.all_pieces() {
            let piece_score = Self::evaluate_piece(sq, piece);
            match piece.color {
                Color::White => score += piece_score,
                Color::Red => score -= piece_score,
            }
        }

        score
    }

    /// 评估单个棋子的价值（包括位置分）
    fn evaluate_piece(sq: Square, piece: Piece) -> i32 {
        piece.value() + Self::position_bonus(sq, piece)
    }

    /// 获取位置加成分
    fn position_bonus(sq: Square, piece: Piece) -> i32 {
        // 王没有推进加成
        if piece.rank == Rank::King {
            return 0;
        }

        let row = match piece.color {
            Color::White => sq.row as usize,
            // 红方向上走，行坐标翻转
            Color::Red => 7 - sq.row as usize,
        };
        position_tables::MAN_ADVANCE[row]
    }

    /// 快速评估（仅计算子力差）
    pub fn evaluate_material(board: &Board) -> i32 {
        let mut score = 0;
        for (_, piece) in board.all_pieces() {
            match piece.color {
                Color::White => score += piece.value(),
                Color::Red => score -= piece.value(),
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Fen;

    #[test]
    fn test_initial_evaluation() {
        let board = Board::initial();

        // 初始局面完全对称，评估应为 0
        assert_eq!(Evaluator::evaluate_material(&board), 0);
        assert_eq!(Evaluator::evaluate(&board), 0);
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(Rank::Man.value(), 100);
        assert_eq!(Rank::King.value(), 150);
    }

    #[test]
    fn test_material_advantage() {
        // 白方多一个棋子
        let state = Fen::parse("1w1w4/8/8/8/8/8/8/4r3 w").unwrap();
        let score = Evaluator::evaluate_material(&state.board);
        assert_eq!(score, 100);

        // 王比普通棋子更有价值
        let state = Fen::parse("1W6/8/8/8/8/8/8/4r3 w").unwrap();
        let score = Evaluator::evaluate_material(&state.board);
        assert_eq!(score, 50);
    }

    #[test]
    fn test_advancement_bonus() {
        // 推进的白子比留在后排的分数高
        let advanced = Fen::parse("8/8/8/8/8/2w5/8/4r3 w").unwrap();
        let back = Fen::parse("1w6/8/8/8/8/8/8/4r3 w").unwrap();

        let advanced_score = Evaluator::evaluate(&advanced.board);
        let back_score = Evaluator::evaluate(&back.board);
        assert!(
            advanced_score > back_score,
            "advanced man should score higher: {} vs {}",
            advanced_score,
            back_score
        );
    }

    #[test]
    fn test_red_mirror() {
        // 对称位置上的红白棋子分数相互抵消
        let state = Fen::parse("8/8/3w4/8/8/4r3/8/8 w").unwrap();
        assert_eq!(Evaluator::evaluate(&state.board), 0);
    }

    #[test]
    fn test_winning_material_dominates() {
        // 红子被吃光的局面对白方大幅有利
        let state = Fen::parse("8/8/8/8/8/8/1W6/8 r").unwrap();
        assert!(Evaluator::evaluate(&state.board) >= 150);
    }
}
