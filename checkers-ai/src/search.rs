//! 搜索引擎
//!
//! 固定深度的完整 Minimax 搜索：不剪枝、不用置换表，
//! 每回合从当前局面穷举整棵博弈树，同时可选地记录决策树。

use checkers_core::{Board, BoardState, Color, MoveGenerator};
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;
use crate::tree::DecisionNode;

/// 必胜局面分值（对方无棋可走时使用）
pub const WIN_SCORE: i32 = 10_000;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// 搜索深度（层数）
    pub depth: u8,
    /// 是否记录决策树（展示层需要时开启；关闭则完全不分配节点）
    pub capture_tree: bool,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        // 没有剪枝，代价随深度指数增长，深度是唯一的开销控制
        let depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        Self {
            depth,
            capture_tree: false,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// 根节点的 Minimax 分值
    pub score: i32,
    /// 选中的后继局面；当前走子方无棋可走时为 None，
    /// 调用方应将其视为对局结束
    pub best_board: Option<Board>,
    /// 完整的决策树（仅在配置开启时构建）
    pub tree: Option<DecisionNode>,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 搜索最佳走法
    ///
    /// `maximizing` 为 true 表示白方走子（白方是极大化方），
    /// false 表示红方走子。相同输入的两次搜索结果完全一致。
    pub fn search(&mut self, board: &Board, maximizing: bool) -> SearchResult {
        self.nodes_searched = 0;

        let mut root = if self.config.capture_tree {
            Some(DecisionNode::new(maximizing))
        } else {
            None
        };

        let (score, best_board) =
            self.minimax(board, self.config.depth, maximizing, root.as_mut());

        tracing::debug!(
            "搜索完成: 深度 {}, 得分 {}, 节点数 {}",
            self.config.depth,
            score,
            self.nodes_searched
        );

        SearchResult {
            score,
            best_board,
            tree: root,
        }
    }

    /// 按当前走子方搜索
    pub fn search_state(&mut self, state: &BoardState) -> SearchResult {
        self.search(&state.board, state.current_turn == Color::White)
    }

    /// Minimax 递归
    ///
    /// 返回 (分值, 选中的后继局面)。`node` 存在时在其上记录决策树：
    /// 每个展开的后继局面对应一个子节点，顺序与走法生成顺序一致，
    /// 叶子节点（深度耗尽、终局、无棋可走）记录评估分。
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        node: Option<&mut DecisionNode>,
    ) -> (i32, Option<Board>) {
        self.nodes_searched += 1;

        // 深度耗尽或已分出胜负：直接评估
        if depth == 0 || board.winner().is_some() {
            let score = Evaluator::evaluate(board);
            if let Some(node) = node {
                node.score = Some(score);
            }
            return (score, Some(board.clone()));
        }

        let side = if maximizing { Color::White } else { Color::Red };
        let successors = MoveGenerator::successors(board, side);

        // 无棋可走：判负，调用方通过 best_board 为 None 得知对局结束
        if successors.is_empty() {
            let score = if maximizing { -WIN_SCORE } else { WIN_SCORE };
            if let Some(node) = node {
                node.score = Some(score);
            }
            return (score, None);
        }

        let mut node = node;
        let mut best_score: Option<i32> = None;
        let mut best_board: Option<Board> = None;

        for successor in successors {
            let mut child = DecisionNode::new(!maximizing);
            let child_node = node.is_some().then_some(&mut child);

            let (value, _) = self.minimax(&successor, depth - 1, !maximizing, child_node);

            if let Some(node) = node.as_deref_mut() {
                node.children.push(child);
            }

            // 严格比较：同分保留先枚举到的走法
            let improved = match best_score {
                None => true,
                Some(best) => {
                    if maximizing {
                        value > best
                    } else {
                        value < best
                    }
                }
            };
            if improved {
                best_score = Some(value);
                best_board = Some(successor);
            }
        }

        let score = match best_score {
            Some(score) => score,
            // successors 已确认非空，循环至少更新一次
            None => unreachable!("non-empty successor list must yield a score"),
        };
        (score, best_board)
    }

    /// 获取上次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Fen, Piece, Square};

    fn engine(depth: u8) -> AiEngine {
        AiEngine::new(AiConfig {
            depth,
            capture_tree: true,
        })
    }

    /// 校验树形不变量：内部节点无分值、叶子有分值、层级交替
    fn check_tree(node: &DecisionNode) {
        if node.is_leaf() {
            assert!(node.score.is_some(), "leaf without score");
        } else {
            assert!(node.score.is_none(), "internal node with score");
            for child in &node.children {
                assert_eq!(child.maximizing, !node.maximizing);
                check_tree(child);
            }
        }
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let board = Board::initial();
        let mut engine = engine(0);

        let result = engine.search(&board, true);

        assert_eq!(result.score, Evaluator::evaluate(&board));
        assert_eq!(result.best_board, Some(board));

        let root = result.tree.unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.score, Some(result.score));
    }

    #[test]
    fn test_terminal_position_short_circuits() {
        // 红子已被吃光，正深度下仍按叶子处理
        let state = Fen::parse("8/8/8/8/8/8/1W6/8 r").unwrap();
        let mut engine = engine(3);

        let result = engine.search(&state.board, false);

        assert_eq!(result.best_board, Some(state.board.clone()));
        assert_eq!(result.score, Evaluator::evaluate(&state.board));
        assert!(result.tree.unwrap().is_leaf());
    }

    #[test]
    fn test_no_moves_returns_none() {
        // 红方被完全堵死
        let state = Fen::parse("8/8/8/8/3w4/w1w5/1r6/r7 r").unwrap();
        let mut engine = engine(2);

        let result = engine.search(&state.board, false);

        assert_eq!(result.best_board, None);
        assert_eq!(result.score, WIN_SCORE);

        let root = result.tree.unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.score, Some(WIN_SCORE));
    }

    #[test]
    fn test_initial_search() {
        let board = Board::initial();
        let mut engine = engine(2);

        let result = engine.search(&board, true);

        // 选中的局面必须是白方的合法后继之一
        let successors = MoveGenerator::successors(&board, Color::White);
        let best = result.best_board.unwrap();
        assert!(successors.contains(&best));
        assert_ne!(best, board);

        // 根节点的子节点数 = 白方的合法走法数
        let root = result.tree.unwrap();
        assert_eq!(root.children.len(), 7);
        check_tree(&root);
    }

    #[test]
    fn test_depth_scaling() {
        let board = Board::initial();

        let result = engine(1).search(&board, true);
        let root = result.tree.unwrap();
        assert_eq!(root.height(), 1);
        assert!(root.children.iter().all(DecisionNode::is_leaf));

        let result = engine(2).search(&board, true);
        let root = result.tree.unwrap();
        assert_eq!(root.height(), 2);
        for child in &root.children {
            assert!(!child.is_leaf());
            assert!(child.children.iter().all(DecisionNode::is_leaf));
        }
    }

    #[test]
    fn test_determinism() {
        let board = Board::initial();

        let first = engine(2).search(&board, true);
        let second = engine(2).search(&board, true);

        assert_eq!(first, second);
    }

    #[test]
    fn test_tree_capture_optional() {
        let board = Board::initial();

        let with_tree = engine(2).search(&board, true);
        let mut engine = AiEngine::new(AiConfig {
            depth: 2,
            capture_tree: false,
        });
        let without_tree = engine.search(&board, true);

        assert_eq!(without_tree.tree, None);
        assert_eq!(without_tree.score, with_tree.score);
        assert_eq!(without_tree.best_board, with_tree.best_board);
    }

    #[test]
    fn test_tie_break_keeps_first_move() {
        // 白王的四个走法分值完全相同，应选择最先枚举到的
        let state = Fen::parse("8/8/8/4W3/8/8/8/6r1 w").unwrap();
        let mut engine = engine(1);

        let result = engine.search(&state.board, true);

        let best = result.best_board.unwrap();
        assert_eq!(
            best.get(Square::new_unchecked(2, 3)),
            Some(Piece::king(Color::White))
        );

        // 确认确实是平分局面
        let root = result.tree.unwrap();
        let scores: Vec<_> = root.children.iter().map(|c| c.score).collect();
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|s| *s == scores[0]));
    }

    #[test]
    fn test_prefers_capture_when_winning() {
        // 白子可以跳吃唯一的红子，吃掉后红方无子判负
        let state = Fen::parse("8/8/1w6/2r5/8/8/8/8 w").unwrap();
        let mut engine = engine(2);

        let result = engine.search(&state.board, true);

        let best = result.best_board.unwrap();
        assert!(best.pieces(Color::Red).is_empty());
        assert_eq!(
            best.get(Square::new_unchecked(4, 3)),
            Some(Piece::man(Color::White))
        );
    }

    #[test]
    fn test_search_state_maps_turn() {
        let state = BoardState::initial();
        let mut engine = engine(2);

        // 红方先手，红方是极小化方
        let result = engine.search_state(&state);
        let best = result.best_board.unwrap();
        let successors = MoveGenerator::successors(&state.board, Color::Red);
        assert!(successors.contains(&best));
    }

    #[test]
    fn test_nodes_searched_counted() {
        let board = Board::initial();
        let mut engine = engine(2);

        engine.search(&board, true);

        // 根节点 + 7 个子节点 + 每个子节点各 7 个叶子
        assert_eq!(engine.nodes_searched(), 1 + 7 + 49);
    }

    #[test]
    fn test_difficulty_config() {
        assert_eq!(AiConfig::from_difficulty(Difficulty::Easy).depth, 2);
        assert_eq!(AiConfig::from_difficulty(Difficulty::Medium).depth, 4);
        assert_eq!(AiConfig::from_difficulty(Difficulty::Hard).depth, 6);
    }
}
