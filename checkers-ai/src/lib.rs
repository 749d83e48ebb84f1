//! 西洋跳棋 AI 引擎
//!
//! 包含:
//! - 棋局评估函数
//! - 固定深度 Minimax 搜索
//! - 决策树记录（用于搜索过程可视化）

mod evaluate;
mod search;
mod tree;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty, SearchResult, WIN_SCORE};
pub use tree::DecisionNode;
