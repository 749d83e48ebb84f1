//! 决策树记录
//!
//! 搜索过程中为每个展开的局面建立一个节点，供展示层绘制搜索树。
//! 每次搜索都从头重建整棵树，不跨回合复用。

use serde::{Deserialize, Serialize};

/// 决策树节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    /// 该节点是否为极大化方（白方）的选择层
    pub maximizing: bool,
    /// 叶子节点的评估分（内部节点为 None）
    pub score: Option<i32>,
    /// 子节点，顺序与走法生成顺序一致
    pub children: Vec<DecisionNode>,
}

impl DecisionNode {
    /// 创建新节点
    pub fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            score: None,
            children: Vec::new(),
        }
    }

    /// 是否为叶子节点
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// 树中节点总数（含自身）
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DecisionNode::node_count).sum::<usize>()
    }

    /// 树的高度（叶子为 0）
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DecisionNode {
        let mut root = DecisionNode::new(true);
        let mut left = DecisionNode::new(false);
        left.children.push(DecisionNode {
            maximizing: true,
            score: Some(10),
            children: Vec::new(),
        });
        root.children.push(left);
        root.children.push(DecisionNode {
            maximizing: false,
            score: Some(-5),
            children: Vec::new(),
        });
        root
    }

    #[test]
    fn test_node_count_and_height() {
        let root = sample_tree();

        assert_eq!(root.node_count(), 4);
        assert_eq!(root.height(), 2);
        assert!(!root.is_leaf());
        assert!(root.children[1].is_leaf());
    }

    #[test]
    fn test_leaf_score() {
        let root = sample_tree();

        assert_eq!(root.score, None);
        assert_eq!(root.children[0].children[0].score, Some(10));
    }

    #[test]
    fn test_json_export() {
        // 决策树可以序列化给展示层使用
        let root = sample_tree();
        let json = serde_json::to_string(&root).unwrap();
        let parsed: DecisionNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, root);
    }
}
