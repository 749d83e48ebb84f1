//! 自我对弈演示
//!
//! 双方都由 AI 扮演，演示搜索引擎和决策树的用法。
//! 运行: `cargo run --example selfplay`

use anyhow::Result;
use checkers_ai::{AiConfig, AiEngine};
use checkers_core::{Fen, INITIAL_FEN};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut state = Fen::parse(INITIAL_FEN)?;
    let mut engine = AiEngine::new(AiConfig {
        depth: 2,
        capture_tree: true,
    });

    for ply in 1..=60 {
        if let Some(result) = state.result() {
            println!("对局结束: {:?}", result);
            return Ok(());
        }

        let outcome = engine.search_state(&state);
        match outcome.best_board {
            Some(next) => {
                if let Some(tree) = &outcome.tree {
                    println!(
                        "第 {} 手: 得分 {}, 决策树节点 {}",
                        ply,
                        outcome.score,
                        tree.node_count()
                    );
                }
                state.board = next;
                state.switch_turn();
                println!("  {}", Fen::to_string(&state));
            }
            None => {
                println!("第 {} 手: {:?} 无棋可走，对局结束", ply, state.current_turn);
                return Ok(());
            }
        }
    }

    println!("达到步数上限，终止演示");
    Ok(())
}
