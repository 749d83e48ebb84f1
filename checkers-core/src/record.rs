//! 棋谱记录格式
//!
//! 支持 JSON 格式的棋谱存储，便于保存和复盘

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::fen::INITIAL_FEN;
use crate::moves::Move;
use crate::notation::Notation;
use crate::piece::{Color, Square};

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 红方胜
    RedWin,
    /// 白方胜
    WhiteWin,
    /// 和棋
    Draw,
}

impl GameResult {
    /// 从获胜方构造
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::Red => GameResult::RedWin,
            Color::White => GameResult::WhiteWin,
        }
    }
}

/// 游戏元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    /// 红方玩家名
    pub red_player: String,
    /// 白方玩家名
    pub white_player: String,
    /// 游戏日期
    pub date: String,
    /// 游戏结果
    pub result: Option<GameResult>,
    /// AI 搜索深度（人机对局）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_depth: Option<u8>,
}

/// 走法记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 起始格子 [row, col]
    pub from: [u8; 2],
    /// 目标格子 [row, col]
    pub to: [u8; 2],
    /// 被跳吃的格子列表
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<[u8; 2]>,
    /// 数字记谱
    pub notation: String,
    /// 走棋时的 Unix 时间戳（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl MoveRecord {
    /// 从走法创建记录
    pub fn new(mv: &Move) -> Self {
        Self {
            from: [mv.from.row, mv.from.col],
            to: [mv.to.row, mv.to.col],
            captures: mv.captures.iter().map(|sq| [sq.row, sq.col]).collect(),
            notation: Notation::format(mv),
            timestamp: None,
        }
    }

    /// 带时间戳创建
    pub fn with_timestamp(mv: &Move, timestamp: u64) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Self::new(mv)
        }
    }

    /// 获取起始格子
    pub fn from_square(&self) -> Option<Square> {
        Square::new(self.from[0], self.from[1])
    }

    /// 获取目标格子
    pub fn to_square(&self) -> Option<Square> {
        Square::new(self.to[0], self.to[1])
    }
}

/// 完整的棋谱记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 元数据
    pub metadata: GameMetadata,
    /// 初始局面 FEN
    pub initial_fen: String,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// 创建新的棋谱记录
    pub fn new(red_player: String, white_player: String) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            metadata: GameMetadata {
                red_player,
                white_player,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                result: None,
                ai_depth: None,
            },
            initial_fen: INITIAL_FEN.to_string(),
            moves: Vec::new(),
        }
    }

    /// 从自定义 FEN 创建
    pub fn from_fen(red_player: String, white_player: String, fen: String) -> Self {
        let mut record = Self::new(red_player, white_player);
        record.initial_fen = fen;
        record
    }

    /// 设置 AI 搜索深度
    pub fn set_ai_depth(&mut self, depth: u8) {
        self.metadata.ai_depth = Some(depth);
    }

    /// 添加走法
    pub fn add_move(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// 设置对局结果
    pub fn set_result(&mut self, result: GameResult) {
        self.metadata.result = Some(result);
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
