//! # Trivia Box
//!
//! 每日一题：从 Open Trivia DB 拉取一批题目，挑选一道适合窄屏展示的题目，
//! 格式化后发布到 GitHub Gist
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目数据结构（`Question` / `TriviaResponse`）
//!
//! ### ② 处理层（Processing）
//! - `processing/` - 纯函数流水线，不持有任何状态
//! - `decode` - 两层解码能力（HTML 实体 + 百分号编码）
//! - `classifier` - 按展示长度分桶（短题 / 长题）
//! - `selector` - 优先从短题桶中随机挑选一道
//! - `formatter` - 渲染为多行文本（❓ 题干 + 表情序号答案）
//!
//! ### ③ 客户端层（Clients）
//! - `clients/` - 薄 I/O 封装，无内部决策逻辑
//! - `TriviaClient` - 拉取题目批次
//! - `GistClient` - 发布到 Gist（清空旧文件 + 写入新内容 + INFO 附注）
//!
//! 数据流严格单向：拉取 → 分桶 → 挑选 → 格式化 → 发布，
//! 每次运行相互独立，不跨运行持久化任何状态

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod processing;

// 重新导出常用类型
pub use clients::{GistClient, TriviaClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Question, QuestionType, TriviaResponse};
pub use processing::{decode, filter_questions, format_question, pick_question, ANSWER_KEYS};
