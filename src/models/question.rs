//! 题目数据结构
//!
//! 对应 Open Trivia DB API 返回的 JSON 结构。
//! 题干和答案字段均为两层转义文本（HTML 实体 + 百分号编码），
//! 展示前需经 `processing::decode` 解码

use serde::Deserialize;

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 四选一（1 个正确答案 + 3 个干扰项）
    Multiple,
    /// 判断题（True / False）
    Boolean,
}

/// 单道题目
///
/// 不变量：boolean 题目恰有 1 个干扰项，multiple 题目恰有 3 个
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// 题目分类名称
    pub category: String,
    /// 题目类型
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 难度
    pub difficulty: String,
    /// 题干（转义文本）
    pub question: String,
    /// 正确答案（转义文本）
    pub correct_answer: String,
    /// 干扰项（转义文本）
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// 答案总数（正确答案 + 干扰项）
    pub fn answer_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

/// 题目 API 响应
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaResponse {
    /// API 状态码（0 表示成功）
    pub response_code: u8,
    /// 题目批次
    pub results: Vec<Question>,
}
