//! 题目分桶模块
//!
//! 按解码后的展示长度把一批题目分成两个桶：
//! 短题（可单行/窄屏展示）和长题。
//! 判断题不受长度限制，始终进短题桶——True/False 答案不需要宽排版

use crate::models::{Question, QuestionType};
use crate::processing::decode::decoded_char_count;

/// 把题目批次分为短题桶和长题桶
///
/// # 参数
/// - `batch`: 原始题目批次
/// - `max_len`: 单行最大字符数
///
/// # 返回
/// 返回 `(短题桶, 长题桶)`
///
/// 分桶规则按顺序：
/// 1. 解码后长度 ≤ `max_len` → 短题桶
/// 2. 否则若为判断题 → 短题桶
/// 3. 否则 → 长题桶
///
/// 稳定划分：桶内保持输入顺序，不丢弃也不重复任何题目，
/// 恒有 `short.len() + long.len() == batch.len()`
pub fn filter_questions(batch: Vec<Question>, max_len: usize) -> (Vec<Question>, Vec<Question>) {
    let mut short_questions = Vec::new();
    let mut long_questions = Vec::new();

    for question in batch {
        let text_len = decoded_char_count(&question.question);
        if text_len <= max_len {
            short_questions.push(question);
        } else if question.question_type == QuestionType::Boolean {
            short_questions.push(question);
        } else {
            long_questions.push(question);
        }
    }

    (short_questions, long_questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(text: &str, question_type: QuestionType) -> Question {
        let incorrect_answers = match question_type {
            QuestionType::Boolean => vec!["False".to_string()],
            QuestionType::Multiple => vec![
                "Wrong A".to_string(),
                "Wrong B".to_string(),
                "Wrong C".to_string(),
            ],
        };
        Question {
            category: "Science: Computers".to_string(),
            question_type,
            difficulty: "easy".to_string(),
            question: text.to_string(),
            correct_answer: "Right".to_string(),
            incorrect_answers,
        }
    }

    #[test]
    fn test_short_question_goes_to_short_bin() {
        let batch = vec![make_question("Short question?", QuestionType::Multiple)];

        let (short, long) = filter_questions(batch, 53);

        assert_eq!(short.len(), 1);
        assert!(long.is_empty());
    }

    #[test]
    fn test_long_multiple_question_goes_to_long_bin() {
        let text = "This multiple choice question is definitely way too long to fit on one line.";
        let batch = vec![make_question(text, QuestionType::Multiple)];

        let (short, long) = filter_questions(batch, 53);

        assert!(short.is_empty());
        assert_eq!(long.len(), 1);
    }

    #[test]
    fn test_long_boolean_question_still_short() {
        // 判断题不受长度限制，始终进短题桶
        let text = "This true or false question is definitely way too long to fit on one line.";
        assert!(text.chars().count() > 53);
        let batch = vec![make_question(text, QuestionType::Boolean)];

        let (short, long) = filter_questions(batch, 53);

        assert_eq!(short.len(), 1);
        assert!(long.is_empty());
    }

    #[test]
    fn test_length_measured_after_decoding() {
        // 原始文本超长，但解码后不超过 53 字符，应进短题桶
        let text = "&quot;&quot;&quot;&quot; plus forty-nine more characters here!";
        assert!(text.chars().count() > 53);
        let batch = vec![make_question(text, QuestionType::Multiple)];

        let (short, long) = filter_questions(batch, 53);

        assert_eq!(short.len(), 1);
        assert!(long.is_empty());
    }

    #[test]
    fn test_partition_is_complete_and_stable() {
        let long_text =
            "This multiple choice question is definitely way too long to fit on one line.";
        let batch = vec![
            make_question("First short?", QuestionType::Multiple),
            make_question(long_text, QuestionType::Multiple),
            make_question("Second short?", QuestionType::Multiple),
            make_question("Third short?", QuestionType::Boolean),
        ];
        let total = batch.len();

        let (short, long) = filter_questions(batch, 53);

        // 不丢弃不重复
        assert_eq!(short.len() + long.len(), total);
        // 桶内保持输入顺序
        assert_eq!(short[0].question, "First short?");
        assert_eq!(short[1].question, "Second short?");
        assert_eq!(short[2].question, "Third short?");
        assert_eq!(long[0].question, long_text);
    }

    #[test]
    fn test_empty_batch() {
        let (short, long) = filter_questions(Vec::new(), 53);

        assert!(short.is_empty());
        assert!(long.is_empty());
    }
}
