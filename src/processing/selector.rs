//! 题目挑选模块
//!
//! 核心取舍：只要短题桶非空就从短题桶中均匀随机挑选，
//! 长题桶只作兜底——优先保证单屏紧凑展示

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AppError, AppResult, BusinessError};
use crate::models::Question;

/// 从两个桶中挑选一道题目
///
/// # 参数
/// - `short_questions`: 短题桶
/// - `long_questions`: 长题桶
/// - `rng`: 随机源（生产传 `thread_rng()`，测试传定种子 RNG）
///
/// # 返回
/// 短题桶非空时从中均匀随机返回一道，否则从长题桶中随机返回一道；
/// 两个桶都为空属于调用方前置条件违约，返回 `EmptyQuestionBatch` 错误
pub fn pick_question<'a>(
    short_questions: &'a [Question],
    long_questions: &'a [Question],
    rng: &mut impl Rng,
) -> AppResult<&'a Question> {
    if let Some(question) = short_questions.choose(rng) {
        return Ok(question);
    }

    long_questions
        .choose(rng)
        .ok_or(AppError::Business(BusinessError::EmptyQuestionBatch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_question(text: &str) -> Question {
        Question {
            category: "Science: Computers".to_string(),
            question_type: QuestionType::Multiple,
            difficulty: "easy".to_string(),
            question: text.to_string(),
            correct_answer: "Right".to_string(),
            incorrect_answers: vec![
                "Wrong A".to_string(),
                "Wrong B".to_string(),
                "Wrong C".to_string(),
            ],
        }
    }

    #[test]
    fn test_prefers_short_bin() {
        let short = vec![make_question("short 1"), make_question("short 2")];
        let long = vec![make_question("long 1")];

        // 只要短题桶非空，任何种子都应从短题桶中挑选
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_question(&short, &long, &mut rng).unwrap();
            assert!(
                short.contains(picked),
                "短题桶非空时应从短题桶挑选 (seed {})",
                seed
            );
        }
    }

    #[test]
    fn test_falls_back_to_long_bin() {
        let short: Vec<Question> = Vec::new();
        let long = vec![make_question("long 1"), make_question("long 2")];

        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_question(&short, &long, &mut rng).unwrap();

        assert!(long.contains(picked), "短题桶为空时应从长题桶挑选");
    }

    #[test]
    fn test_both_bins_empty_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = pick_question(&[], &[], &mut rng);

        assert!(matches!(
            result,
            Err(AppError::Business(BusinessError::EmptyQuestionBatch))
        ));
    }

    #[test]
    fn test_selection_varies_across_seeds() {
        // 均匀随机：不同种子应能选到不同的题目
        let short = vec![
            make_question("short 1"),
            make_question("short 2"),
            make_question("short 3"),
        ];

        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_question(&short, &[], &mut rng).unwrap();
            seen.insert(picked.question.clone());
        }

        assert!(seen.len() > 1, "64 个种子应至少选出 2 道不同题目");
    }
}
