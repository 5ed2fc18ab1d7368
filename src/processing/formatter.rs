//! 题目格式化模块
//!
//! 把选中的题目渲染为多行文本块：
//! ❓ 开头的题干（按单行宽度换行），后接打乱顺序的答案行，
//! 每行以固定符号集中的表情序号开头

use rand::seq::SliceRandom;
use rand::Rng;
use textwrap::{wrap, Options};

use crate::error::{AppError, AppResult, BusinessError};
use crate::models::Question;
use crate::processing::decode::decode;

/// 答案序号符号集（固定顺序，按打乱后的位置取用，与答案对错无关）
pub const ANSWER_KEYS: [&str; 4] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣"];

/// 题干标记符号
const QUESTION_MARK: &str = "❓";

/// 把题目格式化为多行文本块
///
/// # 参数
/// - `question`: 选中的题目
/// - `max_len`: 单行最大字符数
/// - `rng`: 随机源，用于打乱答案顺序
///
/// # 返回
/// 返回以 `\n` 连接的文本块（无结尾换行）：
/// 先是换行后的题干行（仅首行带 ❓ 标记），再是每个答案一行
///
/// 答案数量超过符号集容量（4）属于前置条件违约，
/// 返回 `TooManyAnswers` 错误而非静默截断
pub fn format_question(
    question: &Question,
    max_len: usize,
    rng: &mut impl Rng,
) -> AppResult<String> {
    // 汇总全部答案：正确答案 + 干扰项
    let mut all_answers: Vec<&str> = Vec::with_capacity(question.answer_count());
    all_answers.push(&question.correct_answer);
    all_answers.extend(question.incorrect_answers.iter().map(String::as_str));

    if all_answers.len() > ANSWER_KEYS.len() {
        return Err(AppError::Business(BusinessError::TooManyAnswers {
            count: all_answers.len(),
            max: ANSWER_KEYS.len(),
        }));
    }

    // 题干：标记符号 + 解码后的文本，按单行宽度贪心换行
    // （只在词边界断行，绝不从单词中间截断，超长单词独占一行溢出）
    let question_text = format!("{} {}", QUESTION_MARK, decode(&question.question));
    let wrap_options = Options::new(max_len).break_words(false);
    let mut lines: Vec<String> = wrap(&question_text, wrap_options)
        .iter()
        // 再解码一次作为兜底，解码幂等所以无害
        .map(|line| decode(line))
        .collect();

    // 打乱答案顺序，正确答案的位置不可预测
    all_answers.shuffle(rng);

    for (idx, answer) in all_answers.iter().enumerate() {
        lines.push(format!("{} {}", ANSWER_KEYS[idx], decode(answer)));
    }

    Ok(lines.join("\n"))
}
