//! 核心处理流水线
//!
//! 分桶 → 挑选 → 格式化，三个纯函数按顺序串联。
//! 所有函数不持有状态，随机性通过 `rand::Rng` 参数注入，
//! 生产环境传 `thread_rng()`，测试传定种子的 `StdRng`

pub mod classifier;
pub mod decode;
pub mod formatter;
pub mod selector;

pub use classifier::filter_questions;
pub use decode::decode;
pub use formatter::{format_question, ANSWER_KEYS};
pub use selector::pick_question;
