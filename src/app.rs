//! 应用编排层
//!
//! 按固定顺序串联整条流水线：
//! 拉取 → 分桶 → 挑选 → 格式化 → 发布

use anyhow::Result;
use tracing::info;

use crate::clients::{GistClient, TriviaClient};
use crate::config::Config;
use crate::processing::{filter_questions, format_question, pick_question};

/// 应用主结构
pub struct App {
    config: Config,
    trivia_client: TriviaClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let trivia_client = TriviaClient::new(&config);

        Ok(Self {
            config,
            trivia_client,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 拉取题目批次
        let batch = self
            .trivia_client
            .fetch_questions(self.config.category, self.config.quantity)
            .await?;

        // 按展示长度分桶
        let (short_questions, long_questions) =
            filter_questions(batch, self.config.max_line_length);

        log_bins(short_questions.len(), long_questions.len());

        // 挑选并格式化
        let mut rng = rand::thread_rng();
        let question = pick_question(&short_questions, &long_questions, &mut rng)?;
        let formatted = format_question(question, self.config.max_line_length, &mut rng)?;

        let title = build_title();

        log_output(&title, &formatted);

        // 发布到 Gist（凭证在此刻才校验，缺失即报错）
        let gist_client = GistClient::new(&self.config)?;
        gist_client.update_gist(&title, &formatted).await?;

        log_complete();

        Ok(())
    }
}

/// 构建当日标题
fn build_title() -> String {
    format!(
        "Trivia of the Day - {}",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 每日一题发布模式");
    info!("📊 拉取数量: {} / 分类: {}", config.quantity, config.category);
    info!("{}", "=".repeat(60));
}

fn log_bins(short: usize, long: usize) {
    info!("✓ 拉取完成: 短题 {} 道 / 长题 {} 道", short, long);
}

fn log_output(title: &str, content: &str) {
    info!("\n{}\n{}", title, content);
}

fn log_complete() {
    info!("{}", "=".repeat(60));
    info!("✅ 发布完成");
    info!("{}", "=".repeat(60));
}
