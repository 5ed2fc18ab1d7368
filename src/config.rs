/// 程序配置
///
/// 题目来源与发布目标的全部配置项。
/// 发布凭证（GH_TOKEN / GIST_ID）为可选项：缺失时不影响拉取与格式化，
/// 只在构建 GistClient（即发布时刻）才会报错
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目 API 根地址
    pub trivia_api_base_url: String,
    /// GitHub API 根地址
    pub github_api_base_url: String,
    /// 每批拉取的题目数量
    pub quantity: u32,
    /// 题目分类 ID（18 = Science: Computers，固定默认值）
    pub category: u32,
    /// 单行最大展示字符数
    pub max_line_length: usize,
    /// GitHub 访问令牌
    pub github_token: Option<String>,
    /// 目标 Gist ID
    pub gist_id: Option<String>,
}

/// GitHub 访问令牌环境变量名
pub const ENV_VAR_GITHUB_TOKEN: &str = "GH_TOKEN";
/// 目标 Gist ID 环境变量名
pub const ENV_VAR_GIST_ID: &str = "GIST_ID";

impl Default for Config {
    fn default() -> Self {
        Self {
            trivia_api_base_url: "https://opentdb.com".to_string(),
            github_api_base_url: "https://api.github.com".to_string(),
            quantity: 10,
            category: 18,
            max_line_length: 53,
            github_token: None,
            gist_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            trivia_api_base_url: std::env::var("TRIVIA_API_BASE_URL").unwrap_or(default.trivia_api_base_url),
            github_api_base_url: std::env::var("GITHUB_API_BASE_URL").unwrap_or(default.github_api_base_url),
            quantity: default.quantity,
            category: default.category,
            max_line_length: default.max_line_length,
            github_token: std::env::var(ENV_VAR_GITHUB_TOKEN).ok(),
            gist_id: std::env::var(ENV_VAR_GIST_ID).ok(),
        }
    }
}
