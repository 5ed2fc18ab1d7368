//! Gist 发布客户端
//!
//! 封装对 GitHub Gist API 的更新调用：
//! 先读取现有文件列表并全部清空，再写入新标题文件和 INFO 附注。
//! 任一步失败即向上传播，不做重试——更新请求是原子的，
//! 失败时远端 Gist 保持原状

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::config::{Config, ENV_VAR_GIST_ID, ENV_VAR_GITHUB_TOKEN};
use crate::error::{AppError, AppResult};

/// 项目源码地址，写入 INFO 附注
const REPO_URL: &str = "https://github.com/ChrisCarini/trivia-box";

/// Gist 发布客户端
pub struct GistClient {
    base_url: String,
    token: String,
    gist_id: String,
    client: reqwest::Client,
}

impl GistClient {
    /// 创建新的 Gist 客户端
    ///
    /// 发布凭证在此处校验：GH_TOKEN 或 GIST_ID 缺失时返回配置错误
    pub fn new(config: &Config) -> AppResult<Self> {
        let token = config
            .github_token
            .clone()
            .ok_or_else(|| AppError::env_var_not_found(ENV_VAR_GITHUB_TOKEN))?;
        let gist_id = config
            .gist_id
            .clone()
            .ok_or_else(|| AppError::env_var_not_found(ENV_VAR_GIST_ID))?;

        Ok(Self {
            base_url: config.github_api_base_url.clone(),
            token,
            gist_id,
            client: reqwest::Client::new(),
        })
    }

    /// 用给定标题和内容更新 Gist
    ///
    /// # 参数
    /// - `title`: 文件标题（同时作为 Gist 描述）
    /// - `content`: 格式化后的题目文本块
    ///
    /// 先清空 Gist 中所有现有文件，再写入：
    /// - `<title>` - 题目内容
    /// - `<title> - INFO.md` - 指向项目源码的固定附注
    pub async fn update_gist(&self, title: &str, content: &str) -> AppResult<()> {
        let gist_url = format!("{}/gists/{}", self.base_url, self.gist_id);

        // 读取现有文件列表
        let gist: Value = self
            .request(self.client.get(&gist_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // 内容为 null 表示删除该文件，先把所有现有文件标记为删除
        let mut files = Map::new();
        if let Some(existing) = gist.get("files").and_then(|v| v.as_object()) {
            for filename in existing.keys() {
                files.insert(filename.clone(), Value::Null);
            }
        }

        debug!("清空 {} 个现有文件", files.len());

        // 再写入新文件 + INFO 附注（同名文件覆盖删除标记）
        files.insert(title.to_string(), json!({ "content": content }));
        files.insert(
            format!("{} - INFO.md", title),
            json!({
                "content": format!(
                    "_🔗 [See the source code behind this gist here!]({})_",
                    REPO_URL
                )
            }),
        );

        let payload = json!({
            "description": title,
            "files": files,
        });

        self.request(self.client.patch(&gist_url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        info!("✓ Gist 更新成功: {}", title);

        Ok(())
    }

    /// 附加 GitHub API 通用请求头
    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "trivia-box")
    }
}
