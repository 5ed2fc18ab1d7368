//! 题目 API 客户端
//!
//! 封装对 Open Trivia DB 的拉取调用，不做任何重试

use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{Question, TriviaResponse};

/// 题目 API 客户端
pub struct TriviaClient {
    base_url: String,
    client: reqwest::Client,
}

impl TriviaClient {
    /// 创建新的题目客户端
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.trivia_api_base_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// 构建拉取地址
    fn build_url(&self, category: u32, quantity: u32) -> String {
        format!(
            "{}/api.php?amount={}&category={}",
            self.base_url, quantity, category
        )
    }

    /// 拉取一批题目
    ///
    /// # 参数
    /// - `category`: 题目分类 ID
    /// - `quantity`: 拉取数量
    ///
    /// # 返回
    /// 返回题目批次；API 状态码非 0 或结果为空时报错
    pub async fn fetch_questions(
        &self,
        category: u32,
        quantity: u32,
    ) -> AppResult<Vec<Question>> {
        let url = self.build_url(category, quantity);

        debug!("拉取题目: {}", url);

        let response: TriviaResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.response_code != 0 {
            return Err(AppError::Api(ApiError::BadResponse {
                endpoint: url,
                code: Some(u64::from(response.response_code)),
                message: None,
            }));
        }

        if response.results.is_empty() {
            return Err(AppError::Api(ApiError::EmptyResponse { endpoint: url }));
        }

        debug!("拉取到 {} 道题目", response.results.len());

        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_contains_params() {
        let config = Config {
            trivia_api_base_url: "https://opentdb.com".to_string(),
            ..Config::default()
        };
        let client = TriviaClient::new(&config);

        let url = client.build_url(123, 456);

        assert_eq!(url, "https://opentdb.com/api.php?amount=456&category=123");
    }
}
