/// HTTP 传输层
///
/// 两家提供方都只用到 "GET 一个 URL，拿回 JSON"，这里把它抽成一个 trait，
/// 正式运行用 reqwest，测试里换成脚本化的实现。
use crate::error::{AppError, AppResult};
use crate::models::Provider;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// 一次 GET 请求的描述
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub provider: Provider,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(provider: Provider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// 查询参数的值（同名取第一个）
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 用于错误信息的简短描述
    pub fn endpoint(&self) -> String {
        match self.query_value("page") {
            Some(page) => format!("{} (page {})", self.url, page),
            None => self.url.clone(),
        }
    }
}

/// JSON GET 能力
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送请求；非 2xx 状态必须返回错误
    async fn get_json(&self, request: &ApiRequest) -> AppResult<Value>;
}

/// 基于 reqwest 的实现
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// HeadHunter 要求请求带 User-Agent
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, request: &ApiRequest) -> AppResult<Value> {
        let provider = request.provider;
        debug!("GET {} {:?}", request.url, request.query);

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::request_failed(provider, request.endpoint(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(
                provider,
                request.endpoint(),
                status.as_u16(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(provider, request.endpoint(), e))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::malformed_response(provider, request.endpoint(), e))
    }
}

/// 把 JSON 转成接口结构体，失败记为响应结构错误
pub fn decode<T: DeserializeOwned>(request: &ApiRequest, value: Value) -> AppResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AppError::malformed_response(request.provider, request.endpoint(), e))
}
