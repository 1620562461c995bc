//! 测试用的脚本化传输层

#![allow(dead_code)]

use async_trait::async_trait;
use salary_stats::clients::{ApiRequest, Transport};
use salary_stats::AppResult;
use serde_json::Value;
use std::sync::Mutex;

type Handler = Box<dyn Fn(&ApiRequest) -> AppResult<Value> + Send + Sync>;

/// 按请求内容返回预设 JSON，并记录每一次请求
pub struct ScriptedTransport {
    handler: Handler,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&ApiRequest) -> AppResult<Value> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// URL 以 `suffix` 结尾的请求
    pub fn requests_to(&self, suffix: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.ends_with(suffix))
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get_json(&self, request: &ApiRequest) -> AppResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}

/// 请求中的页码，缺省为 0
pub fn page_of(request: &ApiRequest) -> u32 {
    request
        .query_value("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0)
}
