use crate::clients::{HeadHunterClient, HttpTransport, SuperJobClient, Transport, VacancySource};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Provider, ProviderReport};
use crate::services::StatsService;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    sources: Vec<Box<dyn VacancySource>>,
}

impl App {
    /// 使用真实的 HTTP 客户端初始化
    pub fn initialize(config: Config) -> Result<Self> {
        let transport =
            HttpTransport::new(&config.user_agent).context("无法创建 HTTP 客户端")?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// 使用指定的传输层初始化（两家提供方共用）
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let sources: Vec<Box<dyn VacancySource>> = vec![
            Box::new(HeadHunterClient::new(&config, transport.clone())),
            Box::new(SuperJobClient::new(&config, transport)),
        ];
        Self { config, sources }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 按给定顺序为每个提供方生成报表
    pub async fn run(&self, city: &str, providers: &[Provider]) -> AppResult<Vec<ProviderReport>> {
        log_startup(city, &self.config);

        let mut reports = Vec::with_capacity(providers.len());
        for &provider in providers {
            let Some(source) = self.source(provider) else {
                continue;
            };

            info!("📊 [{}] 开始统计", provider);
            let rows = match StatsService::new(source)
                .collect(city, &self.config.languages)
                .await
            {
                Ok(rows) => rows,
                Err(e) => {
                    error!("❌ [{}] 统计失败: {}", provider, e);
                    return Err(e);
                }
            };
            info!("✓ [{}] 完成 {} 个搜索词", provider, rows.len());

            reports.push(ProviderReport {
                provider,
                city: city.to_string(),
                rows,
            });
        }

        log_finished(reports.len());
        Ok(reports)
    }

    fn source(&self, provider: Provider) -> Option<&dyn VacancySource> {
        self.sources
            .iter()
            .find(|s| s.provider() == provider)
            .map(|s| s.as_ref())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(city: &str, config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 薪资统计开始 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📍 城市: {}", city);
    info!("📋 搜索词: {} 个", config.languages.len());
    info!("{}", "=".repeat(60));
}

fn log_finished(reports: usize) {
    info!("{}", "=".repeat(60));
    info!(
        "✅ 完成 {} 份报表 - {}",
        reports,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
