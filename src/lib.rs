//! # Salary Stats
//!
//! 统计 HeadHunter 与 SuperJob 上各编程语言在某个城市的职位数量和平均薪资，
//! 并在终端输出两张对比表。
//!
//! ## 分层
//!
//! ### ① 传输层（clients）
//! - `Transport` - 唯一的 HTTP 出口，只提供 "GET 拿 JSON" 能力
//! - `HeadHunterClient` / `SuperJobClient` - 各自的接口格式、分页规则和城市匹配规则
//! - `fetch_all_pages` - 统一的分页拉取
//!
//! ### ② 业务能力层（services）
//! - `location_resolver` - 城市名 → 地点 ID
//! - `StatsService` - 逐个搜索词统计
//! - `report` - 终端表格
//!
//! ### ③ 编排层（app）
//! - `App` - 按顺序为每家提供方生成报表
//!
//! ## 模块结构

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Provider, ProviderReport, TermStatistics};
