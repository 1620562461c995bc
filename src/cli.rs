use crate::models::Provider;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 统计 HeadHunter 与 SuperJob 上各编程语言的职位数和平均薪资
#[derive(Parser, Debug)]
#[command(name = "salary_stats", version, about)]
pub struct Cli {
    /// 城市名（与提供方目录中的写法一致，例如 "Москва"）
    pub city: String,

    /// TOML 配置文件
    #[arg(short, long, env = "SALARY_STATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// 只统计某一家提供方
    #[arg(short, long, value_enum, default_value_t = ProviderArg::All)]
    pub provider: ProviderArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    All,
    Hh,
    Sj,
}

impl ProviderArg {
    /// 报表输出顺序
    pub fn providers(self) -> Vec<Provider> {
        match self {
            ProviderArg::All => vec![Provider::HeadHunter, Provider::SuperJob],
            ProviderArg::Hh => vec![Provider::HeadHunter],
            ProviderArg::Sj => vec![Provider::SuperJob],
        }
    }
}
