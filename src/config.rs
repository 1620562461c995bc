use crate::error::{AppError, AppResult, ConfigError};
use crate::models::default_languages;
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // --- HeadHunter ---
    pub hh_api_base_url: String,
    /// 只统计最近多少天发布的职位
    pub hh_period_days: u32,
    pub hh_only_with_salary: bool,
    // --- SuperJob ---
    pub sj_api_base_url: String,
    /// X-Api-App-Id 所用的应用密钥
    pub sj_token: Option<String>,
    pub sj_period_days: u32,
    /// 职位分类 ID（48 = IT / 开发）
    pub sj_catalogue_id: u32,
    // --- 通用 ---
    pub user_agent: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 查询的语言目录
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hh_api_base_url: "https://api.hh.ru".to_string(),
            hh_period_days: 30,
            hh_only_with_salary: true,
            sj_api_base_url: "https://api.superjob.ru/2.30".to_string(),
            sj_token: None,
            sj_period_days: 7,
            sj_catalogue_id: 48,
            user_agent: format!("salary_stats/{}", env!("CARGO_PKG_VERSION")),
            verbose_logging: false,
            languages: default_languages(),
        }
    }
}

/// 配置文件内容，所有键都可省略
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    hh_api_base_url: Option<String>,
    hh_period_days: Option<u32>,
    hh_only_with_salary: Option<bool>,
    sj_api_base_url: Option<String>,
    sj_token: Option<String>,
    sj_period_days: Option<u32>,
    sj_catalogue_id: Option<u32>,
    user_agent: Option<String>,
    verbose_logging: Option<bool>,
    languages: Option<Vec<String>>,
}

impl Config {
    /// 默认值 → 配置文件（可选）→ 环境变量
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(path) = path {
            config.apply_file(path)?;
        }
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 只读取环境变量
    pub fn from_env() -> AppResult<Self> {
        Self::load(None)
    }

    fn apply_file(&mut self, path: &Path) -> AppResult<()> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(ConfigError::FileReadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|e| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        self.merge_file(file);
        Ok(())
    }

    fn merge_file(&mut self, file: FileConfig) {
        if let Some(v) = file.hh_api_base_url {
            self.hh_api_base_url = v;
        }
        if let Some(v) = file.hh_period_days {
            self.hh_period_days = v;
        }
        if let Some(v) = file.hh_only_with_salary {
            self.hh_only_with_salary = v;
        }
        if let Some(v) = file.sj_api_base_url {
            self.sj_api_base_url = v;
        }
        if let Some(v) = file.sj_token {
            self.sj_token = Some(v);
        }
        if let Some(v) = file.sj_period_days {
            self.sj_period_days = v;
        }
        if let Some(v) = file.sj_catalogue_id {
            self.sj_catalogue_id = v;
        }
        if let Some(v) = file.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = file.verbose_logging {
            self.verbose_logging = v;
        }
        if let Some(v) = file.languages {
            self.languages = v;
        }
    }

    fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("HH_API_BASE_URL") {
            self.hh_api_base_url = v;
        }
        if let Some(v) = parse_var(&lookup, "HH_PERIOD_DAYS", "u32")? {
            self.hh_period_days = v;
        }
        if let Some(v) = parse_var(&lookup, "HH_ONLY_WITH_SALARY", "bool")? {
            self.hh_only_with_salary = v;
        }
        if let Some(v) = lookup("SJ_API_BASE_URL") {
            self.sj_api_base_url = v;
        }
        if let Some(v) = lookup("SJ_TOKEN").filter(|v| !v.is_empty()) {
            self.sj_token = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "SJ_PERIOD_DAYS", "u32")? {
            self.sj_period_days = v;
        }
        if let Some(v) = parse_var(&lookup, "SJ_CATALOGUE_ID", "u32")? {
            self.sj_catalogue_id = v;
        }
        if let Some(v) = lookup("USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = parse_var(&lookup, "VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = v;
        }
        Ok(())
    }
}

/// 变量未设置返回 `None`，设置了但无法解析则报错
fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
    }
}
