use crate::models::Provider;
use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// API 调用错误
    Api(ApiError),
    /// 地点解析错误
    Location(LocationError),
    /// 配置错误
    Config(ConfigError),
    /// 统计流程中某一步失败（带上提供方、搜索词和阶段）
    Stage {
        provider: Provider,
        term: String,
        stage: Stage,
        source: Box<AppError>,
    },
}

/// 统计流程的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 解析城市 ID
    ResolveLocation,
    /// 拉取职位列表
    FetchVacancies,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ResolveLocation => write!(f, "resolve location"),
            Stage::FetchVacancies => write!(f, "fetch vacancies"),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Location(e) => write!(f, "location error: {}", e),
            AppError::Config(e) => write!(f, "config error: {}", e),
            AppError::Stage {
                provider,
                term,
                stage,
                ..
            } => write!(f, "[{}] term '{}': {} failed", provider, term, stage),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Location(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Stage { source, .. } => Some(&**source),
        }
    }
}

/// API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败（连接、超时等）
    RequestFailed {
        provider: Provider,
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 接口返回非成功状态码
    BadStatus {
        provider: Provider,
        endpoint: String,
        status: u16,
    },
    /// 返回的 JSON 结构不符合预期
    MalformedResponse {
        provider: Provider,
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed {
                provider,
                endpoint,
                source,
            } => write!(f, "{} request to {} failed: {}", provider, endpoint, source),
            ApiError::BadStatus {
                provider,
                endpoint,
                status,
            } => write!(f, "{} returned HTTP {} for {}", provider, status, endpoint),
            ApiError::MalformedResponse {
                provider,
                endpoint,
                source,
            } => write!(
                f,
                "{} returned an unexpected response from {}: {}",
                provider, endpoint, source
            ),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::MalformedResponse { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ApiError::BadStatus { .. } => None,
        }
    }
}

/// 地点解析错误
#[derive(Debug)]
pub enum LocationError {
    /// 目录中找不到该城市
    NotFound { provider: Provider, city: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::NotFound { provider, city } => {
                write!(f, "city '{}' not found in the {} area directory", city, provider)
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 读取配置文件失败
    FileReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileReadFailed { path, source } => {
                write!(f, "cannot read config file {}: {}", path, source)
            }
            ConfigError::TomlParseFailed { path, source } => {
                write!(f, "cannot parse config file {}: {}", path, source)
            }
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => write!(
                f,
                "environment variable {}='{}' is not a valid {}",
                var_name, value, expected_type
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileReadFailed { source, .. }
            | ConfigError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ConfigError::EnvVarParseFailed { .. } => None,
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        provider: Provider,
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            provider,
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建状态码错误
    pub fn bad_status(provider: Provider, endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadStatus {
            provider,
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建响应结构错误
    pub fn malformed_response(
        provider: Provider,
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::MalformedResponse {
            provider,
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建城市未找到错误
    pub fn location_not_found(provider: Provider, city: impl Into<String>) -> Self {
        AppError::Location(LocationError::NotFound {
            provider,
            city: city.into(),
        })
    }

    /// 给错误加上统计阶段的上下文
    pub fn in_stage(self, provider: Provider, term: impl Into<String>, stage: Stage) -> Self {
        AppError::Stage {
            provider,
            term: term.into(),
            stage,
            source: Box::new(self),
        }
    }

    /// 去掉阶段包装后的根错误
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_location_not_found(&self) -> bool {
        matches!(self.root(), AppError::Location(LocationError::NotFound { .. }))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self.root(),
            AppError::Api(ApiError::RequestFailed { .. } | ApiError::BadStatus { .. })
        )
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self.root(), AppError::Api(ApiError::MalformedResponse { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
