use crate::error::AppResult;
use crate::models::{LocationId, LocationNode, Provider, Vacancy};
use async_trait::async_trait;

/// 一个招聘数据提供方需要具备的能力
///
/// 地点解析和统计服务只依赖这个 trait，不关心具体的接口格式。
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn provider(&self) -> Provider;

    /// 拉取完整的地区目录（每次调用都重新请求）
    async fn load_directory(&self) -> AppResult<Vec<LocationNode>>;

    /// 该提供方判定节点与城市名匹配的规则
    fn matches_city(&self, node: &LocationNode, city: &str) -> bool;

    /// 拉取某个搜索词在某地的全部职位
    async fn fetch_vacancies(&self, term: &str, location: LocationId) -> AppResult<Vec<Vacancy>>;
}
