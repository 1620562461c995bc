/// 地点解析服务
///
/// 把城市名解析成提供方内部的地点 ID，找不到时返回明确的错误。
use crate::clients::VacancySource;
use crate::error::{AppError, AppResult};
use crate::models::{find_first, LocationId, LocationNode};
use tracing::debug;

/// 每次调用都重新拉取目录
pub async fn resolve_city<S>(source: &S, city: &str) -> AppResult<LocationId>
where
    S: VacancySource + ?Sized,
{
    let directory = source.load_directory().await?;
    let id = find_city(source, &directory, city)?;
    debug!("[{}] {} -> {}", source.provider(), city, id);
    Ok(id)
}

/// 在已加载的目录中查找
pub fn find_city<S>(source: &S, directory: &[LocationNode], city: &str) -> AppResult<LocationId>
where
    S: VacancySource + ?Sized,
{
    find_first(directory, |node| source.matches_city(node, city))
        .map(|node| node.id)
        .ok_or_else(|| AppError::location_not_found(source.provider(), city))
}
