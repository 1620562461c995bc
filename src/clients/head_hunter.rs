/// HeadHunter API 客户端
///
/// 地区目录：`GET /areas`，职位搜索：`GET /vacancies`
use crate::clients::pagination::{fetch_all_pages, Page};
use crate::clients::transport::{decode, ApiRequest, Transport};
use crate::clients::VacancySource;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{LocationId, LocationKind, LocationNode, Provider, Vacancy};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const PROVIDER: Provider = Provider::HeadHunter;

/// 地区目录中的一项（国家、地区、城市结构相同）
#[derive(Debug, Deserialize)]
struct HhArea {
    id: String,
    name: String,
    #[serde(default)]
    areas: Vec<HhArea>,
}

#[derive(Debug, Deserialize)]
struct HhVacancyPage {
    items: Vec<HhVacancy>,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<HhVacancy> for Vacancy {
    fn from(item: HhVacancy) -> Self {
        match item.salary {
            Some(salary) => Vacancy {
                currency: salary.currency,
                salary_from: salary.from,
                salary_to: salary.to,
            },
            None => Vacancy::default(),
        }
    }
}

/// 把三层 `areas` 转成目录树，更深的层级不参与查找
fn build_tree(request: &ApiRequest, areas: Vec<HhArea>) -> AppResult<Vec<LocationNode>> {
    fn convert(request: &ApiRequest, area: HhArea, depth: usize) -> AppResult<LocationNode> {
        let kind = match depth {
            0 => LocationKind::Country,
            1 => LocationKind::Region,
            _ => LocationKind::City,
        };
        let id = area.id.parse::<u64>().map_err(|e| {
            AppError::malformed_response(
                request.provider,
                format!("{} (area id '{}')", request.endpoint(), area.id),
                e,
            )
        })?;
        let children = if kind == LocationKind::City {
            Vec::new()
        } else {
            area.areas
                .into_iter()
                .map(|child| convert(request, child, depth + 1))
                .collect::<AppResult<Vec<_>>>()?
        };
        Ok(LocationNode::new(kind, LocationId(id), area.name).with_children(children))
    }

    areas
        .into_iter()
        .map(|area| convert(request, area, 0))
        .collect()
}

/// HeadHunter 客户端
pub struct HeadHunterClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    period_days: u32,
    only_with_salary: bool,
}

impl HeadHunterClient {
    /// 创建新的 HeadHunter 客户端
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: config.hh_api_base_url.trim_end_matches('/').to_string(),
            period_days: config.hh_period_days,
            only_with_salary: config.hh_only_with_salary,
        }
    }

    fn areas_request(&self) -> ApiRequest {
        ApiRequest::new(PROVIDER, format!("{}/areas", self.base_url))
    }

    fn vacancies_request(&self, term: &str, location: LocationId, page: u32) -> ApiRequest {
        ApiRequest::new(PROVIDER, format!("{}/vacancies", self.base_url))
            .query("text", term)
            .query("area", location)
            .query("period", self.period_days)
            .query("only_with_salary", self.only_with_salary)
            .query("page", page)
    }

    async fn fetch_page(
        &self,
        term: &str,
        location: LocationId,
        page: u32,
    ) -> AppResult<Page<Vacancy>> {
        let request = self.vacancies_request(term, location, page);
        let value = self.transport.get_json(&request).await?;
        let body: HhVacancyPage = decode(&request, value)?;

        let items = body.items.into_iter().map(Vacancy::from).collect();
        Ok(Page::by_page_count(items, page, body.pages))
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    async fn load_directory(&self) -> AppResult<Vec<LocationNode>> {
        let request = self.areas_request();
        let value = self.transport.get_json(&request).await?;
        let areas: Vec<HhArea> = decode(&request, value)?;
        debug!("HeadHunter 地区目录: {} 个国家", areas.len());
        build_tree(&request, areas)
    }

    /// 名称或 ID 文本任一相等即匹配
    fn matches_city(&self, node: &LocationNode, city: &str) -> bool {
        node.name == city || node.id.to_string() == city
    }

    async fn fetch_vacancies(&self, term: &str, location: LocationId) -> AppResult<Vec<Vacancy>> {
        fetch_all_pages(move |page| self.fetch_page(term, location, page)).await
    }
}
