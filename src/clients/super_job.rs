/// SuperJob API 客户端
///
/// 地区目录：`GET /regions/combined/`，职位搜索：`GET /vacancies/`，
/// 两个接口都需要 `X-Api-App-Id` 请求头。
use crate::clients::pagination::{fetch_all_pages, Page};
use crate::clients::transport::{decode, ApiRequest, Transport};
use crate::clients::VacancySource;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{LocationId, LocationKind, LocationNode, Provider, Vacancy};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const PROVIDER: Provider = Provider::SuperJob;
const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SjCountry {
    id: u64,
    title: String,
    #[serde(default)]
    towns: Vec<SjTown>,
    regions: Option<Vec<SjRegion>>,
}

#[derive(Debug, Deserialize)]
struct SjRegion {
    id: u64,
    title: String,
    #[serde(default)]
    towns: Vec<SjTown>,
}

#[derive(Debug, Deserialize)]
struct SjTown {
    id: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct SjVacancyPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

#[derive(Debug, Deserialize)]
struct SjVacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

/// SuperJob 用 0 表示未填写的薪资边界
fn payment_bound(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl From<SjVacancy> for Vacancy {
    fn from(item: SjVacancy) -> Self {
        Vacancy {
            currency: item.currency,
            salary_from: payment_bound(item.payment_from),
            salary_to: payment_bound(item.payment_to),
        }
    }
}

impl From<SjTown> for LocationNode {
    fn from(town: SjTown) -> Self {
        LocationNode::new(LocationKind::City, LocationId(town.id), town.title)
    }
}

/// 目录树：国家的直属城市在前，各地区（及其城市）在后
fn build_tree(request: &ApiRequest, entries: Vec<Value>) -> AppResult<Vec<LocationNode>> {
    let mut tree = Vec::new();

    for entry in entries {
        // 没有 title 的不是国家记录
        if entry.get("title").is_none() {
            continue;
        }
        let country: SjCountry = decode(request, entry)?;

        let mut children: Vec<LocationNode> =
            country.towns.into_iter().map(LocationNode::from).collect();
        for region in country.regions.unwrap_or_default() {
            let towns = region.towns.into_iter().map(LocationNode::from).collect();
            children.push(
                LocationNode::new(LocationKind::Region, LocationId(region.id), region.title)
                    .with_children(towns),
            );
        }

        tree.push(
            LocationNode::new(LocationKind::Country, LocationId(country.id), country.title)
                .with_children(children),
        );
    }

    Ok(tree)
}

/// SuperJob 客户端
pub struct SuperJobClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    token: Option<String>,
    period_days: u32,
    catalogue_id: u32,
}

impl SuperJobClient {
    /// 创建新的 SuperJob 客户端
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        if config.sj_token.is_none() {
            warn!("⚠️ 未设置 SJ_TOKEN，SuperJob 可能拒绝请求");
        }
        Self {
            transport,
            base_url: config.sj_api_base_url.trim_end_matches('/').to_string(),
            token: config.sj_token.clone(),
            period_days: config.sj_period_days,
            catalogue_id: config.sj_catalogue_id,
        }
    }

    fn request(&self, path: &str) -> ApiRequest {
        let request = ApiRequest::new(PROVIDER, format!("{}/{}", self.base_url, path));
        match &self.token {
            Some(token) => request.header(APP_ID_HEADER, token.as_str()),
            None => request,
        }
    }

    fn vacancies_request(&self, term: &str, location: LocationId, page: u32) -> ApiRequest {
        self.request("vacancies/")
            .query("catalogues", self.catalogue_id)
            .query("town", location)
            .query("period", self.period_days)
            .query("keywords[0][srws]", 1)
            .query("keywords[0][keys]", term)
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
        let body: SjVacancyPage = decode(&request, value)?;

        let items = body.objects.into_iter().map(Vacancy::from).collect();
        Ok(Page::by_more_flag(items, body.more))
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    async fn load_directory(&self) -> AppResult<Vec<LocationNode>> {
        let request = self.request("regions/combined/");
        let value = self.transport.get_json(&request).await?;
        let entries: Vec<Value> = decode(&request, value)?;
        debug!("SuperJob 地区目录: {} 条记录", entries.len());
        build_tree(&request, entries)
    }

    /// 国家本身不参与匹配；城市和地区按 title 精确匹配
    fn matches_city(&self, node: &LocationNode, city: &str) -> bool {
        node.kind != LocationKind::Country && node.name == city
    }

    async fn fetch_vacancies(&self, term: &str, location: LocationId) -> AppResult<Vec<Vacancy>> {
        fetch_all_pages(move |page| self.fetch_page(term, location, page)).await
    }
}
