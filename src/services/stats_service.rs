/// 薪资统计服务
///
/// 对目录中的每个搜索词依次执行：解析城市 → 拉取职位 → 过滤 → 折算 → 汇总。
use crate::clients::VacancySource;
use crate::error::{AppResult, Stage};
use crate::models::{TermStatistics, Vacancy};
use crate::services::location_resolver::resolve_city;
use tracing::info;

/// 统计服务
pub struct StatsService<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> StatsService<'a, S>
where
    S: VacancySource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// 按目录顺序统计所有搜索词，任一步失败立即返回
    pub async fn collect(&self, city: &str, terms: &[String]) -> AppResult<Vec<TermStatistics>> {
        let mut rows = Vec::with_capacity(terms.len());
        for term in terms {
            rows.push(self.collect_term(city, term).await?);
        }
        Ok(rows)
    }

    /// 统计单个搜索词
    pub async fn collect_term(&self, city: &str, term: &str) -> AppResult<TermStatistics> {
        let provider = self.source.provider();

        let location = resolve_city(self.source, city)
            .await
            .map_err(|e| e.in_stage(provider, term, Stage::ResolveLocation))?;

        let vacancies = self
            .source
            .fetch_vacancies(term, location)
            .await
            .map_err(|e| e.in_stage(provider, term, Stage::FetchVacancies))?;

        let stats = summarize(term, &vacancies, provider.accepted_currency());
        info!(
            "[{}] {}: 共 {} 个职位，处理 {} 个，平均薪资 {}",
            provider,
            term,
            stats.vacancies_count,
            stats.vacancies_processed,
            stats.average_salary
        );
        Ok(stats)
    }
}

/// 过滤并汇总一组职位
///
/// 只保留币种等于 `currency` 且至少有一端薪资的职位。
pub fn summarize(term: &str, vacancies: &[Vacancy], currency: &str) -> TermStatistics {
    let estimates: Vec<f64> = vacancies
        .iter()
        .filter(|v| v.is_paid_in(currency))
        .filter_map(Vacancy::salary_range)
        .map(|range| range.estimate())
        .collect();

    let average_salary = if estimates.is_empty() {
        0
    } else {
        (estimates.iter().sum::<f64>() / estimates.len() as f64) as i64
    };

    TermStatistics {
        term: term.to_string(),
        vacancies_count: vacancies.len(),
        vacancies_processed: estimates.len(),
        average_salary,
    }
}
