use crate::models::Provider;

/// 单个搜索词的统计结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStatistics {
    /// 搜索词
    pub term: String,
    /// 接口返回的职位总数（过滤前）
    pub vacancies_count: usize,
    /// 币种匹配且有薪资数据的职位数
    pub vacancies_processed: usize,
    /// 折算后平均薪资（截断取整），无可用职位时为 0
    pub average_salary: i64,
}

/// 一个提供方的完整报表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReport {
    pub provider: Provider,
    pub city: String,
    pub rows: Vec<TermStatistics>,
}
