/// 招聘数据提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// api.hh.ru
    HeadHunter,
    /// api.superjob.ru
    SuperJob,
}

impl Provider {
    /// 报表标题
    pub fn title(self) -> &'static str {
        match self {
            Provider::HeadHunter => "Head Hunter vacancies",
            Provider::SuperJob => "Super Job vacancies",
        }
    }

    /// 参与统计的唯一币种代码
    pub fn accepted_currency(self) -> &'static str {
        match self {
            Provider::HeadHunter => "RUR",
            Provider::SuperJob => "rub",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::HeadHunter => write!(f, "HeadHunter"),
            Provider::SuperJob => write!(f, "SuperJob"),
        }
    }
}
