//! 职位与薪资区间

/// 只有上限时的折算系数
const UPPER_ONLY_FACTOR: f64 = 0.8;
/// 只有下限时的折算系数
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// 与提供方无关的职位记录
///
/// 上下限缺失用 `None` 表示，和 0 区分开。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vacancy {
    /// 币种代码，未给出薪资时为 `None`
    pub currency: Option<String>,
    /// 薪资下限
    pub salary_from: Option<f64>,
    /// 薪资上限
    pub salary_to: Option<f64>,
}

impl Vacancy {
    pub fn new(currency: Option<&str>, salary_from: Option<f64>, salary_to: Option<f64>) -> Self {
        Self {
            currency: currency.map(str::to_string),
            salary_from,
            salary_to,
        }
    }

    /// 币种是否与给定代码一致
    pub fn is_paid_in(&self, currency: &str) -> bool {
        self.currency.as_deref() == Some(currency)
    }

    /// 可用的薪资区间；上下限都缺失时返回 `None`
    pub fn salary_range(&self) -> Option<SalaryRange> {
        SalaryRange::new(self.salary_from, self.salary_to)
    }
}

/// 至少有一端的薪资区间
///
/// 两端都缺失的情况无法构造，折算函数因此不会遇到它。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryRange {
    /// 只有下限
    From(f64),
    /// 只有上限
    UpTo(f64),
    /// 上下限都有
    Between(f64, f64),
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Some(SalaryRange::Between(from, to)),
            (Some(from), None) => Some(SalaryRange::From(from)),
            (None, Some(to)) => Some(SalaryRange::UpTo(to)),
            (None, None) => None,
        }
    }

    /// 折算成单一的代表薪资
    ///
    /// 只给上限的职位通常实际偏低，只给下限的通常实际偏高，各按 20% 修正。
    pub fn estimate(self) -> f64 {
        match self {
            SalaryRange::UpTo(to) => to * UPPER_ONLY_FACTOR,
            SalaryRange::From(from) => from * LOWER_ONLY_FACTOR,
            SalaryRange::Between(from, to) => (from + to) / 2.0,
        }
    }
}
