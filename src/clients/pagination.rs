//! 分页拉取
//!
//! 两家提供方的分页只在 "还有没有下一页" 的判断上不同：
//! HeadHunter 看 `pages`，SuperJob 看 `more`。

use crate::error::AppResult;
use std::future::Future;
use tracing::debug;

/// 一页结果
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 是否还需要请求下一页
    pub has_more: bool,
}

impl<T> Page<T> {
    /// HeadHunter：页码从 0 开始，`pages` 为最近一次响应报告的总页数
    pub fn by_page_count(items: Vec<T>, page: u32, pages: u32) -> Self {
        Self {
            items,
            has_more: page + 1 < pages,
        }
    }

    /// SuperJob：直接使用响应中的 `more`
    pub fn by_more_flag(items: Vec<T>, more: bool) -> Self {
        Self {
            items,
            has_more: more,
        }
    }
}

/// 从第 0 页开始顺序请求，直到某页报告没有更多数据
///
/// 任一页失败都会中止整个拉取，已累积的数据一并丢弃。
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_page: F) -> AppResult<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AppResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 0;

    loop {
        let Page {
            items: batch,
            has_more,
        } = fetch_page(page).await?;

        debug!("第 {} 页: {} 条", page, batch.len());
        items.extend(batch);

        if !has_more {
            break;
        }
        page += 1;
    }

    Ok(items)
}
