//! 地理目录树
//!
//! 两家提供方的地区接口都返回 国家 → 地区 → 城市 的嵌套结构，
//! 这里统一转换成一棵带标签的树，再用同一个深度优先搜索查找。

use std::fmt;

/// 地点标识（两家提供方的内部数字 ID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Country,
    Region,
    City,
}

/// 目录树节点
#[derive(Debug, Clone, PartialEq)]
pub struct LocationNode {
    pub kind: LocationKind,
    pub id: LocationId,
    pub name: String,
    /// 子节点，保持接口返回的顺序
    pub children: Vec<LocationNode>,
}

impl LocationNode {
    pub fn new(kind: LocationKind, id: LocationId, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<LocationNode>) -> Self {
        self.children = children;
        self
    }
}

/// 先序深度优先搜索
///
/// 同层按顺序检查，父节点先于其子节点被检查；返回第一个满足 `matches` 的节点。
pub fn find_first<'a, F>(roots: &'a [LocationNode], matches: F) -> Option<&'a LocationNode>
where
    F: Fn(&LocationNode) -> bool,
{
    fn walk<'a, F>(nodes: &'a [LocationNode], matches: &F) -> Option<&'a LocationNode>
    where
        F: Fn(&LocationNode) -> bool,
    {
        for node in nodes {
            if matches(node) {
                return Some(node);
            }
            if let Some(found) = walk(&node.children, matches) {
                return Some(found);
            }
        }
        None
    }

    walk(roots, &matches)
}
