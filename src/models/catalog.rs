/// 默认查询的语言/岗位目录（顺序即报表行顺序）
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "C",
    "C++",
    "C#",
    "Python",
    "Java",
    "Javascript",
    "Ruby",
    "Scala",
    "Go",
    "1C",
    "PHP",
    "DevOps",
    "Data Analyst",
    "Data Scientist",
];

/// 返回默认目录的拥有型副本
pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}
