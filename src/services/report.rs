//! 终端表格输出
//!
//! 双线边框，标题嵌在上边框里：
//!
//! ```text
//! ╔Head Hunter vacancies═══════╦═════════════════════╦════════════════╗
//! ║ Language ║ Vacancies count ║ Vacancies processed ║ Average salary ║
//! ╠══════════╬═════════════════╬═════════════════════╬════════════════╣
//! ║ Python   ║ 512             ║ 498                 ║ 187650         ║
//! ╚══════════╩═════════════════╩═════════════════════╩════════════════╝
//! ```

use crate::models::{ProviderReport, TermStatistics};

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies count",
    "Vacancies processed",
    "Average salary",
];

/// 渲染一个提供方的报表
pub fn render_report(report: &ProviderReport) -> String {
    render_table(report.provider.title(), &report.rows)
}

/// 渲染统计表格
pub fn render_table(title: &str, rows: &[TermStatistics]) -> String {
    let mut cells: Vec<Vec<String>> = vec![HEADER.iter().map(|h| h.to_string()).collect()];
    cells.extend(rows.iter().map(|row| {
        vec![
            row.term.clone(),
            row.vacancies_count.to_string(),
            row.vacancies_processed.to_string(),
            row.average_salary.to_string(),
        ]
    }));

    let widths: Vec<usize> = (0..HEADER.len())
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 3);
    lines.push(with_title(border('╔', '╦', '╗', &widths), title));
    for (i, row) in cells.iter().enumerate() {
        lines.push(row_line(row, &widths));
        if i == 0 {
            lines.push(border('╠', '╬', '╣', &widths));
        }
    }
    lines.push(border('╚', '╩', '╝', &widths));

    lines.join("\n")
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
    let middle = middle.to_string();
    format!("{}{}{}", left, segments.join(middle.as_str()), right)
}

fn row_line(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
        .collect();
    format!("║{}║", cells.join("║"))
}

/// 标题放得下时覆盖上边框左侧，否则保持原样
fn with_title(top: String, title: &str) -> String {
    let mut chars: Vec<char> = top.chars().collect();
    let title_len = title.chars().count();
    if title_len == 0 || title_len + 2 > chars.len() {
        return top;
    }
    for (i, c) in title.chars().enumerate() {
        chars[i + 1] = c;
    }
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(term: &str, count: usize, processed: usize, avg: i64) -> TermStatistics {
        TermStatistics {
            term: term.to_string(),
            vacancies_count: count,
            vacancies_processed: processed,
            average_salary: avg,
        }
    }

    #[test]
    fn test_render_table_layout() {
        let table = render_table(
            "HH",
            &[row("Go", 2, 2, 140000), row("Data Scientist", 10, 0, 0)],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("╔HH═"));
        assert!(lines[0].ends_with('╗'));
        assert_eq!(
            lines[1],
            "║ Language       ║ Vacancies count ║ Vacancies processed ║ Average salary ║"
        );
        assert!(lines[2].starts_with('╠'));
        assert_eq!(
            lines[3],
            "║ Go             ║ 2               ║ 2                   ║ 140000         ║"
        );
        assert!(lines[5].starts_with('╚'));

        let width = lines[1].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_title_too_long_is_dropped() {
        let title = "x".repeat(500);
        let table = render_table(&title, &[]);
        assert!(table.starts_with("╔═"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_cyrillic_cells_are_padded_by_chars() {
        let table = render_table("SJ", &[row("Разработчик", 1, 1, 1)]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
