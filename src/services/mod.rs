pub mod location_resolver;
pub mod report;
pub mod stats_service;

pub use location_resolver::{find_city, resolve_city};
pub use report::{render_report, render_table};
pub use stats_service::{summarize, StatsService};
