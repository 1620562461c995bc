pub mod head_hunter;
pub mod pagination;
pub mod super_job;
pub mod transport;
pub mod vacancy_source;

pub use head_hunter::HeadHunterClient;
pub use pagination::{fetch_all_pages, Page};
pub use super_job::SuperJobClient;
pub use transport::{ApiRequest, HttpTransport, Transport};
pub use vacancy_source::VacancySource;
