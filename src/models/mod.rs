pub mod catalog;
pub mod location;
pub mod provider;
pub mod stats;
pub mod vacancy;

pub use catalog::{default_languages, DEFAULT_LANGUAGES};
pub use location::{find_first, LocationId, LocationKind, LocationNode};
pub use provider::Provider;
pub use stats::{ProviderReport, TermStatistics};
pub use vacancy::{SalaryRange, Vacancy};
