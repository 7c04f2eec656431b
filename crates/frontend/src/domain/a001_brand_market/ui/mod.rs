mod brand_section;
pub mod country_audit;
mod fields;
mod metrics_table;
mod platform_profile;

pub use country_audit::{CountryAudit, MetricsMode};
