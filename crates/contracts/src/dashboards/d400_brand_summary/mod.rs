pub mod aggregation;
pub mod dto;
pub mod summary_text;

pub use aggregation::{
    average_engagement, budget_by_country, budget_by_platform, recommendation_count,
    total_budget, total_followers,
};
pub use dto::{BrandSummary, CountryBudget, PlatformBudget};
pub use summary_text::executive_summary;
