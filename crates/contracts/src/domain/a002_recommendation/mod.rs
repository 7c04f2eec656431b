pub mod aggregate;

pub use aggregate::{Recommendation, RecommendationDraft, RecommendationScope};
