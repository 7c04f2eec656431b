pub mod brand;
pub mod country;
pub mod language;
pub mod platform;
pub mod rating;

pub use brand::BrandId;
pub use country::CountryId;
pub use language::Language;
pub use platform::Platform;
pub use rating::{AnalysisPeriod, Priority, TargetAudience, TriState};
