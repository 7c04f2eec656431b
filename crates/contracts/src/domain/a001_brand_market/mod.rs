pub mod aggregate;
pub mod edit;

pub use aggregate::{
    parse_metric_input, AuditChecklist, BrandAlignment, BrandMarketData, OrganicMetrics,
    PaidMetrics, PlatformData, PlatformMetrics,
};
pub use edit::{AlignmentAspect, BrandEdit, ChecklistItem, OrganicField, PaidField, PlatformEdit};
