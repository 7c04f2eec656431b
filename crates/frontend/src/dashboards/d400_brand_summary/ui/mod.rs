mod brand_panel;
mod charts;
mod dashboard;
mod general_info;

pub use dashboard::BrandDashboard;
