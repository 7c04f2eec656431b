pub mod a001_brand_market;
pub mod a002_recommendation;
