pub mod access;
pub mod config;
pub mod error;
pub mod indicators;
pub mod number_format;
