//! Data model, state transitions and reporting rules of the social media
//! audit tool. Target independent: the browser frontend and the unit tests
//! both build on it.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod store;
pub mod usecases;
