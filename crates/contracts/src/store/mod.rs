pub mod action;
pub mod app_state;
pub mod reducer;
pub mod storage;
pub mod store;

pub use action::AuditAction;
pub use app_state::{AppState, CountryData, GeneralInfo, GeneralInfoField};
pub use reducer::reduce;
pub use storage::{MemoryStorage, StateStorage};
pub use store::StateStore;
