pub mod audit_store;

pub use audit_store::AuditStore;
