//! Compile-time configuration

use crate::enums::CountryId;

/// localStorage key of the persisted state.
/// Bump the version suffix on any backward-incompatible shape change;
/// data under an older key is abandoned.
pub const STORAGE_KEY: &str = "audit-protocol-v3";

/// File name prefix of exported documents
pub const EXPORT_FILE_PREFIX: &str = "audit-protocol-resound-beltone";

/// Market other countries are bootstrapped from
pub const REFERENCE_COUNTRY: CountryId = CountryId::Es;

/// Build-time environment variable holding the optional access token
pub const ACCESS_KEY_ENV: &str = "AUDIT_ACCESS_KEY";

/// Query parameter carrying the access token
pub const ACCESS_KEY_PARAM: &str = "key";

pub const DEFAULT_PROJECT_NAME: &str = "Social Media Audit Protocol";
