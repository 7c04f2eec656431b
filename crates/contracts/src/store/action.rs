use super::app_state::{AppState, GeneralInfoField};
use crate::domain::a001_brand_market::BrandEdit;
use crate::domain::a002_recommendation::Recommendation;
use crate::enums::{BrandId, CountryId, Language};

/// Every state transition the application can make
#[derive(Debug, Clone, PartialEq)]
pub enum AuditAction {
    SetLanguage(Language),
    SetGeneralInfo(GeneralInfoField, String),
    /// Edit one path of an existing brand entry
    EditBrand {
        country: CountryId,
        brand: BrandId,
        edit: BrandEdit,
    },
    /// Overwrite the target's tracked-brand entries with copies of the
    /// reference market's entries
    CopyFromReference { target: CountryId },
    /// Back to the built-in default
    Reset,
    AddRecommendation(Recommendation),
    RemoveRecommendation(String),
    /// Wholesale replacement after a successful import
    Replace(AppState),
}

impl AuditAction {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            AuditAction::SetLanguage(_) => "set_language",
            AuditAction::SetGeneralInfo(..) => "set_general_info",
            AuditAction::EditBrand { .. } => "edit_brand",
            AuditAction::CopyFromReference { .. } => "copy_from_reference",
            AuditAction::Reset => "reset",
            AuditAction::AddRecommendation(_) => "add_recommendation",
            AuditAction::RemoveRecommendation(_) => "remove_recommendation",
            AuditAction::Replace(_) => "replace",
        }
    }
}
