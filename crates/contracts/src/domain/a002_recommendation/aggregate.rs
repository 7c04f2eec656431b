use crate::enums::{BrandId, CountryId, Priority};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Market a recommendation applies to: one country or all of them.
///
/// Serialized as `"general"` or the country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecommendationScope {
    #[default]
    General,
    Country(CountryId),
}

impl RecommendationScope {
    pub fn code(&self) -> &'static str {
        match self {
            RecommendationScope::General => "general",
            RecommendationScope::Country(c) => c.code(),
        }
    }

    /// Selector order: global first, then every market
    pub fn all() -> Vec<RecommendationScope> {
        std::iter::once(RecommendationScope::General)
            .chain(CountryId::all().into_iter().map(RecommendationScope::Country))
            .collect()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "general" {
            return Some(RecommendationScope::General);
        }
        CountryId::from_code(code).map(RecommendationScope::Country)
    }
}

impl TryFrom<String> for RecommendationScope {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("unknown recommendation scope: {}", value))
    }
}

impl From<RecommendationScope> for String {
    fn from(value: RecommendationScope) -> Self {
        value.code().to_string()
    }
}

/// Free-text action item tagged with brand, market and priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub brand_id: BrandId,
    pub country_id: RecommendationScope,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Contents of the "new recommendation" form
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationDraft {
    pub brand_id: BrandId,
    pub country_id: RecommendationScope,
    pub area: String,
    pub problem: String,
    pub action: String,
    pub priority: Priority,
}

impl Default for RecommendationDraft {
    fn default() -> Self {
        Self {
            brand_id: BrandId::Resound,
            country_id: RecommendationScope::General,
            area: String::new(),
            problem: String::new(),
            action: String::new(),
            priority: Priority::Medium,
        }
    }
}

impl RecommendationDraft {
    /// Area and action are required, problem is optional
    pub fn is_complete(&self) -> bool {
        !self.area.trim().is_empty() && !self.action.trim().is_empty()
    }

    /// Turn the draft into a recommendation with a fresh unique id
    pub fn into_recommendation(self) -> Recommendation {
        Recommendation {
            id: Uuid::new_v4().to_string(),
            brand_id: self.brand_id,
            country_id: self.country_id,
            area: self.area,
            problem: self.problem,
            action: self.action,
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_wire_format() {
        let json = serde_json::to_string(&RecommendationScope::Country(CountryId::Br)).unwrap();
        assert_eq!(json, "\"br\"");
        let scope: RecommendationScope = serde_json::from_str("\"general\"").unwrap();
        assert_eq!(scope, RecommendationScope::General);
        assert!(serde_json::from_str::<RecommendationScope>("\"fr\"").is_err());
    }

    #[test]
    fn test_recommendation_reads_original_document_shape() {
        let json = r#"{
            "id": "1718000000000",
            "brandId": "beltone",
            "countryId": "it",
            "area": "Instagram",
            "problem": "No reels",
            "action": "Publish two reels per week",
            "priority": "high"
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.brand_id, BrandId::Beltone);
        assert_eq!(rec.country_id, RecommendationScope::Country(CountryId::It));
        assert_eq!(rec.priority, Priority::High);
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = RecommendationDraft::default();
        assert!(!draft.is_complete());
        draft.area = "LinkedIn".into();
        assert!(!draft.is_complete());
        draft.action = "   ".into();
        assert!(!draft.is_complete());
        draft.action = "Post case studies".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RecommendationDraft::default().into_recommendation();
        let b = RecommendationDraft::default().into_recommendation();
        assert_ne!(a.id, b.id);
    }
}
