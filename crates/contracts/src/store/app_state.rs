use crate::domain::a001_brand_market::BrandMarketData;
use crate::domain::a002_recommendation::Recommendation;
use crate::enums::{BrandId, CountryId, Language};
use crate::shared::config::DEFAULT_PROJECT_NAME;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project header shown on every page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralInfo {
    pub project_name: String,
    /// ISO date, free text in practice
    pub date: String,
    pub objectives: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralInfoField {
    ProjectName,
    Date,
    Objectives,
}

impl GeneralInfoField {
    pub fn set(&self, info: &mut GeneralInfo, value: String) {
        match self {
            GeneralInfoField::ProjectName => info.project_name = value,
            GeneralInfoField::Date => info.date = value,
            GeneralInfoField::Objectives => info.objectives = value,
        }
    }
}

/// Brand entries of one country. A missing brand key hides that brand's
/// section on the country page.
pub type CountryData = BTreeMap<BrandId, BrandMarketData>;

/// Root of the persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub general_info: GeneralInfo,
    #[serde(default)]
    pub data: BTreeMap<CountryId, CountryData>,
    /// Insertion order is the only ordering contract
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl AppState {
    /// Built-in starting state: every market holds empty entries for the
    /// tracked brands.
    pub fn initial(today: NaiveDate) -> Self {
        let data = CountryId::all()
            .into_iter()
            .map(|country| {
                let brands = BrandId::tracked()
                    .into_iter()
                    .map(|brand| (brand, BrandMarketData::default()))
                    .collect();
                (country, brands)
            })
            .collect();

        Self {
            language: Language::default(),
            general_info: GeneralInfo {
                project_name: DEFAULT_PROJECT_NAME.to_string(),
                date: today.format("%Y-%m-%d").to_string(),
                objectives: String::new(),
            },
            data,
            recommendations: Vec::new(),
        }
    }

    pub fn brand(&self, country: CountryId, brand: BrandId) -> Option<&BrandMarketData> {
        self.data.get(&country).and_then(|c| c.get(&brand))
    }

    pub fn brand_mut(
        &mut self,
        country: CountryId,
        brand: BrandId,
    ) -> Option<&mut BrandMarketData> {
        self.data.get_mut(&country).and_then(|c| c.get_mut(&brand))
    }

    /// Brand entries present for a country, in brand order
    pub fn brands_in(&self, country: CountryId) -> Vec<(BrandId, &BrandMarketData)> {
        self.data
            .get(&country)
            .map(|c| c.iter().map(|(b, d)| (*b, d)).collect())
            .unwrap_or_default()
    }

    pub fn recommendation(&self, id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }

    /// Defaulting step applied once after a document is read: every market key
    /// exists and every number is finite and non-negative.
    pub fn normalize(&mut self) {
        for country in CountryId::all() {
            self.data.entry(country).or_default();
        }
        for entry in self.data.values_mut().flat_map(|c| c.values_mut()) {
            entry.normalize();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[test]
    fn test_initial_state_shape() {
        let state = AppState::initial(day());
        assert_eq!(state.general_info.date, "2024-06-14");
        assert_eq!(state.general_info.project_name, DEFAULT_PROJECT_NAME);
        assert!(state.recommendations.is_empty());
        for country in CountryId::all() {
            let brands: Vec<BrandId> = state.brands_in(country).into_iter().map(|(b, _)| b).collect();
            assert_eq!(brands, vec![BrandId::Resound, BrandId::Beltone]);
        }
    }

    #[test]
    fn test_document_uses_original_keys() {
        let value = serde_json::to_value(AppState::initial(day())).unwrap();
        assert!(value.get("generalInfo").is_some());
        assert!(value["data"]["es"]["resound"]["metrics"]["youtube"].is_object());
        assert_eq!(value["language"], "es");
    }

    #[test]
    fn test_normalize_fills_missing_countries() {
        let mut state: AppState =
            serde_json::from_str(r#"{ "generalInfo": {}, "data": { "es": {} } }"#).unwrap();
        state.normalize();
        assert_eq!(state.data.len(), 3);
        assert!(state.brands_in(CountryId::Br).is_empty());
    }
}
