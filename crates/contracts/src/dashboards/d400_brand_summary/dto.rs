use super::aggregation;
use crate::enums::{BrandId, CountryId, Platform};
use crate::store::AppState;
use serde::{Deserialize, Serialize};

/// Bar of the budget-by-market chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryBudget {
    pub country: CountryId,
    pub amount: f64,
}

/// Slice of the budget-by-platform chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformBudget {
    pub platform: Platform,
    pub amount: f64,
}

/// Everything the dashboard shows for one brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub brand: BrandId,
    pub total_budget: f64,
    pub total_followers: f64,
    pub average_engagement: Option<f64>,
    pub recommendation_count: usize,
    pub budget_by_country: Vec<CountryBudget>,
    pub budget_by_platform: Vec<PlatformBudget>,
}

impl BrandSummary {
    pub fn compute(state: &AppState, brand: BrandId) -> Self {
        Self {
            brand,
            total_budget: aggregation::total_budget(state, brand),
            total_followers: aggregation::total_followers(state, brand),
            average_engagement: aggregation::average_engagement(state, brand),
            recommendation_count: aggregation::recommendation_count(state, brand),
            budget_by_country: aggregation::budget_by_country(state, brand),
            budget_by_platform: aggregation::budget_by_platform(state, brand),
        }
    }

    /// Share of each platform in the platform total, for the share chart
    pub fn platform_shares(&self) -> Vec<(Platform, f64)> {
        let total: f64 = self.budget_by_platform.iter().map(|s| s.amount).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        self.budget_by_platform
            .iter()
            .map(|s| (s.platform, s.amount / total))
            .collect()
    }

    /// Largest bar of the market chart, used to scale it
    pub fn max_country_budget(&self) -> f64 {
        self.budget_by_country
            .iter()
            .map(|p| p.amount)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_summary_of_empty_state() {
        let state = AppState::initial(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let summary = BrandSummary::compute(&state, BrandId::Resound);

        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.average_engagement, None);
        assert_eq!(summary.budget_by_country.len(), 3);
        assert!(summary.budget_by_platform.is_empty());
        assert!(summary.platform_shares().is_empty());
        assert_eq!(summary.max_country_budget(), 0.0);
    }

    #[test]
    fn test_platform_shares_sum_to_one() {
        let mut state = AppState::initial(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let entry = state.brand_mut(CountryId::Es, BrandId::Beltone).unwrap();
        entry.metrics.instagram.paid.budget = 300.0;
        entry.metrics.facebook.paid.budget = 100.0;

        let summary = BrandSummary::compute(&state, BrandId::Beltone);
        let shares = summary.platform_shares();
        assert_eq!(shares, vec![(Platform::Instagram, 0.75), (Platform::Facebook, 0.25)]);
        assert_eq!(summary.max_country_budget(), 400.0);
    }
}
