//! Folds of the state tree into dashboard figures.
//!
//! All sums are plain floating sums; rounding happens at display time.

use super::dto::{CountryBudget, PlatformBudget};
use crate::domain::a001_brand_market::PlatformData;
use crate::enums::{BrandId, CountryId, Platform};
use crate::store::AppState;

/// Every platform record of a brand across all markets
fn platform_records(state: &AppState, brand: BrandId) -> impl Iterator<Item = (Platform, &PlatformData)> {
    CountryId::all()
        .into_iter()
        .filter_map(move |country| state.brand(country, brand))
        .flat_map(|entry| entry.metrics.iter())
}

pub fn total_budget(state: &AppState, brand: BrandId) -> f64 {
    platform_records(state, brand).map(|(_, d)| d.paid.budget).sum()
}

pub fn total_followers(state: &AppState, brand: BrandId) -> f64 {
    platform_records(state, brand).map(|(_, d)| d.organic.followers).sum()
}

/// Mean engagement over platforms with a positive rate only. Unset platforms
/// stay out of the denominator. `None` when no platform has a rate.
pub fn average_engagement(state: &AppState, brand: BrandId) -> Option<f64> {
    let (sum, count) = platform_records(state, brand)
        .map(|(_, d)| d.organic.engagement_rate)
        .filter(|rate| *rate > 0.0)
        .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// One point per market, zero included so every market stays on the chart
pub fn budget_by_country(state: &AppState, brand: BrandId) -> Vec<CountryBudget> {
    CountryId::all()
        .into_iter()
        .map(|country| CountryBudget {
            country,
            amount: state
                .brand(country, brand)
                .map(|entry| entry.metrics.iter().map(|(_, d)| d.paid.budget).sum())
                .unwrap_or(0.0),
        })
        .collect()
}

/// Spend per platform across markets; platforms without spend are omitted
pub fn budget_by_platform(state: &AppState, brand: BrandId) -> Vec<PlatformBudget> {
    Platform::all()
        .into_iter()
        .map(|platform| PlatformBudget {
            platform,
            amount: platform_records(state, brand)
                .filter(|(p, _)| *p == platform)
                .map(|(_, d)| d.paid.budget)
                .sum(),
        })
        .filter(|slice| slice.amount > 0.0)
        .collect()
}

/// Recommendations tagged with the brand, whatever their market
pub fn recommendation_count(state: &AppState, brand: BrandId) -> usize {
    state
        .recommendations
        .iter()
        .filter(|r| r.brand_id == brand)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_recommendation::{RecommendationDraft, RecommendationScope};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::initial(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    fn platform(state: &mut AppState, c: CountryId, b: BrandId, p: Platform) -> &mut PlatformData {
        state.brand_mut(c, b).unwrap().metrics.get_mut(p)
    }

    #[test]
    fn test_totals_span_countries_and_platforms() {
        let mut s = state();
        platform(&mut s, CountryId::Es, BrandId::Resound, Platform::Instagram).paid.budget = 100.0;
        platform(&mut s, CountryId::Br, BrandId::Resound, Platform::Youtube).paid.budget = 250.5;
        platform(&mut s, CountryId::Es, BrandId::Beltone, Platform::Instagram).paid.budget = 999.0;
        platform(&mut s, CountryId::It, BrandId::Resound, Platform::Facebook).organic.followers = 1200.0;
        platform(&mut s, CountryId::Es, BrandId::Resound, Platform::Linkedin).organic.followers = 300.0;

        assert_eq!(total_budget(&s, BrandId::Resound), 350.5);
        assert_eq!(total_budget(&s, BrandId::Beltone), 999.0);
        assert_eq!(total_followers(&s, BrandId::Resound), 1500.0);
        assert_eq!(total_budget(&s, BrandId::Other), 0.0);
    }

    #[test]
    fn test_average_engagement_skips_unset_platforms() {
        let mut s = state();
        platform(&mut s, CountryId::Es, BrandId::Beltone, Platform::Youtube).organic.engagement_rate = 4.0;

        // 24 platform records for the brand, only one with a rate
        assert_eq!(average_engagement(&s, BrandId::Beltone), Some(4.0));

        platform(&mut s, CountryId::It, BrandId::Beltone, Platform::Instagram).organic.engagement_rate = 2.0;
        assert_eq!(average_engagement(&s, BrandId::Beltone), Some(3.0));
    }

    #[test]
    fn test_average_engagement_none_without_data() {
        assert_eq!(average_engagement(&state(), BrandId::Resound), None);
    }

    #[test]
    fn test_budget_by_country_keeps_every_market() {
        let mut s = state();
        platform(&mut s, CountryId::Br, BrandId::Resound, Platform::Facebook).paid.budget = 80.0;
        platform(&mut s, CountryId::Br, BrandId::Resound, Platform::Linkedin).paid.budget = 20.0;
        s.data.get_mut(&CountryId::It).unwrap().remove(&BrandId::Resound);

        let points = budget_by_country(&s, BrandId::Resound);
        assert_eq!(
            points,
            vec![
                CountryBudget { country: CountryId::Es, amount: 0.0 },
                CountryBudget { country: CountryId::Br, amount: 100.0 },
                CountryBudget { country: CountryId::It, amount: 0.0 },
            ]
        );
    }

    #[test]
    fn test_budget_by_platform_omits_zero_spend() {
        let mut s = state();
        platform(&mut s, CountryId::Es, BrandId::Resound, Platform::Instagram).paid.budget = 0.0;
        platform(&mut s, CountryId::Es, BrandId::Resound, Platform::Facebook).paid.budget = 100.0;

        assert_eq!(
            budget_by_platform(&s, BrandId::Resound),
            vec![PlatformBudget { platform: Platform::Facebook, amount: 100.0 }]
        );
    }

    #[test]
    fn test_budget_by_platform_sums_across_countries() {
        let mut s = state();
        platform(&mut s, CountryId::Es, BrandId::Beltone, Platform::Youtube).paid.budget = 40.0;
        platform(&mut s, CountryId::It, BrandId::Beltone, Platform::Youtube).paid.budget = 60.0;
        platform(&mut s, CountryId::Br, BrandId::Beltone, Platform::Instagram).paid.budget = 5.0;

        assert_eq!(
            budget_by_platform(&s, BrandId::Beltone),
            vec![
                PlatformBudget { platform: Platform::Instagram, amount: 5.0 },
                PlatformBudget { platform: Platform::Youtube, amount: 100.0 },
            ]
        );
    }

    #[test]
    fn test_recommendation_count_ignores_country() {
        let mut s = state();
        for (brand, scope) in [
            (BrandId::Resound, RecommendationScope::General),
            (BrandId::Resound, RecommendationScope::Country(CountryId::It)),
            (BrandId::Beltone, RecommendationScope::Country(CountryId::Es)),
        ] {
            let draft = RecommendationDraft {
                brand_id: brand,
                country_id: scope,
                area: "a".into(),
                action: "b".into(),
                ..RecommendationDraft::default()
            };
            s.recommendations.push(draft.into_recommendation());
        }
        assert_eq!(recommendation_count(&s, BrandId::Resound), 2);
        assert_eq!(recommendation_count(&s, BrandId::Beltone), 1);
        assert_eq!(recommendation_count(&s, BrandId::Other), 0);
    }
}
