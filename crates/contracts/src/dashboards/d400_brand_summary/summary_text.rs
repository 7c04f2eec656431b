use super::dto::BrandSummary;
use crate::enums::CountryId;
use crate::shared::number_format::{format_amount, format_number_int};
use chrono::NaiveDate;

/// Plain-text executive brief for one brand, ready to paste into chat or mail.
///
/// Market names come from the caller so the brief follows the interface language.
pub fn executive_summary(
    summary: &BrandSummary,
    date: NaiveDate,
    country_name: impl Fn(CountryId) -> String,
) -> String {
    let engagement = summary
        .average_engagement
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "0".to_string());

    let mut text = format!(
        "*EXECUTIVE SUMMARY: {}*\n",
        summary.brand.display_name().to_uppercase()
    );
    text.push_str(&format!("Date: {}\n\n", date.format("%Y-%m-%d")));
    text.push_str(&format!(
        "*Total Budget (Global):* €{}\n",
        format_amount(summary.total_budget)
    ));
    text.push_str(&format!(
        "*Total Followers:* {}\n",
        format_number_int(summary.total_followers)
    ));
    text.push_str(&format!("*Avg Engagement Rate:* {}%\n\n", engagement));
    text.push_str("*Market Breakdown (Paid Budget):*\n");
    for point in &summary.budget_by_country {
        text.push_str(&format!(
            "   - {}: €{}\n",
            country_name(point.country),
            format_amount(point.amount)
        ));
    }
    text.push_str(&format!(
        "\n*Action Plan:* {} active recommendations identified.\n",
        summary.recommendation_count
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_brand_summary::dto::CountryBudget;
    use crate::enums::BrandId;

    #[test]
    fn test_executive_summary_text() {
        let summary = BrandSummary {
            brand: BrandId::Resound,
            total_budget: 12500.0,
            total_followers: 48210.0,
            average_engagement: Some(3.456),
            recommendation_count: 4,
            budget_by_country: vec![
                CountryBudget { country: CountryId::Es, amount: 10000.0 },
                CountryBudget { country: CountryId::Br, amount: 2500.0 },
                CountryBudget { country: CountryId::It, amount: 0.0 },
            ],
            budget_by_platform: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

        let text = executive_summary(&summary, date, |c| c.code().to_uppercase());

        assert!(text.starts_with("*EXECUTIVE SUMMARY: RESOUND*\n"));
        assert!(text.contains("Date: 2024-06-14"));
        assert!(text.contains("*Total Budget (Global):* €12 500"));
        assert!(text.contains("*Total Followers:* 48 210"));
        assert!(text.contains("*Avg Engagement Rate:* 3.46%"));
        assert!(text.contains("   - ES: €10 000\n"));
        assert!(text.contains("   - IT: €0\n"));
        assert!(text.contains("4 active recommendations"));
    }

    #[test]
    fn test_summary_without_engagement_data() {
        let summary = BrandSummary {
            brand: BrandId::Beltone,
            total_budget: 0.0,
            total_followers: 0.0,
            average_engagement: None,
            recommendation_count: 0,
            budget_by_country: vec![],
            budget_by_platform: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let text = executive_summary(&summary, date, |c| c.code().to_string());
        assert!(text.contains("*Avg Engagement Rate:* 0%"));
    }
}
