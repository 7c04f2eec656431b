use crate::enums::{AnalysisPeriod, Platform, TargetAudience, TriState};
use serde::{Deserialize, Serialize};

// ============================================================================
// Metrics
// ============================================================================

/// Unpaid reach, engagement and content-volume figures for one platform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganicMetrics {
    pub followers: f64,
    pub avg_monthly_posts: f64,

    // Awareness
    pub reach: f64,
    pub impressions: f64,

    // Engagement
    pub interactions: f64,
    /// Percentage, `3.5` means 3.5%
    pub engagement_rate: f64,

    // Profile activity
    pub profile_visits: f64,
    pub clicks: f64,

    // Content mix
    pub posts: f64,
    pub reels: f64,
    pub videos: f64,
    pub stories: f64,
    pub video_views: f64,
}

/// Advertising spend and performance for one platform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaidMetrics {
    pub ads_enabled: bool,
    pub budget: f64,
    pub avg_monthly_budget: f64,
    /// Cost per click
    pub cpc: f64,
    /// Click-through rate, percentage
    pub ctr: f64,
    pub conversions: f64,
    /// Cost per lead
    pub cpl: f64,
}

/// Profile hygiene checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditChecklist {
    pub bio_optimized: bool,
    pub link_in_bio: bool,
    pub highlights_organized: bool,
    pub verified: bool,
}

/// How closely the account follows the brand book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandAlignment {
    pub colors: TriState,
    pub typography: TriState,
    pub tone: TriState,
}

/// Everything recorded for one platform of one brand in one country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformData {
    pub username: String,
    pub active: bool,
    pub target_audience: TargetAudience,
    pub current_style: String,
    pub desired_style: String,
    pub organic: OrganicMetrics,
    pub paid: PaidMetrics,
    pub checklist: AuditChecklist,
    pub alignment: BrandAlignment,
}

/// The four platform records of a brand entry. All four are always present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformMetrics {
    pub instagram: PlatformData,
    pub facebook: PlatformData,
    pub linkedin: PlatformData,
    pub youtube: PlatformData,
}

impl PlatformMetrics {
    pub fn get(&self, platform: Platform) -> &PlatformData {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::Facebook => &self.facebook,
            Platform::Linkedin => &self.linkedin,
            Platform::Youtube => &self.youtube,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut PlatformData {
        match platform {
            Platform::Instagram => &mut self.instagram,
            Platform::Facebook => &mut self.facebook,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Youtube => &mut self.youtube,
        }
    }

    /// Platforms in fixed order together with their records
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformData)> {
        Platform::all().into_iter().map(move |p| (p, self.get(p)))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One brand's audit entry for one country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandMarketData {
    pub manager: String,
    pub has_calendar: TriState,
    pub strategy: String,
    pub analysis_period: AnalysisPeriod,
    pub metrics: PlatformMetrics,
}

impl BrandMarketData {
    /// Clamp every numeric counter to a finite, non-negative value
    pub fn normalize(&mut self) {
        for platform in Platform::all() {
            let data = self.metrics.get_mut(platform);
            let o = &mut data.organic;
            for value in [
                &mut o.followers,
                &mut o.avg_monthly_posts,
                &mut o.reach,
                &mut o.impressions,
                &mut o.interactions,
                &mut o.engagement_rate,
                &mut o.profile_visits,
                &mut o.clicks,
                &mut o.posts,
                &mut o.reels,
                &mut o.videos,
                &mut o.stories,
                &mut o.video_views,
            ] {
                *value = sanitize_metric(*value);
            }
            let p = &mut data.paid;
            for value in [
                &mut p.budget,
                &mut p.avg_monthly_budget,
                &mut p.cpc,
                &mut p.ctr,
                &mut p.conversions,
                &mut p.cpl,
            ] {
                *value = sanitize_metric(*value);
            }
        }
    }
}

/// Negative or non-finite numbers are stored as zero
pub fn sanitize_metric(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerce raw form input into a metric value. Empty or invalid text becomes zero.
pub fn parse_metric_input(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(sanitize_metric)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_input() {
        assert_eq!(parse_metric_input("1500"), 1500.0);
        assert_eq!(parse_metric_input(" 3,5 "), 3.5);
        assert_eq!(parse_metric_input(""), 0.0);
        assert_eq!(parse_metric_input("abc"), 0.0);
        assert_eq!(parse_metric_input("-20"), 0.0);
        assert_eq!(parse_metric_input("NaN"), 0.0);
        assert_eq!(parse_metric_input("inf"), 0.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = r#"{
            "manager": "Lucia",
            "metrics": { "instagram": { "organic": { "followers": 1200 } } }
        }"#;
        let entry: BrandMarketData = serde_json::from_str(json).unwrap();

        assert_eq!(entry.manager, "Lucia");
        assert_eq!(entry.has_calendar, TriState::No);
        assert_eq!(entry.metrics.instagram.organic.followers, 1200.0);
        assert_eq!(entry.metrics.instagram.organic.engagement_rate, 0.0);
        assert_eq!(entry.metrics.youtube, PlatformData::default());
    }

    #[test]
    fn test_normalize_clamps_negative_numbers() {
        let mut entry = BrandMarketData::default();
        entry.metrics.facebook.paid.budget = -50.0;
        entry.metrics.linkedin.organic.reach = f64::NAN;
        entry.metrics.youtube.organic.followers = 300.0;

        entry.normalize();

        assert_eq!(entry.metrics.facebook.paid.budget, 0.0);
        assert_eq!(entry.metrics.linkedin.organic.reach, 0.0);
        assert_eq!(entry.metrics.youtube.organic.followers, 300.0);
    }

    #[test]
    fn test_camel_case_field_names() {
        let value = serde_json::to_value(BrandMarketData::default()).unwrap();
        assert!(value.get("hasCalendar").is_some());
        assert!(value.get("analysisPeriod").is_some());
        let organic = &value["metrics"]["instagram"]["organic"];
        assert!(organic.get("engagementRate").is_some());
        assert!(organic.get("videoViews").is_some());
    }
}
