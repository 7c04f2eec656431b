//! Path-addressed edits of a brand entry.
//!
//! Every form input of the country audit page maps to exactly one edit value,
//! so the store has a single way to change a brand entry.

use super::aggregate::{
    sanitize_metric, AuditChecklist, BrandAlignment, BrandMarketData, OrganicMetrics, PaidMetrics,
    PlatformData,
};
use crate::enums::{AnalysisPeriod, Platform, TargetAudience, TriState};

/// Numeric organic counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganicField {
    Followers,
    AvgMonthlyPosts,
    Reach,
    Impressions,
    Interactions,
    EngagementRate,
    ProfileVisits,
    Clicks,
    Posts,
    Reels,
    Videos,
    Stories,
    VideoViews,
}

impl OrganicField {
    pub fn all() -> [OrganicField; 13] {
        [
            OrganicField::Followers,
            OrganicField::AvgMonthlyPosts,
            OrganicField::Reach,
            OrganicField::Impressions,
            OrganicField::Interactions,
            OrganicField::EngagementRate,
            OrganicField::ProfileVisits,
            OrganicField::Clicks,
            OrganicField::Posts,
            OrganicField::Reels,
            OrganicField::Videos,
            OrganicField::Stories,
            OrganicField::VideoViews,
        ]
    }

    /// JSON field name, also used as the label key
    pub fn code(&self) -> &'static str {
        match self {
            OrganicField::Followers => "followers",
            OrganicField::AvgMonthlyPosts => "avgMonthlyPosts",
            OrganicField::Reach => "reach",
            OrganicField::Impressions => "impressions",
            OrganicField::Interactions => "interactions",
            OrganicField::EngagementRate => "engagementRate",
            OrganicField::ProfileVisits => "profileVisits",
            OrganicField::Clicks => "clicks",
            OrganicField::Posts => "posts",
            OrganicField::Reels => "reels",
            OrganicField::Videos => "videos",
            OrganicField::Stories => "stories",
            OrganicField::VideoViews => "videoViews",
        }
    }

    /// Whether the input accepts decimals
    pub fn is_fractional(&self) -> bool {
        matches!(self, OrganicField::EngagementRate | OrganicField::AvgMonthlyPosts)
    }

    pub fn get(&self, m: &OrganicMetrics) -> f64 {
        match self {
            OrganicField::Followers => m.followers,
            OrganicField::AvgMonthlyPosts => m.avg_monthly_posts,
            OrganicField::Reach => m.reach,
            OrganicField::Impressions => m.impressions,
            OrganicField::Interactions => m.interactions,
            OrganicField::EngagementRate => m.engagement_rate,
            OrganicField::ProfileVisits => m.profile_visits,
            OrganicField::Clicks => m.clicks,
            OrganicField::Posts => m.posts,
            OrganicField::Reels => m.reels,
            OrganicField::Videos => m.videos,
            OrganicField::Stories => m.stories,
            OrganicField::VideoViews => m.video_views,
        }
    }

    fn slot<'a>(&self, m: &'a mut OrganicMetrics) -> &'a mut f64 {
        match self {
            OrganicField::Followers => &mut m.followers,
            OrganicField::AvgMonthlyPosts => &mut m.avg_monthly_posts,
            OrganicField::Reach => &mut m.reach,
            OrganicField::Impressions => &mut m.impressions,
            OrganicField::Interactions => &mut m.interactions,
            OrganicField::EngagementRate => &mut m.engagement_rate,
            OrganicField::ProfileVisits => &mut m.profile_visits,
            OrganicField::Clicks => &mut m.clicks,
            OrganicField::Posts => &mut m.posts,
            OrganicField::Reels => &mut m.reels,
            OrganicField::Videos => &mut m.videos,
            OrganicField::Stories => &mut m.stories,
            OrganicField::VideoViews => &mut m.video_views,
        }
    }

    pub fn set(&self, m: &mut OrganicMetrics, value: f64) {
        *self.slot(m) = sanitize_metric(value);
    }
}

/// Numeric paid-media figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaidField {
    Budget,
    AvgMonthlyBudget,
    Cpc,
    Ctr,
    Conversions,
    Cpl,
}

impl PaidField {
    pub fn all() -> [PaidField; 6] {
        [
            PaidField::Budget,
            PaidField::AvgMonthlyBudget,
            PaidField::Cpc,
            PaidField::Ctr,
            PaidField::Conversions,
            PaidField::Cpl,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaidField::Budget => "budget",
            PaidField::AvgMonthlyBudget => "avgMonthlyBudget",
            PaidField::Cpc => "cpc",
            PaidField::Ctr => "ctr",
            PaidField::Conversions => "conversions",
            PaidField::Cpl => "cpl",
        }
    }

    pub fn is_fractional(&self) -> bool {
        !matches!(self, PaidField::Conversions)
    }

    pub fn get(&self, m: &PaidMetrics) -> f64 {
        match self {
            PaidField::Budget => m.budget,
            PaidField::AvgMonthlyBudget => m.avg_monthly_budget,
            PaidField::Cpc => m.cpc,
            PaidField::Ctr => m.ctr,
            PaidField::Conversions => m.conversions,
            PaidField::Cpl => m.cpl,
        }
    }

    pub fn set(&self, m: &mut PaidMetrics, value: f64) {
        let value = sanitize_metric(value);
        match self {
            PaidField::Budget => m.budget = value,
            PaidField::AvgMonthlyBudget => m.avg_monthly_budget = value,
            PaidField::Cpc => m.cpc = value,
            PaidField::Ctr => m.ctr = value,
            PaidField::Conversions => m.conversions = value,
            PaidField::Cpl => m.cpl = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecklistItem {
    BioOptimized,
    LinkInBio,
    HighlightsOrganized,
    Verified,
}

impl ChecklistItem {
    pub fn all() -> [ChecklistItem; 4] {
        [
            ChecklistItem::BioOptimized,
            ChecklistItem::LinkInBio,
            ChecklistItem::HighlightsOrganized,
            ChecklistItem::Verified,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ChecklistItem::BioOptimized => "bioOptimized",
            ChecklistItem::LinkInBio => "linkInBio",
            ChecklistItem::HighlightsOrganized => "highlightsOrganized",
            ChecklistItem::Verified => "verified",
        }
    }

    pub fn get(&self, c: &AuditChecklist) -> bool {
        match self {
            ChecklistItem::BioOptimized => c.bio_optimized,
            ChecklistItem::LinkInBio => c.link_in_bio,
            ChecklistItem::HighlightsOrganized => c.highlights_organized,
            ChecklistItem::Verified => c.verified,
        }
    }

    pub fn set(&self, c: &mut AuditChecklist, value: bool) {
        match self {
            ChecklistItem::BioOptimized => c.bio_optimized = value,
            ChecklistItem::LinkInBio => c.link_in_bio = value,
            ChecklistItem::HighlightsOrganized => c.highlights_organized = value,
            ChecklistItem::Verified => c.verified = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentAspect {
    Colors,
    Typography,
    Tone,
}

impl AlignmentAspect {
    pub fn all() -> [AlignmentAspect; 3] {
        [
            AlignmentAspect::Colors,
            AlignmentAspect::Typography,
            AlignmentAspect::Tone,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AlignmentAspect::Colors => "colors",
            AlignmentAspect::Typography => "typography",
            AlignmentAspect::Tone => "tone",
        }
    }

    pub fn get(&self, a: &BrandAlignment) -> TriState {
        match self {
            AlignmentAspect::Colors => a.colors,
            AlignmentAspect::Typography => a.typography,
            AlignmentAspect::Tone => a.tone,
        }
    }

    pub fn set(&self, a: &mut BrandAlignment, value: TriState) {
        match self {
            AlignmentAspect::Colors => a.colors = value,
            AlignmentAspect::Typography => a.typography = value,
            AlignmentAspect::Tone => a.tone = value,
        }
    }
}

/// Change to a single platform record
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEdit {
    Username(String),
    Active(bool),
    TargetAudience(TargetAudience),
    CurrentStyle(String),
    DesiredStyle(String),
    Organic(OrganicField, f64),
    AdsEnabled(bool),
    Paid(PaidField, f64),
    Checklist(ChecklistItem, bool),
    Alignment(AlignmentAspect, TriState),
}

impl PlatformEdit {
    pub fn apply(self, data: &mut PlatformData) {
        match self {
            PlatformEdit::Username(v) => data.username = v,
            PlatformEdit::Active(v) => data.active = v,
            PlatformEdit::TargetAudience(v) => data.target_audience = v,
            PlatformEdit::CurrentStyle(v) => data.current_style = v,
            PlatformEdit::DesiredStyle(v) => data.desired_style = v,
            PlatformEdit::Organic(field, v) => field.set(&mut data.organic, v),
            PlatformEdit::AdsEnabled(v) => data.paid.ads_enabled = v,
            PlatformEdit::Paid(field, v) => field.set(&mut data.paid, v),
            PlatformEdit::Checklist(item, v) => item.set(&mut data.checklist, v),
            PlatformEdit::Alignment(aspect, v) => aspect.set(&mut data.alignment, v),
        }
    }
}

/// Change to a brand entry: either a brand-level field or one platform
#[derive(Debug, Clone, PartialEq)]
pub enum BrandEdit {
    Manager(String),
    HasCalendar(TriState),
    Strategy(String),
    AnalysisPeriod(AnalysisPeriod),
    Platform(Platform, PlatformEdit),
}

impl BrandEdit {
    pub fn apply(self, entry: &mut BrandMarketData) {
        match self {
            BrandEdit::Manager(v) => entry.manager = v,
            BrandEdit::HasCalendar(v) => entry.has_calendar = v,
            BrandEdit::Strategy(v) => entry.strategy = v,
            BrandEdit::AnalysisPeriod(v) => entry.analysis_period = v,
            BrandEdit::Platform(platform, edit) => edit.apply(entry.metrics.get_mut(platform)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_organic_field_reads_back() {
        let mut metrics = OrganicMetrics::default();
        for (i, field) in OrganicField::all().into_iter().enumerate() {
            field.set(&mut metrics, (i + 1) as f64);
        }
        for (i, field) in OrganicField::all().into_iter().enumerate() {
            assert_eq!(field.get(&metrics), (i + 1) as f64, "{}", field.code());
        }
    }

    #[test]
    fn test_every_paid_field_reads_back() {
        let mut metrics = PaidMetrics::default();
        for (i, field) in PaidField::all().into_iter().enumerate() {
            field.set(&mut metrics, 10.0 * (i + 1) as f64);
        }
        for (i, field) in PaidField::all().into_iter().enumerate() {
            assert_eq!(field.get(&metrics), 10.0 * (i + 1) as f64, "{}", field.code());
        }
    }

    #[test]
    fn test_platform_edit_touches_only_target_platform() {
        let mut entry = BrandMarketData::default();
        BrandEdit::Platform(
            Platform::Linkedin,
            PlatformEdit::Paid(PaidField::Budget, 750.0),
        )
        .apply(&mut entry);

        assert_eq!(entry.metrics.linkedin.paid.budget, 750.0);
        for platform in [Platform::Instagram, Platform::Facebook, Platform::Youtube] {
            assert_eq!(entry.metrics.get(platform), &PlatformData::default());
        }
    }

    #[test]
    fn test_negative_metric_is_stored_as_zero() {
        let mut data = PlatformData::default();
        PlatformEdit::Organic(OrganicField::Reach, -10.0).apply(&mut data);
        assert_eq!(data.organic.reach, 0.0);
    }

    #[test]
    fn test_checklist_and_alignment_edits() {
        let mut data = PlatformData::default();
        PlatformEdit::Checklist(ChecklistItem::LinkInBio, true).apply(&mut data);
        PlatformEdit::Alignment(AlignmentAspect::Tone, TriState::Partial).apply(&mut data);

        assert!(data.checklist.link_in_bio);
        assert!(!data.checklist.verified);
        assert_eq!(data.alignment.tone, TriState::Partial);
        assert_eq!(data.alignment.colors, TriState::No);
    }
}
