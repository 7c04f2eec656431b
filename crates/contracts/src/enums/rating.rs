use serde::{Deserialize, Serialize};

/// Three-way answer used for calendar presence and brand alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Yes,
    #[default]
    No,
    Partial,
}

impl TriState {
    pub fn code(&self) -> &'static str {
        match self {
            TriState::Yes => "yes",
            TriState::No => "no",
            TriState::Partial => "partial",
        }
    }

    /// Selector order: the "no" answer comes first
    pub fn all() -> Vec<TriState> {
        vec![TriState::No, TriState::Yes, TriState::Partial]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "yes" => Some(TriState::Yes),
            "no" => Some(TriState::No),
            "partial" => Some(TriState::Partial),
            _ => None,
        }
    }
}

/// Audience a platform account is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetAudience {
    #[serde(rename = "B2B")]
    B2b,
    #[default]
    #[serde(rename = "B2C")]
    B2c,
    #[serde(rename = "B2B2C")]
    B2b2c,
}

impl TargetAudience {
    pub fn code(&self) -> &'static str {
        match self {
            TargetAudience::B2b => "B2B",
            TargetAudience::B2c => "B2C",
            TargetAudience::B2b2c => "B2B2C",
        }
    }

    pub fn all() -> Vec<TargetAudience> {
        vec![TargetAudience::B2b, TargetAudience::B2c, TargetAudience::B2b2c]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "B2B" => Some(TargetAudience::B2b),
            "B2C" => Some(TargetAudience::B2c),
            "B2B2C" => Some(TargetAudience::B2b2c),
            _ => None,
        }
    }
}

/// Window the entered metrics were measured over.
///
/// Older documents stored a free-text label ("Last 90 Days"); both the code and
/// the label are accepted on read, anything else falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalysisPeriod {
    Last30Days,
    #[default]
    Last90Days,
    Last180Days,
    Last365Days,
}

impl AnalysisPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisPeriod::Last30Days => "last30",
            AnalysisPeriod::Last90Days => "last90",
            AnalysisPeriod::Last180Days => "last180",
            AnalysisPeriod::Last365Days => "last365",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisPeriod::Last30Days => "Last 30 Days",
            AnalysisPeriod::Last90Days => "Last 90 Days",
            AnalysisPeriod::Last180Days => "Last 180 Days",
            AnalysisPeriod::Last365Days => "Last 365 Days",
        }
    }

    pub fn all() -> Vec<AnalysisPeriod> {
        vec![
            AnalysisPeriod::Last30Days,
            AnalysisPeriod::Last90Days,
            AnalysisPeriod::Last180Days,
            AnalysisPeriod::Last365Days,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|p| p.code() == code || p.display_name().eq_ignore_ascii_case(code))
    }
}

impl From<String> for AnalysisPeriod {
    fn from(value: String) -> Self {
        Self::from_code(value.trim()).unwrap_or_default()
    }
}

impl From<AnalysisPeriod> for String {
    fn from(value: AnalysisPeriod) -> Self {
        value.code().to_string()
    }
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn code(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::High, Priority::Medium, Priority::Low]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_period_accepts_legacy_labels() {
        let period: AnalysisPeriod = serde_json::from_str("\"Last 30 Days\"").unwrap();
        assert_eq!(period, AnalysisPeriod::Last30Days);

        let period: AnalysisPeriod = serde_json::from_str("\"last180\"").unwrap();
        assert_eq!(period, AnalysisPeriod::Last180Days);

        let period: AnalysisPeriod = serde_json::from_str("\"sometime\"").unwrap();
        assert_eq!(period, AnalysisPeriod::Last90Days);
    }

    #[test]
    fn test_analysis_period_writes_code() {
        let json = serde_json::to_string(&AnalysisPeriod::Last365Days).unwrap();
        assert_eq!(json, "\"last365\"");
    }

    #[test]
    fn test_target_audience_wire_names() {
        let json = serde_json::to_string(&TargetAudience::B2b2c).unwrap();
        assert_eq!(json, "\"B2B2C\"");
        let audience: TargetAudience = serde_json::from_str("\"B2B\"").unwrap();
        assert_eq!(audience, TargetAudience::B2b);
    }

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for state in TriState::all() {
            assert_eq!(TriState::from_code(state.code()), Some(state));
        }
        for priority in Priority::all() {
            assert_eq!(Priority::from_code(priority.code()), Some(priority));
        }
        assert_eq!(TriState::from_code("maybe"), None);
    }
}
