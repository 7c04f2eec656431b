use serde::{Deserialize, Serialize};

/// Product line whose social presence is audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandId {
    Resound,
    Beltone,
    Other,
}

impl BrandId {
    pub fn code(&self) -> &'static str {
        match self {
            BrandId::Resound => "resound",
            BrandId::Beltone => "beltone",
            BrandId::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BrandId::Resound => "ReSound",
            BrandId::Beltone => "Beltone",
            BrandId::Other => "Other",
        }
    }

    /// Accent colour used for headers, badges and bar charts
    pub fn accent_color(&self) -> &'static str {
        match self {
            BrandId::Resound => "#b91c1c",
            BrandId::Beltone => "#2563eb",
            BrandId::Other => "#4b5563",
        }
    }

    pub fn all() -> Vec<BrandId> {
        vec![BrandId::Resound, BrandId::Beltone, BrandId::Other]
    }

    /// Brands that get per-country entries and a dashboard section.
    /// `Other` only exists as a tag on recommendations.
    pub fn tracked() -> Vec<BrandId> {
        vec![BrandId::Resound, BrandId::Beltone]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "resound" => Some(BrandId::Resound),
            "beltone" => Some(BrandId::Beltone),
            "other" => Some(BrandId::Other),
            _ => None,
        }
    }
}
