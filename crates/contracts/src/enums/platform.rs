use serde::{Deserialize, Serialize};

/// Social channel tracked for every brand entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Linkedin,
    Youtube,
}

impl Platform {
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Linkedin => "LinkedIn",
            Platform::Youtube => "YouTube",
        }
    }

    /// Chart slice colour
    pub fn color(&self) -> &'static str {
        match self {
            Platform::Instagram => "#E1306C",
            Platform::Facebook => "#1877F2",
            Platform::Linkedin => "#0077B5",
            Platform::Youtube => "#FF0000",
        }
    }

    pub fn all() -> [Platform; 4] {
        [
            Platform::Instagram,
            Platform::Facebook,
            Platform::Linkedin,
            Platform::Youtube,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "linkedin" => Some(Platform::Linkedin),
            "youtube" => Some(Platform::Youtube),
            _ => None,
        }
    }
}
