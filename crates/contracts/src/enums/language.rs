use serde::{Deserialize, Serialize};

/// Interface language of the audit tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    It,
    Pt,
}

impl Language {
    /// Language code, as stored in the persisted document
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::It => "it",
            Language::Pt => "pt",
        }
    }

    /// Native language name for the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
            Language::It => "Italiano",
            Language::Pt => "Português",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::Es, Language::En, Language::It, Language::Pt]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            "it" => Some(Language::It),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }
}
