use serde::{Deserialize, Serialize};

/// Tracked market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryId {
    Es,
    Br,
    It,
}

impl CountryId {
    pub fn code(&self) -> &'static str {
        match self {
            CountryId::Es => "es",
            CountryId::Br => "br",
            CountryId::It => "it",
        }
    }

    /// All markets in display order (Spain first)
    pub fn all() -> Vec<CountryId> {
        vec![CountryId::Es, CountryId::Br, CountryId::It]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(CountryId::Es),
            "br" => Some(CountryId::Br),
            "it" => Some(CountryId::It),
            _ => None,
        }
    }
}
