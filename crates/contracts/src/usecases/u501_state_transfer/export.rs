use crate::shared::config::EXPORT_FILE_PREFIX;
use crate::shared::error::Result;
use crate::store::AppState;
use chrono::NaiveDate;

/// Serialize the entire state. The document is self-contained and can be
/// imported as is.
pub fn export_state(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// `audit-protocol-resound-beltone-2024-06-14.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        assert_eq!(
            export_file_name(date),
            "audit-protocol-resound-beltone-2024-06-04.json"
        );
    }
}
