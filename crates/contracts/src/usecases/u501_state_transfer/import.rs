use crate::shared::error::{Result, TransferError};
use crate::store::AppState;
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 2] = ["data", "generalInfo"];

/// Parse a user-supplied document into a replacement state.
///
/// The document must be a JSON object carrying `data` and `generalInfo`.
/// Nested records are read with defaults for absent fields; values of the wrong
/// type are rejected.
pub fn import_state(document: &str) -> Result<AppState> {
    let value: Value = serde_json::from_str(document)?;
    let object = value.as_object().ok_or(TransferError::NotAnObject)?;
    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(TransferError::MissingField(field));
        }
    }

    let mut state: AppState = serde_json::from_value(value)?;
    state.normalize();
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_brand_market::{parse_metric_input, BrandEdit, PaidField, PlatformEdit};
    use crate::domain::a002_recommendation::RecommendationDraft;
    use crate::enums::{BrandId, CountryId, Language, Platform};
    use crate::store::{reduce, AuditAction};
    use crate::usecases::u501_state_transfer::export_state;

    #[test]
    fn test_export_then_import_round_trip() {
        let mut state = AppState::default();
        state = reduce(&state, AuditAction::SetLanguage(Language::It));
        state = reduce(
            &state,
            AuditAction::EditBrand {
                country: CountryId::It,
                brand: BrandId::Resound,
                edit: BrandEdit::Platform(
                    Platform::Youtube,
                    PlatformEdit::Paid(PaidField::Cpl, 12.75),
                ),
            },
        );
        let draft = RecommendationDraft {
            area: "Facebook".into(),
            action: "Run lead ads".into(),
            ..RecommendationDraft::default()
        };
        state = reduce(&state, AuditAction::AddRecommendation(draft.into_recommendation()));

        let document = export_state(&state).unwrap();
        assert_eq!(import_state(&document).unwrap(), state);
    }

    #[test]
    fn test_round_trip_keeps_full_precision_metrics() {
        let inputs = [
            "94377753888651324e-7",
            "38038335316770367e-1",
            "9437775388.865133",
            "0.30000000000000004",
            "1234567,891011121",
        ];
        let mut state = AppState::default();
        for (raw, platform) in inputs.iter().zip(Platform::all().into_iter().cycle()) {
            state = reduce(
                &state,
                AuditAction::EditBrand {
                    country: CountryId::Br,
                    brand: BrandId::Beltone,
                    edit: BrandEdit::Platform(
                        platform,
                        PlatformEdit::Paid(PaidField::Budget, parse_metric_input(raw)),
                    ),
                },
            );
            let restored = import_state(&export_state(&state).unwrap()).unwrap();
            let budget = |s: &AppState| {
                s.brand(CountryId::Br, BrandId::Beltone)
                    .unwrap()
                    .metrics
                    .get(platform)
                    .paid
                    .budget
            };
            assert_eq!(budget(&restored).to_bits(), budget(&state).to_bits(), "{}", raw);
            assert_eq!(restored, state);
        }
    }

    #[test]
    fn test_missing_data_is_rejected() {
        let err = import_state(r#"{ "generalInfo": {} }"#).unwrap_err();
        assert!(matches!(err, TransferError::MissingField("data")));
    }

    #[test]
    fn test_missing_general_info_is_rejected() {
        let err = import_state(r#"{ "data": {} }"#).unwrap_err();
        assert!(matches!(err, TransferError::MissingField("generalInfo")));
    }

    #[test]
    fn test_non_object_and_garbage_are_rejected() {
        assert!(matches!(import_state("[1, 2]"), Err(TransferError::NotAnObject)));
        assert!(matches!(import_state("{"), Err(TransferError::Malformed(_))));
    }

    #[test]
    fn test_sparse_legacy_document_is_defaulted() {
        let document = r#"{
            "language": "en",
            "generalInfo": { "projectName": "Audit", "date": "2024-05-01", "objectives": "" },
            "data": {
                "es": {
                    "resound": {
                        "manager": "Ana",
                        "hasCalendar": "partial",
                        "strategy": "",
                        "analysisPeriod": "Last 90 Days",
                        "metrics": {
                            "instagram": {
                                "organic": { "followers": 2500, "engagementRate": 2.1 },
                                "paid": { "budget": 300, "cpc": 0.4, "ctr": 1.1, "conversions": 12, "cpl": 8 }
                            }
                        }
                    }
                },
                "br": {},
                "it": {}
            },
            "recommendations": []
        }"#;

        let state = import_state(document).unwrap();
        let entry = state.brand(CountryId::Es, BrandId::Resound).unwrap();
        assert_eq!(entry.metrics.instagram.organic.followers, 2500.0);
        assert_eq!(entry.metrics.instagram.paid.budget, 300.0);
        assert_eq!(entry.metrics.facebook.paid.budget, 0.0);
        assert!(state.brand(CountryId::Es, BrandId::Beltone).is_none());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let document = r#"{ "generalInfo": {}, "data": { "es": { "resound": { "metrics": "none" } } } }"#;
        assert!(matches!(import_state(document), Err(TransferError::Malformed(_))));
    }
}
