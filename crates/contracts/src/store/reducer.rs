use super::action::AuditAction;
use super::app_state::AppState;
use crate::enums::BrandId;
use crate::shared::config::REFERENCE_COUNTRY;

/// Compute the next state. The previous state is only read; the result is a
/// fresh root that differs from it only along the path the action names.
pub fn reduce(state: &AppState, action: AuditAction) -> AppState {
    let mut next = state.clone();

    match action {
        AuditAction::SetLanguage(language) => next.language = language,
        AuditAction::SetGeneralInfo(field, value) => field.set(&mut next.general_info, value),
        AuditAction::EditBrand {
            country,
            brand,
            edit,
        } => match next.brand_mut(country, brand) {
            Some(entry) => edit.apply(entry),
            None => log::warn!(
                "edit ignored: no {} entry in {}",
                brand.code(),
                country.code()
            ),
        },
        AuditAction::CopyFromReference { target } => {
            if target == REFERENCE_COUNTRY {
                return next;
            }
            for brand in [BrandId::Resound, BrandId::Beltone] {
                let Some(source) = state.brand(REFERENCE_COUNTRY, brand) else {
                    continue;
                };
                next.data
                    .entry(target)
                    .or_default()
                    .insert(brand, source.clone());
            }
        }
        AuditAction::Reset => next = AppState::default(),
        AuditAction::AddRecommendation(recommendation) => {
            next.recommendations.push(recommendation)
        }
        AuditAction::RemoveRecommendation(id) => next.recommendations.retain(|r| r.id != id),
        AuditAction::Replace(replacement) => next = replacement,
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_brand_market::{BrandEdit, OrganicField, PaidField, PlatformEdit};
    use crate::domain::a002_recommendation::RecommendationDraft;
    use crate::enums::{CountryId, Language, Platform};
    use crate::store::app_state::GeneralInfoField;
    use chrono::NaiveDate;

    fn initial() -> AppState {
        AppState::initial(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    fn set_budget(country: CountryId, brand: BrandId, platform: Platform, value: f64) -> AuditAction {
        AuditAction::EditBrand {
            country,
            brand,
            edit: BrandEdit::Platform(platform, PlatformEdit::Paid(PaidField::Budget, value)),
        }
    }

    #[test]
    fn test_edit_reads_back_and_leaves_siblings_alone() {
        let before = initial();
        let after = reduce(
            &before,
            set_budget(CountryId::Br, BrandId::Beltone, Platform::Facebook, 420.0),
        );

        let edited = after.brand(CountryId::Br, BrandId::Beltone).unwrap();
        assert_eq!(edited.metrics.facebook.paid.budget, 420.0);

        // previous snapshot untouched
        let old = before.brand(CountryId::Br, BrandId::Beltone).unwrap();
        assert_eq!(old.metrics.facebook.paid.budget, 0.0);

        // every other path identical
        let mut expected = after.clone();
        expected
            .brand_mut(CountryId::Br, BrandId::Beltone)
            .unwrap()
            .metrics
            .facebook
            .paid
            .budget = 0.0;
        assert_eq!(expected, before);
    }

    #[test]
    fn test_every_path_reads_back_and_leaves_the_rest_alone() {
        let before = initial();
        let (country, brand) = (CountryId::It, BrandId::Resound);
        let old = before.brand(country, brand).unwrap().clone();

        let mut cases: Vec<(BrandEdit, BrandEdit)> = vec![
            (BrandEdit::Manager("Luca".into()), BrandEdit::Manager(old.manager.clone())),
            (BrandEdit::Strategy("Video first".into()), BrandEdit::Strategy(old.strategy.clone())),
        ];
        for platform in Platform::all() {
            let data = old.metrics.get(platform);
            cases.push((
                BrandEdit::Platform(platform, PlatformEdit::Username("@resound".into())),
                BrandEdit::Platform(platform, PlatformEdit::Username(data.username.clone())),
            ));
            for field in OrganicField::all() {
                cases.push((
                    BrandEdit::Platform(platform, PlatformEdit::Organic(field, 7.5)),
                    BrandEdit::Platform(platform, PlatformEdit::Organic(field, field.get(&data.organic))),
                ));
            }
            for field in PaidField::all() {
                cases.push((
                    BrandEdit::Platform(platform, PlatformEdit::Paid(field, 7.5)),
                    BrandEdit::Platform(platform, PlatformEdit::Paid(field, field.get(&data.paid))),
                ));
            }
        }

        for (edit, undo) in cases {
            let after = reduce(
                &before,
                AuditAction::EditBrand { country, brand, edit: edit.clone() },
            );
            let mut expected = old.clone();
            edit.clone().apply(&mut expected);
            assert_eq!(after.brand(country, brand).unwrap(), &expected, "{:?}", edit);
            assert_ne!(after, before, "{:?}", edit);

            let restored = reduce(&after, AuditAction::EditBrand { country, brand, edit: undo });
            assert_eq!(restored, before, "{:?}", edit);
        }
    }

    #[test]
    fn test_edit_on_missing_brand_is_a_no_op() {
        let mut before = initial();
        before.data.get_mut(&CountryId::It).unwrap().remove(&BrandId::Beltone);

        let after = reduce(
            &before,
            set_budget(CountryId::It, BrandId::Beltone, Platform::Youtube, 10.0),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_brand_and_general_fields() {
        let state = reduce(
            &initial(),
            AuditAction::EditBrand {
                country: CountryId::Es,
                brand: BrandId::Resound,
                edit: BrandEdit::Manager("Marta".into()),
            },
        );
        let state = reduce(
            &state,
            AuditAction::SetGeneralInfo(GeneralInfoField::Objectives, "Grow reach".into()),
        );
        let state = reduce(&state, AuditAction::SetLanguage(Language::Pt));

        assert_eq!(state.brand(CountryId::Es, BrandId::Resound).unwrap().manager, "Marta");
        assert_eq!(state.general_info.objectives, "Grow reach");
        assert_eq!(state.language, Language::Pt);
    }

    #[test]
    fn test_copy_from_reference_is_deep_and_independent() {
        let mut state = reduce(
            &initial(),
            set_budget(CountryId::Es, BrandId::Resound, Platform::Instagram, 900.0),
        );
        state = reduce(
            &state,
            AuditAction::EditBrand {
                country: CountryId::Es,
                brand: BrandId::Beltone,
                edit: BrandEdit::Platform(
                    Platform::Linkedin,
                    PlatformEdit::Organic(OrganicField::Followers, 5300.0),
                ),
            },
        );

        let copied = reduce(&state, AuditAction::CopyFromReference { target: CountryId::Br });
        for brand in [BrandId::Resound, BrandId::Beltone] {
            assert_eq!(
                copied.brand(CountryId::Br, brand),
                copied.brand(CountryId::Es, brand)
            );
        }

        let edited = reduce(
            &copied,
            set_budget(CountryId::Br, BrandId::Resound, Platform::Instagram, 1.0),
        );
        let es = edited.brand(CountryId::Es, BrandId::Resound).unwrap();
        let br = edited.brand(CountryId::Br, BrandId::Resound).unwrap();
        assert_eq!(es.metrics.instagram.paid.budget, 900.0);
        assert_eq!(br.metrics.instagram.paid.budget, 1.0);
    }

    #[test]
    fn test_copy_onto_reference_changes_nothing() {
        let state = initial();
        let after = reduce(&state, AuditAction::CopyFromReference { target: CountryId::Es });
        assert_eq!(after, state);
    }

    #[test]
    fn test_add_and_remove_recommendation() {
        let mut draft = RecommendationDraft::default();
        draft.area = "Instagram".into();
        draft.action = "Add link in bio".into();
        let rec = draft.into_recommendation();
        let id = rec.id.clone();

        let state = initial();
        let added = reduce(&state, AuditAction::AddRecommendation(rec));
        assert_eq!(added.recommendations.len(), state.recommendations.len() + 1);
        assert_eq!(added.recommendation(&id).unwrap().area, "Instagram");

        let removed = reduce(&added, AuditAction::RemoveRecommendation(id.clone()));
        assert_eq!(removed.recommendations.len(), added.recommendations.len() - 1);
        assert!(removed.recommendation(&id).is_none());
    }

    #[test]
    fn test_recommendations_keep_insertion_order() {
        let mut state = initial();
        let mut ids = Vec::new();
        for area in ["first", "second", "third"] {
            let mut draft = RecommendationDraft::default();
            draft.area = area.into();
            draft.action = "do it".into();
            let rec = draft.into_recommendation();
            ids.push(rec.id.clone());
            state = reduce(&state, AuditAction::AddRecommendation(rec));
        }
        let got: Vec<String> = state.recommendations.iter().map(|r| r.id.clone()).collect();
        assert_eq!(got, ids);
    }
}
