use super::fields::TriStateSelect;
use crate::shared::i18n::{alignment_label, checklist_label, tr, Label};
use crate::shared::state::AuditStore;
use contracts::domain::a001_brand_market::{
    AlignmentAspect, BrandEdit, ChecklistItem, PlatformData, PlatformEdit,
};
use contracts::enums::{BrandId, CountryId, Platform, TargetAudience, TriState};
use leptos::prelude::*;

/// Account profile, checklist and brand alignment of each platform.
#[component]
pub fn PlatformProfile(store: AuditStore, country: CountryId, brand: BrandId) -> impl IntoView {
    let read = move |platform: Platform, f: fn(&PlatformData) -> String| {
        move || store.read_brand(country, brand, |e| f(e.metrics.get(platform)))
    };
    let edit = move |platform: Platform, edit: PlatformEdit| {
        store.edit_brand(country, brand, BrandEdit::Platform(platform, edit))
    };
    let text = move |label: Label| move || tr(store.language(), label);

    view! {
        <h4 class="brand-section__subtitle">{text(Label::Profiles)}</h4>
        <div class="table-scroll">
            <table class="profile-table">
                <thead>
                    <tr>
                        <th>{text(Label::Platform)}</th>
                        <th>{text(Label::Active)}</th>
                        <th>{text(Label::Username)}</th>
                        <th>{text(Label::Audience)}</th>
                        <th>{text(Label::CurrentStyle)}</th>
                        <th>{text(Label::DesiredStyle)}</th>
                    </tr>
                </thead>
                <tbody>
                    {Platform::all().into_iter().map(|platform| view! {
                        <tr>
                            <td class="profile-table__platform" style=format!("color: {};", platform.color())>
                                {platform.display_name()}
                            </td>
                            <td>
                                <input
                                    type="checkbox"
                                    prop:checked=move || store.read_brand(country, brand, |e| e.metrics.get(platform).active)
                                    on:change=move |ev| edit(platform, PlatformEdit::Active(event_target_checked(&ev)))
                                />
                            </td>
                            <td>
                                <input
                                    type="text"
                                    placeholder="@"
                                    prop:value=read(platform, |p| p.username.clone())
                                    on:input=move |ev| edit(platform, PlatformEdit::Username(event_target_value(&ev)))
                                />
                            </td>
                            <td>
                                <select on:change=move |ev| {
                                    if let Some(audience) = TargetAudience::from_code(&event_target_value(&ev)) {
                                        edit(platform, PlatformEdit::TargetAudience(audience));
                                    }
                                }>
                                    {TargetAudience::all().into_iter().map(|audience| view! {
                                        <option
                                            value=audience.code()
                                            selected=move || {
                                                store.read_brand(country, brand, |e| e.metrics.get(platform).target_audience) == audience
                                            }
                                        >
                                            {audience.code()}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </td>
                            <td>
                                <input
                                    type="text"
                                    prop:value=read(platform, |p| p.current_style.clone())
                                    on:input=move |ev| edit(platform, PlatformEdit::CurrentStyle(event_target_value(&ev)))
                                />
                            </td>
                            <td>
                                <input
                                    type="text"
                                    prop:value=read(platform, |p| p.desired_style.clone())
                                    on:input=move |ev| edit(platform, PlatformEdit::DesiredStyle(event_target_value(&ev)))
                                />
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>

        <h4 class="brand-section__subtitle">
            {text(Label::Checklist)}
            " · "
            {text(Label::Alignment)}
        </h4>
        <div class="table-scroll">
            <table class="profile-table">
                <thead>
                    <tr>
                        <th>{text(Label::Platform)}</th>
                        {ChecklistItem::all().into_iter().map(|item| view! {
                            <th>{move || checklist_label(store.language(), item)}</th>
                        }).collect_view()}
                        {AlignmentAspect::all().into_iter().map(|aspect| view! {
                            <th>{move || alignment_label(store.language(), aspect)}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {Platform::all().into_iter().map(|platform| view! {
                        <tr>
                            <td class="profile-table__platform" style=format!("color: {};", platform.color())>
                                {platform.display_name()}
                            </td>
                            {ChecklistItem::all().into_iter().map(|item| view! {
                                <td class="profile-table__check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            store.read_brand(country, brand, |e| item.get(&e.metrics.get(platform).checklist))
                                        }
                                        on:change=move |ev| {
                                            edit(platform, PlatformEdit::Checklist(item, event_target_checked(&ev)))
                                        }
                                    />
                                </td>
                            }).collect_view()}
                            {AlignmentAspect::all().into_iter().map(|aspect| view! {
                                <td>
                                    <TriStateSelect
                                        store=store
                                        value=Signal::derive(move || {
                                            store.read_brand(country, brand, |e| aspect.get(&e.metrics.get(platform).alignment))
                                        })
                                        on_change=move |v: TriState| edit(platform, PlatformEdit::Alignment(aspect, v))
                                    />
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
