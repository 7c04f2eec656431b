//! Sidebar navigation: dashboard, one entry per market, recommendations.

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::i18n::{country_name, tr, Label};
use crate::shared::icons::icon;
use crate::shared::state::AuditStore;
use contracts::enums::CountryId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct MenuGroup {
    label: Label,
    items: &'static [MenuItem],
}

#[derive(Clone, Copy)]
enum MenuItem {
    Dashboard,
    Market(CountryId),
    Recommendations,
}

impl MenuItem {
    fn view(&self) -> AppView {
        match self {
            MenuItem::Dashboard => AppView::Dashboard,
            MenuItem::Market(country) => AppView::Country(*country),
            MenuItem::Recommendations => AppView::Recommendations,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "dashboard",
            MenuItem::Market(_) => "flag",
            MenuItem::Recommendations => "lightbulb",
        }
    }
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        label: Label::Analysis,
        items: &[MenuItem::Dashboard],
    },
    MenuGroup {
        label: Label::Markets,
        items: &[
            MenuItem::Market(CountryId::Es),
            MenuItem::Market(CountryId::Br),
            MenuItem::Market(CountryId::It),
        ],
    },
    MenuGroup {
        label: Label::Recommendations,
        items: &[MenuItem::Recommendations],
    },
];

#[component]
pub fn Sidebar(store: AuditStore) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let item_label = move |item: MenuItem| {
        let lang = store.language();
        match item {
            MenuItem::Dashboard => tr(lang, Label::Dashboard).to_string(),
            MenuItem::Market(country) => country_name(lang, country).to_string(),
            MenuItem::Recommendations => tr(lang, Label::Recommendations).to_string(),
        }
    };

    view! {
        <div class="app-sidebar__content">
            {MENU.iter().map(|group| {
                let group_label = group.label;
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">
                            {move || tr(store.language(), group_label)}
                        </div>
                        {group.items.iter().copied().map(|item| {
                            let target = item.view();
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.active.get() == target
                                    on:click=move |_| ctx.open(target)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(item.icon())}
                                        <span>{move || item_label(item)}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
