//! Шапка приложения: вкладки разделов и кнопки Import/Export.

use crate::shared::icons::icon;
use leptos::prelude::*;
use log::info;
use thaw::*;

const NAV_ITEMS: [&str; 5] = [
    "Overview",
    "Sales Invoice",
    "Credit Notes",
    "Estimate",
    "Other Platforms",
];

/// Вкладки, для которых доступны Import/Export
const DOCUMENT_TABS: [&str; 3] = ["Sales Invoice", "Credit Notes", "Estimate"];

#[component]
pub fn AppHeader(
    /// Название активной вкладки
    #[prop(optional, default = "Sales Invoice")]
    active_tab: &'static str,
) -> impl IntoView {
    view! {
        <div class="app-header">
            <div class="app-header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let selected = *item == active_tab;
                        view! {
                            <button class=if selected {
                                "nav-button nav-button--selected"
                            } else {
                                "nav-button"
                            }>{*item}</button>
                        }
                    })
                    .collect_view()}
            </div>

            {DOCUMENT_TABS
                .contains(&active_tab)
                .then(|| {
                    view! {
                        <div class="app-header__actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| info!("sales_invoice: import requested")
                            >
                                {icon("upload")}
                                " Import"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| info!("sales_invoice: export requested")
                            >
                                {icon("download")}
                                " Export"
                            </Button>
                        </div>
                    }
                })}
        </div>
    }
}
