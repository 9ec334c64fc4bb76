use crate::domain::sales_invoice::ui::list::SalesInvoiceListPage;
use crate::layout::AppHeader;
use crate::shared::theme::DashboardTheme;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Тема — явное значение, собранное в корне рендера; вниз передаётся
    // через контекст, глобального состояния нет.
    let theme = DashboardTheme::light();
    provide_context(theme.clone());

    view! {
        <div class="app-root" style=theme.css_vars()>
            <AppHeader active_tab="Sales Invoice" />
            <SalesInvoiceListPage />
        </div>
    }
}
