pub mod state;

use chrono::Utc;
use contracts::domain::sales_invoice::SalesInvoiceDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::sales_invoice::{actions, api};
use crate::shared::components::filter_dropdown::FilterDropdown;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatAccent, StatCard};
use crate::shared::components::table::{
    format_money, format_number_int, SortableHeaderCell, TableCellCheckbox, TableCellMoney,
    TableHeaderCheckbox,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{distinct_values, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{action_disabled, create_state, derive_visible, PeriodPreset};

/// Число колонок таблицы (чекбокс + данные + действия) для служебных строк
const TABLE_SPAN: &str = "8";

#[component]
pub fn SalesInvoiceListPage() -> impl IntoView {
    let state = create_state();
    let all_invoices: RwSignal<Vec<SalesInvoiceDto>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let period_open = RwSignal::new(false);

    let refresh_view = move || {
        let snapshot = state.get_untracked();
        let today = Utc::now().date_naive();
        let visible = derive_visible(&all_invoices.get_untracked(), &snapshot, today);
        state.update(|s| s.apply_window(visible));
    };

    let load_data = move || {
        // Повторный запрос во время загрузки игнорируется
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_sales_invoices().await {
                Ok(data) => {
                    all_invoices.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to fetch invoices: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let sort_field_signal = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending_signal = Signal::derive(move || state.with(|s| s.sort_ascending));
    let search_signal = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let selected_signal = Signal::derive(move || state.with(|s| s.selected_ids.clone()));
    let items_signal = Signal::derive(move || state.get().items);

    let toggle_sort = Callback::new(move |field: String| {
        state.update(|s| s.request_sort(&field));
        refresh_view();
    });

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search(term));
        refresh_view();
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        refresh_view();
    };

    let select_period = move |preset: PeriodPreset| {
        state.update(|s| s.set_period(preset));
        period_open.set(false);
        refresh_view();
    };

    let toggle_selection = move |id: String, checked: bool| {
        state.update(|s| {
            let present = s.selected_ids.iter().any(|v| v == &id);
            if checked != present {
                s.toggle_select(&id);
            }
        });
    };

    // "Выбрать все" охватывает все видимые строки, не только текущую страницу
    let toggle_all = move |check_all: bool| {
        let visible_ids = if check_all {
            let snapshot = state.get_untracked();
            let today = Utc::now().date_naive();
            derive_visible(&all_invoices.get_untracked(), &snapshot, today)
                .into_iter()
                .map(|row| row.id)
                .collect()
        } else {
            Vec::new()
        };
        state.update(|s| s.select_all(check_all, visible_ids));
    };

    // Колонка заголовка: пикер значений поверх всей коллекции
    let filter_cell = move |column: &'static str| {
        let options = Signal::derive(move || distinct_values(&all_invoices.get(), column));
        let active = Signal::derive(move || {
            state.with(|s| s.filters.get(column).cloned().unwrap_or_default())
        });
        view! {
            <FilterDropdown
                options=options
                active=active
                on_apply=Callback::new(move |values| {
                    state.update(|s| s.apply_filter(column, values));
                    refresh_view();
                })
                on_clear=Callback::new(move |_| {
                    state.update(|s| s.clear_filter(column));
                    refresh_view();
                })
            />
        }
    };

    let deposit_disabled =
        Signal::derive(move || action_disabled(&state.get(), &all_invoices.get()));

    let on_prepare_deposit = move |_| {
        let ids = state.with_untracked(|s| s.selected_ids.clone());
        actions::prepare_deposit(&ids);
    };

    // Итоги по загруженной коллекции; "—" до прихода данных
    let stat = move |f: fn(&[SalesInvoiceDto]) -> String| {
        Signal::derive(move || {
            if state.with(|s| s.is_loaded) {
                Some(f(&all_invoices.get()))
            } else {
                None
            }
        })
    };
    let total_invoices = stat(|rows| format_number_int(rows.len() as f64));
    let yet_to_publish = stat(|rows| {
        format_number_int(rows.iter().filter(|r| r.status.is_unpublished()).count() as f64)
    });
    let total_sales = stat(|rows| {
        format!(
            "${}",
            format_money(rows.iter().map(|r| r.grand_total).sum::<f64>())
        )
    });
    let unpaid_total = stat(|rows| {
        format!(
            "${}",
            format_money(
                rows.iter()
                    .filter(|r| r.status != contracts::enums::InvoiceStatus::Settled)
                    .map(|r| r.grand_total)
                    .sum::<f64>()
            )
        )
    });

    view! {
        <PageFrame page_id="sales_invoice--list" category=PAGE_CAT_LIST>
            <div class="stat-cards-row">
                <StatCard
                    label="Total Invoices"
                    icon_name="invoices"
                    value=total_invoices
                />
                <StatCard
                    label="Yet to Publish"
                    icon_name="clock"
                    value=yet_to_publish
                />
                <StatCard
                    label="Total Sales"
                    icon_name="banknote"
                    value=total_sales
                    accent=StatAccent::Success
                />
                <StatCard
                    label="UnPaid Invoices"
                    icon_name="alert-circle"
                    value=unpaid_total
                    accent=StatAccent::Error
                />
            </div>

            <div class="page__content">
                <div class="page__header">
                    <div class="page__header-left">
                        <h2 class="page__title">"Invoice List"</h2>
                        <Badge>
                            {move || state.get().total_count.to_string()}
                        </Badge>
                    </div>
                    <div class="page__header-right">
                        <SearchInput
                            value=search_signal
                            on_change=on_search
                            placeholder="Search..."
                        />
                        <div class="sort-menu">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| period_open.update(|o| *o = !*o)
                            >
                                {move || {
                                    format!("Sort by: {}", state.with(|s| s.period.display_name()))
                                }}
                                {icon("chevron-down")}
                            </Button>
                            {move || {
                                if period_open.get() {
                                    view! {
                                        <div class="sort-menu__panel">
                                            {PeriodPreset::all()
                                                .into_iter()
                                                .map(|preset| {
                                                    view! {
                                                        <button
                                                            class="sort-menu__item"
                                                            on:click=move |_| select_period(preset)
                                                        >
                                                            {preset.display_name()}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| actions::create_invoice()
                        >
                            {icon("plus")}
                            " New Invoice"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=deposit_disabled
                            on_click=on_prepare_deposit
                        >
                            {icon("credit-card")}
                            " Prepare Deposit"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| load_data()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {move || if loading.get() { " Loading..." } else { " Refresh" }}
                        </Button>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="sales-invoice-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=items_signal
                                    selected=selected_signal
                                    get_id=Callback::new(|row: SalesInvoiceDto| row.id.clone())
                                    on_change=Callback::new(toggle_all)
                                />
                                <SortableHeaderCell
                                    label="Invoice No."
                                    sort_field="invoice_number"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    min_width=120.0
                                >
                                    {filter_cell("invoice_number")}
                                </SortableHeaderCell>
                                <SortableHeaderCell
                                    label="Customer Name"
                                    sort_field="customer_name"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    min_width=160.0
                                >
                                    {filter_cell("customer_name")}
                                </SortableHeaderCell>
                                <SortableHeaderCell
                                    label="Date"
                                    sort_field="invoice_date"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    min_width=110.0
                                >
                                    {filter_cell("invoice_date")}
                                </SortableHeaderCell>
                                <SortableHeaderCell
                                    label="Due Date"
                                    sort_field="due_date"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    min_width=110.0
                                >
                                    {filter_cell("due_date")}
                                </SortableHeaderCell>
                                <SortableHeaderCell
                                    label="Invoice Amount"
                                    sort_field="grand_total"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    align="right"
                                    min_width=120.0
                                >
                                    {filter_cell("grand_total")}
                                </SortableHeaderCell>
                                <SortableHeaderCell
                                    label="Status"
                                    sort_field="status"
                                    current_sort_field=sort_field_signal
                                    sort_ascending=sort_ascending_signal
                                    on_sort=toggle_sort
                                    min_width=130.0
                                >
                                    {filter_cell("status")}
                                </SortableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>
                                    "Actions"
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                if loading.get() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=TABLE_SPAN>
                                                <div class="table__status-cell">
                                                    <Spinner />
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                        .into_any()
                                } else if let Some(e) = error.get() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=TABLE_SPAN>
                                                <div class="table__status-cell">
                                                    <div class="alert alert--error">{e}</div>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                        .into_any()
                                } else if state.with(|s| s.items.is_empty()) {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=TABLE_SPAN>
                                                <div class="table__status-cell">
                                                    "No invoices found."
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || state.get().items
                                            key=|row| row.id.clone()
                                            children=move |row| {
                                                let row_id = row.id.clone();
                                                let row_id_for_click = row.id.clone();
                                                let view_id = row.id.clone();
                                                let edit_id = row.id.clone();
                                                let cancel_id = row.id.clone();
                                                let invoice_date = format_date(&row.invoice_date);
                                                let due_date = format_date(&row.due_date);
                                                let status = row.status;
                                                view! {
                                                    <TableRow on:click=move |_| {
                                                        state.update(|s| s.toggle_select(&row_id_for_click));
                                                    }>
                                                        <TableCellCheckbox
                                                            item_id=row_id.clone()
                                                            selected=selected_signal
                                                            on_change=Callback::new(move |(id, checked)| {
                                                                toggle_selection(id, checked)
                                                            })
                                                        />
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {row.invoice_number.clone()}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                <span style="font-weight: 500;">
                                                                    {row.customer_name.clone()}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>{invoice_date}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>{due_date}</TableCellLayout>
                                                        </TableCell>
                                                        <TableCellMoney value=row.grand_total />
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span class=format!("badge {}", status.badge_class())>
                                                                    {status.display_name()}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell on:click=|e| e.stop_propagation()>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| actions::view_invoice(&view_id)
                                                                attr:title="View"
                                                            >
                                                                {icon("eye")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| actions::edit_invoice(&edit_id)
                                                                attr:title="Edit"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| actions::cancel_invoice(&cancel_id)
                                                                attr:title="Cancel"
                                                            >
                                                                {icon("x-circle")}
                                                            </Button>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <div class="table-footer">
                    <PaginationControls
                        current_page=Signal::derive(move || state.get().page)
                        total_pages=Signal::derive(move || state.get().total_pages)
                        total_count=Signal::derive(move || state.get().total_count)
                        page_size=Signal::derive(move || state.get().page_size)
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                </div>
            </div>
        </PageFrame>
    }
}
