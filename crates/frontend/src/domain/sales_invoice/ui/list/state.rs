use chrono::{Datelike, NaiveDate};
use contracts::domain::sales_invoice::SalesInvoiceDto;
use contracts::enums::InvoiceStatus;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::shared::list_utils::{
    matches_search, paginate, passes_filters, stable_sort_by_field, ColumnAccess, Sortable,
};

impl ColumnAccess for SalesInvoiceDto {
    fn columns() -> &'static [&'static str] {
        &[
            "invoice_number",
            "customer_name",
            "invoice_date",
            "due_date",
            "grand_total",
            "status",
        ]
    }

    fn column_value(&self, column: &str) -> String {
        match column {
            "invoice_number" => self.invoice_number.clone(),
            "customer_name" => self.customer_name.clone(),
            "invoice_date" => self.invoice_date.clone(),
            "due_date" => self.due_date.clone(),
            "grand_total" => self.grand_total.to_string(),
            "status" => self.status.display_name().to_string(),
            _ => String::new(),
        }
    }
}

impl Sortable for SalesInvoiceDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "invoice_number" => self
                .invoice_number
                .to_lowercase()
                .cmp(&other.invoice_number.to_lowercase()),
            "customer_name" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            // ISO-даты упорядочены лексикографически
            "invoice_date" => self.invoice_date.cmp(&other.invoice_date),
            "due_date" => self.due_date.cmp(&other.due_date),
            "grand_total" => self
                .grand_total
                .partial_cmp(&other.grand_total)
                .unwrap_or(Ordering::Equal),
            "status" => self.status.display_name().cmp(other.status.display_name()),
            _ => self.invoice_number.cmp(&other.invoice_number),
        }
    }
}

/// Пресеты периода по дате счёта
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PeriodPreset {
    ThisMonth,
    LastMonth,
    ThisYear,
    #[default]
    AllTime,
}

impl PeriodPreset {
    pub fn display_name(&self) -> &'static str {
        match self {
            PeriodPreset::ThisMonth => "This Month",
            PeriodPreset::LastMonth => "Last Month",
            PeriodPreset::ThisYear => "This Year",
            PeriodPreset::AllTime => "All Time",
        }
    }

    pub fn all() -> [PeriodPreset; 4] {
        [
            PeriodPreset::ThisMonth,
            PeriodPreset::LastMonth,
            PeriodPreset::ThisYear,
            PeriodPreset::AllTime,
        ]
    }

    /// Включительный диапазон ISO-дат относительно `today`.
    /// `None` — без ограничения.
    pub fn date_range(&self, today: NaiveDate) -> Option<(String, String)> {
        match self {
            PeriodPreset::ThisMonth => Some(month_range(today.year(), today.month())),
            PeriodPreset::LastMonth => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                Some(month_range(year, month))
            }
            PeriodPreset::ThisYear => Some((
                format!("{:04}-01-01", today.year()),
                format!("{:04}-12-31", today.year()),
            )),
            PeriodPreset::AllTime => None,
        }
    }
}

fn month_range(year: i32, month: u32) -> (String, String) {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1).expect("Invalid month start");
    let month_end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end")
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|d| d - chrono::Duration::days(1))
            .expect("Invalid month end")
    };
    (
        month_start.format("%Y-%m-%d").to_string(),
        month_end.format("%Y-%m-%d").to_string(),
    )
}

#[derive(Clone, Debug)]
pub struct SalesInvoiceListState {
    /// Окно текущей страницы (после фильтров, поиска и сортировки)
    pub items: Vec<SalesInvoiceDto>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Принятые значения по колонкам; пустой набор не ограничивает
    pub filters: HashMap<String, HashSet<String>>,
    pub period: PeriodPreset,
    /// Выбранные строки в порядке выбора
    pub selected_ids: Vec<String>,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for SalesInvoiceListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "customer_name".to_string(),
            sort_ascending: true,
            filters: HashMap::new(),
            period: PeriodPreset::AllTime,
            selected_ids: Vec::new(),
            is_loaded: false,
            page: 0,
            page_size: 5,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl SalesInvoiceListState {
    /// Клик по заголовку: то же поле — смена направления, новое поле —
    /// сортировка по возрастанию
    pub fn request_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Добавить/убрать строку из выбора, сохраняя порядок остальных
    pub fn toggle_select(&mut self, id: &str) {
        if let Some(pos) = self.selected_ids.iter().position(|v| v == id) {
            self.selected_ids.remove(pos);
        } else {
            self.selected_ids.push(id.to_string());
        }
    }

    /// Выбрать все видимые строки (после фильтров и поиска, не только
    /// текущую страницу) либо снять выбор целиком
    pub fn select_all(&mut self, checked: bool, visible_ids: Vec<String>) {
        self.selected_ids = if checked { visible_ids } else { Vec::new() };
    }

    pub fn apply_filter(&mut self, column: &str, values: HashSet<String>) {
        self.filters.insert(column.to_string(), values);
        self.page = 0;
    }

    pub fn clear_filter(&mut self, column: &str) {
        self.filters.insert(column.to_string(), HashSet::new());
    }

    pub fn set_search(&mut self, term: String) {
        self.search_query = term;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn set_period(&mut self, preset: PeriodPreset) {
        self.period = preset;
        self.page = 0;
    }

    /// Пересчитать итоги и срез текущей страницы по видимым строкам.
    /// Номер страницы зажимается в актуальный диапазон.
    pub fn apply_window(&mut self, visible: Vec<SalesInvoiceDto>) {
        self.total_count = visible.len();
        self.total_pages = if self.total_count == 0 {
            1
        } else {
            (self.total_count + self.page_size - 1) / self.page_size
        };
        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
        self.items = paginate(&visible, self.page, self.page_size);
    }
}

/// Видимые строки: период → фильтры колонок → поиск → стабильная
/// сортировка. Чистая функция состояния, вызывается после каждого перехода.
pub fn derive_visible(
    all_rows: &[SalesInvoiceDto],
    state: &SalesInvoiceListState,
    today: NaiveDate,
) -> Vec<SalesInvoiceDto> {
    let range = state.period.date_range(today);
    let mut rows: Vec<SalesInvoiceDto> = all_rows
        .iter()
        .filter(|row| match &range {
            Some((from, to)) => {
                let date = row.invoice_date.split('T').next().unwrap_or("");
                date >= from.as_str() && date <= to.as_str()
            }
            None => true,
        })
        .filter(|row| passes_filters(*row, &state.filters))
        .filter(|row| matches_search(*row, &state.search_query))
        .cloned()
        .collect();
    stable_sort_by_field(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

/// Массовое действие недоступно: пустой выбор, либо среди выбранных есть
/// черновик или счёт на согласовании
pub fn action_disabled(state: &SalesInvoiceListState, all_rows: &[SalesInvoiceDto]) -> bool {
    if state.selected_ids.is_empty() {
        return true;
    }
    state.selected_ids.iter().any(|id| {
        all_rows
            .iter()
            .find(|row| &row.id == id)
            .map(|row| {
                matches!(
                    row.status,
                    InvoiceStatus::Draft | InvoiceStatus::AwaitingApproval
                )
            })
            .unwrap_or(false)
    })
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<SalesInvoiceListState> {
    RwSignal::new(SalesInvoiceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(
        id: &str,
        customer: &str,
        status: InvoiceStatus,
        date: &str,
        total: f64,
    ) -> SalesInvoiceDto {
        SalesInvoiceDto {
            id: id.to_string(),
            invoice_number: format!("INV-{}", id),
            customer_name: customer.to_string(),
            invoice_date: date.to_string(),
            due_date: date.to_string(),
            grand_total: total,
            status,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date")
    }

    fn visible_ids(rows: &[SalesInvoiceDto]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn request_sort_flips_direction_on_same_field() {
        let mut state = SalesInvoiceListState::default();
        state.request_sort("grand_total");
        assert_eq!(state.sort_field, "grand_total");
        assert!(state.sort_ascending);

        state.request_sort("grand_total");
        assert!(!state.sort_ascending);

        state.request_sort("status");
        assert_eq!(state.sort_field, "status");
        assert!(state.sort_ascending);
    }

    #[test]
    fn toggle_select_preserves_order_of_remaining_ids() {
        let mut state = SalesInvoiceListState::default();
        state.toggle_select("a");
        state.toggle_select("b");
        state.toggle_select("c");
        assert_eq!(state.selected_ids, vec!["a", "b", "c"]);

        state.toggle_select("b");
        assert_eq!(state.selected_ids, vec!["a", "c"]);

        state.toggle_select("b");
        assert_eq!(state.selected_ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn select_all_round_trip_empties_selection() {
        let mut state = SalesInvoiceListState::default();
        state.select_all(true, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(state.selected_ids, vec!["a", "b"]);

        state.select_all(false, Vec::new());
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn filter_search_and_page_size_reset_page() {
        let mut state = SalesInvoiceListState::default();

        state.page = 3;
        state.apply_filter("status", HashSet::from(["Draft".to_string()]));
        assert_eq!(state.page, 0);

        state.page = 3;
        state.set_search("acme".to_string());
        assert_eq!(state.page, 0);

        state.page = 3;
        state.set_page_size(25);
        assert_eq!(state.page, 0);

        state.page = 3;
        state.set_period(PeriodPreset::ThisYear);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn clear_filter_makes_column_unconstrained() {
        let rows = vec![
            invoice("1", "acme", InvoiceStatus::Draft, "2026-08-01", 10.0),
            invoice("2", "birch", InvoiceStatus::Published, "2026-08-02", 20.0),
        ];
        let mut state = SalesInvoiceListState::default();
        state.apply_filter("status", HashSet::from(["Draft".to_string()]));
        assert_eq!(visible_ids(&derive_visible(&rows, &state, today())), vec!["1"]);

        state.clear_filter("status");
        assert_eq!(derive_visible(&rows, &state, today()).len(), 2);
    }

    #[test]
    fn derive_visible_filters_searches_and_sorts() {
        let rows = vec![
            invoice("1", "Cedar Ltd", InvoiceStatus::Published, "2026-08-01", 300.0),
            invoice("2", "Acme Corp", InvoiceStatus::Published, "2026-08-02", 100.0),
            invoice("3", "Acme Corp", InvoiceStatus::Draft, "2026-08-03", 200.0),
            invoice("4", "Birch Inc", InvoiceStatus::Published, "2026-08-04", 50.0),
        ];
        let mut state = SalesInvoiceListState::default();
        state.apply_filter("status", HashSet::from(["Published".to_string()]));
        state.set_search("acme".to_string());
        state.sort_field = "grand_total".to_string();
        state.sort_ascending = true;

        // Draft отфильтрован, Cedar/Birch не проходят поиск
        assert_eq!(visible_ids(&derive_visible(&rows, &state, today())), vec!["2"]);
    }

    #[test]
    fn derive_visible_respects_period_preset() {
        let rows = vec![
            invoice("1", "acme", InvoiceStatus::Published, "2026-08-15", 10.0),
            invoice("2", "acme", InvoiceStatus::Published, "2026-07-20", 20.0),
            invoice("3", "acme", InvoiceStatus::Published, "2025-12-31", 30.0),
        ];
        let mut state = SalesInvoiceListState::default();

        state.set_period(PeriodPreset::ThisMonth);
        assert_eq!(visible_ids(&derive_visible(&rows, &state, today())), vec!["1"]);

        state.set_period(PeriodPreset::LastMonth);
        assert_eq!(visible_ids(&derive_visible(&rows, &state, today())), vec!["2"]);

        state.set_period(PeriodPreset::ThisYear);
        assert_eq!(
            visible_ids(&derive_visible(&rows, &state, today())),
            vec!["1", "2"]
        );

        state.set_period(PeriodPreset::AllTime);
        assert_eq!(derive_visible(&rows, &state, today()).len(), 3);
    }

    #[test]
    fn period_ranges_handle_year_boundaries() {
        let jan = NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date");
        assert_eq!(
            PeriodPreset::LastMonth.date_range(jan),
            Some(("2025-12-01".to_string(), "2025-12-31".to_string()))
        );

        let dec = NaiveDate::from_ymd_opt(2026, 12, 15).expect("valid date");
        assert_eq!(
            PeriodPreset::ThisMonth.date_range(dec),
            Some(("2026-12-01".to_string(), "2026-12-31".to_string()))
        );

        assert_eq!(PeriodPreset::AllTime.date_range(jan), None);
    }

    #[test]
    fn apply_window_slices_and_clamps_page() {
        let rows: Vec<SalesInvoiceDto> = (0..12)
            .map(|i| {
                invoice(
                    &i.to_string(),
                    "acme",
                    InvoiceStatus::Published,
                    "2026-08-01",
                    i as f64,
                )
            })
            .collect();

        let mut state = SalesInvoiceListState::default();
        state.page = 2;
        state.apply_window(rows.clone());
        assert_eq!(state.total_count, 12);
        assert_eq!(state.total_pages, 3);
        assert_eq!(visible_ids(&state.items), vec!["10", "11"]);

        // Коллекция сжалась — страница зажимается в диапазон
        state.apply_window(rows.into_iter().take(3).collect());
        assert_eq!(state.page, 0);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn apply_window_with_no_rows_renders_nothing() {
        let mut state = SalesInvoiceListState::default();
        state.apply_window(Vec::new());
        assert_eq!(state.total_count, 0);
        assert_eq!(state.total_pages, 1);
        assert!(state.items.is_empty());
    }

    #[test]
    fn bulk_action_gating_by_selection_and_status() {
        let rows = vec![
            invoice("1", "acme", InvoiceStatus::Draft, "2026-08-01", 10.0),
            invoice("2", "acme", InvoiceStatus::Published, "2026-08-02", 20.0),
            invoice("3", "acme", InvoiceStatus::Settled, "2026-08-03", 30.0),
            invoice("4", "acme", InvoiceStatus::AwaitingApproval, "2026-08-04", 40.0),
        ];
        let mut state = SalesInvoiceListState::default();

        // Пустой выбор
        assert!(action_disabled(&state, &rows));

        // Только Published/Settled
        state.selected_ids = vec!["2".to_string(), "3".to_string()];
        assert!(!action_disabled(&state, &rows));

        // Черновик в выборе
        state.selected_ids = vec!["2".to_string(), "1".to_string()];
        assert!(action_disabled(&state, &rows));

        // Счёт на согласовании в выборе
        state.selected_ids = vec!["4".to_string()];
        assert!(action_disabled(&state, &rows));
    }
}
