/// Универсальные утилиты для списковых страниц: сортировка, фильтры по
/// колонкам, текстовый поиск, пагинация.
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Trait для типов с доступом к колонкам по идентификатору.
///
/// Значения отдаются в строковом виде — в нём они участвуют в фильтрах,
/// поиске и пикере значений. Сравнение для сортировки типизированное,
/// см. [`Sortable`].
pub trait ColumnAccess {
    /// Идентификаторы всех колонок с данными
    fn columns() -> &'static [&'static str];

    /// Строковое значение указанной колонки
    fn column_value(&self, column: &str) -> String;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Стабильная сортировка списка по полю.
///
/// Каждый элемент декорируется исходным индексом, при равных ключах
/// сравниваются индексы. Инверсия направления применяется только к ключу,
/// поэтому равные элементы сохраняют исходный порядок в обе стороны —
/// независимо от гарантий стабильности самого алгоритма сортировки.
pub fn stable_sort_by_field<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    let mut decorated: Vec<(usize, T)> = items.drain(..).enumerate().collect();
    decorated.sort_by(|(index_a, a), (index_b, b)| {
        let key_order = a.compare_by_field(b, field);
        let key_order = if ascending {
            key_order
        } else {
            key_order.reverse()
        };
        key_order.then(index_a.cmp(index_b))
    });
    items.extend(decorated.into_iter().map(|(_, item)| item));
}

/// Проверка строки против набора фильтров по колонкам.
///
/// AND между колонками, OR между значениями внутри колонки. Колонка без
/// записи или с пустым набором значений выборку не ограничивает.
pub fn passes_filters<T: ColumnAccess>(
    row: &T,
    filters: &HashMap<String, HashSet<String>>,
) -> bool {
    filters
        .iter()
        .all(|(column, accepted)| accepted.is_empty() || accepted.contains(&row.column_value(column)))
}

/// Регистронезависимый поиск подстроки по всем колонкам строки.
/// Пустой запрос совпадает всегда.
pub fn matches_search<T: ColumnAccess>(row: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    T::columns()
        .iter()
        .any(|column| row.column_value(column).to_lowercase().contains(&needle))
}

/// Различные значения колонки по всей коллекции, в порядке первого появления.
/// Используется для наполнения пикера фильтра.
pub fn distinct_values<T: ColumnAccess>(rows: &[T], column: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let value = row.column_value(column);
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

/// Сужение списка значений пикера по текстовому запросу (подстрока,
/// без учёта регистра)
pub fn narrow_values(values: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return values.to_vec();
    }
    let needle = query.to_lowercase();
    values
        .iter()
        .filter(|value| value.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Окно страницы: `page` — 0-индексная, `page_size` > 0.
/// Страница за пределами коллекции даёт пустое окно.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки (активная колонка подсвечивается)
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения активности)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input (до debounce)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let is_search_active = move || !value.get().is_empty();

    let clear_search = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                placeholder={placeholder}
                class=move || {
                    if is_search_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button
                            class="search-input__clear"
                            on:click=clear_search
                            title="Clear"
                        >
                            {icon("x")}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        customer: String,
        status: String,
        amount: f64,
    }

    fn row(id: u32, customer: &str, status: &str, amount: f64) -> Row {
        Row {
            id,
            customer: customer.to_string(),
            status: status.to_string(),
            amount,
        }
    }

    impl ColumnAccess for Row {
        fn columns() -> &'static [&'static str] {
            &["customer", "status", "amount"]
        }

        fn column_value(&self, column: &str) -> String {
            match column {
                "customer" => self.customer.clone(),
                "status" => self.status.clone(),
                "amount" => self.amount.to_string(),
                _ => String::new(),
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "customer" => self
                    .customer
                    .to_lowercase()
                    .cmp(&other.customer.to_lowercase()),
                "status" => self.status.cmp(&other.status),
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn sort_is_stable_for_equal_keys_in_both_directions() {
        let mut rows = vec![
            row(1, "acme", "Draft", 10.0),
            row(2, "acme", "Draft", 20.0),
            row(3, "birch", "Draft", 5.0),
        ];
        stable_sort_by_field(&mut rows, "customer", true);
        assert_eq!(ids(&rows), vec![1, 2, 3]);

        // При спуске переставляются только различающиеся ключи,
        // равные сохраняют относительный порядок
        stable_sort_by_field(&mut rows, "customer", false);
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn toggling_direction_reverses_distinct_keys() {
        let mut rows = vec![
            row(1, "a", "Draft", 30.0),
            row(2, "b", "Draft", 10.0),
            row(3, "c", "Draft", 20.0),
        ];
        stable_sort_by_field(&mut rows, "amount", true);
        let ascending = ids(&rows);
        stable_sort_by_field(&mut rows, "amount", false);
        let descending = ids(&rows);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn filters_are_conjunctive_across_columns() {
        let rows = vec![
            row(1, "acme", "Draft", 1.0),
            row(2, "acme", "Published", 2.0),
            row(3, "birch", "Draft", 3.0),
        ];
        let mut filters = HashMap::new();
        filters.insert(
            "status".to_string(),
            HashSet::from(["Draft".to_string()]),
        );
        filters.insert(
            "customer".to_string(),
            HashSet::from(["acme".to_string()]),
        );
        let kept: Vec<u32> = rows
            .iter()
            .filter(|r| passes_filters(*r, &filters))
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![1]);
    }

    #[test]
    fn filters_are_disjunctive_within_a_column() {
        let rows = vec![
            row(1, "acme", "Draft", 1.0),
            row(2, "birch", "Published", 2.0),
            row(3, "cedar", "Settled", 3.0),
        ];
        let mut filters = HashMap::new();
        filters.insert(
            "status".to_string(),
            HashSet::from(["Draft".to_string(), "Published".to_string()]),
        );
        let kept: Vec<u32> = rows
            .iter()
            .filter(|r| passes_filters(*r, &filters))
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn empty_filter_set_is_identity() {
        let rows = vec![
            row(1, "acme", "Draft", 1.0),
            row(2, "birch", "Published", 2.0),
        ];
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), HashSet::new());
        assert!(rows.iter().all(|r| passes_filters(r, &filters)));
    }

    #[test]
    fn search_is_case_insensitive_across_all_fields() {
        let r = row(1, "Acme Corp", "Draft", 120.5);
        assert!(matches_search(&r, "acme"));
        assert!(matches_search(&r, "DRAFT"));
        assert!(matches_search(&r, "120.5"));
        assert!(!matches_search(&r, "birch"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let r = row(1, "Acme Corp", "Draft", 0.0);
        assert!(matches_search(&r, ""));
    }

    #[test]
    fn pagination_returns_partial_last_page() {
        let rows: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&rows, 2, 5), vec![10, 11]);
        assert_eq!(paginate(&rows, 0, 5).len(), 5);
        assert!(paginate(&rows, 3, 5).is_empty());
    }

    #[test]
    fn distinct_values_keep_first_observed_order() {
        let rows = vec![
            row(1, "birch", "Published", 1.0),
            row(2, "acme", "Draft", 2.0),
            row(3, "birch", "Settled", 3.0),
        ];
        assert_eq!(
            distinct_values(&rows, "customer"),
            vec!["birch".to_string(), "acme".to_string()]
        );
    }

    #[test]
    fn narrow_values_matches_substring_case_insensitive() {
        let values = vec![
            "Draft".to_string(),
            "Awaiting Approval".to_string(),
            "Awaiting payment".to_string(),
        ];
        assert_eq!(
            narrow_values(&values, "awaiting"),
            vec!["Awaiting Approval".to_string(), "Awaiting payment".to_string()]
        );
        assert_eq!(narrow_values(&values, ""), values);
    }
}
