//! Компонент сортируемой ячейки заголовка таблицы

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Сортируемая ячейка заголовка
///
/// Добавляет индикатор сортировки (▲▼⇅) и обрабатывает клик по заголовку.
/// Дочерние элементы (например, пикер фильтра колонки) рендерятся рядом с
/// индикатором и не участвуют в клике сортировки.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    /// Дополнительное содержимое ячейки (пикер фильтра)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div class="table__header-cell">
                <div
                    class="table__sortable-header"
                    style=header_style
                    on:click=handle_click
                >
                    {label}
                    <span class=move || {
                        get_sort_class(&current_sort_field.get(), &sort_field_for_class)
                    }>
                        {move || {
                            get_sort_indicator(
                                &current_sort_field.get(),
                                &sort_field_for_indicator,
                                sort_ascending.get(),
                            )
                        }}
                    </span>
                </div>
                {children.map(|children| children())}
            </div>
        </TableHeaderCell>
    }
}
