//! Компонент ячейки таблицы для денежных значений

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Ячейка таблицы с денежным значением
///
/// Автоматически:
/// - Форматирует число с 2 знаками после точки и разделителем тысяч
/// - Добавляет префикс валюты
/// - Выравнивает по правому краю
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<f64>,

    /// Символ валюты (по умолчанию "$")
    #[prop(optional, default = "$")]
    currency: &'static str,

    /// Жирный шрифт
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || format!("{}{}", currency, format_money(value.get()));

    let cell_style = if bold {
        "font-weight: 600;"
    } else {
        ""
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
