//! Компонент чекбокса в заголовке таблицы для выбора всех строк

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Чекбокс "выбрать все" в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate — по числу
/// выбранных элементов среди `items`. Клик переключает между "выбрать все"
/// и "снять все".
#[component]
pub fn TableHeaderCheckbox<T>(
    /// Строки, к которым относится чекбокс
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Выбранные ID (в порядке выбора)
    #[prop(into)]
    selected: Signal<Vec<String>>,

    /// Функция для получения ID из item
    get_id: Callback<T, String>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel: HashSet<String> = selected.get().into_iter().collect();

        if current_items.is_empty() {
            return HeaderCheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|item| sel.contains(&get_id.run((*item).clone())))
            .count();

        if selected_count == 0 {
            HeaderCheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            HeaderCheckboxState::Checked
        } else {
            HeaderCheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate выставляется только через DOM-свойство
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, HeaderCheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), HeaderCheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HeaderCheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
