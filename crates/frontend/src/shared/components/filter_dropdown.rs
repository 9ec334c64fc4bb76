//! Пикер значений фильтра колонки
//!
//! Открывается из заголовка колонки. Внутри: поиск по значениям, чекбокс
//! "Select All" с indeterminate-состоянием, список значений и кнопки
//! Clear/Apply. Изменения накапливаются во временном наборе и попадают в
//! фильтры только по Apply.

use crate::shared::icons::icon;
use crate::shared::list_utils::narrow_values;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::{Button, ButtonAppearance, ButtonSize};
use wasm_bindgen::JsCast;

#[component]
pub fn FilterDropdown(
    /// Различные значения колонки по всей коллекции
    #[prop(into)]
    options: Signal<Vec<String>>,

    /// Применённый набор значений фильтра этой колонки
    #[prop(into)]
    active: Signal<HashSet<String>>,

    /// Callback применения набора
    on_apply: Callback<HashSet<String>>,

    /// Callback сброса фильтра колонки
    on_clear: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let staged: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let query = RwSignal::new(String::new());

    let narrowed = Signal::derive(move || narrow_values(&options.get(), &query.get()));

    let toggle_open = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !open.get_untracked() {
            // Стартуем с применённого набора
            staged.set(active.get_untracked());
            query.set(String::new());
        }
        open.update(|o| *o = !*o);
    };

    // true = все суженные значения в staged наборе
    let all_narrowed_selected = Signal::derive(move || {
        let values = narrowed.get();
        let current = staged.get();
        !values.is_empty() && values.iter().all(|v| current.contains(v))
    });

    let select_all_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = select_all_ref.get() {
            let values = narrowed.get();
            let current = staged.get();
            let selected_count = values.iter().filter(|v| current.contains(*v)).count();
            let indeterminate = selected_count > 0 && selected_count < values.len();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    // Select All: ровно суженный набор либо пусто
    let toggle_select_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        if checked {
            staged.set(narrowed.get_untracked().into_iter().collect());
        } else {
            staged.set(HashSet::new());
        }
    };

    let apply = move |_| {
        on_apply.run(staged.get_untracked());
        open.set(false);
    };

    let clear = move |_| {
        on_clear.run(());
        open.set(false);
    };

    let trigger_class = move || {
        if active.get().is_empty() {
            "filter-dropdown__trigger"
        } else {
            "filter-dropdown__trigger filter-dropdown__trigger--active"
        }
    };

    view! {
        <div class="filter-dropdown" on:click=|ev| ev.stop_propagation()>
            <button class=trigger_class on:click=toggle_open title="Filter">
                {icon("filter")}
            </button>
            {move || {
                if open.get() {
                    view! {
                        <div class="filter-dropdown__panel">
                            <input
                                type="text"
                                class="filter-dropdown__search"
                                placeholder="Search..."
                                prop:value=move || query.get()
                                on:input=move |ev| query.set(event_target_value(&ev))
                            />
                            <label class="filter-dropdown__option filter-dropdown__option--all">
                                <input
                                    node_ref=select_all_ref
                                    type="checkbox"
                                    prop:checked=move || all_narrowed_selected.get()
                                    on:change=toggle_select_all
                                />
                                "Select All"
                            </label>
                            <div class="filter-dropdown__divider"></div>
                            <div class="filter-dropdown__options">
                                <For
                                    each=move || narrowed.get()
                                    key=|value| value.clone()
                                    children=move |value| {
                                        let value_for_checked = value.clone();
                                        let value_for_change = value.clone();
                                        view! {
                                            <label class="filter-dropdown__option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        staged.get().contains(&value_for_checked)
                                                    }
                                                    on:change=move |ev| {
                                                        let checked = event_target_checked(&ev);
                                                        staged
                                                            .update(|s| {
                                                                if checked {
                                                                    s.insert(value_for_change.clone());
                                                                } else {
                                                                    s.remove(&value_for_change);
                                                                }
                                                            });
                                                    }
                                                />
                                                {value.clone()}
                                            </label>
                                        }
                                    }
                                />
                            </div>
                            <div class="filter-dropdown__footer">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=clear
                                >
                                    "Clear"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    size=ButtonSize::Small
                                    on_click=apply
                                >
                                    "Apply"
                                </Button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
