//! Хуки действий страницы счетов.
//!
//! Страница решает только, когда действие доступно и с какими
//! идентификаторами оно вызвано; сами эффекты (навигация, диалоги,
//! изменение документов) принадлежат внешним модулям.

use log::info;

/// Переход к созданию нового счёта
pub fn create_invoice() {
    info!("sales_invoice: create requested");
}

/// Открыть счёт на просмотр
pub fn view_invoice(id: &str) {
    info!("sales_invoice: view requested for {}", id);
}

/// Открыть счёт на редактирование
pub fn edit_invoice(id: &str) {
    info!("sales_invoice: edit requested for {}", id);
}

/// Аннулировать счёт
pub fn cancel_invoice(id: &str) {
    info!("sales_invoice: cancel requested for {}", id);
}

/// Подготовка депозита по текущему выбору
pub fn prepare_deposit(ids: &[String]) {
    info!(
        "sales_invoice: prepare deposit requested for {} invoice(s): {:?}",
        ids.len(),
        ids
    );
}
