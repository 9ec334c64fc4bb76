use contracts::domain::sales_invoice::{ApiErrorBody, SalesInvoiceDto, SalesInvoiceListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the full sales invoice collection
pub async fn fetch_sales_invoices() -> Result<Vec<SalesInvoiceDto>, String> {
    let response = Request::get(&format!("{}/api/sales-invoices", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // Сервер может прислать понятное сообщение в теле ошибки
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        return Err(message.unwrap_or_else(|| "Could not load invoices.".to_string()));
    }

    response
        .json::<SalesInvoiceListResponse>()
        .await
        .map(|body| body.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
