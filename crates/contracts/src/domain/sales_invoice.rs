use serde::{Deserialize, Serialize};

use crate::enums::InvoiceStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesInvoiceDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    /// Дата счёта в ISO-формате (YYYY-MM-DD...)
    #[serde(rename = "invoiceDate")]
    pub invoice_date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Сумма счёта; отсутствующее поле читается как 0
    #[serde(rename = "grandTotal", default)]
    pub grand_total: f64,
    pub status: InvoiceStatus,
}

/// Ответ GET /api/sales-invoices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesInvoiceListResponse {
    pub data: Vec<SalesInvoiceDto>,
}

/// Тело ошибки API (используется только поле message)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_grand_total_defaults_to_zero() {
        let json = r#"{
            "_id": "665f1c2a9b3e4d0012ab34cd",
            "invoiceNumber": "INV-1042",
            "customerName": "Acme Corp",
            "invoiceDate": "2026-07-01",
            "dueDate": "2026-07-31",
            "status": "Awaiting payment"
        }"#;
        let row: SalesInvoiceDto = serde_json::from_str(json).expect("row should parse");
        assert_eq!(row.grand_total, 0.0);
        assert_eq!(row.status, InvoiceStatus::AwaitingPayment);
    }

    #[test]
    fn status_serializes_with_wire_strings() {
        for status in InvoiceStatus::all() {
            let json = serde_json::to_string(&status).expect("status should serialize");
            assert_eq!(json, format!("\"{}\"", status.display_name()));
            assert_eq!(InvoiceStatus::from_display_name(status.display_name()), Some(status));
        }
    }

    #[test]
    fn list_response_envelope_parses() {
        let json = r#"{"data": []}"#;
        let response: SalesInvoiceListResponse =
            serde_json::from_str(json).expect("envelope should parse");
        assert!(response.data.is_empty());
    }
}
