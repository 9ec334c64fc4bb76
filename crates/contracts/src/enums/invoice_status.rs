use serde::{Deserialize, Serialize};

/// Статусы счёта продажи
///
/// Сериализуются в точности так, как приходят от API (отображаемые строки).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    #[serde(rename = "Awaiting Approval")]
    AwaitingApproval,
    #[serde(rename = "Awaiting payment")]
    AwaitingPayment,
    Published,
    Settled,
    #[serde(rename = "Refund Due")]
    RefundDue,
}

impl InvoiceStatus {
    /// Получить отображаемое название (совпадает с wire-форматом)
    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::AwaitingApproval => "Awaiting Approval",
            InvoiceStatus::AwaitingPayment => "Awaiting payment",
            InvoiceStatus::Published => "Published",
            InvoiceStatus::Settled => "Settled",
            InvoiceStatus::RefundDue => "Refund Due",
        }
    }

    /// CSS-модификатор бейджа статуса
    pub fn badge_class(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "badge--neutral",
            InvoiceStatus::AwaitingApproval => "badge--warning",
            InvoiceStatus::AwaitingPayment => "badge--primary",
            InvoiceStatus::Published => "badge--success",
            InvoiceStatus::Settled => "badge--success",
            InvoiceStatus::RefundDue => "badge--secondary",
        }
    }

    /// Статус ещё не опубликован (черновик или на согласовании/ожидании)
    pub fn is_unpublished(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::Draft | InvoiceStatus::AwaitingApproval | InvoiceStatus::AwaitingPayment
        )
    }

    /// Получить все статусы
    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Draft,
            InvoiceStatus::AwaitingApproval,
            InvoiceStatus::AwaitingPayment,
            InvoiceStatus::Published,
            InvoiceStatus::Settled,
            InvoiceStatus::RefundDue,
        ]
    }

    /// Парсинг из строки wire-формата
    pub fn from_display_name(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(InvoiceStatus::Draft),
            "Awaiting Approval" => Some(InvoiceStatus::AwaitingApproval),
            "Awaiting payment" => Some(InvoiceStatus::AwaitingPayment),
            "Published" => Some(InvoiceStatus::Published),
            "Settled" => Some(InvoiceStatus::Settled),
            "Refund Due" => Some(InvoiceStatus::RefundDue),
            _ => None,
        }
    }
}
