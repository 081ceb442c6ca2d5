use serde::{Deserialize, Serialize};

/// GST rate applied to sale subtotals.
pub const GST_RATE: f64 = 0.15;

/// A point-of-sale transaction as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub sale_number: String,
    pub customer_id: Option<String>,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
    pub total_amount: f64,
    pub sale_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub radiator_id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl SaleItem {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleStatus {
    Pending,
    Completed,
    Cancelled,
    Refunded,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::Completed => "Completed",
            SaleStatus::Cancelled => "Cancelled",
            SaleStatus::Refunded => "Refunded",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "status-pending",
            SaleStatus::Completed => "status-completed",
            SaleStatus::Cancelled => "status-cancelled",
            SaleStatus::Refunded => "status-refunded",
        }
    }

    /// Only a pending sale can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, SaleStatus::Pending)
    }

    /// Only a completed sale can be refunded.
    pub fn can_refund(&self) -> bool {
        matches!(self, SaleStatus::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Eftpos,
    Card,
    Account,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Eftpos,
        PaymentMethod::Card,
        PaymentMethod::Account,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Eftpos => "EFTPOS",
            PaymentMethod::Card => "Card",
            PaymentMethod::Account => "On Account",
        }
    }
}

/// Subtotal, GST and grand total for a set of sale items.
///
/// Amounts are always derived forward from the line items:
/// `subtotal = Σ quantity × unit price`, `gst = subtotal × 0.15`,
/// `total = subtotal + gst`, each rounded to the cent. The total is never
/// divided back down to recover the subtotal; stored backend amounts are the
/// source of truth once a sale exists (see `Receipt`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

impl SaleTotals {
    pub fn of(items: &[SaleItem]) -> Self {
        let subtotal = round_cents(items.iter().map(SaleItem::line_total).sum());
        let gst = round_cents(subtotal * GST_RATE);
        let total = round_cents(subtotal + gst);
        SaleTotals { subtotal, gst, total }
    }
}

/// Round half away from zero to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, unit_price: f64) -> SaleItem {
        SaleItem {
            radiator_id: "r-1".into(),
            description: "test item".into(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn totals_for_two_line_sale() {
        let items = [item(2, 10.0), item(1, 5.0)];
        let totals = SaleTotals::of(&items);
        assert_eq!(totals.subtotal, 25.0);
        assert_eq!(totals.gst, 3.75);
        assert_eq!(totals.total, 28.75);
    }

    #[test]
    fn totals_round_to_the_cent() {
        // 3 × 19.99 = 59.97, GST 8.9955 -> 9.00
        let items = [item(3, 19.99)];
        let totals = SaleTotals::of(&items);
        assert_eq!(totals.subtotal, 59.97);
        assert_eq!(totals.gst, 9.0);
        assert_eq!(totals.total, 68.97);
    }

    #[test]
    fn empty_sale_totals_to_zero() {
        let totals = SaleTotals::of(&[]);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.gst, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn status_gates_cancel_and_refund() {
        assert!(SaleStatus::Pending.can_cancel());
        assert!(!SaleStatus::Pending.can_refund());
        assert!(SaleStatus::Completed.can_refund());
        assert!(!SaleStatus::Completed.can_cancel());
        assert!(!SaleStatus::Cancelled.can_cancel());
        assert!(!SaleStatus::Refunded.can_refund());
    }

    #[test]
    fn sale_deserializes_from_backend_json() {
        let sale: Sale = serde_json::from_str(
            r#"{
                "id": "s-1",
                "saleNumber": "S-000042",
                "customerId": "c-1",
                "customerName": "Mere Henare",
                "items": [
                    {"radiatorId": "r-1", "description": "MMRAD-001", "quantity": 2, "unitPrice": 10.0}
                ],
                "paymentMethod": "Eftpos",
                "status": "Completed",
                "totalAmount": 23.0,
                "saleDate": "2026-08-01T10:15:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.payment_method, PaymentMethod::Eftpos);
        assert_eq!(sale.items[0].line_total(), 20.0);
    }
}
