use serde::{Deserialize, Serialize};

use crate::model::sale::{PaymentMethod, SaleItem};

/// Printable receipt for a sale.
///
/// Subtotal, tax and total all arrive explicitly from the backend rather than
/// being reverse-derived from the total on the client; the three amounts are
/// the stored source of truth and the client only checks that they agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub sale_number: String,
    pub issued_at: String,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    pub sub_total: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
}

impl Receipt {
    /// `subTotal + taxAmount == totalAmount`, to the cent.
    pub fn totals_consistent(&self) -> bool {
        (self.sub_total + self.tax_amount - self.total_amount).abs() < 0.005
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sale::round_cents;

    fn receipt(sub_total: f64, tax_amount: f64, total_amount: f64) -> Receipt {
        Receipt {
            sale_number: "S-000001".into(),
            issued_at: "2026-08-01T10:15:00Z".into(),
            customer_name: "Walk-in".into(),
            items: vec![],
            sub_total,
            tax_amount,
            total_amount,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn stored_amounts_are_consistent() {
        let r = receipt(25.0, 3.75, 28.75);
        assert!(r.totals_consistent());
    }

    #[test]
    fn detects_inconsistent_amounts() {
        let r = receipt(25.0, 3.75, 28.80);
        assert!(!r.totals_consistent());
    }

    #[test]
    fn reverse_gst_derivation_drifts_from_stored_subtotal() {
        // Two lines at $0.49 with per-line GST rounding: subtotal 0.98,
        // tax 0.07 + 0.07 = 0.14, total 1.12. The stored amounts agree, but
        // dividing the total by 1.15 recovers 0.97, not 0.98 — which is why
        // receipts render the stored subtotal instead of recomputing it.
        let r = receipt(0.98, 0.14, 1.12);
        assert!(r.totals_consistent());
        let reverse_subtotal = round_cents(r.total_amount / 1.15);
        assert_ne!(reverse_subtotal, r.sub_total);
    }
}
