use common::model::sale::{Sale, SaleStatus};

pub enum Dialog {
    None,
    NewSale,
    Detail(Sale),
    Receipt(Sale),
    ConfirmCancel(Sale),
    ConfirmRefund(Sale),
}

pub struct SalesSection {
    pub sales: Vec<Sale>,
    pub loading: bool,
    pub error: Option<String>,
    pub status_filter: Option<SaleStatus>,
    pub epoch: u32,
    pub dialog: Dialog,
}

impl SalesSection {
    pub fn new() -> Self {
        SalesSection {
            sales: Vec::new(),
            loading: false,
            error: None,
            status_filter: None,
            epoch: 0,
            dialog: Dialog::None,
        }
    }

    /// Newest first; ISO-8601 sale dates sort lexicographically.
    pub fn visible(&self) -> Vec<&Sale> {
        let mut rows: Vec<&Sale> = self
            .sales
            .iter()
            .filter(|s| self.status_filter.map_or(true, |f| s.status == f))
            .collect();
        rows.sort_by(|a, b| {
            b.sale_date
                .cmp(&a.sale_date)
                .then_with(|| b.sale_number.cmp(&a.sale_number))
        });
        rows
    }

    pub fn patch(&mut self, sale: Sale) {
        match self.sales.iter_mut().find(|s| s.id == sale.id) {
            Some(existing) => *existing = sale,
            None => self.sales.push(sale),
        }
    }
}
