use common::model::radiator::{Radiator, StockStatus};
use common::model::warehouse::Warehouse;
use common::requests::RadiatorPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Code,
    Year,
    Stock,
    RetailPrice,
}

pub enum Dialog {
    None,
    Edit(RadiatorForm),
    Stock(Radiator),
    ConfirmDelete(Radiator),
}

/// Dialog-local form state; numeric fields stay raw strings until submit.
pub struct RadiatorForm {
    pub id: Option<String>,
    pub brand: String,
    pub code: String,
    pub name: String,
    pub year: String,
    pub retail_price: String,
    pub trade_price: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl RadiatorForm {
    pub fn empty() -> Self {
        RadiatorForm {
            id: None,
            brand: String::new(),
            code: String::new(),
            name: String::new(),
            year: String::new(),
            retail_price: String::new(),
            trade_price: String::new(),
            busy: false,
            error: None,
        }
    }

    pub fn from_radiator(radiator: &Radiator) -> Self {
        RadiatorForm {
            id: Some(radiator.id.clone()),
            brand: radiator.brand.clone(),
            code: radiator.code.clone(),
            name: radiator.name.clone(),
            year: radiator.year.to_string(),
            retail_price: radiator.retail_price.to_string(),
            trade_price: radiator.trade_price.to_string(),
            busy: false,
            error: None,
        }
    }

    /// Client-side validation: required fields plus numeric ranges. The
    /// backend revalidates; this only catches the obvious before a round
    /// trip.
    pub fn validate(&self) -> Result<RadiatorPayload, String> {
        let brand = self.brand.trim();
        let code = self.code.trim();
        let name = self.name.trim();
        if brand.is_empty() || code.is_empty() || name.is_empty() {
            return Err("Brand, code and name are required.".to_string());
        }
        let year: u16 = self
            .year
            .trim()
            .parse()
            .map_err(|_| "Year must be a number.".to_string())?;
        if !(1950..=2050).contains(&year) {
            return Err("Year must be between 1950 and 2050.".to_string());
        }
        let retail_price: f64 = self
            .retail_price
            .trim()
            .parse()
            .map_err(|_| "Retail price must be a number.".to_string())?;
        let trade_price: f64 = self
            .trade_price
            .trim()
            .parse()
            .map_err(|_| "Trade price must be a number.".to_string())?;
        if retail_price < 0.0 || trade_price < 0.0 {
            return Err("Prices cannot be negative.".to_string());
        }
        Ok(RadiatorPayload {
            brand: brand.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            year,
            retail_price,
            trade_price,
        })
    }
}

pub struct InventorySection {
    pub radiators: Vec<Radiator>,
    pub warehouses: Vec<Warehouse>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub status_filter: Option<StockStatus>,
    pub sort: SortKey,
    pub sort_desc: bool,
    /// Incremented per fetch; responses from older fetches are dropped.
    pub epoch: u32,
    pub dialog: Dialog,
}

impl InventorySection {
    pub fn new() -> Self {
        InventorySection {
            radiators: Vec::new(),
            warehouses: Vec::new(),
            loading: false,
            error: None,
            query: String::new(),
            status_filter: None,
            sort: SortKey::Brand,
            sort_desc: false,
            epoch: 0,
            dialog: Dialog::None,
        }
    }

    /// Rows after the search query, status filter and sort order.
    pub fn visible(&self) -> Vec<&Radiator> {
        let mut rows: Vec<&Radiator> = self
            .radiators
            .iter()
            .filter(|r| r.matches_query(&self.query))
            .filter(|r| {
                self.status_filter
                    .map_or(true, |status| r.status() == status)
            })
            .collect();
        rows.sort_by(|a, b| {
            let ordering = match self.sort {
                SortKey::Brand => a
                    .brand
                    .to_lowercase()
                    .cmp(&b.brand.to_lowercase())
                    .then_with(|| a.code.cmp(&b.code)),
                SortKey::Code => a.code.cmp(&b.code),
                SortKey::Year => a.year.cmp(&b.year),
                SortKey::Stock => a.total_stock().cmp(&b.total_stock()),
                SortKey::RetailPrice => a.retail_price.total_cmp(&b.retail_price),
            };
            if self.sort_desc {
                ordering.reverse()
            } else {
                ordering
            }
        });
        rows
    }

    /// Replace a radiator in place, or append it if it is new.
    pub fn patch(&mut self, radiator: Radiator) {
        match self.radiators.iter_mut().find(|r| r.id == radiator.id) {
            Some(existing) => *existing = radiator,
            None => self.radiators.push(radiator),
        }
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort == key {
            self.sort_desc = !self.sort_desc;
        } else {
            self.sort = key;
            self.sort_desc = false;
        }
    }
}
