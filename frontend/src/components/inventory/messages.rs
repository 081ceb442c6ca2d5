use common::model::radiator::Radiator;
use common::model::warehouse::Warehouse;

use crate::api::ApiError;

use super::state::SortKey;

#[derive(Clone, Copy)]
pub enum FormField {
    Brand,
    Code,
    Name,
    Year,
    RetailPrice,
    TradePrice,
}

pub enum Msg {
    Load,
    Loaded { epoch: u32, radiators: Vec<Radiator> },
    WarehousesLoaded { epoch: u32, warehouses: Vec<Warehouse> },
    LoadFailed { epoch: u32, error: ApiError },
    SetQuery(String),
    SetStatusFilter(String),
    SortBy(SortKey),
    OpenCreate,
    OpenEdit(Radiator),
    OpenStock(Radiator),
    RequestDelete(Radiator),
    CloseDialog,
    SetFormField(FormField, String),
    Submit,
    Saved(Radiator),
    StockSaved(Radiator),
    ConfirmDelete,
    Deleted(String),
    ActionFailed(ApiError),
}
