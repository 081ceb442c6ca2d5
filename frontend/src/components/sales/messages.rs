use common::model::sale::Sale;

use crate::api::ApiError;

pub enum Msg {
    Load,
    Loaded { epoch: u32, sales: Vec<Sale> },
    LoadFailed { epoch: u32, error: ApiError },
    SetStatusFilter(String),
    OpenNewSale,
    OpenDetail(Sale),
    OpenReceipt(Sale),
    RequestCancel(Sale),
    RequestRefund(Sale),
    CloseDialog,
    Created(Sale),
    ConfirmCancel,
    ConfirmRefund,
    Updated(Sale),
    ActionFailed(ApiError),
}
