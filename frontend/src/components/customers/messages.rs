use common::model::customer::Customer;

use crate::api::ApiError;

#[derive(Clone, Copy)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
}

pub enum Msg {
    Load,
    Loaded { epoch: u32, customers: Vec<Customer> },
    LoadFailed { epoch: u32, error: ApiError },
    SetQuery(String),
    ToggleActiveOnly,
    OpenCreate,
    OpenEdit(Customer),
    OpenHistory(Customer),
    RequestDelete(Customer),
    CloseDialog,
    SetFormField(FormField, String),
    ToggleFormActive,
    Submit,
    Saved(Customer),
    ConfirmDelete,
    Deleted(String),
    ActionFailed(ApiError),
}
