use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::show_toast;

use super::messages::{FormField, Msg};
use super::state::{Dialog, InventorySection, RadiatorForm};

pub fn update(component: &mut InventorySection, ctx: &Context<InventorySection>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.epoch += 1;
            component.loading = true;
            component.error = None;

            // Radiators and warehouses load concurrently; each response
            // carries the epoch it was requested under.
            let epoch = component.epoch;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::radiators::list().await {
                    Ok(radiators) => link.send_message(Msg::Loaded { epoch, radiators }),
                    Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                }
            });
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::warehouses::list().await {
                    Ok(warehouses) => {
                        link.send_message(Msg::WarehousesLoaded { epoch, warehouses })
                    }
                    Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                }
            });
            true
        }
        Msg::Loaded { epoch, radiators } => {
            if epoch != component.epoch {
                return false;
            }
            component.loading = false;
            component.radiators = radiators;
            true
        }
        Msg::WarehousesLoaded { epoch, warehouses } => {
            if epoch != component.epoch {
                return false;
            }
            component.warehouses = warehouses;
            true
        }
        Msg::LoadFailed { epoch, error } => {
            if epoch != component.epoch {
                return false;
            }
            if error == ApiError::Unauthorized {
                ctx.props().on_unauthorized.emit(());
                return false;
            }
            component.loading = false;
            component.error = Some(error.to_string());
            true
        }
        Msg::SetQuery(query) => {
            component.query = query;
            true
        }
        Msg::SetStatusFilter(value) => {
            component.status_filter = match value.as_str() {
                "out" => Some(common::model::radiator::StockStatus::OutOfStock),
                "low" => Some(common::model::radiator::StockStatus::LowStock),
                "in" => Some(common::model::radiator::StockStatus::InStock),
                _ => None,
            };
            true
        }
        Msg::SortBy(key) => {
            component.toggle_sort(key);
            true
        }
        Msg::OpenCreate => {
            component.dialog = Dialog::Edit(RadiatorForm::empty());
            true
        }
        Msg::OpenEdit(radiator) => {
            component.dialog = Dialog::Edit(RadiatorForm::from_radiator(&radiator));
            true
        }
        Msg::OpenStock(radiator) => {
            component.dialog = Dialog::Stock(radiator);
            true
        }
        Msg::RequestDelete(radiator) => {
            component.dialog = Dialog::ConfirmDelete(radiator);
            true
        }
        Msg::CloseDialog => {
            component.dialog = Dialog::None;
            true
        }
        Msg::SetFormField(field, value) => {
            if let Dialog::Edit(form) = &mut component.dialog {
                match field {
                    FormField::Brand => form.brand = value,
                    FormField::Code => form.code = value,
                    FormField::Name => form.name = value,
                    FormField::Year => form.year = value,
                    FormField::RetailPrice => form.retail_price = value,
                    FormField::TradePrice => form.trade_price = value,
                }
            }
            false
        }
        Msg::Submit => {
            let Dialog::Edit(form) = &mut component.dialog else {
                return false;
            };
            if form.busy {
                return false;
            }
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(message) => {
                    form.error = Some(message);
                    return true;
                }
            };
            form.busy = true;
            form.error = None;

            let id = form.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &id {
                    Some(id) => api::radiators::update(id, &payload).await,
                    None => api::radiators::create(&payload).await,
                };
                match result {
                    Ok(radiator) => link.send_message(Msg::Saved(radiator)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            true
        }
        Msg::Saved(radiator) => {
            component.patch(radiator);
            component.dialog = Dialog::None;
            show_toast("Radiator saved.");
            true
        }
        Msg::StockSaved(radiator) => {
            component.patch(radiator);
            component.dialog = Dialog::None;
            true
        }
        Msg::ConfirmDelete => {
            let Dialog::ConfirmDelete(radiator) = &component.dialog else {
                return false;
            };
            let id = radiator.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::radiators::delete(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            component.dialog = Dialog::None;
            true
        }
        Msg::Deleted(id) => {
            component.radiators.retain(|r| r.id != id);
            show_toast("Radiator deleted.");
            true
        }
        Msg::ActionFailed(error) => {
            if error == ApiError::Unauthorized {
                ctx.props().on_unauthorized.emit(());
                return false;
            }
            if let Dialog::Edit(form) = &mut component.dialog {
                form.busy = false;
                form.error = Some(if error.status() == Some(409) {
                    "A radiator with this code already exists.".to_string()
                } else {
                    error.to_string()
                });
            } else {
                show_toast(&error.to_string());
            }
            true
        }
    }
}
