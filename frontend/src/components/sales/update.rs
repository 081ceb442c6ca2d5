use common::model::sale::SaleStatus;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::{Dialog, SalesSection};

pub fn update(component: &mut SalesSection, ctx: &Context<SalesSection>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.epoch += 1;
            component.loading = true;
            component.error = None;

            let epoch = component.epoch;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::sales::list().await {
                    Ok(sales) => link.send_message(Msg::Loaded { epoch, sales }),
                    Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                }
            });
            true
        }
        Msg::Loaded { epoch, sales } => {
            if epoch != component.epoch {
                return false;
            }
            component.loading = false;
            component.sales = sales;
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
        Msg::SetStatusFilter(value) => {
            component.status_filter = match value.as_str() {
                "pending" => Some(SaleStatus::Pending),
                "completed" => Some(SaleStatus::Completed),
                "cancelled" => Some(SaleStatus::Cancelled),
                "refunded" => Some(SaleStatus::Refunded),
                _ => None,
            };
            true
        }
        Msg::OpenNewSale => {
            component.dialog = Dialog::NewSale;
            true
        }
        Msg::OpenDetail(sale) => {
            component.dialog = Dialog::Detail(sale);
            true
        }
        Msg::OpenReceipt(sale) => {
            component.dialog = Dialog::Receipt(sale);
            true
        }
        Msg::RequestCancel(sale) => {
            component.dialog = Dialog::ConfirmCancel(sale);
            true
        }
        Msg::RequestRefund(sale) => {
            component.dialog = Dialog::ConfirmRefund(sale);
            true
        }
        Msg::CloseDialog => {
            component.dialog = Dialog::None;
            true
        }
        Msg::Created(sale) => {
            component.patch(sale);
            component.dialog = Dialog::None;
            show_toast("Sale recorded.");
            true
        }
        Msg::ConfirmCancel => {
            let Dialog::ConfirmCancel(sale) = &component.dialog else {
                return false;
            };
            let id = sale.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::sales::cancel(&id).await {
                    Ok(sale) => link.send_message(Msg::Updated(sale)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            component.dialog = Dialog::None;
            true
        }
        Msg::ConfirmRefund => {
            let Dialog::ConfirmRefund(sale) = &component.dialog else {
                return false;
            };
            let id = sale.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::sales::refund(&id).await {
                    Ok(sale) => link.send_message(Msg::Updated(sale)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            component.dialog = Dialog::None;
            true
        }
        Msg::Updated(sale) => {
            let label = match sale.status {
                SaleStatus::Cancelled => "Sale cancelled.",
                SaleStatus::Refunded => "Sale refunded.",
                _ => "Sale updated.",
            };
            component.patch(sale);
            show_toast(label);
            true
        }
        Msg::ActionFailed(error) => {
            if error == ApiError::Unauthorized {
                ctx.props().on_unauthorized.emit(());
                return false;
            }
            show_toast(&error.to_string());
            true
        }
    }
}
