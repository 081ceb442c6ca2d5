use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::show_toast;

use super::messages::{FormField, Msg};
use super::state::{CustomerForm, CustomersSection, Dialog};

pub fn update(component: &mut CustomersSection, ctx: &Context<CustomersSection>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.epoch += 1;
            component.loading = true;
            component.error = None;

            let epoch = component.epoch;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::customers::list().await {
                    Ok(customers) => link.send_message(Msg::Loaded { epoch, customers }),
                    Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                }
            });
            true
        }
        Msg::Loaded { epoch, customers } => {
            if epoch != component.epoch {
                return false;
            }
            component.loading = false;
            component.customers = customers;
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
        Msg::ToggleActiveOnly => {
            component.active_only = !component.active_only;
            true
        }
        Msg::OpenCreate => {
            component.dialog = Dialog::Edit(CustomerForm::empty());
            true
        }
        Msg::OpenEdit(customer) => {
            component.dialog = Dialog::Edit(CustomerForm::from_customer(&customer));
            true
        }
        Msg::OpenHistory(customer) => {
            component.dialog = Dialog::History(customer);
            true
        }
        Msg::RequestDelete(customer) => {
            component.dialog = Dialog::ConfirmDelete(customer);
            true
        }
        Msg::CloseDialog => {
            component.dialog = Dialog::None;
            true
        }
        Msg::SetFormField(field, value) => {
            if let Dialog::Edit(form) = &mut component.dialog {
                match field {
                    FormField::FirstName => form.first_name = value,
                    FormField::LastName => form.last_name = value,
                    FormField::Email => form.email = value,
                    FormField::Phone => form.phone = value,
                    FormField::Company => form.company = value,
                }
            }
            false
        }
        Msg::ToggleFormActive => {
            if let Dialog::Edit(form) = &mut component.dialog {
                form.is_active = !form.is_active;
            }
            true
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
                    Some(id) => api::customers::update(id, &payload).await,
                    None => api::customers::create(&payload).await,
                };
                match result {
                    Ok(customer) => link.send_message(Msg::Saved(customer)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            true
        }
        Msg::Saved(customer) => {
            component.patch(customer);
            component.dialog = Dialog::None;
            show_toast("Customer saved.");
            true
        }
        Msg::ConfirmDelete => {
            let Dialog::ConfirmDelete(customer) = &component.dialog else {
                return false;
            };
            let id = customer.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::customers::delete(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(error) => link.send_message(Msg::ActionFailed(error)),
                }
            });
            component.dialog = Dialog::None;
            true
        }
        Msg::Deleted(id) => {
            component.customers.retain(|c| c.id != id);
            show_toast("Customer deleted.");
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
                    "A customer with this email already exists.".to_string()
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
