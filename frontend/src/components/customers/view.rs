use web_sys::{HtmlInputElement, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::modal::{confirm_dialog, Modal};
use crate::helpers::{format_date, format_nzd};

use super::history::CustomerHistoryDialog;
use super::messages::{FormField, Msg};
use super::state::{CustomerForm, CustomersSection, Dialog};

pub fn view(component: &CustomersSection, ctx: &Context<CustomersSection>) -> Html {
    let link = ctx.link();

    html! {
        <section class="screen">
            <div class="toolbar">
                <h2>{ "Customers" }</h2>
                <input
                    class="search-input"
                    placeholder="Search name, email or company"
                    value={component.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetQuery(input.value())
                    })}
                />
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={component.active_only}
                        onchange={link.callback(|_| Msg::ToggleActiveOnly)}
                    />
                    { "Active only" }
                </label>
                <button class="icon-btn" title="Refresh" onclick={link.callback(|_| Msg::Load)}>
                    <i class="material-icons">{ "refresh" }</i>
                </button>
                {
                    if ctx.props().can_manage {
                        html! {
                            <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                                { "Add customer" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if let Some(error) = &component.error {
                    html! {
                        <div class="banner error">
                            { error }
                            <button class="btn small" onclick={link.callback(|_| Msg::Load)}>
                                { "Retry" }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if component.loading {
                    html! { <p class="muted">{ "Loading customers…" }</p> }
                } else {
                    build_table(component, ctx)
                }
            }
            { build_dialog(component, ctx) }
        </section>
    }
}

fn build_table(component: &CustomersSection, ctx: &Context<CustomersSection>) -> Html {
    let link = ctx.link();
    let can_manage = ctx.props().can_manage;

    let rows = component.visible().into_iter().map(|customer| {
        let history = {
            let customer = customer.clone();
            link.callback(move |_| Msg::OpenHistory(customer.clone()))
        };
        let edit = {
            let customer = customer.clone();
            link.callback(move |_| Msg::OpenEdit(customer.clone()))
        };
        let remove = {
            let customer = customer.clone();
            link.callback(move |_| Msg::RequestDelete(customer.clone()))
        };

        html! {
            <tr key={customer.id.clone()} class={(!customer.is_active).then_some("inactive-row")}>
                <td>{ customer.full_name() }</td>
                <td>{ &customer.email }</td>
                <td>{ customer.phone.as_deref().unwrap_or("—") }</td>
                <td>{ customer.company.as_deref().unwrap_or("—") }</td>
                <td class="num">{ format_nzd(customer.total_spent) }</td>
                <td class="num">{ customer.total_purchases }</td>
                <td>
                    {
                        customer
                            .last_purchase_date
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_else(|| "—".to_string())
                    }
                </td>
                <td class="actions">
                    <button class="icon-btn" title="Sales history" onclick={history}>
                        <i class="material-icons">{ "receipt_long" }</i>
                    </button>
                    {
                        if can_manage {
                            html! {
                                <>
                                    <button class="icon-btn" title="Edit" onclick={edit}>
                                        <i class="material-icons">{ "edit" }</i>
                                    </button>
                                    <button class="icon-btn" title="Delete" onclick={remove}>
                                        <i class="material-icons">{ "delete" }</i>
                                    </button>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </td>
            </tr>
        }
    });

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{ "Name" }</th>
                    <th>{ "Email" }</th>
                    <th>{ "Phone" }</th>
                    <th>{ "Company" }</th>
                    <th class="num">{ "Total spent" }</th>
                    <th class="num">{ "Purchases" }</th>
                    <th>{ "Last purchase" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

fn build_dialog(component: &CustomersSection, ctx: &Context<CustomersSection>) -> Html {
    let link = ctx.link();
    match &component.dialog {
        Dialog::None => html! {},
        Dialog::Edit(form) => build_form_dialog(form, link),
        Dialog::History(customer) => html! {
            <CustomerHistoryDialog
                customer={customer.clone()}
                on_close={link.callback(|_| Msg::CloseDialog)}
                on_unauthorized={ctx.props().on_unauthorized.clone()}
            />
        },
        Dialog::ConfirmDelete(customer) => confirm_dialog(
            "Delete customer",
            &format!("Delete {}? Their sales records remain.", customer.full_name()),
            "Delete",
            link.callback(|_| Msg::ConfirmDelete),
            link.callback(|_| Msg::CloseDialog),
        ),
    }
}

fn text_field(
    link: &Scope<CustomersSection>,
    label: &str,
    value: &str,
    field: FormField,
) -> Html {
    html! {
        <>
            <label>{ label }</label>
            <input
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetFormField(field, input.value())
                })}
            />
        </>
    }
}

fn build_form_dialog(form: &CustomerForm, link: &Scope<CustomersSection>) -> Html {
    let title = if form.id.is_some() {
        "Edit customer"
    } else {
        "Add customer"
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <Modal title={title.to_string()} on_close={link.callback(|_| Msg::CloseDialog)}>
            <form class="form-grid" {onsubmit}>
                {
                    if let Some(error) = &form.error {
                        html! { <div class="banner error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                { text_field(link, "First name", &form.first_name, FormField::FirstName) }
                { text_field(link, "Last name", &form.last_name, FormField::LastName) }
                { text_field(link, "Email", &form.email, FormField::Email) }
                { text_field(link, "Phone", &form.phone, FormField::Phone) }
                { text_field(link, "Company", &form.company, FormField::Company) }
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={form.is_active}
                        onchange={link.callback(|_| Msg::ToggleFormActive)}
                    />
                    { "Active" }
                </label>
                <div class="dialog-actions">
                    <button class="btn" type="button" onclick={link.callback(|_| Msg::CloseDialog)}>
                        { "Cancel" }
                    </button>
                    <button class="btn primary" type="submit" disabled={form.busy}>
                        { if form.busy { "Saving…" } else { "Save" } }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
