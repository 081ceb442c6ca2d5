use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::modal::confirm_dialog;
use crate::helpers::{format_date, format_nzd};

use super::detail::SaleDetailDialog;
use super::messages::Msg;
use super::new_sale::NewSaleDialog;
use super::receipt::ReceiptDialog;
use super::state::{Dialog, SalesSection};

pub fn view(component: &SalesSection, ctx: &Context<SalesSection>) -> Html {
    let link = ctx.link();

    html! {
        <section class="screen">
            <div class="toolbar">
                <h2>{ "Sales" }</h2>
                <select onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetStatusFilter(select.value())
                })}>
                    <option value="all" selected={component.status_filter.is_none()}>{ "All statuses" }</option>
                    <option value="pending">{ "Pending" }</option>
                    <option value="completed">{ "Completed" }</option>
                    <option value="cancelled">{ "Cancelled" }</option>
                    <option value="refunded">{ "Refunded" }</option>
                </select>
                <button class="icon-btn" title="Refresh" onclick={link.callback(|_| Msg::Load)}>
                    <i class="material-icons">{ "refresh" }</i>
                </button>
                <button class="btn primary" onclick={link.callback(|_| Msg::OpenNewSale)}>
                    { "New sale" }
                </button>
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
                    html! { <p class="muted">{ "Loading sales…" }</p> }
                } else {
                    build_table(component, ctx)
                }
            }
            { build_dialog(component, ctx) }
        </section>
    }
}

fn build_table(component: &SalesSection, ctx: &Context<SalesSection>) -> Html {
    let link = ctx.link();
    let can_manage = ctx.props().can_manage;

    let rows = component.visible().into_iter().map(|sale| {
        let detail = {
            let sale = sale.clone();
            link.callback(move |_| Msg::OpenDetail(sale.clone()))
        };
        let receipt = {
            let sale = sale.clone();
            link.callback(move |_| Msg::OpenReceipt(sale.clone()))
        };
        let cancel = {
            let sale = sale.clone();
            link.callback(move |_| Msg::RequestCancel(sale.clone()))
        };
        let refund = {
            let sale = sale.clone();
            link.callback(move |_| Msg::RequestRefund(sale.clone()))
        };

        html! {
            <tr key={sale.id.clone()}>
                <td class="mono">{ &sale.sale_number }</td>
                <td>{ format_date(&sale.sale_date) }</td>
                <td>{ &sale.customer_name }</td>
                <td>
                    <span class={classes!("status-badge", sale.status.css_class())}>
                        { sale.status.label() }
                    </span>
                </td>
                <td>{ sale.payment_method.label() }</td>
                <td class="num">{ format_nzd(sale.total_amount) }</td>
                <td class="actions">
                    <button class="icon-btn" title="Details" onclick={detail}>
                        <i class="material-icons">{ "visibility" }</i>
                    </button>
                    <button class="icon-btn" title="Receipt" onclick={receipt}>
                        <i class="material-icons">{ "receipt" }</i>
                    </button>
                    {
                        if can_manage && sale.status.can_cancel() {
                            html! {
                                <button class="icon-btn" title="Cancel sale" onclick={cancel}>
                                    <i class="material-icons">{ "block" }</i>
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if can_manage && sale.status.can_refund() {
                            html! {
                                <button class="icon-btn" title="Refund sale" onclick={refund}>
                                    <i class="material-icons">{ "undo" }</i>
                                </button>
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
                    <th>{ "Sale" }</th>
                    <th>{ "Date" }</th>
                    <th>{ "Customer" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Payment" }</th>
                    <th class="num">{ "Total" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

fn build_dialog(component: &SalesSection, ctx: &Context<SalesSection>) -> Html {
    let link = ctx.link();
    let on_unauthorized = ctx.props().on_unauthorized.clone();
    match &component.dialog {
        Dialog::None => html! {},
        Dialog::NewSale => html! {
            <NewSaleDialog
                on_created={link.callback(Msg::Created)}
                on_close={link.callback(|_| Msg::CloseDialog)}
                {on_unauthorized}
            />
        },
        Dialog::Detail(sale) => html! {
            <SaleDetailDialog
                sale={sale.clone()}
                on_close={link.callback(|_| Msg::CloseDialog)}
                {on_unauthorized}
            />
        },
        Dialog::Receipt(sale) => html! {
            <ReceiptDialog
                sale={sale.clone()}
                on_close={link.callback(|_| Msg::CloseDialog)}
                {on_unauthorized}
            />
        },
        Dialog::ConfirmCancel(sale) => confirm_dialog(
            "Cancel sale",
            &format!("Cancel {}? Reserved stock is returned.", sale.sale_number),
            "Cancel sale",
            link.callback(|_| Msg::ConfirmCancel),
            link.callback(|_| Msg::CloseDialog),
        ),
        Dialog::ConfirmRefund(sale) => confirm_dialog(
            "Refund sale",
            &format!(
                "Refund {} ({})? Sold stock is returned to its warehouses.",
                sale.sale_number,
                format_nzd(sale.total_amount)
            ),
            "Refund",
            link.callback(|_| Msg::ConfirmRefund),
            link.callback(|_| Msg::CloseDialog),
        ),
    }
}
