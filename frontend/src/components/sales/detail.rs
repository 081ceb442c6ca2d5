//! Sale detail dialog: the list row may carry a slim record, so the full
//! sale is re-fetched on open.

use common::model::sale::Sale;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::Modal;
use crate::helpers::{format_date, format_nzd};

pub enum Msg {
    Loaded(Sale),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub sale: Sale,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

pub struct SaleDetailDialog {
    full: Option<Sale>,
    error: Option<String>,
}

impl Component for SaleDetailDialog {
    type Message = Msg;
    type Properties = DetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SaleDetailDialog {
            full: None,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().sale.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::sales::get(&id).await {
                    Ok(sale) => link.send_message(Msg::Loaded(sale)),
                    Err(error) => link.send_message(Msg::Failed(error)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(sale) => {
                self.full = Some(sale);
                true
            }
            Msg::Failed(error) => {
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.error = Some(error.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let sale = self.full.as_ref().unwrap_or(&props.sale);
        let on_close = props.on_close.clone();

        let items = sale.items.iter().enumerate().map(|(index, item)| {
            html! {
                <tr key={index}>
                    <td>{ &item.description }</td>
                    <td class="num">{ item.quantity }</td>
                    <td class="num">{ format_nzd(item.unit_price) }</td>
                    <td class="num">{ format_nzd(item.line_total()) }</td>
                </tr>
            }
        });

        html! {
            <Modal
                title={format!("Sale {}", sale.sale_number)}
                on_close={Callback::from(move |_| on_close.emit(()))}
                wide=true
            >
                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="summary-row">
                    <div class="stat">
                        <span class="stat-label">{ "Customer" }</span>
                        <span class="stat-value">{ &sale.customer_name }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Date" }</span>
                        <span class="stat-value">{ format_date(&sale.sale_date) }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Status" }</span>
                        <span class={classes!("status-badge", sale.status.css_class())}>
                            { sale.status.label() }
                        </span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Payment" }</span>
                        <span class="stat-value">{ sale.payment_method.label() }</span>
                    </div>
                </div>
                {
                    if sale.items.is_empty() {
                        html! { <p class="muted">{ "Loading line items…" }</p> }
                    } else {
                        html! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{ "Item" }</th>
                                        <th class="num">{ "Qty" }</th>
                                        <th class="num">{ "Unit" }</th>
                                        <th class="num">{ "Line total" }</th>
                                    </tr>
                                </thead>
                                <tbody>{ for items }</tbody>
                            </table>
                        }
                    }
                }
                <div class="totals-box">
                    <div class="grand">
                        <span>{ "Total (GST incl.)" }</span>
                        <span class="num">{ format_nzd(sale.total_amount) }</span>
                    </div>
                </div>
            </Modal>
        }
    }
}
