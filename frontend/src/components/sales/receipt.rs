//! Receipt dialog. Renders the backend-stored subtotal, tax and total
//! verbatim; if the three disagree a warning is shown rather than silently
//! recomputing any of them.

use common::model::receipt::Receipt;
use common::model::sale::Sale;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::Modal;
use crate::helpers::{format_date, format_nzd};

pub enum Msg {
    Loaded(Receipt),
    Failed(ApiError),
    Print,
}

#[derive(Properties, PartialEq)]
pub struct ReceiptProps {
    pub sale: Sale,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

pub struct ReceiptDialog {
    receipt: Option<Receipt>,
    error: Option<String>,
}

impl Component for ReceiptDialog {
    type Message = Msg;
    type Properties = ReceiptProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReceiptDialog {
            receipt: None,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().sale.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::sales::receipt(&id).await {
                    Ok(receipt) => link.send_message(Msg::Loaded(receipt)),
                    Err(error) => link.send_message(Msg::Failed(error)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(receipt) => {
                self.receipt = Some(receipt);
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
            Msg::Print => {
                if let Some(window) = web_sys::window() {
                    window.print().ok();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let on_close = props.on_close.clone();

        let body = match &self.receipt {
            None => html! { <p class="muted">{ "Loading receipt…" }</p> },
            Some(receipt) => {
                let items = receipt.items.iter().enumerate().map(|(index, item)| {
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
                    <div class="receipt-card">
                        <h4>{ "Radiator Parts Direct" }</h4>
                        <p class="muted">
                            { format!("{} · {}", receipt.sale_number, format_date(&receipt.issued_at)) }
                        </p>
                        <p>{ format!("Customer: {}", receipt.customer_name) }</p>
                        {
                            if !receipt.totals_consistent() {
                                html! {
                                    <div class="banner error">
                                        { "Receipt totals do not add up. Report this sale before reissuing." }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{ "Item" }</th>
                                    <th class="num">{ "Qty" }</th>
                                    <th class="num">{ "Unit" }</th>
                                    <th class="num">{ "Total" }</th>
                                </tr>
                            </thead>
                            <tbody>{ for items }</tbody>
                        </table>
                        <div class="totals-box">
                            <div><span>{ "Subtotal" }</span><span class="num">{ format_nzd(receipt.sub_total) }</span></div>
                            <div><span>{ "GST (15%)" }</span><span class="num">{ format_nzd(receipt.tax_amount) }</span></div>
                            <div class="grand"><span>{ "Total" }</span><span class="num">{ format_nzd(receipt.total_amount) }</span></div>
                        </div>
                        <p class="muted">{ format!("Paid by {}", receipt.payment_method.label()) }</p>
                    </div>
                }
            }
        };

        html! {
            <Modal
                title={format!("Receipt — {}", props.sale.sale_number)}
                on_close={Callback::from(move |_| on_close.emit(()))}
            >
                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                { body }
                <div class="dialog-actions">
                    <button
                        class="btn"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                    >
                        { "Close" }
                    </button>
                    <button
                        class="btn primary"
                        disabled={self.receipt.is_none()}
                        onclick={link.callback(|_| Msg::Print)}
                    >
                        { "Print" }
                    </button>
                </div>
            </Modal>
        }
    }
}
