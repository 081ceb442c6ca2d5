//! Sales history dialog. The customer row already on screen may be stale,
//! so the dialog fans out two concurrent fetches on open: the customer
//! record (fresh aggregates) and their sales.

use common::model::customer::Customer;
use common::model::sale::Sale;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::Modal;
use crate::helpers::{format_date, format_nzd};

pub enum Msg {
    CustomerLoaded(Customer),
    SalesLoaded(Vec<Sale>),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub customer: Customer,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

pub struct CustomerHistoryDialog {
    fresh: Option<Customer>,
    sales: Option<Vec<Sale>>,
    error: Option<String>,
}

impl Component for CustomerHistoryDialog {
    type Message = Msg;
    type Properties = HistoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CustomerHistoryDialog {
            fresh: None,
            sales: None,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().customer.id.clone();
            let link = ctx.link().clone();
            {
                let id = id.clone();
                let link = link.clone();
                spawn_local(async move {
                    match api::customers::get(&id).await {
                        Ok(customer) => link.send_message(Msg::CustomerLoaded(customer)),
                        Err(error) => link.send_message(Msg::Failed(error)),
                    }
                });
            }
            spawn_local(async move {
                match api::customers::sales(&id).await {
                    Ok(sales) => link.send_message(Msg::SalesLoaded(sales)),
                    Err(error) => link.send_message(Msg::Failed(error)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CustomerLoaded(customer) => {
                self.fresh = Some(customer);
                true
            }
            Msg::SalesLoaded(sales) => {
                self.sales = Some(sales);
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
        let customer = self.fresh.as_ref().unwrap_or(&props.customer);
        let on_close = props.on_close.clone();

        let sales = match &self.sales {
            None => html! { <p class="muted">{ "Loading sales…" }</p> },
            Some(sales) if sales.is_empty() => {
                html! { <p class="muted">{ "No sales recorded for this customer." }</p> }
            }
            Some(sales) => {
                let rows = sales.iter().map(|sale| {
                    html! {
                        <tr key={sale.id.clone()}>
                            <td class="mono">{ &sale.sale_number }</td>
                            <td>{ format_date(&sale.sale_date) }</td>
                            <td>
                                <span class={classes!("status-badge", sale.status.css_class())}>
                                    { sale.status.label() }
                                </span>
                            </td>
                            <td>{ sale.payment_method.label() }</td>
                            <td class="num">{ format_nzd(sale.total_amount) }</td>
                        </tr>
                    }
                });
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ "Sale" }</th>
                                <th>{ "Date" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Payment" }</th>
                                <th class="num">{ "Total" }</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                }
            }
        };

        html! {
            <Modal
                title={format!("Sales — {}", customer.full_name())}
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
                        <span class="stat-label">{ "Total spent" }</span>
                        <span class="stat-value">{ format_nzd(customer.total_spent) }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Purchases" }</span>
                        <span class="stat-value">{ customer.total_purchases }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Last purchase" }</span>
                        <span class="stat-value">
                            {
                                customer
                                    .last_purchase_date
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| "—".to_string())
                            }
                        </span>
                    </div>
                </div>
                { sales }
            </Modal>
        }
    }
}
