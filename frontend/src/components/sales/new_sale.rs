//! New-sale dialog. Customers and radiators load concurrently when the
//! dialog opens; line rows are keyed by client-local UUIDs so edits track
//! rows across re-renders. Totals are recomputed from the draft on every
//! change with the forward GST formula.

use common::model::customer::Customer;
use common::model::radiator::Radiator;
use common::model::sale::{PaymentMethod, Sale, SaleItem, SaleTotals};
use common::requests::{NewSaleItem, NewSaleRequest};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::Modal;
use crate::helpers::format_nzd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Retail,
    Trade,
}

impl PriceTier {
    fn price(&self, radiator: &Radiator) -> f64 {
        match self {
            PriceTier::Retail => radiator.retail_price,
            PriceTier::Trade => radiator.trade_price,
        }
    }
}

pub enum Msg {
    CustomersLoaded(Vec<Customer>),
    RadiatorsLoaded(Vec<Radiator>),
    LoadFailed(ApiError),
    SetCustomer(String),
    SetPayment(String),
    SetTier(String),
    AddRow,
    RemoveRow(Uuid),
    SetRowRadiator(Uuid, String),
    SetRowQuantity(Uuid, String),
    Submit,
    Created(Sale),
    Failed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct NewSaleProps {
    pub on_created: Callback<Sale>,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

struct LineRow {
    key: Uuid,
    radiator_id: String,
    quantity: String,
}

impl LineRow {
    fn empty() -> Self {
        LineRow {
            key: Uuid::new_v4(),
            radiator_id: String::new(),
            quantity: "1".to_string(),
        }
    }
}

pub struct NewSaleDialog {
    customers: Option<Vec<Customer>>,
    radiators: Option<Vec<Radiator>>,
    rows: Vec<LineRow>,
    customer_id: String,
    payment: PaymentMethod,
    tier: PriceTier,
    busy: bool,
    error: Option<String>,
}

impl NewSaleDialog {
    fn radiator(&self, id: &str) -> Option<&Radiator> {
        self.radiators
            .as_deref()
            .and_then(|radiators| radiators.iter().find(|r| r.id == id))
    }

    /// Items for the rows that are currently well formed; used for the live
    /// totals while the draft is being edited.
    fn draft_items(&self) -> Vec<SaleItem> {
        self.rows
            .iter()
            .filter_map(|row| {
                let radiator = self.radiator(&row.radiator_id)?;
                let quantity: u32 = row.quantity.trim().parse().ok().filter(|q| *q > 0)?;
                Some(SaleItem {
                    radiator_id: radiator.id.clone(),
                    description: format!("{} {}", radiator.brand, radiator.code),
                    quantity,
                    unit_price: self.tier.price(radiator),
                })
            })
            .collect()
    }

    fn validate(&self) -> Result<NewSaleRequest, String> {
        let mut items = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let Some(radiator) = self.radiator(&row.radiator_id) else {
                return Err("Every line needs a radiator selected.".to_string());
            };
            let quantity: u32 = row
                .quantity
                .trim()
                .parse()
                .map_err(|_| "Quantities must be whole numbers.".to_string())?;
            if quantity == 0 {
                return Err("Quantities must be at least 1.".to_string());
            }
            items.push(NewSaleItem {
                radiator_id: radiator.id.clone(),
                quantity,
                unit_price: self.tier.price(radiator),
            });
        }
        if items.is_empty() {
            return Err("Add at least one line to the sale.".to_string());
        }
        Ok(NewSaleRequest {
            customer_id: (!self.customer_id.is_empty()).then(|| self.customer_id.clone()),
            payment_method: self.payment,
            items,
        })
    }
}

impl Component for NewSaleDialog {
    type Message = Msg;
    type Properties = NewSaleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NewSaleDialog {
            customers: None,
            radiators: None,
            rows: vec![LineRow::empty()],
            customer_id: String::new(),
            payment: PaymentMethod::Eftpos,
            tier: PriceTier::Retail,
            busy: false,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            {
                let link = link.clone();
                spawn_local(async move {
                    match api::customers::list().await {
                        Ok(customers) => link.send_message(Msg::CustomersLoaded(customers)),
                        Err(error) => link.send_message(Msg::LoadFailed(error)),
                    }
                });
            }
            spawn_local(async move {
                match api::radiators::list().await {
                    Ok(radiators) => link.send_message(Msg::RadiatorsLoaded(radiators)),
                    Err(error) => link.send_message(Msg::LoadFailed(error)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CustomersLoaded(customers) => {
                self.customers = Some(customers);
                true
            }
            Msg::RadiatorsLoaded(radiators) => {
                self.radiators = Some(radiators);
                true
            }
            Msg::LoadFailed(error) => {
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.error = Some(error.to_string());
                true
            }
            Msg::SetCustomer(id) => {
                self.customer_id = id;
                true
            }
            Msg::SetPayment(value) => {
                self.payment = match value.as_str() {
                    "Cash" => PaymentMethod::Cash,
                    "Card" => PaymentMethod::Card,
                    "Account" => PaymentMethod::Account,
                    _ => PaymentMethod::Eftpos,
                };
                true
            }
            Msg::SetTier(value) => {
                self.tier = if value == "Trade" {
                    PriceTier::Trade
                } else {
                    PriceTier::Retail
                };
                true
            }
            Msg::AddRow => {
                self.rows.push(LineRow::empty());
                true
            }
            Msg::RemoveRow(key) => {
                self.rows.retain(|row| row.key != key);
                if self.rows.is_empty() {
                    self.rows.push(LineRow::empty());
                }
                true
            }
            Msg::SetRowRadiator(key, id) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
                    row.radiator_id = id;
                }
                true
            }
            Msg::SetRowQuantity(key, quantity) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.key == key) {
                    row.quantity = quantity;
                }
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                let request = match self.validate() {
                    Ok(request) => request,
                    Err(message) => {
                        self.error = Some(message);
                        return true;
                    }
                };
                self.busy = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::sales::create(&request).await {
                        Ok(sale) => link.send_message(Msg::Created(sale)),
                        Err(error) => link.send_message(Msg::Failed(error)),
                    }
                });
                true
            }
            Msg::Created(sale) => {
                ctx.props().on_created.emit(sale);
                false
            }
            Msg::Failed(error) => {
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.busy = false;
                self.error = Some(error.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let on_close = props.on_close.clone();
        let loading = self.customers.is_none() || self.radiators.is_none();
        let totals = SaleTotals::of(&self.draft_items());

        html! {
            <Modal
                title="New sale"
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
                {
                    if loading {
                        html! { <p class="muted">{ "Loading customers and catalog…" }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="form-row">
                    <label>{ "Customer" }</label>
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetCustomer(select.value())
                    })}>
                        <option value="" selected={self.customer_id.is_empty()}>{ "Walk-in" }</option>
                        {
                            for self.customers.iter().flatten().map(|customer| {
                                html! {
                                    <option
                                        value={customer.id.clone()}
                                        selected={self.customer_id == customer.id}
                                    >
                                        { customer.full_name() }
                                    </option>
                                }
                            })
                        }
                    </select>
                    <label>{ "Payment" }</label>
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetPayment(select.value())
                    })}>
                        {
                            for PaymentMethod::ALL.iter().map(|method| {
                                html! {
                                    <option
                                        value={format!("{method:?}")}
                                        selected={self.payment == *method}
                                    >
                                        { method.label() }
                                    </option>
                                }
                            })
                        }
                    </select>
                    <label>{ "Pricing" }</label>
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetTier(select.value())
                    })}>
                        <option value="Retail" selected={self.tier == PriceTier::Retail}>{ "Retail" }</option>
                        <option value="Trade" selected={self.tier == PriceTier::Trade}>{ "Trade" }</option>
                    </select>
                </div>
                { self.view_rows(ctx) }
                <button class="btn small" onclick={link.callback(|_| Msg::AddRow)} disabled={loading}>
                    { "Add line" }
                </button>
                <div class="totals-box">
                    <div><span>{ "Subtotal" }</span><span class="num">{ format_nzd(totals.subtotal) }</span></div>
                    <div><span>{ "GST (15%)" }</span><span class="num">{ format_nzd(totals.gst) }</span></div>
                    <div class="grand"><span>{ "Total" }</span><span class="num">{ format_nzd(totals.total) }</span></div>
                </div>
                <div class="dialog-actions">
                    <button
                        class="btn"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        class="btn primary"
                        disabled={self.busy || loading}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.busy { "Recording…" } else { "Record sale" } }
                    </button>
                </div>
            </Modal>
        }
    }
}

impl NewSaleDialog {
    fn view_rows(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let rows = self.rows.iter().map(|row| {
            let key = row.key;
            let line_total = self
                .radiator(&row.radiator_id)
                .zip(row.quantity.trim().parse::<u32>().ok())
                .map(|(radiator, quantity)| {
                    format_nzd(f64::from(quantity) * self.tier.price(radiator))
                })
                .unwrap_or_else(|| "—".to_string());

            html! {
                <tr key={key.to_string()}>
                    <td>
                        <select onchange={link.callback(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetRowRadiator(key, select.value())
                        })}>
                            <option value="" selected={row.radiator_id.is_empty()}>
                                { "Select radiator…" }
                            </option>
                            {
                                for self.radiators.iter().flatten().map(|radiator| {
                                    html! {
                                        <option
                                            value={radiator.id.clone()}
                                            selected={row.radiator_id == radiator.id}
                                        >
                                            {
                                                format!(
                                                    "{} {} — {} ({})",
                                                    radiator.brand,
                                                    radiator.code,
                                                    radiator.name,
                                                    format_nzd(self.tier.price(radiator)),
                                                )
                                            }
                                        </option>
                                    }
                                })
                            }
                        </select>
                    </td>
                    <td>
                        <input
                            class="qty-input"
                            type="number"
                            min="1"
                            value={row.quantity.clone()}
                            oninput={link.callback(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetRowQuantity(key, input.value())
                            })}
                        />
                    </td>
                    <td class="num">{ line_total }</td>
                    <td>
                        <button
                            class="icon-btn"
                            title="Remove line"
                            onclick={link.callback(move |_| Msg::RemoveRow(key))}
                        >
                            <i class="material-icons">{ "close" }</i>
                        </button>
                    </td>
                </tr>
            }
        });

        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Radiator" }</th>
                        <th>{ "Qty" }</th>
                        <th class="num">{ "Line total" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        }
    }
}
