//! Per-warehouse stock editor, shared by the inventory and stock screens.
//!
//! The radiator row passed in only carries a denormalized stock snapshot, so
//! the dialog re-fetches authoritative counts from `GET /radiators/:id/stock`
//! on open. Saving issues one `PUT /radiators/:id/stock` per changed
//! warehouse, sequentially, and hands the radiator from the last response
//! back to the parent.

use std::collections::BTreeMap;

use common::model::radiator::Radiator;
use common::model::warehouse::Warehouse;
use common::requests::StockUpdateRequest;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::Modal;
use crate::helpers::show_toast;

pub enum Msg {
    Loaded(BTreeMap<String, u32>),
    LoadFailed(ApiError),
    SetCount(usize, String),
    Submit,
    Saved(Radiator),
    SaveFailed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct StockUpdateProps {
    pub radiator: Radiator,
    pub warehouses: Vec<Warehouse>,
    pub on_saved: Callback<Radiator>,
    pub on_close: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

struct Row {
    code: String,
    name: String,
    original: u32,
    value: String,
}

pub struct StockUpdateDialog {
    rows: Vec<Row>,
    loading: bool,
    busy: bool,
    error: Option<String>,
}

fn build_rows(radiator: &Radiator, warehouses: &[Warehouse]) -> Vec<Row> {
    let mut rows: Vec<Row> = warehouses
        .iter()
        .map(|warehouse| {
            let qty = radiator.stock_in(&warehouse.code);
            Row {
                code: warehouse.code.clone(),
                name: warehouse.name.clone(),
                original: qty,
                value: qty.to_string(),
            }
        })
        .collect();
    // Stock-map keys for warehouses that no longer exist still get a row.
    for (code, qty) in &radiator.stock {
        if !rows.iter().any(|row| &row.code == code) {
            rows.push(Row {
                code: code.clone(),
                name: code.clone(),
                original: *qty,
                value: qty.to_string(),
            });
        }
    }
    rows
}

impl Component for StockUpdateDialog {
    type Message = Msg;
    type Properties = StockUpdateProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        StockUpdateDialog {
            rows: build_rows(&props.radiator, &props.warehouses),
            loading: true,
            busy: false,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().radiator.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::radiators::stock(&id).await {
                    Ok(counts) => link.send_message(Msg::Loaded(counts)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(counts) => {
                self.loading = false;
                for row in &mut self.rows {
                    if let Some(qty) = counts.get(&row.code) {
                        row.original = *qty;
                        row.value = qty.to_string();
                    }
                }
                for (code, qty) in counts {
                    if !self.rows.iter().any(|row| row.code == code) {
                        self.rows.push(Row {
                            name: code.clone(),
                            code,
                            original: qty,
                            value: qty.to_string(),
                        });
                    }
                }
                true
            }
            Msg::LoadFailed(err) => {
                if err == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                // Keep the dialog usable on the snapshot counts.
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::SetCount(index, value) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.value = value;
                }
                false
            }
            Msg::Submit => {
                if self.busy || self.loading {
                    return false;
                }
                let mut changes = Vec::new();
                for row in &self.rows {
                    let Ok(quantity) = row.value.trim().parse::<u32>() else {
                        self.error = Some(format!("Invalid quantity for {}.", row.name));
                        return true;
                    };
                    if quantity != row.original {
                        changes.push(StockUpdateRequest {
                            warehouse_code: row.code.clone(),
                            quantity,
                        });
                    }
                }
                if changes.is_empty() {
                    ctx.props().on_close.emit(());
                    return false;
                }
                self.busy = true;
                self.error = None;

                let id = ctx.props().radiator.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let mut updated = None;
                    for change in &changes {
                        match api::radiators::update_stock(&id, change).await {
                            Ok(radiator) => updated = Some(radiator),
                            Err(err) => {
                                link.send_message(Msg::SaveFailed(err));
                                return;
                            }
                        }
                    }
                    if let Some(radiator) = updated {
                        link.send_message(Msg::Saved(radiator));
                    }
                });
                true
            }
            Msg::Saved(radiator) => {
                show_toast("Stock updated.");
                ctx.props().on_saved.emit(radiator);
                false
            }
            Msg::SaveFailed(err) => {
                if err == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let radiator = &props.radiator;
        let on_close = props.on_close.clone();

        let rows = self.rows.iter().enumerate().map(|(index, row)| {
            html! {
                <tr key={row.code.clone()}>
                    <td>{ &row.name }</td>
                    <td class="mono">{ &row.code }</td>
                    <td>
                        <input
                            class="qty-input"
                            type="number"
                            min="0"
                            value={row.value.clone()}
                            disabled={self.loading || self.busy}
                            oninput={link.callback(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetCount(index, input.value())
                            })}
                        />
                    </td>
                </tr>
            }
        });

        html! {
            <Modal
                title={format!("Stock — {} {}", radiator.brand, radiator.code)}
                on_close={Callback::from(move |_| on_close.emit(()))}
            >
                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if self.loading {
                        html! { <p class="muted">{ "Loading current counts…" }</p> }
                    } else {
                        html! {}
                    }
                }
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Warehouse" }</th>
                            <th>{ "Code" }</th>
                            <th>{ "Quantity" }</th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
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
                        disabled={self.busy || self.loading}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if self.busy { "Saving…" } else { "Save" } }
                    </button>
                </div>
            </Modal>
        }
    }
}
