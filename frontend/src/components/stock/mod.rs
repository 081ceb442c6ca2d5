//! Stock overview screen. Three fetches run concurrently on load: the
//! server-side summary, the full radiator list and the warehouse list. The
//! per-warehouse table is aggregated client-side from the radiator stock
//! maps and cross-checked against the server summary; a mismatch is called
//! out rather than hidden.

use common::model::radiator::{Radiator, StockStatus};
use common::model::stock::StockSummary;
use common::model::warehouse::Warehouse;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::dialogs::stock_update::StockUpdateDialog;
use crate::components::modal::Modal;
use crate::helpers::show_toast;

pub enum Msg {
    Load,
    SummaryLoaded { epoch: u32, summary: StockSummary },
    RadiatorsLoaded { epoch: u32, radiators: Vec<Radiator> },
    WarehousesLoaded { epoch: u32, warehouses: Vec<Warehouse> },
    LoadFailed { epoch: u32, error: ApiError },
    OpenWarehouse(String),
    WarehouseLoaded(Warehouse),
    OpenStock(Radiator),
    StockSaved(Radiator),
    CloseDialog,
    ActionFailed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct StockProps {
    pub can_manage: bool,
    pub on_unauthorized: Callback<()>,
}

enum Dialog {
    None,
    WarehouseDetail {
        code: String,
        warehouse: Option<Warehouse>,
    },
    Stock(Radiator),
}

pub struct StockSection {
    summary: Option<StockSummary>,
    radiators: Vec<Radiator>,
    warehouses: Vec<Warehouse>,
    pending: u8,
    error: Option<String>,
    epoch: u32,
    dialog: Dialog,
}

impl StockSection {
    /// Radiators needing attention: out-of-stock first, then low stock.
    fn attention(&self) -> Vec<&Radiator> {
        let mut rows: Vec<&Radiator> = self
            .radiators
            .iter()
            .filter(|r| r.status() != StockStatus::InStock)
            .collect();
        rows.sort_by_key(|r| (r.total_stock(), r.code.clone()));
        rows
    }
}

impl Component for StockSection {
    type Message = Msg;
    type Properties = StockProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StockSection {
            summary: None,
            radiators: Vec::new(),
            warehouses: Vec::new(),
            pending: 0,
            error: None,
            epoch: 0,
            dialog: Dialog::None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.epoch += 1;
                self.pending = 3;
                self.error = None;

                let epoch = self.epoch;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::stock::summary().await {
                        Ok(summary) => link.send_message(Msg::SummaryLoaded { epoch, summary }),
                        Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                    }
                });
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::stock::all_radiators().await {
                        Ok(radiators) => {
                            link.send_message(Msg::RadiatorsLoaded { epoch, radiators })
                        }
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
            Msg::SummaryLoaded { epoch, summary } => {
                if epoch != self.epoch {
                    return false;
                }
                self.summary = Some(summary);
                self.pending = self.pending.saturating_sub(1);
                true
            }
            Msg::RadiatorsLoaded { epoch, radiators } => {
                if epoch != self.epoch {
                    return false;
                }
                self.radiators = radiators;
                self.pending = self.pending.saturating_sub(1);
                true
            }
            Msg::WarehousesLoaded { epoch, warehouses } => {
                if epoch != self.epoch {
                    return false;
                }
                self.warehouses = warehouses;
                self.pending = self.pending.saturating_sub(1);
                true
            }
            Msg::LoadFailed { epoch, error } => {
                if epoch != self.epoch {
                    return false;
                }
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.pending = self.pending.saturating_sub(1);
                self.error = Some(error.to_string());
                true
            }
            Msg::OpenWarehouse(code) => {
                self.dialog = Dialog::WarehouseDetail {
                    code: code.clone(),
                    warehouse: None,
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::warehouses::by_code(&code).await {
                        Ok(warehouse) => link.send_message(Msg::WarehouseLoaded(warehouse)),
                        Err(error) => link.send_message(Msg::ActionFailed(error)),
                    }
                });
                true
            }
            Msg::WarehouseLoaded(loaded) => {
                if let Dialog::WarehouseDetail { code, warehouse } = &mut self.dialog {
                    if *code == loaded.code {
                        *warehouse = Some(loaded);
                    }
                }
                true
            }
            Msg::OpenStock(radiator) => {
                self.dialog = Dialog::Stock(radiator);
                true
            }
            Msg::StockSaved(radiator) => {
                match self.radiators.iter_mut().find(|r| r.id == radiator.id) {
                    Some(existing) => *existing = radiator,
                    None => self.radiators.push(radiator),
                }
                self.dialog = Dialog::None;
                true
            }
            Msg::CloseDialog => {
                self.dialog = Dialog::None;
                true
            }
            Msg::ActionFailed(error) => {
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                self.dialog = Dialog::None;
                show_toast(&error.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let client_summary = StockSummary::from_radiators(&self.radiators, &self.warehouses);
        let summary = self.summary.as_ref().unwrap_or(&client_summary);
        let drifted = self
            .summary
            .as_ref()
            .is_some_and(|server| server.total_units != client_summary.total_units)
            && self.pending == 0;

        html! {
            <section class="screen">
                <div class="toolbar">
                    <h2>{ "Stock overview" }</h2>
                    <button class="icon-btn" title="Refresh" onclick={link.callback(|_| Msg::Load)}>
                        <i class="material-icons">{ "refresh" }</i>
                    </button>
                </div>
                {
                    if let Some(error) = &self.error {
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
                    if self.pending > 0 {
                        html! { <p class="muted">{ "Loading stock data…" }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="summary-row">
                    <div class="stat">
                        <span class="stat-label">{ "Units on hand" }</span>
                        <span class="stat-value">{ summary.total_units }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Catalog lines" }</span>
                        <span class="stat-value">{ summary.total_radiators }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Low stock" }</span>
                        <span class="stat-value">{ summary.low_stock }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{ "Out of stock" }</span>
                        <span class="stat-value">{ summary.out_of_stock }</span>
                    </div>
                </div>
                {
                    if drifted {
                        html! {
                            <div class="banner warn">
                                { "Server summary and radiator stock maps disagree; refresh or check recent stock movements." }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                { self.view_warehouse_table(ctx, &client_summary) }
                { self.view_attention(ctx) }
                { self.view_dialog(ctx) }
            </section>
        }
    }
}

impl StockSection {
    fn view_warehouse_table(&self, ctx: &Context<Self>, summary: &StockSummary) -> Html {
        let link = ctx.link();
        let rows = summary.warehouses.iter().map(|row| {
            let open = {
                let code = row.code.clone();
                link.callback(move |_| Msg::OpenWarehouse(code.clone()))
            };
            html! {
                <tr key={row.code.clone()}>
                    <td class="mono">{ &row.code }</td>
                    <td>{ &row.name }</td>
                    <td class="num">{ row.units }</td>
                    <td class="actions">
                        <button class="icon-btn" title="Warehouse details" onclick={open}>
                            <i class="material-icons">{ "info" }</i>
                        </button>
                    </td>
                </tr>
            }
        });
        html! {
            <>
                <h3>{ "Units by warehouse" }</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Code" }</th>
                            <th>{ "Warehouse" }</th>
                            <th class="num">{ "Units" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </>
        }
    }

    fn view_attention(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let can_manage = ctx.props().can_manage;
        let rows = self.attention();
        if rows.is_empty() {
            return html! {
                <>
                    <h3>{ "Needs attention" }</h3>
                    <p class="muted">{ "Every radiator is in stock." }</p>
                </>
            };
        }
        let rows = rows.into_iter().map(|radiator| {
            let status = radiator.status();
            let open = {
                let radiator = radiator.clone();
                link.callback(move |_| Msg::OpenStock(radiator.clone()))
            };
            html! {
                <tr key={radiator.id.clone()}>
                    <td>{ &radiator.brand }</td>
                    <td class="mono">{ &radiator.code }</td>
                    <td>{ &radiator.name }</td>
                    <td class="num">{ radiator.total_stock() }</td>
                    <td>
                        <span class={classes!("status-badge", status.css_class())}>
                            { status.label() }
                        </span>
                    </td>
                    <td class="actions">
                        {
                            if can_manage {
                                html! {
                                    <button class="icon-btn" title="Update stock" onclick={open}>
                                        <i class="material-icons">{ "tune" }</i>
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
            <>
                <h3>{ "Needs attention" }</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Brand" }</th>
                            <th>{ "Code" }</th>
                            <th>{ "Name" }</th>
                            <th class="num">{ "Total" }</th>
                            <th>{ "Status" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{ for rows }</tbody>
                </table>
            </>
        }
    }

    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.dialog {
            Dialog::None => html! {},
            Dialog::WarehouseDetail { code, warehouse } => {
                let body = match warehouse {
                    None => html! { <p class="muted">{ "Loading warehouse…" }</p> },
                    Some(warehouse) => html! {
                        <>
                            <p>{ &warehouse.location }</p>
                            <p class="muted">{ &warehouse.address }</p>
                            <p class="muted">{ format!("{} · {}", warehouse.phone, warehouse.email) }</p>
                        </>
                    },
                };
                html! {
                    <Modal
                        title={format!("Warehouse {code}")}
                        on_close={link.callback(|_| Msg::CloseDialog)}
                    >
                        { body }
                    </Modal>
                }
            }
            Dialog::Stock(radiator) => html! {
                <StockUpdateDialog
                    radiator={radiator.clone()}
                    warehouses={self.warehouses.clone()}
                    on_saved={link.callback(Msg::StockSaved)}
                    on_close={link.callback(|_| Msg::CloseDialog)}
                    on_unauthorized={ctx.props().on_unauthorized.clone()}
                />
            },
        }
    }
}
