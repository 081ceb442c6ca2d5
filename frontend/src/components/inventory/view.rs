use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dialogs::stock_update::StockUpdateDialog;
use crate::components::modal::{confirm_dialog, Modal};
use crate::helpers::format_nzd;

use super::messages::{FormField, Msg};
use super::state::{Dialog, InventorySection, RadiatorForm, SortKey};

pub fn view(component: &InventorySection, ctx: &Context<InventorySection>) -> Html {
    let link = ctx.link();

    html! {
        <section class="screen">
            { build_toolbar(component, ctx) }
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
                    html! { <p class="muted">{ "Loading radiators…" }</p> }
                } else {
                    build_table(component, ctx)
                }
            }
            { build_dialog(component, ctx) }
        </section>
    }
}

fn build_toolbar(component: &InventorySection, ctx: &Context<InventorySection>) -> Html {
    let link = ctx.link();
    html! {
        <div class="toolbar">
            <h2>{ "Inventory" }</h2>
            <input
                class="search-input"
                placeholder="Search brand, code or name"
                value={component.query.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetQuery(input.value())
                })}
            />
            <select onchange={link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::SetStatusFilter(select.value())
            })}>
                <option value="all" selected={component.status_filter.is_none()}>{ "All stock" }</option>
                <option value="in">{ "In Stock" }</option>
                <option value="low">{ "Low Stock" }</option>
                <option value="out">{ "Out of Stock" }</option>
            </select>
            <button class="icon-btn" title="Refresh" onclick={link.callback(|_| Msg::Load)}>
                <i class="material-icons">{ "refresh" }</i>
            </button>
            {
                if ctx.props().can_manage {
                    html! {
                        <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "Add radiator" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn sort_header(
    component: &InventorySection,
    link: &Scope<InventorySection>,
    key: SortKey,
    label: &str,
) -> Html {
    let indicator = if component.sort == key {
        if component.sort_desc { " ▼" } else { " ▲" }
    } else {
        ""
    };
    html! {
        <th class="sortable" onclick={link.callback(move |_| Msg::SortBy(key))}>
            { label }{ indicator }
        </th>
    }
}

fn build_table(component: &InventorySection, ctx: &Context<InventorySection>) -> Html {
    let link = ctx.link();
    let can_manage = ctx.props().can_manage;
    let warehouse_codes: Vec<String> = component
        .warehouses
        .iter()
        .map(|w| w.code.clone())
        .collect();

    let rows = component.visible().into_iter().map(|radiator| {
        let status = radiator.status();
        let stock_cells = warehouse_codes.iter().map(|code| {
            html! { <td class="num">{ radiator.stock_in(code) }</td> }
        });

        let edit = {
            let radiator = radiator.clone();
            link.callback(move |_| Msg::OpenEdit(radiator.clone()))
        };
        let stock = {
            let radiator = radiator.clone();
            link.callback(move |_| Msg::OpenStock(radiator.clone()))
        };
        let remove = {
            let radiator = radiator.clone();
            link.callback(move |_| Msg::RequestDelete(radiator.clone()))
        };

        html! {
            <tr key={radiator.id.clone()}>
                <td>{ &radiator.brand }</td>
                <td class="mono">{ &radiator.code }</td>
                <td>{ &radiator.name }</td>
                <td class="num">{ radiator.year }</td>
                { for stock_cells }
                <td class="num">{ radiator.total_stock() }</td>
                <td><span class={classes!("status-badge", status.css_class())}>{ status.label() }</span></td>
                <td class="num">{ format_nzd(radiator.retail_price) }</td>
                <td class="num">{ format_nzd(radiator.trade_price) }</td>
                <td class="actions">
                    {
                        if can_manage {
                            html! {
                                <>
                                    <button class="icon-btn" title="Edit" onclick={edit}>
                                        <i class="material-icons">{ "edit" }</i>
                                    </button>
                                    <button class="icon-btn" title="Update stock" onclick={stock}>
                                        <i class="material-icons">{ "tune" }</i>
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
                    { sort_header(component, link, SortKey::Brand, "Brand") }
                    { sort_header(component, link, SortKey::Code, "Code") }
                    <th>{ "Name" }</th>
                    { sort_header(component, link, SortKey::Year, "Year") }
                    { for component.warehouses.iter().map(|w| html! { <th class="num">{ &w.code }</th> }) }
                    { sort_header(component, link, SortKey::Stock, "Total") }
                    <th>{ "Status" }</th>
                    { sort_header(component, link, SortKey::RetailPrice, "Retail") }
                    <th class="num">{ "Trade" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

fn build_dialog(component: &InventorySection, ctx: &Context<InventorySection>) -> Html {
    let link = ctx.link();
    match &component.dialog {
        Dialog::None => html! {},
        Dialog::Edit(form) => build_form_dialog(form, link),
        Dialog::Stock(radiator) => html! {
            <StockUpdateDialog
                radiator={radiator.clone()}
                warehouses={component.warehouses.clone()}
                on_saved={link.callback(Msg::StockSaved)}
                on_close={link.callback(|_| Msg::CloseDialog)}
                on_unauthorized={ctx.props().on_unauthorized.clone()}
            />
        },
        Dialog::ConfirmDelete(radiator) => confirm_dialog(
            "Delete radiator",
            &format!(
                "Delete {} {}? Stock records for it will be removed as well.",
                radiator.brand, radiator.code
            ),
            "Delete",
            link.callback(|_| Msg::ConfirmDelete),
            link.callback(|_| Msg::CloseDialog),
        ),
    }
}

fn text_field(
    link: &Scope<InventorySection>,
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

fn build_form_dialog(form: &RadiatorForm, link: &Scope<InventorySection>) -> Html {
    let title = if form.id.is_some() {
        "Edit radiator"
    } else {
        "Add radiator"
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
                { text_field(link, "Brand", &form.brand, FormField::Brand) }
                { text_field(link, "Code", &form.code, FormField::Code) }
                { text_field(link, "Name", &form.name, FormField::Name) }
                { text_field(link, "Year", &form.year, FormField::Year) }
                { text_field(link, "Retail price", &form.retail_price, FormField::RetailPrice) }
                { text_field(link, "Trade price", &form.trade_price, FormField::TradePrice) }
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
