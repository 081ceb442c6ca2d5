//! Warehouse management screen. Creating a warehouse pre-checks the code
//! against `GET /warehouses/validate-code/:code` before the POST; deleting
//! one intentionally leaves radiator stock maps untouched (the backend owns
//! any cleanup).

use common::model::warehouse::Warehouse;
use common::requests::WarehousePayload;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::modal::{confirm_dialog, Modal};
use crate::helpers::show_toast;

#[derive(Clone, Copy)]
pub enum Field {
    Name,
    Code,
    Location,
    Address,
    Phone,
    Email,
}

pub enum Msg {
    Load,
    Loaded { epoch: u32, warehouses: Vec<Warehouse> },
    LoadFailed { epoch: u32, error: ApiError },
    OpenCreate,
    OpenEdit(Warehouse),
    RequestDelete(Warehouse),
    CloseDialog,
    SetField(Field, String),
    Submit,
    Saved(Warehouse),
    ConfirmDelete,
    Deleted(String),
    CodeTaken(String),
    ActionFailed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct WarehousesProps {
    pub can_manage: bool,
    pub on_unauthorized: Callback<()>,
}

pub struct WarehouseForm {
    id: Option<String>,
    name: String,
    code: String,
    location: String,
    address: String,
    phone: String,
    email: String,
    busy: bool,
    error: Option<String>,
}

impl WarehouseForm {
    fn empty() -> Self {
        WarehouseForm {
            id: None,
            name: String::new(),
            code: String::new(),
            location: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            busy: false,
            error: None,
        }
    }

    fn from_warehouse(warehouse: &Warehouse) -> Self {
        WarehouseForm {
            id: Some(warehouse.id.clone()),
            name: warehouse.name.clone(),
            code: warehouse.code.clone(),
            location: warehouse.location.clone(),
            address: warehouse.address.clone(),
            phone: warehouse.phone.clone(),
            email: warehouse.email.clone(),
            busy: false,
            error: None,
        }
    }

    fn validate(&self) -> Result<WarehousePayload, String> {
        let name = self.name.trim();
        let code = self.code.trim().to_uppercase();
        let location = self.location.trim();
        if name.is_empty() || location.is_empty() {
            return Err("Name and location are required.".to_string());
        }
        if !(2..=6).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Code must be 2–6 letters or digits.".to_string());
        }
        Ok(WarehousePayload {
            name: name.to_string(),
            code,
            location: location.to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

enum Dialog {
    None,
    Edit(WarehouseForm),
    ConfirmDelete(Warehouse),
}

pub struct WarehousesSection {
    warehouses: Vec<Warehouse>,
    loading: bool,
    error: Option<String>,
    epoch: u32,
    dialog: Dialog,
}

impl Component for WarehousesSection {
    type Message = Msg;
    type Properties = WarehousesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WarehousesSection {
            warehouses: Vec::new(),
            loading: false,
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
                self.loading = true;
                self.error = None;

                let epoch = self.epoch;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::warehouses::list().await {
                        Ok(warehouses) => link.send_message(Msg::Loaded { epoch, warehouses }),
                        Err(error) => link.send_message(Msg::LoadFailed { epoch, error }),
                    }
                });
                true
            }
            Msg::Loaded { epoch, warehouses } => {
                if epoch != self.epoch {
                    return false;
                }
                self.loading = false;
                self.warehouses = warehouses;
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
                self.loading = false;
                self.error = Some(error.to_string());
                true
            }
            Msg::OpenCreate => {
                self.dialog = Dialog::Edit(WarehouseForm::empty());
                true
            }
            Msg::OpenEdit(warehouse) => {
                self.dialog = Dialog::Edit(WarehouseForm::from_warehouse(&warehouse));
                true
            }
            Msg::RequestDelete(warehouse) => {
                self.dialog = Dialog::ConfirmDelete(warehouse);
                true
            }
            Msg::CloseDialog => {
                self.dialog = Dialog::None;
                true
            }
            Msg::SetField(field, value) => {
                if let Dialog::Edit(form) = &mut self.dialog {
                    match field {
                        Field::Name => form.name = value,
                        Field::Code => form.code = value,
                        Field::Location => form.location = value,
                        Field::Address => form.address = value,
                        Field::Phone => form.phone = value,
                        Field::Email => form.email = value,
                    }
                }
                false
            }
            Msg::Submit => {
                let Dialog::Edit(form) = &mut self.dialog else {
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
                    match &id {
                        Some(id) => match api::warehouses::update(id, &payload).await {
                            Ok(warehouse) => link.send_message(Msg::Saved(warehouse)),
                            Err(error) => link.send_message(Msg::ActionFailed(error)),
                        },
                        None => {
                            // Cheap pre-check before creating; the backend
                            // still enforces uniqueness.
                            match api::warehouses::validate_code(&payload.code).await {
                                Ok(check) if !check.available => {
                                    link.send_message(Msg::CodeTaken(payload.code.clone()));
                                    return;
                                }
                                Ok(_) => {}
                                Err(error) => {
                                    link.send_message(Msg::ActionFailed(error));
                                    return;
                                }
                            }
                            match api::warehouses::create(&payload).await {
                                Ok(warehouse) => link.send_message(Msg::Saved(warehouse)),
                                Err(error) => link.send_message(Msg::ActionFailed(error)),
                            }
                        }
                    }
                });
                true
            }
            Msg::Saved(warehouse) => {
                match self.warehouses.iter_mut().find(|w| w.id == warehouse.id) {
                    Some(existing) => *existing = warehouse,
                    None => self.warehouses.push(warehouse),
                }
                self.dialog = Dialog::None;
                show_toast("Warehouse saved.");
                true
            }
            Msg::ConfirmDelete => {
                let Dialog::ConfirmDelete(warehouse) = &self.dialog else {
                    return false;
                };
                let id = warehouse.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::warehouses::delete(&id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(error) => link.send_message(Msg::ActionFailed(error)),
                    }
                });
                self.dialog = Dialog::None;
                true
            }
            Msg::Deleted(id) => {
                self.warehouses.retain(|w| w.id != id);
                show_toast("Warehouse deleted.");
                true
            }
            Msg::CodeTaken(code) => {
                if let Dialog::Edit(form) = &mut self.dialog {
                    form.busy = false;
                    form.error = Some(format!("Code {code} is already in use."));
                }
                true
            }
            Msg::ActionFailed(error) => {
                if error == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                if let Dialog::Edit(form) = &mut self.dialog {
                    form.busy = false;
                    form.error = Some(error.to_string());
                } else {
                    show_toast(&error.to_string());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let can_manage = ctx.props().can_manage;

        let cards = self.warehouses.iter().map(|warehouse| {
            let edit = {
                let warehouse = warehouse.clone();
                link.callback(move |_| Msg::OpenEdit(warehouse.clone()))
            };
            let remove = {
                let warehouse = warehouse.clone();
                link.callback(move |_| Msg::RequestDelete(warehouse.clone()))
            };
            html! {
                <div class="card" key={warehouse.id.clone()}>
                    <div class="card-header">
                        <h3>{ &warehouse.name }</h3>
                        <span class="code-badge mono">{ &warehouse.code }</span>
                    </div>
                    <p>{ &warehouse.location }</p>
                    <p class="muted">{ &warehouse.address }</p>
                    <p class="muted">{ format!("{} · {}", warehouse.phone, warehouse.email) }</p>
                    {
                        if can_manage {
                            html! {
                                <div class="card-actions">
                                    <button class="icon-btn" title="Edit" onclick={edit}>
                                        <i class="material-icons">{ "edit" }</i>
                                    </button>
                                    <button class="icon-btn" title="Delete" onclick={remove}>
                                        <i class="material-icons">{ "delete" }</i>
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            }
        });

        html! {
            <section class="screen">
                <div class="toolbar">
                    <h2>{ "Warehouses" }</h2>
                    <button class="icon-btn" title="Refresh" onclick={link.callback(|_| Msg::Load)}>
                        <i class="material-icons">{ "refresh" }</i>
                    </button>
                    {
                        if can_manage {
                            html! {
                                <button class="btn primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                                    { "Add warehouse" }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
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
                    if self.loading {
                        html! { <p class="muted">{ "Loading warehouses…" }</p> }
                    } else {
                        html! { <div class="card-grid">{ for cards }</div> }
                    }
                }
                { self.view_dialog(ctx) }
            </section>
        }
    }
}

impl WarehousesSection {
    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.dialog {
            Dialog::None => html! {},
            Dialog::Edit(form) => self.view_form(form, link),
            Dialog::ConfirmDelete(warehouse) => confirm_dialog(
                "Delete warehouse",
                &format!(
                    "Delete {} ({})? Radiator stock maps keep their {} entries until stock is moved.",
                    warehouse.name, warehouse.code, warehouse.code
                ),
                "Delete",
                link.callback(|_| Msg::ConfirmDelete),
                link.callback(|_| Msg::CloseDialog),
            ),
        }
    }

    fn view_form(&self, form: &WarehouseForm, link: &Scope<Self>) -> Html {
        let title = if form.id.is_some() {
            "Edit warehouse"
        } else {
            "Add warehouse"
        };
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let field = |label: &str, value: &str, field: Field, link: &Scope<Self>| {
            html! {
                <>
                    <label>{ label }</label>
                    <input
                        value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetField(field, input.value())
                        })}
                    />
                </>
            }
        };
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
                    { field("Name", &form.name, Field::Name, link) }
                    { field("Code", &form.code, Field::Code, link) }
                    { field("Location", &form.location, Field::Location, link) }
                    { field("Address", &form.address, Field::Address, link) }
                    { field("Phone", &form.phone, Field::Phone, link) }
                    { field("Email", &form.email, Field::Email, link) }
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
}
