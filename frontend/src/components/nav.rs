use common::model::user::{User, UserRole};
use common::requests::{ChangePasswordRequest, RegisterRequest};
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::app::Section;
use crate::components::modal::Modal;
use crate::helpers::show_toast;

pub enum Msg {
    ToggleMenu,
    OpenPassword,
    OpenRegister,
    CloseDialog,
    SetCurrentPassword(String),
    SetNewPassword(String),
    SetConfirmPassword(String),
    SubmitPassword,
    PasswordSaved,
    PasswordFailed(ApiError),
    SetRegisterUsername(String),
    SetRegisterPassword(String),
    SetRegisterRole(String),
    SubmitRegister,
    RegisterSaved(User),
    RegisterFailed(ApiError),
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub user: User,
    pub active: Section,
    pub on_select: Callback<Section>,
    pub on_logout: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

#[derive(Default)]
struct PasswordForm {
    current: String,
    new: String,
    confirm: String,
    busy: bool,
    error: Option<String>,
}

struct RegisterForm {
    username: String,
    password: String,
    role: UserRole,
    busy: bool,
    error: Option<String>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        RegisterForm {
            username: String::new(),
            password: String::new(),
            role: UserRole::Staff,
            busy: false,
            error: None,
        }
    }
}

enum Dialog {
    None,
    Password(PasswordForm),
    Register(RegisterForm),
}

pub struct Nav {
    menu_open: bool,
    dialog: Dialog,
}

impl Component for Nav {
    type Message = Msg;
    type Properties = NavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Nav {
            menu_open: false,
            dialog: Dialog::None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::OpenPassword => {
                self.menu_open = false;
                self.dialog = Dialog::Password(PasswordForm::default());
                true
            }
            Msg::OpenRegister => {
                self.menu_open = false;
                self.dialog = Dialog::Register(RegisterForm::default());
                true
            }
            Msg::CloseDialog => {
                self.dialog = Dialog::None;
                true
            }
            Msg::SetCurrentPassword(value) => {
                if let Dialog::Password(form) = &mut self.dialog {
                    form.current = value;
                }
                false
            }
            Msg::SetNewPassword(value) => {
                if let Dialog::Password(form) = &mut self.dialog {
                    form.new = value;
                }
                false
            }
            Msg::SetConfirmPassword(value) => {
                if let Dialog::Password(form) = &mut self.dialog {
                    form.confirm = value;
                }
                false
            }
            Msg::SubmitPassword => {
                let Dialog::Password(form) = &mut self.dialog else {
                    return false;
                };
                if form.busy {
                    return false;
                }
                if form.new.len() < 8 {
                    form.error = Some("New password must be at least 8 characters.".to_string());
                    return true;
                }
                if form.new != form.confirm {
                    form.error = Some("New passwords do not match.".to_string());
                    return true;
                }
                form.busy = true;
                form.error = None;

                let request = ChangePasswordRequest {
                    current_password: form.current.clone(),
                    new_password: form.new.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::auth::change_password(&request).await {
                        Ok(()) => link.send_message(Msg::PasswordSaved),
                        Err(err) => link.send_message(Msg::PasswordFailed(err)),
                    }
                });
                true
            }
            Msg::PasswordSaved => {
                self.dialog = Dialog::None;
                show_toast("Password changed.");
                true
            }
            Msg::PasswordFailed(err) => {
                if err == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                if let Dialog::Password(form) = &mut self.dialog {
                    form.busy = false;
                    form.error = Some(err.to_string());
                }
                true
            }
            Msg::SetRegisterUsername(value) => {
                if let Dialog::Register(form) = &mut self.dialog {
                    form.username = value;
                }
                false
            }
            Msg::SetRegisterPassword(value) => {
                if let Dialog::Register(form) = &mut self.dialog {
                    form.password = value;
                }
                false
            }
            Msg::SetRegisterRole(value) => {
                if let Dialog::Register(form) = &mut self.dialog {
                    form.role = match value.as_str() {
                        "Admin" => UserRole::Admin,
                        "Manager" => UserRole::Manager,
                        _ => UserRole::Staff,
                    };
                }
                false
            }
            Msg::SubmitRegister => {
                let Dialog::Register(form) = &mut self.dialog else {
                    return false;
                };
                if form.busy {
                    return false;
                }
                if form.username.trim().is_empty() || form.password.len() < 8 {
                    form.error =
                        Some("Username and a password of at least 8 characters are required."
                            .to_string());
                    return true;
                }
                form.busy = true;
                form.error = None;

                let request = RegisterRequest {
                    username: form.username.trim().to_string(),
                    password: form.password.clone(),
                    role: form.role,
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::auth::register(&request).await {
                        Ok(user) => link.send_message(Msg::RegisterSaved(user)),
                        Err(err) => link.send_message(Msg::RegisterFailed(err)),
                    }
                });
                true
            }
            Msg::RegisterSaved(user) => {
                self.dialog = Dialog::None;
                show_toast(&format!("User {} created.", user.username));
                true
            }
            Msg::RegisterFailed(err) => {
                if err == ApiError::Unauthorized {
                    ctx.props().on_unauthorized.emit(());
                    return false;
                }
                if let Dialog::Register(form) = &mut self.dialog {
                    form.busy = false;
                    form.error = Some(err.to_string());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let tabs = Section::ALL.iter().map(|section| {
            let section = *section;
            let on_select = props.on_select.clone();
            html! {
                <button
                    class={classes!("tab-btn", (props.active == section).then_some("active"))}
                    onclick={Callback::from(move |_| on_select.emit(section))}
                >
                    <i class="material-icons">{ section.icon() }</i>
                    { section.label() }
                </button>
            }
        });

        html! {
            <header class="top-nav">
                <span class="brand">{ "Radiator Parts Direct" }</span>
                <nav class="tab-bar">{ for tabs }</nav>
                <div class="nav-right">
                    <span class="user-chip">
                        { &props.user.username }
                        <span class="role-badge">{ props.user.role.label() }</span>
                    </span>
                    <button class="icon-btn" title="Account" onclick={link.callback(|_| Msg::ToggleMenu)}>
                        <i class="material-icons">{ "settings" }</i>
                    </button>
                    {
                        if self.menu_open {
                            self.view_menu(ctx)
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    match &self.dialog {
                        Dialog::None => html! {},
                        Dialog::Password(form) => self.view_password_dialog(ctx, form),
                        Dialog::Register(form) => self.view_register_dialog(ctx, form),
                    }
                }
            </header>
        }
    }
}

impl Nav {
    fn view_menu(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let on_logout = props.on_logout.clone();
        html! {
            <div class="account-menu">
                <button class="menu-item" onclick={link.callback(|_| Msg::OpenPassword)}>
                    { "Change password" }
                </button>
                {
                    if props.user.role.can_manage() {
                        html! {
                            <button class="menu-item" onclick={link.callback(|_| Msg::OpenRegister)}>
                                { "Add user" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button class="menu-item" onclick={Callback::from(move |_| on_logout.emit(()))}>
                    { "Sign out" }
                </button>
            </div>
        }
    }

    fn view_password_dialog(&self, ctx: &Context<Self>, form: &PasswordForm) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitPassword
        });
        html! {
            <Modal title="Change password" on_close={link.callback(|_| Msg::CloseDialog)}>
                <form class="form-grid" {onsubmit}>
                    {
                        if let Some(error) = &form.error {
                            html! { <div class="banner error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <label>{ "Current password" }</label>
                    <input
                        type="password"
                        value={form.current.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetCurrentPassword(input.value())
                        })}
                    />
                    <label>{ "New password" }</label>
                    <input
                        type="password"
                        value={form.new.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetNewPassword(input.value())
                        })}
                    />
                    <label>{ "Confirm new password" }</label>
                    <input
                        type="password"
                        value={form.confirm.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetConfirmPassword(input.value())
                        })}
                    />
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

    fn view_register_dialog(&self, ctx: &Context<Self>, form: &RegisterForm) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitRegister
        });
        html! {
            <Modal title="Add user" on_close={link.callback(|_| Msg::CloseDialog)}>
                <form class="form-grid" {onsubmit}>
                    {
                        if let Some(error) = &form.error {
                            html! { <div class="banner error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <label>{ "Username" }</label>
                    <input
                        value={form.username.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetRegisterUsername(input.value())
                        })}
                    />
                    <label>{ "Password" }</label>
                    <input
                        type="password"
                        value={form.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetRegisterPassword(input.value())
                        })}
                    />
                    <label>{ "Role" }</label>
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetRegisterRole(select.value())
                    })}>
                        <option value="Staff" selected={form.role == UserRole::Staff}>{ "Staff" }</option>
                        <option value="Manager" selected={form.role == UserRole::Manager}>{ "Manager" }</option>
                        <option value="Admin" selected={form.role == UserRole::Admin}>{ "Admin" }</option>
                    </select>
                    <div class="dialog-actions">
                        <button class="btn" type="button" onclick={link.callback(|_| Msg::CloseDialog)}>
                            { "Cancel" }
                        </button>
                        <button class="btn primary" type="submit" disabled={form.busy}>
                            { if form.busy { "Creating…" } else { "Create user" } }
                        </button>
                    </div>
                </form>
            </Modal>
        }
    }
}
