use common::requests::LoginRequest;
use common::session::Session;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::session_store;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    LoggedIn(Session),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<Session>,
}

pub struct LoginForm {
    username: String,
    password: String,
    busy: bool,
    error: Option<String>,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if self.username.trim().is_empty() || self.password.is_empty() {
                    self.error = Some("Enter a username and password.".to_string());
                    return true;
                }
                self.busy = true;
                self.error = None;

                let request = LoginRequest {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::auth::login(&request).await {
                        Ok(session) => link.send_message(Msg::LoggedIn(session)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::LoggedIn(session) => {
                session_store::save(&session);
                ctx.props().on_login.emit(session);
                false
            }
            Msg::Failed(message) => {
                self.busy = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-screen">
                <form class="login-card" {onsubmit}>
                    <h1>{ "Radiator Parts Direct" }</h1>
                    <p class="muted">{ "Administration sign in" }</p>
                    {
                        if let Some(error) = &self.error {
                            html! { <div class="banner error">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <label for="login-username">{ "Username" }</label>
                    <input
                        id="login-username"
                        value={self.username.clone()}
                        disabled={self.busy}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetUsername(input.value())
                        })}
                    />
                    <label for="login-password">{ "Password" }</label>
                    <input
                        id="login-password"
                        type="password"
                        value={self.password.clone()}
                        disabled={self.busy}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetPassword(input.value())
                        })}
                    />
                    <button class="btn primary" type="submit" disabled={self.busy}>
                        { if self.busy { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>
            </div>
        }
    }
}
