//! Root component: owns the session, the section being shown, and the
//! expiry-polling timer. Everything below it receives the session through
//! props and reports a `401` back up through `on_unauthorized`.

use common::session::Session;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::customers::CustomersSection;
use crate::components::inventory::InventorySection;
use crate::components::login::LoginForm;
use crate::components::nav::Nav;
use crate::components::sales::SalesSection;
use crate::components::stock::StockSection;
use crate::components::warehouses::WarehousesSection;
use crate::helpers::show_toast;
use crate::session_store;

/// How often the stored expiry is checked against the clock.
const SESSION_POLL_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inventory,
    Customers,
    Sales,
    Warehouses,
    Stock,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Inventory,
        Section::Customers,
        Section::Sales,
        Section::Warehouses,
        Section::Stock,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Inventory => "Inventory",
            Section::Customers => "Customers",
            Section::Sales => "Sales",
            Section::Warehouses => "Warehouses",
            Section::Stock => "Stock",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Inventory => "inventory_2",
            Section::Customers => "group",
            Section::Sales => "point_of_sale",
            Section::Warehouses => "warehouse",
            Section::Stock => "analytics",
        }
    }
}

pub enum Msg {
    LoggedIn(Session),
    Select(Section),
    Activity,
    Tick,
    Refreshed(Session),
    RefreshFailed(String),
    SessionExpired,
    Logout,
}

pub struct App {
    session: Option<Session>,
    active: Section,
    poll: Option<Interval>,
    refreshing: bool,
}

impl App {
    fn start_poll(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.poll = Some(Interval::new(SESSION_POLL_MS, move || {
            link.send_message(Msg::Tick);
        }));
    }

    fn drop_session(&mut self) {
        session_store::clear();
        self.session = None;
        self.poll = None;
        self.refreshing = false;
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // Restore a stored session if it has not expired while the tab was
        // idle; otherwise start clean.
        let session = session_store::load().filter(|s| s.is_valid_at(session_store::now_ms()));
        if session.is_none() {
            session_store::clear();
        }

        let mut app = App {
            session,
            active: Section::Inventory,
            poll: None,
            refreshing: false,
        };
        if app.session.is_some() {
            app.start_poll(ctx);
        }
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn(session) => {
                self.session = Some(session);
                self.active = Section::Inventory;
                self.start_poll(ctx);
                true
            }
            Msg::Select(section) => {
                self.active = section;
                true
            }
            Msg::Activity => {
                session_store::extend_current();
                false
            }
            Msg::Tick => {
                let Some(stored) = session_store::load() else {
                    if self.session.is_some() {
                        ctx.link().send_message(Msg::SessionExpired);
                    }
                    return false;
                };
                let now = session_store::now_ms();
                if !stored.is_valid_at(now) {
                    ctx.link().send_message(Msg::SessionExpired);
                } else if stored.needs_refresh_at(now) && !self.refreshing {
                    self.refreshing = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::auth::refresh(&stored.refresh_token).await {
                            Ok(session) => link.send_message(Msg::Refreshed(session)),
                            Err(err) => link.send_message(Msg::RefreshFailed(err.to_string())),
                        }
                    });
                }
                false
            }
            Msg::Refreshed(session) => {
                self.refreshing = false;
                session_store::save(&session);
                self.session = Some(session);
                false
            }
            Msg::RefreshFailed(message) => {
                // The session stays usable until its stored expiry passes.
                self.refreshing = false;
                gloo_console::warn!(format!("token refresh failed: {message}"));
                false
            }
            Msg::SessionExpired => {
                self.drop_session();
                show_toast("Your session has expired. Please sign in again.");
                true
            }
            Msg::Logout => {
                spawn_local(async {
                    if let Err(err) = api::auth::logout().await {
                        gloo_console::warn!(format!("logout request failed: {err}"));
                    }
                });
                self.drop_session();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let Some(session) = &self.session else {
            return html! { <LoginForm on_login={link.callback(Msg::LoggedIn)} /> };
        };

        let can_manage = session.user.role.can_manage();
        let on_unauthorized = link.callback(|_| Msg::SessionExpired);
        let section = match self.active {
            Section::Inventory => html! {
                <InventorySection {can_manage} on_unauthorized={on_unauthorized.clone()} />
            },
            Section::Customers => html! {
                <CustomersSection {can_manage} on_unauthorized={on_unauthorized.clone()} />
            },
            Section::Sales => html! {
                <SalesSection {can_manage} on_unauthorized={on_unauthorized.clone()} />
            },
            Section::Warehouses => html! {
                <WarehousesSection {can_manage} on_unauthorized={on_unauthorized.clone()} />
            },
            Section::Stock => html! {
                <StockSection {can_manage} on_unauthorized={on_unauthorized.clone()} />
            },
        };

        html! {
            <div
                class="app-shell"
                onmousedown={link.callback(|_: MouseEvent| Msg::Activity)}
                onkeydown={link.callback(|_: KeyboardEvent| Msg::Activity)}
            >
                <Nav
                    user={session.user.clone()}
                    active={self.active}
                    on_select={link.callback(Msg::Select)}
                    on_logout={link.callback(|_| Msg::Logout)}
                    on_unauthorized={on_unauthorized}
                />
                <main class="content">{ section }</main>
            </div>
        }
    }
}
