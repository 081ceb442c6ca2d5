//! Customer records screen: searchable list with server-computed spend
//! aggregates, admin-gated create/edit/delete, and a per-customer sales
//! history dialog.

use yew::prelude::*;

mod history;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CustomersSection;

#[derive(Properties, PartialEq)]
pub struct CustomersProps {
    pub can_manage: bool,
    pub on_unauthorized: Callback<()>,
}

impl Component for CustomersSection {
    type Message = Msg;
    type Properties = CustomersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CustomersSection::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
