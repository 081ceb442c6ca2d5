//! Point-of-sale screen: transaction list with status filter, a new-sale
//! dialog with live GST totals, sale detail and receipt dialogs, and
//! cancel/refund actions gated by sale status.

use yew::prelude::*;

mod detail;
mod messages;
mod new_sale;
mod receipt;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::SalesSection;

#[derive(Properties, PartialEq)]
pub struct SalesProps {
    pub can_manage: bool,
    pub on_unauthorized: Callback<()>,
}

impl Component for SalesSection {
    type Message = Msg;
    type Properties = SalesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SalesSection::new()
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
