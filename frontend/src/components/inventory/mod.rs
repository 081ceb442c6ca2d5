//! Radiator catalog screen: searchable, sortable table of the catalog with
//! per-warehouse stock counts, plus admin-gated create/edit, delete and
//! stock-update dialogs.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::InventoryProps;
pub use state::InventorySection;

impl Component for InventorySection {
    type Message = Msg;
    type Properties = InventoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        InventorySection::new()
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
