use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InventoryProps {
    /// Whether the signed-in role may create, edit or delete records.
    pub can_manage: bool,
    /// Fired when any request comes back `401`; the app root signs out.
    pub on_unauthorized: Callback<()>,
}
